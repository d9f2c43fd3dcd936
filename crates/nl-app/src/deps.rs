//! # Application Dependencies
//!
//! Dependency grouping for runtime construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - Just parameter grouping

use std::sync::Arc;

use nl_core::ports::*;

/// Application dependency grouping
///
/// All dependencies are required - no defaults, no optional fields.
pub struct AppDeps {
    // Content
    pub site_content: Arc<dyn SiteContentPort>,

    // Contact form
    pub delivery: Arc<dyn MessageDeliveryPort>,
    pub display_timer: Arc<dyn DisplayTimerPort>,
    pub submission_events: Arc<dyn SubmissionEventPort>,
}
