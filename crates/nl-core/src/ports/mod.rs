//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The core never depends on a
//! particular email provider, content store or runtime timer.

mod delivery;
pub mod errors;
mod site_content;
mod submission_event;
mod timer;

pub use delivery::{DeliveryReceipt, DeliveryRequest, DeliveryTarget, MessageDeliveryPort};
pub use errors::DeliveryError;
pub use site_content::SiteContentPort;
pub use submission_event::SubmissionEventPort;
pub use timer::{DisplayExpiry, DisplayTimerPort, TimerGeneration};
