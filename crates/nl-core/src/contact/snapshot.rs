use serde::{Deserialize, Serialize};

use crate::contact::{FormFields, SubmissionState};

/// What the presentation layer renders for a contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormSnapshot {
    pub state: SubmissionState,
    pub fields: FormFields,
}
