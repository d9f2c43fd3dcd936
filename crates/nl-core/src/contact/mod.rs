//! Contact form domain module.
//!
//! Field model, validation, delivery message mapping and the submission
//! state machine.

mod fields;
mod message;
mod snapshot;
pub mod state_machine;
pub mod validation;

pub use fields::{FieldError, FieldErrorKind, FieldErrors, FormField, FormFields};
pub use message::{
    ContactMessage, DeliveryFailure, PARAM_COMPANY, PARAM_MESSAGE, PARAM_REPLY_TO,
    PARAM_USER_EMAIL, PARAM_USER_NAME,
};
pub use snapshot::ContactFormSnapshot;
pub use state_machine::{
    SubmissionAction, SubmissionEvent, SubmissionState, SubmissionStateMachine,
};
pub use validation::validate;
