//! Contact form workflow.

mod controller;

pub use controller::{ContactFormConfig, ContactFormController, ContactFormError, SubmitOutcome};
