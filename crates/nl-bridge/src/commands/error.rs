use nl_app::usecases::ContactFormError;
use serde::{Deserialize, Serialize};

/// Error frame returned to the client.
///
/// `code` is stable and machine-readable; `message` is for humans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{code}: {message}")]
pub struct CommandError {
    pub code: String,
    pub message: String,
}

impl CommandError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("bad_request", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("not_found", message)
    }

    pub fn unknown_command(command: &str) -> Self {
        Self::new("unknown_command", format!("unknown command: {command}"))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("internal", message)
    }
}

impl From<ContactFormError> for CommandError {
    fn from(err: ContactFormError) -> Self {
        let code = match err {
            ContactFormError::SubmitInProgress => "submit_in_progress",
            ContactFormError::NoticeDisplayed => "notice_displayed",
        };
        Self::new(code, err.to_string())
    }
}
