use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("delivery transport error: {0}")]
    Transport(String),

    #[error("delivery rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("delivery timed out after {after_ms} ms")]
    Timeout { after_ms: u64 },

    #[error("delivery misconfigured: {0}")]
    Misconfigured(String),
}
