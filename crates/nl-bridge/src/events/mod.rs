//! Event Forwarding - push backend changes to the client
//!
//! Events are written to the same line channel as responses.

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use nl_core::contact::ContactFormSnapshot;
use nl_core::ports::SubmissionEventPort;
use nl_core::FormId;

use crate::commands::dto::ContactFormDto;
use crate::protocol::EventFrame;

pub const SUBMISSION_CHANGED: &str = "submission_changed";

/// Serializes `payload` as an event line.
pub fn encode_event<T: Serialize>(event: &str, payload: T) -> anyhow::Result<String> {
    Ok(serde_json::to_string(&EventFrame { event, payload })?)
}

/// `SubmissionEventPort` writing `submission_changed` frames.
pub struct LineEventEmitter {
    out: mpsc::Sender<String>,
}

impl LineEventEmitter {
    pub fn new(out: mpsc::Sender<String>) -> Self {
        Self { out }
    }
}

#[async_trait::async_trait]
impl SubmissionEventPort for LineEventEmitter {
    async fn emit_submission_changed(&self, form_id: &FormId, snapshot: &ContactFormSnapshot) {
        let payload = ContactFormDto::new(form_id, snapshot.clone());
        let line = match encode_event(SUBMISSION_CHANGED, payload) {
            Ok(line) => line,
            Err(err) => {
                warn!(error = %err, "failed to encode submission event");
                return;
            }
        };
        if self.out.send(line).await.is_err() {
            debug!("output closed, submission event dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nl_core::SubmissionState;
    use serde_json::Value;

    #[tokio::test]
    async fn emits_submission_changed_frame() {
        let (tx, mut rx) = mpsc::channel(4);
        let emitter = LineEventEmitter::new(tx);
        let snapshot = ContactFormSnapshot {
            state: SubmissionState::Submitting,
            ..Default::default()
        };

        emitter
            .emit_submission_changed(&FormId::from("form-9"), &snapshot)
            .await;

        let line = rx.recv().await.unwrap();
        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["event"], "submission_changed");
        assert_eq!(value["payload"]["formId"], "form-9");
        assert_eq!(value["payload"]["state"]["status"], "submitting");
    }

    #[tokio::test]
    async fn closed_output_is_not_an_error() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let emitter = LineEventEmitter::new(tx);

        emitter
            .emit_submission_changed(&FormId::from("form-9"), &ContactFormSnapshot::default())
            .await;
    }
}
