use crate::contact::ContactFormSnapshot;
use crate::ids::FormId;

/// Pushes contact form changes to whoever renders them.
#[async_trait::async_trait]
pub trait SubmissionEventPort: Send + Sync {
    async fn emit_submission_changed(&self, form_id: &FormId, snapshot: &ContactFormSnapshot);
}
