use std::time::Duration;

use crate::ids::FormId;

/// Identifies one armed display timer. A new `start` gets a new generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerGeneration(pub u64);

/// A display timer that ran out, as reported by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayExpiry {
    pub form_id: FormId,
    pub generation: TimerGeneration,
}

/// Notice display timer.
///
/// Starting a timer for a form that already has one replaces it. Expiry is
/// reported by the adapter out of band as a [`DisplayExpiry`] carrying the
/// generation returned by `start`; the runtime turns it into
/// `DisplayElapsed` only if that generation is still the armed one.
#[async_trait::async_trait]
pub trait DisplayTimerPort: Send + Sync {
    async fn start(&self, form_id: &FormId, after: Duration) -> anyhow::Result<TimerGeneration>;
    async fn stop(&self, form_id: &FormId) -> anyhow::Result<()>;
}
