use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use nl_core::ports::{DisplayExpiry, DisplayTimerPort, TimerGeneration};
use nl_core::FormId;
use tokio::sync::{mpsc, Mutex};
use tokio::time::{sleep, Duration};
use tracing::debug;

struct ArmedTimer {
    generation: u64,
    handle: tokio::task::AbortHandle,
}

/// Display timer backed by tokio tasks.
///
/// Expiries are sent on the channel returned by [`TokioDisplayTimer::new`].
/// A timer that was replaced or stopped never reports once aborted; an
/// expiry already queued keeps its generation so the consumer can drop it.
pub struct TokioDisplayTimer {
    timers: Arc<Mutex<HashMap<FormId, ArmedTimer>>>,
    next_generation: AtomicU64,
    fired_tx: mpsc::Sender<DisplayExpiry>,
}

impl TokioDisplayTimer {
    pub fn new() -> (Self, mpsc::Receiver<DisplayExpiry>) {
        let (fired_tx, fired_rx) = mpsc::channel(16);
        let timer = Self {
            timers: Arc::new(Mutex::new(HashMap::new())),
            next_generation: AtomicU64::new(0),
            fired_tx,
        };
        (timer, fired_rx)
    }
}

#[async_trait::async_trait]
impl DisplayTimerPort for TokioDisplayTimer {
    async fn start(&self, form_id: &FormId, after: Duration) -> anyhow::Result<TimerGeneration> {
        let timers = Arc::clone(&self.timers);
        let fired_tx = self.fired_tx.clone();
        let form_id_clone = form_id.clone();
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);

        let mut timers_guard = self.timers.lock().await;
        if let Some(existing) = timers_guard.remove(form_id) {
            existing.handle.abort();
        }

        let handle = tokio::spawn(async move {
            sleep(after).await;
            {
                let mut timers_guard = timers.lock().await;
                match timers_guard.get(&form_id_clone) {
                    Some(armed) if armed.generation == generation => {
                        timers_guard.remove(&form_id_clone);
                    }
                    _ => return,
                }
            }
            let expiry = DisplayExpiry {
                form_id: form_id_clone,
                generation: TimerGeneration(generation),
            };
            if fired_tx.send(expiry).await.is_err() {
                debug!("display timer fired after receiver closed");
            }
        });

        timers_guard.insert(
            form_id.clone(),
            ArmedTimer {
                generation,
                handle: handle.abort_handle(),
            },
        );
        debug!(
            form_id = %form_id,
            generation,
            after_ms = u64::try_from(after.as_millis()).unwrap_or(u64::MAX),
            "display timer started"
        );
        Ok(TimerGeneration(generation))
    }

    async fn stop(&self, form_id: &FormId) -> anyhow::Result<()> {
        let mut timers_guard = self.timers.lock().await;
        if let Some(armed) = timers_guard.remove(form_id) {
            armed.handle.abort();
            debug!(form_id = %form_id, "display timer stopped");
        }
        Ok(())
    }
}
