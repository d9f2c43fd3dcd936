use std::time::Duration;

use nl_core::ports::{DeliveryError, DeliveryReceipt, DeliveryRequest, MessageDeliveryPort};
use tracing::info;

/// Stand-in provider used when no email account is configured.
///
/// Waits `latency` and reports success without sending anything.
pub struct SimulatedDelivery {
    latency: Duration,
}

impl SimulatedDelivery {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait::async_trait]
impl MessageDeliveryPort for SimulatedDelivery {
    async fn deliver(&self, request: &DeliveryRequest) -> Result<DeliveryReceipt, DeliveryError> {
        tokio::time::sleep(self.latency).await;
        info!(
            params = request.template_params.len(),
            latency_ms = u64::try_from(self.latency.as_millis()).unwrap_or(u64::MAX),
            "simulated delivery accepted message"
        );
        Ok(DeliveryReceipt {
            status: 200,
            text: "OK (simulated)".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn succeeds_after_latency() {
        let delivery = SimulatedDelivery::new(Duration::from_millis(1500));
        let request = DeliveryRequest {
            service_id: String::new(),
            template_id: String::new(),
            template_params: BTreeMap::new(),
            public_key: String::new(),
        };

        let started = Instant::now();
        let receipt = delivery.deliver(&request).await.unwrap();

        assert_eq!(receipt.status, 200);
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }
}
