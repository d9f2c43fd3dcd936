use std::collections::BTreeMap;

use anyhow::Context;
use nl_core::ports::{DeliveryError, DeliveryReceipt, DeliveryRequest, MessageDeliveryPort};
use serde::Serialize;
use tracing::{debug, warn};

pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Wire body of the EmailJS REST send call.
#[derive(Debug, Serialize)]
struct SendEmailBody<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a BTreeMap<String, String>,
}

/// Delivers contact messages through the EmailJS REST API.
pub struct EmailJsDelivery {
    client: reqwest::Client,
    endpoint: String,
}

impl EmailJsDelivery {
    pub fn new(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("nextlab/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl MessageDeliveryPort for EmailJsDelivery {
    async fn deliver(&self, request: &DeliveryRequest) -> Result<DeliveryReceipt, DeliveryError> {
        for (name, value) in [
            ("service_id", &request.service_id),
            ("template_id", &request.template_id),
            ("public_key", &request.public_key),
        ] {
            if value.trim().is_empty() {
                return Err(DeliveryError::Misconfigured(format!("{name} is empty")));
            }
        }

        let body = SendEmailBody {
            service_id: &request.service_id,
            template_id: &request.template_id,
            user_id: &request.public_key,
            template_params: &request.template_params,
        };

        debug!(endpoint = %self.endpoint, service_id = %request.service_id, "sending email");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), body = %text, "email provider rejected message");
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(DeliveryReceipt {
            status: status.as_u16(),
            text,
        })
    }
}
