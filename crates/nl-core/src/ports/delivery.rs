use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::contact::ContactMessage;
use crate::ports::errors::DeliveryError;

/// Provider account the contact form delivers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryTarget {
    /// Destination (email service) identifier.
    pub service_id: String,
    pub template_id: String,
    /// Public credential sent along with each request.
    pub public_key: String,
}

/// One delivery call, already mapped to the provider's parameter names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRequest {
    pub service_id: String,
    pub template_id: String,
    pub template_params: BTreeMap<String, String>,
    pub public_key: String,
}

impl DeliveryRequest {
    pub fn new(target: &DeliveryTarget, message: &ContactMessage) -> Self {
        Self {
            service_id: target.service_id.clone(),
            template_id: target.template_id.clone(),
            template_params: message.template_params(),
            public_key: target.public_key.clone(),
        }
    }
}

/// Provider response; only logged, never inspected by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    pub status: u16,
    pub text: String,
}

/// Message-delivery collaborator (third-party email service).
#[async_trait::async_trait]
pub trait MessageDeliveryPort: Send + Sync {
    async fn deliver(&self, request: &DeliveryRequest) -> Result<DeliveryReceipt, DeliveryError>;
}
