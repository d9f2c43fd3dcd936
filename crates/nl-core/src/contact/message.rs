use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::contact::FormFields;

pub const PARAM_USER_NAME: &str = "user_name";
pub const PARAM_USER_EMAIL: &str = "user_email";
pub const PARAM_REPLY_TO: &str = "reply_to";
pub const PARAM_MESSAGE: &str = "message";
pub const PARAM_COMPANY: &str = "company";

/// A contact message that passed validation and is ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub sender_name: String,
    pub sender_email: String,
    pub company: Option<String>,
    pub body: String,
}

impl ContactMessage {
    /// Callers must have run `validate` on `fields` first.
    pub fn from_validated(fields: &FormFields) -> Self {
        Self {
            sender_name: fields.name.trim().to_string(),
            sender_email: fields.email.trim().to_string(),
            company: fields.company().map(str::to_string),
            body: fields.message.clone(),
        }
    }

    /// Named template parameters expected by the delivery provider.
    pub fn template_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert(PARAM_USER_NAME.to_string(), self.sender_name.clone());
        params.insert(PARAM_USER_EMAIL.to_string(), self.sender_email.clone());
        params.insert(PARAM_REPLY_TO.to_string(), self.sender_email.clone());
        params.insert(PARAM_MESSAGE.to_string(), self.body.clone());
        if let Some(company) = &self.company {
            params.insert(PARAM_COMPANY.to_string(), company.clone());
        }
        params
    }
}

/// Why the delivery collaborator did not complete.
///
/// Shown to the user as a transient notice; never mapped onto fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryFailure {
    pub reason: String,
}

impl DeliveryFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for DeliveryFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.reason)
    }
}
