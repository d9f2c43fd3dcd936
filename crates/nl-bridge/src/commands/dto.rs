use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use nl_app::usecases::SubmitOutcome;
use nl_core::contact::ContactFormSnapshot;
use nl_core::{CategoryFilter, FieldErrors, FormField, FormFields, FormId, ProjectRecord};

use crate::commands::CommandError;

/// Gallery card. Separates the list payload from the full record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCardDto {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub category: String,
    pub short_description: String,
    pub tags: Vec<String>,
    pub thumbnail_url: String,
}

impl From<&ProjectRecord> for ProjectCardDto {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            id: record.id.as_str().to_string(),
            name: record.name.clone(),
            slug: record.slug.as_str().to_string(),
            category: record.category.label().to_string(),
            short_description: record.short_description.clone(),
            tags: record.tags.clone(),
            thumbnail_url: record.thumbnail_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormDto {
    pub form_id: String,
    #[serde(flatten)]
    pub snapshot: ContactFormSnapshot,
}

impl ContactFormDto {
    pub fn new(form_id: &FormId, snapshot: ContactFormSnapshot) -> Self {
        Self {
            form_id: form_id.as_str().to_string(),
            snapshot,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResultDto {
    /// "delivered", "invalid" or "failed"
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub form: ContactFormDto,
}

impl SubmitResultDto {
    pub fn new(outcome: SubmitOutcome, form: ContactFormDto) -> Self {
        match outcome {
            SubmitOutcome::Delivered => Self {
                outcome: "delivered",
                errors: None,
                reason: None,
                form,
            },
            SubmitOutcome::Invalid(errors) => Self {
                outcome: "invalid",
                errors: Some(errors),
                reason: None,
                form,
            },
            SubmitOutcome::Failed(failure) => Self {
                outcome: "failed",
                errors: None,
                reason: Some(failure.reason),
                form,
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterProjectsArgs {
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetProjectArgs {
    pub slug: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContactFieldArgs {
    pub field: FormField,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitContactFormArgs {
    /// Absent means "submit what the form holds".
    #[serde(default)]
    pub fields: Option<FormFields>,
}

/// Missing `args` behaves like an empty object.
pub fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, CommandError> {
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };
    serde_json::from_value(args).map_err(|e| CommandError::bad_request(format!("invalid args: {e}")))
}

pub fn to_data<T: Serialize>(value: &T) -> Result<Value, CommandError> {
    serde_json::to_value(value).map_err(|e| CommandError::internal(e.to_string()))
}
