use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Company,
    Message,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Company => "company",
            FormField::Message => "message",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current values typed into the contact form.
///
/// `company` is optional; blank means absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub message: String,
}

impl FormFields {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            company: String::new(),
            message: message.into(),
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Company => self.company = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn company(&self) -> Option<&str> {
        let company = self.company.trim();
        (!company.is_empty()).then_some(company)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// A mandatory input was empty or whitespace-only.
    Required,
    /// Input present but malformed.
    InvalidFormat,
}

/// Inline error attached to one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn required(message: impl Into<String>) -> Self {
        Self {
            kind: FieldErrorKind::Required,
            message: message.into(),
        }
    }

    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self {
            kind: FieldErrorKind::InvalidFormat,
            message: message.into(),
        }
    }
}

/// Field-level validation errors keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FormField, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: FormField) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FormField, &FieldError)> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_each_field() {
        let mut fields = FormFields::default();
        fields.set(FormField::Name, "Jane");
        fields.set(FormField::Company, "Acme");
        assert_eq!(fields.get(FormField::Name), "Jane");
        assert_eq!(fields.company(), Some("Acme"));
        fields.clear();
        assert!(fields.is_empty());
    }

    #[test]
    fn blank_company_is_absent() {
        let fields = FormFields::new("A", "a@b.co", "hi").with_company("   ");
        assert_eq!(fields.company(), None);
    }

    #[test]
    fn field_errors_serialize_as_map_keyed_by_field_name() {
        let mut errors = FieldErrors::new();
        errors.insert(FormField::Email, FieldError::invalid_format("Please enter a valid email"));
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["email"]["kind"], "invalid_format");
        assert_eq!(json["email"]["message"], "Please enter a valid email");
    }
}
