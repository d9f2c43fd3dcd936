//! Synchronous gate evaluated on every submit attempt.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::contact::{FieldError, FieldErrors, FormField, FormFields};

/// `<non-whitespace>@<non-whitespace>.<non-whitespace>` anywhere in the input.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email shape pattern is valid"));

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Validates the contact form.
///
/// Returns an empty mapping when every field passes. `company` is never
/// constrained.
pub fn validate(fields: &FormFields) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if is_blank(&fields.name) {
        errors.insert(FormField::Name, FieldError::required(NAME_REQUIRED));
    }

    if is_blank(&fields.email) {
        errors.insert(FormField::Email, FieldError::required(EMAIL_REQUIRED));
    } else if !is_email_shaped(&fields.email) {
        errors.insert(FormField::Email, FieldError::invalid_format(EMAIL_INVALID));
    }

    if is_blank(&fields.message) {
        errors.insert(FormField::Message, FieldError::required(MESSAGE_REQUIRED));
    }

    errors
}

pub fn is_email_shaped(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::FieldErrorKind;

    #[test]
    fn missing_name_yields_single_required_error() {
        let errors = validate(&FormFields::new("", "a@b.com", "hi"));
        assert_eq!(errors.len(), 1);
        let error = errors.get(FormField::Name).expect("name error");
        assert_eq!(error.kind, FieldErrorKind::Required);
        assert_eq!(error.message, NAME_REQUIRED);
    }

    #[test]
    fn malformed_email_yields_single_format_error() {
        let errors = validate(&FormFields::new("A", "not-an-email", "hi"));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FormField::Email).map(|e| e.kind),
            Some(FieldErrorKind::InvalidFormat)
        );
    }

    #[test]
    fn empty_email_is_required_not_invalid() {
        let errors = validate(&FormFields::new("A", "   ", "hi"));
        assert_eq!(
            errors.get(FormField::Email).map(|e| e.kind),
            Some(FieldErrorKind::Required)
        );
    }

    #[test]
    fn whitespace_only_values_are_required_errors() {
        let errors = validate(&FormFields::new(" \t", "a@b.com", "\n"));
        assert_eq!(errors.len(), 2);
        assert!(errors.get(FormField::Name).is_some());
        assert!(errors.get(FormField::Message).is_some());
    }

    #[test]
    fn all_empty_reports_three_fields() {
        let errors = validate(&FormFields::default());
        assert_eq!(errors.len(), 3);
        assert!(errors.get(FormField::Company).is_none());
    }

    #[test]
    fn valid_fields_yield_no_errors() {
        let fields = FormFields::new("Jane Doe", "jane@co.com", "Interested in a quote");
        assert!(validate(&fields).is_empty());
    }

    #[test]
    fn company_is_never_constrained() {
        let fields = FormFields::new("Jane", "jane@co.com", "hi").with_company("");
        assert!(validate(&fields).is_empty());
    }

    #[test]
    fn email_shape_cases() {
        assert!(is_email_shaped("jane@co.com"));
        assert!(is_email_shaped("a.b+c@sub.domain.io"));
        assert!(!is_email_shaped("jane@co"));
        assert!(!is_email_shaped("@co.com"));
        assert!(!is_email_shaped("jane co@com"));
    }
}
