//! Field Validation
//!
//! Browser-independent validation rules for contact form fields.
//! Rules run in a fixed order and the first failing one wins:
//! required, email shape, phone shape, minimum length.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::motion::parse_leading_int;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"))
}

// [0-9] rather than \d: digits are ASCII only.
fn phone_re() -> &'static Regex {
    PHONE_RE.get_or_init(|| Regex::new(r"^[\+]?[1-9][0-9]{0,15}$").expect("phone pattern"))
}

fn whitespace_re() -> &'static Regex {
    WHITESPACE_RE.get_or_init(|| Regex::new(r"\s").expect("whitespace pattern"))
}

/// Semantic category of a field, inferred from its `name`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Email,
    Phone,
    Message,
    Subject,
    Other,
}

impl FieldKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "name" => FieldKind::Name,
            "email" => FieldKind::Email,
            "phone" => FieldKind::Phone,
            "message" => FieldKind::Message,
            "subject" => FieldKind::Subject,
            _ => FieldKind::Other,
        }
    }

    fn label(&self) -> Option<&'static str> {
        match self {
            FieldKind::Name => Some("Name"),
            FieldKind::Email => Some("Email"),
            FieldKind::Phone => Some("Phone"),
            FieldKind::Message => Some("Message"),
            FieldKind::Subject => Some("Subject"),
            FieldKind::Other => None,
        }
    }
}

/// Human label used in error messages
pub fn field_label(name: &str) -> String {
    if let Some(label) = FieldKind::from_name(name).label() {
        return label.to_string();
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Snapshot of a form field at validation time
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldInput {
    pub name: String,
    pub value: String,
    pub required: bool,
    pub min_length: Option<usize>,
}

impl FieldInput {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn kind(&self) -> FieldKind {
        FieldKind::from_name(&self.name)
    }
}

/// Parse a `minlength` attribute the way `parseInt` reads it: `"10abc"`
/// is 10. Unparsable or negative values disable the rule.
pub fn parse_min_length(attr: &str) -> Option<usize> {
    parse_leading_int(attr).and_then(|n| usize::try_from(n).ok())
}

/// Length as the browser reports `value.length`, in UTF-16 code units
fn js_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Why a field failed; `Display` is the inline message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{label} is required")]
    Required { label: String },
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("{label} must be at least {min} characters")]
    TooShort { label: String, min: usize },
}

/// Validate a single field
pub fn validate(field: &FieldInput) -> Result<(), ValidationError> {
    let value = field.value.trim();

    if field.required && value.is_empty() {
        return Err(ValidationError::Required { label: field_label(&field.name) });
    }

    match field.kind() {
        FieldKind::Email if !value.is_empty() && !email_re().is_match(value) => {
            return Err(ValidationError::InvalidEmail);
        }
        FieldKind::Phone if !value.is_empty() => {
            let compact = whitespace_re().replace_all(value, "");
            if !phone_re().is_match(&compact) {
                return Err(ValidationError::InvalidPhone);
            }
        }
        _ => {}
    }

    if let Some(min) = field.min_length {
        if js_length(value) < min {
            return Err(ValidationError::TooShort { label: field_label(&field.name), min });
        }
    }

    Ok(())
}

/// Message to render under a field, or `None` when it should be clear
pub fn feedback(field: &FieldInput) -> Option<String> {
    validate(field).err().map(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_empty() {
        for name in ["name", "email", "phone", "message", "subject"] {
            let err = validate(&FieldInput::new(name, "").required()).unwrap_err();
            assert_eq!(err, ValidationError::Required { label: field_label(name) });
        }
        let err = validate(&FieldInput::new("email", "   ").required()).unwrap_err();
        assert_eq!(err.to_string(), "Email is required");
    }

    #[test]
    fn test_optional_empty_is_valid() {
        assert!(validate(&FieldInput::new("email", "")).is_ok());
        assert!(validate(&FieldInput::new("phone", "")).is_ok());
    }

    #[test]
    fn test_email() {
        assert!(validate(&FieldInput::new("email", "a@b.co")).is_ok());
        assert_eq!(validate(&FieldInput::new("email", "a@b")), Err(ValidationError::InvalidEmail));
        assert_eq!(validate(&FieldInput::new("email", "a.b")), Err(ValidationError::InvalidEmail));
        assert_eq!(validate(&FieldInput::new("email", "a b@c.de")), Err(ValidationError::InvalidEmail));
        assert!(validate(&FieldInput::new("email", "  a@b.co  ")).is_ok());
    }

    #[test]
    fn test_email_rule_only_for_email_kind() {
        assert!(validate(&FieldInput::new("subject", "a@b")).is_ok());
    }

    #[test]
    fn test_phone() {
        assert!(validate(&FieldInput::new("phone", "+15551234567")).is_ok());
        assert!(validate(&FieldInput::new("phone", "+1 555 123 4567")).is_ok());
        assert_eq!(validate(&FieldInput::new("phone", "abc")), Err(ValidationError::InvalidPhone));
        // Leading zero and more than 16 digits are rejected
        assert_eq!(validate(&FieldInput::new("phone", "0555123")), Err(ValidationError::InvalidPhone));
        assert!(validate(&FieldInput::new("phone", "1234567890123456")).is_ok());
        assert_eq!(validate(&FieldInput::new("phone", "12345678901234567")), Err(ValidationError::InvalidPhone));
        // Non-ASCII digits do not count
        assert_eq!(validate(&FieldInput::new("phone", "１２３")), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn test_min_length_boundary() {
        let exact = FieldInput::new("message", "abcde").min_length(5);
        assert!(validate(&exact).is_ok());

        let short = FieldInput::new("message", "abcd").min_length(5);
        let err = validate(&short).unwrap_err();
        assert_eq!(err.to_string(), "Message must be at least 5 characters");
    }

    #[test]
    fn test_min_length_counts_utf16_units() {
        assert!(validate(&FieldInput::new("name", "Zoë").min_length(3)).is_ok());
        // Each emoji is a surrogate pair: two units, as in `value.length`
        assert!(validate(&FieldInput::new("name", "😀😀").min_length(3)).is_ok());
        assert!(validate(&FieldInput::new("name", "😀").min_length(3)).is_err());
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let field = FieldInput::new("email", "a@b").required().min_length(10);
        assert_eq!(validate(&field), Err(ValidationError::InvalidEmail));

        let field = FieldInput::new("email", "").required().min_length(10);
        assert!(matches!(validate(&field), Err(ValidationError::Required { .. })));
    }

    #[test]
    fn test_field_label() {
        assert_eq!(field_label("email"), "Email");
        assert_eq!(field_label("company"), "Company");
        assert_eq!(field_label(""), "");
    }

    #[test]
    fn test_parse_min_length() {
        assert_eq!(parse_min_length("10"), Some(10));
        assert_eq!(parse_min_length(" 3 "), Some(3));
        assert_eq!(parse_min_length("ten"), None);
        assert_eq!(parse_min_length("10abc"), Some(10));
        assert_eq!(parse_min_length("-1"), None);
        assert_eq!(parse_min_length(""), None);
    }

    #[test]
    fn test_feedback_follows_edits() {
        let empty = FieldInput::new("name", "").required();
        assert_eq!(feedback(&empty).as_deref(), Some("Name is required"));

        let typed = FieldInput::new("name", "Ada").required();
        assert_eq!(feedback(&typed), None);

        let short = FieldInput::new("message", "hi").min_length(10);
        assert_eq!(feedback(&short).as_deref(), Some("Message must be at least 10 characters"));
    }
}
