//! Form field validation rules
//!
//! Rules are tried top to bottom and the first one whose category matches
//! the field decides the outcome, even when a field could fit several
//! categories (a required `<select>` named `confirmPassword` is checked as a
//! confirmation field, never as a select).

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Field name whose value must equal the password field
pub const CONFIRM_FIELD: &str = "confirmPassword";
/// Field name the confirmation is compared against
pub const PASSWORD_FIELD: &str = "password";

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid");
}

/// User-visible validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please confirm this option.")]
    Unconfirmed,
    #[error("Enter a valid email address.")]
    InvalidEmail,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Select an option to continue.")]
    NoSelection,
    #[error("This field is required.")]
    Required,
}

/// Control category, as far as validation cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Checkbox,
    Radio,
    Email,
    Select,
    TextArea,
    /// Any other `<input>` type (text, password, tel, ...)
    Text,
}

impl FieldKind {
    /// Classify an `<input type=...>` value
    pub fn from_input_type(input_type: &str) -> Self {
        match input_type.to_ascii_lowercase().as_str() {
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "email" => Self::Email,
            _ => Self::Text,
        }
    }
}

/// Snapshot of a control at validation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub kind: FieldKind,
    pub name: String,
    pub value: String,
    pub required: bool,
    pub checked: bool,
}

impl Field {
    pub fn new(kind: FieldKind, value: &str) -> Self {
        Self {
            kind,
            name: String::new(),
            value: value.to_string(),
            required: false,
            checked: false,
        }
    }

    #[must_use]
    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// Which rule decides a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Checkbox,
    Email,
    ConfirmPassword,
    Select,
    Required,
}

impl Rule {
    pub fn for_field(field: &Field) -> Self {
        if field.kind == FieldKind::Checkbox {
            Self::Checkbox
        } else if field.kind == FieldKind::Email {
            Self::Email
        } else if field.name == CONFIRM_FIELD {
            Self::ConfirmPassword
        } else if field.kind == FieldKind::Select {
            Self::Select
        } else {
            Self::Required
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

/// Validate one field. `password` is the current value of the form's
/// password field, if the form has one.
pub fn validate(field: &Field, password: Option<&str>) -> Result<(), FieldError> {
    match Rule::for_field(field) {
        Rule::Checkbox if field.required && !field.checked => Err(FieldError::Unconfirmed),
        Rule::Email if !is_valid_email(&field.value) => Err(FieldError::InvalidEmail),
        Rule::ConfirmPassword => match password {
            Some(password) if password != field.value => Err(FieldError::PasswordMismatch),
            _ => Ok(()),
        },
        Rule::Select if field.required && field.value.is_empty() => Err(FieldError::NoSelection),
        Rule::Required if field.required && field.value.trim().is_empty() => {
            Err(FieldError::Required)
        }
        _ => Ok(()),
    }
}

/// Focus shimmer applies to text-like controls only
pub const fn shimmer_eligible(kind: FieldKind) -> bool {
    !matches!(kind, FieldKind::Checkbox | FieldKind::Radio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        let short = Field::new(FieldKind::Email, "a@b");
        assert_eq!(validate(&short, None), Err(FieldError::InvalidEmail));

        let ok = Field::new(FieldKind::Email, "a@b.com");
        assert_eq!(validate(&ok, None), Ok(()));

        let padded = Field::new(FieldKind::Email, "  a@b.com  ");
        assert_eq!(validate(&padded, None), Ok(()));

        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
    }

    #[test]
    fn test_optional_email_still_checked() {
        let empty = Field::new(FieldKind::Email, "");
        assert_eq!(validate(&empty, None), Err(FieldError::InvalidEmail));
    }

    #[test]
    fn test_confirm_password() {
        let confirm = Field::new(FieldKind::Text, "hunter2").named(CONFIRM_FIELD);
        assert_eq!(
            validate(&confirm, Some("hunter3")),
            Err(FieldError::PasswordMismatch)
        );
        assert_eq!(validate(&confirm, Some("hunter2")), Ok(()));

        let empty = Field::new(FieldKind::Text, "").named(CONFIRM_FIELD);
        assert_eq!(validate(&empty, Some("")), Ok(()));
    }

    #[test]
    fn test_confirm_password_compares_untrimmed() {
        let confirm = Field::new(FieldKind::Text, "pw ").named(CONFIRM_FIELD);
        assert_eq!(
            validate(&confirm, Some("pw")),
            Err(FieldError::PasswordMismatch)
        );
    }

    #[test]
    fn test_confirm_password_without_password_field() {
        let confirm = Field::new(FieldKind::Text, "anything").named(CONFIRM_FIELD);
        assert_eq!(validate(&confirm, None), Ok(()));
    }

    #[test]
    fn test_checkbox() {
        let unchecked = Field::new(FieldKind::Checkbox, "on").required();
        assert_eq!(validate(&unchecked, None), Err(FieldError::Unconfirmed));
        assert_eq!(validate(&unchecked.clone().checked(true), None), Ok(()));

        let optional = Field::new(FieldKind::Checkbox, "on");
        assert_eq!(validate(&optional, None), Ok(()));
    }

    #[test]
    fn test_select() {
        let none = Field::new(FieldKind::Select, "").required();
        assert_eq!(validate(&none, None), Err(FieldError::NoSelection));
        let picked = Field::new(FieldKind::Select, "design").required();
        assert_eq!(validate(&picked, None), Ok(()));
    }

    #[test]
    fn test_generic_required() {
        let blank = Field::new(FieldKind::TextArea, "   ").required();
        assert_eq!(validate(&blank, None), Err(FieldError::Required));
        let optional = Field::new(FieldKind::Text, "");
        assert_eq!(validate(&optional, None), Ok(()));
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // a required select named confirmPassword is a confirmation field
        let field = Field::new(FieldKind::Select, "").named(CONFIRM_FIELD).required();
        assert_eq!(Rule::for_field(&field), Rule::ConfirmPassword);
        assert_eq!(validate(&field, Some("")), Ok(()));

        // a checkbox named confirmPassword is still a checkbox
        let field = Field::new(FieldKind::Checkbox, "").named(CONFIRM_FIELD);
        assert_eq!(Rule::for_field(&field), Rule::Checkbox);
    }

    #[test]
    fn test_messages() {
        assert_eq!(FieldError::Required.to_string(), "This field is required.");
        assert_eq!(
            FieldError::Unconfirmed.to_string(),
            "Please confirm this option."
        );
    }

    #[test]
    fn test_input_type_classification() {
        assert_eq!(FieldKind::from_input_type("EMAIL"), FieldKind::Email);
        assert_eq!(FieldKind::from_input_type("password"), FieldKind::Text);
        assert!(!shimmer_eligible(FieldKind::Radio));
        assert!(shimmer_eligible(FieldKind::Select));
    }
}
