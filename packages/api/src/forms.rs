//! Submitted form bodies and their validation rules.
//!
//! Every field defaults to the empty string so a missing field is reported as
//! "This field is required." instead of failing extraction.

use std::borrow::Cow;

use serde::Deserialize;
use ui::{FieldErrors, RegisterValues};
use validator::{Validate, ValidationError, ValidationErrors};

const REQUIRED: &str = "This field is required.";

fn required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(Cow::Borrowed(REQUIRED));
        return Err(error);
    }
    Ok(())
}

/// Required, then a well-formed address; an empty value reports only the first.
fn required_email(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    if !validator::validate_email(value) {
        let mut error = ValidationError::new("email");
        error.message = Some(Cow::Borrowed("Invalid email address."));
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterForm {
    #[validate(
        custom = "required",
        length(max = 20, message = "Field cannot be longer than 20 characters.")
    )]
    pub username: String,
    #[validate(custom = "required")]
    pub password: String,
    #[validate(
        custom = "required_email",
        length(max = 50, message = "Field cannot be longer than 50 characters.")
    )]
    pub email: String,
    #[validate(
        custom = "required",
        length(max = 30, message = "Field cannot be longer than 30 characters.")
    )]
    pub first_name: String,
    #[validate(
        custom = "required",
        length(max = 30, message = "Field cannot be longer than 30 characters.")
    )]
    pub last_name: String,
    pub csrf_token: String,
}

impl RegisterForm {
    /// Values to echo back into a re-rendered form.
    pub fn values(&self) -> RegisterValues {
        RegisterValues {
            username: self.username.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginForm {
    #[validate(custom = "required")]
    pub username: String,
    #[validate(custom = "required")]
    pub password: String,
    pub csrf_token: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct NoteForm {
    #[validate(
        custom = "required",
        length(max = 100, message = "Field cannot be longer than 100 characters.")
    )]
    pub title: String,
    #[validate(custom = "required")]
    pub content: String,
    pub csrf_token: String,
}

/// Body of the bare delete buttons.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteForm {
    pub csrf_token: String,
}

/// Run the form's rules and collect every message per field.
pub fn validate_form<F: Validate>(form: &F) -> FieldErrors {
    match form.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errors) => to_field_errors(&errors),
    }
}

fn to_field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut collected = FieldErrors::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            collected.add(field, message);
        }
    }
    collected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_registration() -> RegisterForm {
        RegisterForm {
            username: "alice".to_string(),
            password: "secret1".to_string(),
            email: "alice@example.com".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Liddell".to_string(),
            csrf_token: String::new(),
        }
    }

    #[test]
    fn test_valid_registration_has_no_errors() {
        assert!(validate_form(&valid_registration()).is_empty());
    }

    #[test]
    fn test_registration_requires_every_field() {
        let errors = validate_form(&RegisterForm::default());
        for field in ["username", "password", "email", "first_name", "last_name"] {
            assert!(
                errors.field(field).iter().any(|m| m == REQUIRED),
                "{field} should be required"
            );
        }
    }

    #[test]
    fn test_registration_length_and_email_rules() {
        let mut form = valid_registration();
        form.username = "a".repeat(21);
        form.email = "not-an-email".to_string();
        form.first_name = "b".repeat(31);
        let errors = validate_form(&form);

        assert_eq!(
            errors.field("username"),
            vec!["Field cannot be longer than 20 characters.".to_string()]
        );
        assert_eq!(errors.field("email"), vec!["Invalid email address.".to_string()]);
        assert_eq!(errors.field("first_name").len(), 1);
        assert!(errors.field("last_name").is_empty());
    }

    #[test]
    fn test_empty_email_reports_only_required() {
        let mut form = valid_registration();
        form.email = String::new();
        assert_eq!(validate_form(&form).field("email"), vec![REQUIRED.to_string()]);
    }

    #[test]
    fn test_username_at_limit_is_accepted() {
        let mut form = valid_registration();
        form.username = "a".repeat(20);
        assert!(validate_form(&form).field("username").is_empty());
    }

    #[test]
    fn test_note_form_rules() {
        let errors = validate_form(&NoteForm {
            title: "t".repeat(101),
            content: String::new(),
            csrf_token: String::new(),
        });
        assert_eq!(errors.field("title").len(), 1);
        assert_eq!(errors.field("content"), vec![REQUIRED.to_string()]);
    }

    #[test]
    fn test_login_form_requires_both_fields() {
        let errors = validate_form(&LoginForm {
            username: "alice".to_string(),
            ..Default::default()
        });
        assert!(errors.field("username").is_empty());
        assert_eq!(errors.field("password"), vec![REQUIRED.to_string()]);
    }
}
