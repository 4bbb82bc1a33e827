//! Form-rendering building blocks and the error map they display.

use std::collections::BTreeMap;

use dioxus::prelude::*;

/// Name of the hidden input carrying the CSRF token.
pub const CSRF_FIELD: &str = "csrf_token";

/// Validation messages keyed by field name, plus form-wide messages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    fields: BTreeMap<String, Vec<String>>,
    form: Vec<String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a message to a single field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Attach a message that belongs to no particular field.
    pub fn add_form(&mut self, message: impl Into<String>) {
        self.form.push(message.into());
    }

    pub fn field(&self, name: &str) -> Vec<String> {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    pub fn form(&self) -> Vec<String> {
        self.form.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.form.is_empty() && self.fields.values().all(Vec::is_empty)
    }
}

#[component]
pub fn ErrorList(errors: Vec<String>) -> Element {
    rsx! {
        if !errors.is_empty() {
            ul { class: "errors",
                for error in errors.iter() {
                    li { "{error}" }
                }
            }
        }
    }
}

/// Labelled `<input>` followed by its validation messages.
#[component]
pub fn TextField(
    label: &'static str,
    name: &'static str,
    value: String,
    errors: Vec<String>,
    #[props(default = "text")] input_type: &'static str,
) -> Element {
    rsx! {
        div { class: "field",
            label { "{label}" }
            input { r#type: input_type, name: name, value: "{value}" }
            ErrorList { errors }
        }
    }
}

/// Hidden input echoing the session's CSRF token.
#[component]
pub fn CsrfField(token: String) -> Element {
    rsx! {
        input { r#type: "hidden", name: CSRF_FIELD, value: "{token}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_collect_per_field() {
        let mut errors = FieldErrors::new();
        assert!(errors.is_empty());

        errors.add("email", "Invalid email address.");
        errors.add("email", "Field cannot be longer than 50 characters.");
        errors.add_form("Invalid username/password.");

        assert!(!errors.is_empty());
        assert_eq!(errors.field("email").len(), 2);
        assert!(errors.field("username").is_empty());
        assert_eq!(errors.form(), vec!["Invalid username/password.".to_string()]);
    }
}
