use dioxus::prelude::*;

use crate::flash::Flash;
use crate::forms::{CsrfField, ErrorList, FieldErrors, TextField};
use crate::layout::Layout;

/// Shared create/edit note form.
#[derive(Props, Clone, PartialEq)]
pub struct NoteFormPageProps {
    pub heading: &'static str,
    /// Form target, e.g. `/users/alice/notes/add` or `/notes/3/update`.
    pub action: String,
    pub submit_label: &'static str,
    /// Where "Cancel" leads; the owner's page.
    pub back: String,
    pub title: String,
    pub content: String,
    pub errors: FieldErrors,
    pub flashes: Vec<Flash>,
    pub csrf_token: String,
}

#[allow(non_snake_case)]
pub fn NoteFormPage(props: NoteFormPageProps) -> Element {
    let errors = props.errors;
    let content_errors = errors.field("content");

    rsx! {
        Layout { title: props.heading, flashes: props.flashes.clone(),
            h1 { "{props.heading}" }
            ErrorList { errors: errors.form() }
            form { method: "post", action: "{props.action}",
                CsrfField { token: props.csrf_token.clone() }
                TextField {
                    label: "Title",
                    name: "title",
                    value: props.title.clone(),
                    errors: errors.field("title"),
                }
                div { class: "field",
                    label { "Content" }
                    textarea { name: "content", rows: "8", "{props.content}" }
                    ErrorList { errors: content_errors }
                }
                button { r#type: "submit", "{props.submit_label}" }
                " "
                a { href: "{props.back}", "Cancel" }
            }
        }
    }
}
