use dioxus::prelude::*;

use crate::flash::Flash;
use crate::forms::{CsrfField, ErrorList, FieldErrors, TextField};
use crate::layout::Layout;

#[derive(Props, Clone, PartialEq)]
pub struct LoginPageProps {
    pub username: String,
    pub errors: FieldErrors,
    pub flashes: Vec<Flash>,
    pub csrf_token: String,
}

/// Login form. Credential failures arrive as form-wide errors so the page
/// never reveals which of the two fields was wrong.
#[allow(non_snake_case)]
pub fn LoginPage(props: LoginPageProps) -> Element {
    let errors = props.errors;

    rsx! {
        Layout { title: "Log in", flashes: props.flashes.clone(),
            h1 { "Log in" }
            ErrorList { errors: errors.form() }
            form { method: "post", action: "/login",
                CsrfField { token: props.csrf_token.clone() }
                TextField {
                    label: "Username",
                    name: "username",
                    value: props.username.clone(),
                    errors: errors.field("username"),
                }
                TextField {
                    label: "Password",
                    name: "password",
                    value: String::new(),
                    errors: errors.field("password"),
                    input_type: "password",
                }
                button { r#type: "submit", "Log in" }
            }
            p {
                "No account yet? "
                a { href: "/register", "Register" }
            }
        }
    }
}
