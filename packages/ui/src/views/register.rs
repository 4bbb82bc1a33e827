use dioxus::prelude::*;

use crate::flash::Flash;
use crate::forms::{CsrfField, ErrorList, FieldErrors, TextField};
use crate::layout::Layout;

/// Values echoed back into the registration form after a failed submit.
/// The password is never echoed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterValues {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Props, Clone, PartialEq)]
pub struct RegisterPageProps {
    pub values: RegisterValues,
    pub errors: FieldErrors,
    pub flashes: Vec<Flash>,
    pub csrf_token: String,
}

#[allow(non_snake_case)]
pub fn RegisterPage(props: RegisterPageProps) -> Element {
    let values = props.values;
    let errors = props.errors;

    rsx! {
        Layout { title: "Register", flashes: props.flashes.clone(),
            h1 { "Create an account" }
            ErrorList { errors: errors.form() }
            form { method: "post", action: "/register",
                CsrfField { token: props.csrf_token.clone() }
                TextField {
                    label: "Username",
                    name: "username",
                    value: values.username.clone(),
                    errors: errors.field("username"),
                }
                TextField {
                    label: "Password",
                    name: "password",
                    value: String::new(),
                    errors: errors.field("password"),
                    input_type: "password",
                }
                TextField {
                    label: "Email",
                    name: "email",
                    value: values.email.clone(),
                    errors: errors.field("email"),
                    input_type: "email",
                }
                TextField {
                    label: "First Name",
                    name: "first_name",
                    value: values.first_name.clone(),
                    errors: errors.field("first_name"),
                }
                TextField {
                    label: "Last Name",
                    name: "last_name",
                    value: values.last_name.clone(),
                    errors: errors.field("last_name"),
                }
                button { r#type: "submit", "Register" }
            }
            p {
                "Already registered? "
                a { href: "/login", "Log in" }
            }
        }
    }
}
