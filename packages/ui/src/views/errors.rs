use dioxus::prelude::*;

use crate::layout::Layout;

#[allow(non_snake_case)]
pub fn NotFoundPage() -> Element {
    rsx! {
        Layout { title: "Not found", flashes: Vec::new(),
            h1 { "404" }
            p { "The page you asked for does not exist." }
            a { href: "/", "Back home" }
        }
    }
}

#[allow(non_snake_case)]
pub fn ServerErrorPage() -> Element {
    rsx! {
        Layout { title: "Error", flashes: Vec::new(),
            h1 { "Something went wrong" }
            p { "Please try again later." }
        }
    }
}
