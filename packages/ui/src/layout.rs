use dioxus::prelude::*;

use crate::flash::Flash;

const STYLES: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, Segoe UI, Helvetica, Arial, sans-serif; color: #37352f; max-width: 720px; margin: 2rem auto; padding: 0 1rem; }
nav a { margin-right: 1rem; }
.field { margin-bottom: 0.75rem; display: flex; flex-direction: column; }
.field input, textarea { padding: 0.4rem; border: 1px solid #d3d1cb; border-radius: 4px; }
.errors { color: #b42318; margin: 0.25rem 0; padding-left: 1rem; }
.flashes { list-style: none; padding: 0; }
.flash { padding: 0.5rem 0.75rem; border-radius: 4px; margin-bottom: 0.5rem; }
.flash-info { background: #e7f0fb; }
.flash-success { background: #e6f4ea; }
.flash-danger { background: #fdecea; }
.notes li { margin-bottom: 0.5rem; }
form.inline { display: inline; }
"#;

/// Page chrome shared by every view: head, navigation and pending flashes.
#[component]
pub fn Layout(title: &'static str, flashes: Vec<Flash>, children: Element) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            title { "{title} | Notes" }
            style { {STYLES} }
        }
        body {
            nav {
                a { href: "/register", "Register" }
                a { href: "/login", "Log in" }
                a { href: "/logout", "Log out" }
            }
            FlashList { flashes }
            main { {children} }
        }
    }
}

#[component]
fn FlashList(flashes: Vec<Flash>) -> Element {
    rsx! {
        if !flashes.is_empty() {
            ul { class: "flashes",
                for flash in flashes.iter() {
                    li { class: flash.level.css_class(), "{flash.message}" }
                }
            }
        }
    }
}
