use dioxus::prelude::*;
use store::{Note, User};

use crate::flash::Flash;
use crate::forms::CsrfField;
use crate::layout::Layout;
use crate::paths::{add_note_path, delete_user_path};

#[derive(Props, Clone, PartialEq)]
pub struct UserDetailPageProps {
    pub user: User,
    pub notes: Vec<Note>,
    pub flashes: Vec<Flash>,
    pub csrf_token: String,
}

/// Private dashboard of the logged-in user: profile, notes and account actions.
#[allow(non_snake_case)]
pub fn UserDetailPage(props: UserDetailPageProps) -> Element {
    let user = props.user;
    let full_name = user.full_name();
    let add_note = add_note_path(&user.username);
    let delete_user = delete_user_path(&user.username);

    rsx! {
        Layout { title: "Your notes", flashes: props.flashes.clone(),
            h1 { "{user.username}" }
            dl {
                dt { "Name" }
                dd { "{full_name}" }
                dt { "Email" }
                dd { "{user.email}" }
            }
            h2 { "Notes" }
            if props.notes.is_empty() {
                p { class: "empty", "No notes yet." }
            } else {
                ul { class: "notes",
                    for note in props.notes.iter() {
                        NoteItem { note: note.clone(), csrf_token: props.csrf_token.clone() }
                    }
                }
            }
            a { href: "{add_note}", "Add a note" }
            form { class: "inline", method: "post", action: "{delete_user}",
                CsrfField { token: props.csrf_token.clone() }
                button { r#type: "submit", "Delete account" }
            }
        }
    }
}

#[component]
fn NoteItem(note: Note, csrf_token: String) -> Element {
    let update = format!("/notes/{}/update", note.id);
    let delete = format!("/notes/{}/delete", note.id);

    rsx! {
        li { class: "note",
            strong { "{note.title}" }
            p { "{note.content}" }
            a { href: "{update}", "Edit" }
            " "
            form { class: "inline", method: "post", action: "{delete}",
                CsrfField { token: csrf_token }
                button { r#type: "submit", "Delete" }
            }
        }
    }
}
