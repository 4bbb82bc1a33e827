//! Full pages, each rendered to an HTML string through a throwaway
//! [`VirtualDom`].

use dioxus::prelude::*;

mod errors;
mod login;
mod note_form;
mod register;
mod user_detail;

pub use errors::{NotFoundPage, ServerErrorPage};
pub use login::{LoginPage, LoginPageProps};
pub use note_form::{NoteFormPage, NoteFormPageProps};
pub use register::{RegisterPage, RegisterPageProps, RegisterValues};
pub use user_detail::{UserDetailPage, UserDetailPageProps};

/// Pages render `head` and `body`; the document element is added here.
fn finish(mut dom: VirtualDom) -> String {
    dom.rebuild_in_place();
    format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render(&dom)
    )
}

pub fn render_register(props: RegisterPageProps) -> String {
    finish(VirtualDom::new_with_props(RegisterPage, props))
}

pub fn render_login(props: LoginPageProps) -> String {
    finish(VirtualDom::new_with_props(LoginPage, props))
}

pub fn render_user_detail(props: UserDetailPageProps) -> String {
    finish(VirtualDom::new_with_props(UserDetailPage, props))
}

pub fn render_note_form(props: NoteFormPageProps) -> String {
    finish(VirtualDom::new_with_props(NoteFormPage, props))
}

pub fn render_not_found() -> String {
    finish(VirtualDom::new(NotFoundPage))
}

pub fn render_server_error() -> String {
    finish(VirtualDom::new(ServerErrorPage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldErrors, Flash};
    use store::{Note, User};

    fn alice() -> User {
        User {
            username: "alice".to_string(),
            password_hash: "$argon2id$irrelevant".to_string(),
            email: "alice@example.com".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Liddell".to_string(),
        }
    }

    #[test]
    fn test_register_page_shows_field_errors_and_flashes() {
        let mut errors = FieldErrors::new();
        errors.add("email", "Email already registered.");
        let html = render_register(RegisterPageProps {
            values: RegisterValues {
                username: "alice".to_string(),
                ..Default::default()
            },
            errors,
            flashes: vec![Flash::info("No user is logged in.")],
            csrf_token: "tok123".to_string(),
        });

        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\">"));
        assert!(html.contains("<head>"));
        assert!(html.ends_with("</html>"));
        assert!(html.contains("Email already registered."));
        assert!(html.contains("No user is logged in."));
        assert!(html.contains("tok123"));
        assert!(html.contains("alice"));
    }

    #[test]
    fn test_user_detail_lists_notes() {
        let html = render_user_detail(UserDetailPageProps {
            user: alice(),
            notes: vec![Note {
                id: 7,
                title: "Groceries".to_string(),
                content: "Milk".to_string(),
                owner: "alice".to_string(),
            }],
            flashes: Vec::new(),
            csrf_token: String::new(),
        });

        assert!(html.contains("Alice Liddell"));
        assert!(html.contains("Groceries"));
        assert!(html.contains("/notes/7/update"));
        assert!(html.contains("/notes/7/delete"));
        assert!(html.contains("/users/alice/notes/add"));
        assert!(!html.contains("$argon2id$"));
    }

    #[test]
    fn test_user_detail_without_notes() {
        let html = render_user_detail(UserDetailPageProps {
            user: alice(),
            notes: Vec::new(),
            flashes: Vec::new(),
            csrf_token: String::new(),
        });
        assert!(html.contains("No notes yet."));
    }

    #[test]
    fn test_note_text_is_escaped() {
        let html = render_note_form(NoteFormPageProps {
            heading: "Edit note",
            action: "/notes/1/update".to_string(),
            submit_label: "Save",
            back: "/users/alice".to_string(),
            title: "Plain".to_string(),
            content: "<script>alert(1)</script>".to_string(),
            errors: FieldErrors::new(),
            flashes: Vec::new(),
            csrf_token: String::new(),
        });
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("/notes/1/update"));
    }

    #[test]
    fn test_not_found_page() {
        assert!(render_not_found().contains("404"));
    }
}
