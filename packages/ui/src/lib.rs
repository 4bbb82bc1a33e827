//! Server-rendered pages for the notes service.
//!
//! Every page is a dioxus component rendered once to a string with
//! `dioxus-ssr`; no client-side code is shipped.

mod flash;
pub use flash::{Flash, FlashLevel};

mod forms;
pub use forms::{FieldErrors, CSRF_FIELD};

mod layout;

mod paths;
pub use paths::{add_note_path, delete_user_path, user_path};

pub mod views;
pub use views::{
    render_login, render_not_found, render_note_form, render_register, render_server_error,
    render_user_detail, LoginPageProps, NoteFormPageProps, RegisterPageProps, RegisterValues,
    UserDetailPageProps,
};
