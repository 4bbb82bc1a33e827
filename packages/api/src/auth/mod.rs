//! Local password authentication, the ownership guard, and session state.

mod guard;
mod password;
mod session;

pub use guard::is_authorized;
pub use password::{hash_password, verify_password, PasswordError};
pub use session::{SessionContext, SESSION_USER_ID_KEY};
