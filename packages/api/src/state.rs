use std::sync::Arc;

use store::{NoteRepository, UserRepository};

/// Shared handler state: the repositories plus request-independent switches.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub notes: Arc<dyn NoteRepository>,
    /// Reject form posts whose CSRF token doesn't match the session's.
    pub csrf: bool,
}

impl AppState {
    /// Serve both repositories from one store.
    pub fn new<S>(store: S) -> Self
    where
        S: UserRepository + NoteRepository + 'static,
    {
        let store = Arc::new(store);
        Self {
            users: store.clone(),
            notes: store,
            csrf: true,
        }
    }

    pub fn with_csrf(mut self, enabled: bool) -> Self {
        self.csrf = enabled;
        self
    }
}
