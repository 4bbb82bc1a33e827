//! Request-scoped session context.
//!
//! [`SessionContext`] wraps the `tower_sessions::Session` of the current request
//! and is the only place that knows the session keys. Handlers receive it as an
//! extractor and ask it who is logged in, whether that user owns a resource,
//! and which flash messages are pending.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use rand::RngCore;
use subtle::ConstantTimeEq;
use tower_sessions::Session;
use ui::Flash;

use super::guard::is_authorized;
use crate::error::AppError;

/// Key for storing the logged-in username in the session.
pub const SESSION_USER_ID_KEY: &str = "user_id";
const FLASHES_KEY: &str = "_flashes";
const CSRF_TOKEN_KEY: &str = "_csrf_token";

#[derive(Clone, Debug)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Username of the logged-in user, if any.
    pub async fn user_id(&self) -> Result<Option<String>, AppError> {
        Ok(self.0.get::<String>(SESSION_USER_ID_KEY).await?)
    }

    /// Establish `username` as the session identity under a fresh session id.
    pub async fn log_in(&self, username: &str) -> Result<(), AppError> {
        self.0.cycle_id().await?;
        self.0.insert(SESSION_USER_ID_KEY, username).await?;
        Ok(())
    }

    /// Drop the session identity, returning who was logged in.
    pub async fn log_out(&self) -> Result<Option<String>, AppError> {
        Ok(self.0.remove::<String>(SESSION_USER_ID_KEY).await?)
    }

    /// Require the session identity to equal `owner`.
    ///
    /// On failure a flash is queued and [`AppError::Unauthorized`] is returned,
    /// which renders as a redirect to `/`.
    pub async fn authorize(&self, owner: &str) -> Result<String, AppError> {
        let current = self.user_id().await?;
        if is_authorized(current.as_deref(), owner) {
            return Ok(owner.to_string());
        }
        tracing::warn!(
            session_user = current.as_deref().unwrap_or("<anonymous>"),
            owner,
            "rejected request for resource of another user"
        );
        self.flash(Flash::danger("You are not authorized to do that."))
            .await?;
        Err(AppError::Unauthorized)
    }

    pub async fn flash(&self, flash: Flash) -> Result<(), AppError> {
        let mut flashes: Vec<Flash> = self.0.get(FLASHES_KEY).await?.unwrap_or_default();
        flashes.push(flash);
        self.0.insert(FLASHES_KEY, flashes).await?;
        Ok(())
    }

    /// Drain pending flashes; each is shown exactly once.
    pub async fn take_flashes(&self) -> Result<Vec<Flash>, AppError> {
        Ok(self
            .0
            .remove::<Vec<Flash>>(FLASHES_KEY)
            .await?
            .unwrap_or_default())
    }

    /// The session's CSRF token, minted on first use.
    pub async fn csrf_token(&self) -> Result<String, AppError> {
        if let Some(token) = self.0.get::<String>(CSRF_TOKEN_KEY).await? {
            return Ok(token);
        }
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        let token = hex::encode(bytes);
        self.0.insert(CSRF_TOKEN_KEY, &token).await?;
        Ok(token)
    }

    /// Whether `submitted` matches the token issued to this session.
    pub async fn csrf_matches(&self, submitted: &str) -> Result<bool, AppError> {
        let expected = self.0.get::<String>(CSRF_TOKEN_KEY).await?;
        Ok(matches!(expected, Some(token) if tokens_match(&token, submitted)))
    }
}

fn tokens_match(expected: &str, submitted: &str) -> bool {
    !submitted.is_empty() && bool::from(expected.as_bytes().ct_eq(submitted.as_bytes()))
}

impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        Ok(Self::new(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_match() {
        assert!(tokens_match("abc123", "abc123"));
        assert!(!tokens_match("abc123", "abc124"));
        assert!(!tokens_match("abc123", "abc"));
        assert!(!tokens_match("", ""));
    }
}
