//! Request failures and how they turn into responses.
//!
//! Validation problems never reach this type: handlers re-render their form
//! instead. What remains is either a control-flow outcome
//! ([`AppError::Unauthorized`], [`AppError::InvalidCsrf`], [`AppError::NotFound`])
//! or an infrastructure failure, which is logged and answered with a generic
//! 500 page.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use store::StoreError;
use thiserror::Error;

use crate::auth::PasswordError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not authorized")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("missing or mismatched CSRF token")]
    InvalidCsrf,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Session(#[from] tower_sessions::session::Error),
    #[error(transparent)]
    Password(#[from] PasswordError),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // The flash was queued before the error was raised.
            AppError::Unauthorized | AppError::InvalidCsrf => Redirect::to("/").into_response(),
            AppError::NotFound => {
                (StatusCode::NOT_FOUND, Html(ui::render_not_found())).into_response()
            }
            other => {
                tracing::error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(ui::render_server_error()),
                )
                    .into_response()
            }
        }
    }
}
