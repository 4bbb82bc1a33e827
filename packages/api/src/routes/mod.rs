//! HTTP surface of the notes service.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/` | [`accounts::home`] |
//! | GET/POST | `/register` | [`accounts::show_register`] / [`accounts::register`] |
//! | GET/POST | `/login` | [`accounts::show_login`] / [`accounts::login`] |
//! | GET | `/logout` | [`accounts::logout`] |
//! | GET | `/users/{username}` | [`users::show_user`] |
//! | POST | `/users/{username}/delete` | [`users::delete_user`] |
//! | GET/POST | `/users/{username}/notes/add` | [`notes::show_add_note`] / [`notes::add_note`] |
//! | GET/POST | `/notes/{note_id}/update` | [`notes::show_update_note`] / [`notes::update_note`] |
//! | POST | `/notes/{note_id}/delete` | [`notes::delete_note`] |
//!
//! Every handler follows the same sequence: authorize, validate, mutate,
//! redirect. The router expects a `tower_sessions::SessionManagerLayer` to be
//! layered on top by the caller.

use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;
use ui::Flash;

use crate::auth::SessionContext;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub mod accounts;
pub mod notes;
pub mod users;


const CSRF_FORM_ERROR: &str = "The form has expired. Please submit it again.";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(accounts::home))
        .route(
            "/register",
            get(accounts::show_register).post(accounts::register),
        )
        .route("/login", get(accounts::show_login).post(accounts::login))
        .route("/logout", get(accounts::logout))
        .route("/users/{username}", get(users::show_user))
        .route("/users/{username}/delete", post(users::delete_user))
        .route(
            "/users/{username}/notes/add",
            get(notes::show_add_note).post(notes::add_note),
        )
        .route(
            "/notes/{note_id}/update",
            get(notes::show_update_note).post(notes::update_note),
        )
        .route("/notes/{note_id}/delete", post(notes::delete_note))
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}

fn redirect_to_user(username: &str) -> Response {
    Redirect::to(&ui::user_path(username)).into_response()
}

/// Render a page with the pending flashes and the session's CSRF token.
async fn render_page<F>(ctx: &SessionContext, render: F) -> AppResult<Response>
where
    F: FnOnce(Vec<Flash>, String) -> String,
{
    let flashes = ctx.take_flashes().await?;
    let csrf_token = ctx.csrf_token().await?;
    Ok(Html(render(flashes, csrf_token)).into_response())
}

async fn csrf_ok(state: &AppState, ctx: &SessionContext, submitted: &str) -> AppResult<bool> {
    if !state.csrf {
        return Ok(true);
    }
    ctx.csrf_matches(submitted).await
}

/// For posts without a form to re-render: flash and bounce home on a bad token.
async fn require_csrf(state: &AppState, ctx: &SessionContext, submitted: &str) -> AppResult<()> {
    if csrf_ok(state, ctx, submitted).await? {
        return Ok(());
    }
    tracing::warn!("rejected post with invalid CSRF token");
    ctx.flash(Flash::danger(CSRF_FORM_ERROR)).await?;
    Err(AppError::InvalidCsrf)
}
