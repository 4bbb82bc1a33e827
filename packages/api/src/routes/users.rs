use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use ui::{Flash, UserDetailPageProps};

use super::{render_page, require_csrf};
use crate::auth::SessionContext;
use crate::error::{AppError, AppResult};
use crate::forms::DeleteForm;
use crate::state::AppState;

/// `GET /users/{username}`: the owner's profile and notes.
pub async fn show_user(
    State(state): State<AppState>,
    ctx: SessionContext,
    Path(username): Path<String>,
) -> AppResult<Response> {
    let username = ctx.authorize(&username).await?;
    // A session can outlive its user.
    let user = state.users.find(&username).await?.ok_or(AppError::NotFound)?;
    let notes = state.notes.find_by_owner(&username).await?;

    render_page(&ctx, |flashes, csrf_token| {
        ui::render_user_detail(UserDetailPageProps {
            user,
            notes,
            flashes,
            csrf_token,
        })
    })
    .await
}

/// `POST /users/{username}/delete`: remove the account and everything it owns.
pub async fn delete_user(
    State(state): State<AppState>,
    ctx: SessionContext,
    Path(username): Path<String>,
    Form(form): Form<DeleteForm>,
) -> AppResult<Response> {
    let username = ctx.authorize(&username).await?;
    require_csrf(&state, &ctx, &form.csrf_token).await?;

    let removed_notes = state.notes.delete_by_owner(&username).await?;
    if !state.users.delete(&username).await? {
        // The account was already gone; drop the stale identity anyway.
        ctx.log_out().await?;
        return Err(AppError::NotFound);
    }
    tracing::info!(%username, removed_notes, "deleted user");

    ctx.log_out().await?;
    ctx.flash(Flash::info("Your account has been deleted.")).await?;
    Ok(Redirect::to("/").into_response())
}
