//! Note creation, editing and removal.
//!
//! Adding is scoped by the username in the path. Updating and deleting are
//! scoped by the note, so the note is loaded first and its owner authorized.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Form;
use store::{NewNote, Note, NoteId};
use ui::{FieldErrors, Flash, NoteFormPageProps};

use super::{csrf_ok, redirect_to_user, render_page, require_csrf, CSRF_FORM_ERROR};
use crate::auth::SessionContext;
use crate::error::{AppError, AppResult};
use crate::forms::{validate_form, DeleteForm, NoteForm};
use crate::state::AppState;

/// `GET /users/{username}/notes/add`
pub async fn show_add_note(ctx: SessionContext, Path(username): Path<String>) -> AppResult<Response> {
    let owner = ctx.authorize(&username).await?;
    add_note_page(&ctx, &owner, String::new(), String::new(), FieldErrors::new()).await
}

/// `POST /users/{username}/notes/add`
pub async fn add_note(
    State(state): State<AppState>,
    ctx: SessionContext,
    Path(username): Path<String>,
    Form(form): Form<NoteForm>,
) -> AppResult<Response> {
    let owner = ctx.authorize(&username).await?;

    let mut errors = validate_form(&form);
    if !csrf_ok(&state, &ctx, &form.csrf_token).await? {
        errors.add_form(CSRF_FORM_ERROR);
    }
    if !errors.is_empty() {
        return add_note_page(&ctx, &owner, form.title, form.content, errors).await;
    }

    let note = state
        .notes
        .insert(NewNote::new(form.title, form.content, owner.clone()))
        .await?;
    tracing::info!(note_id = note.id, %owner, "added note");
    ctx.flash(Flash::success("Note added.")).await?;
    Ok(redirect_to_user(&owner))
}

async fn add_note_page(
    ctx: &SessionContext,
    owner: &str,
    title: String,
    content: String,
    errors: FieldErrors,
) -> AppResult<Response> {
    let action = ui::add_note_path(owner);
    let back = ui::user_path(owner);
    render_page(ctx, |flashes, csrf_token| {
        ui::render_note_form(NoteFormPageProps {
            heading: "Add a note",
            action,
            submit_label: "Add note",
            back,
            title,
            content,
            errors,
            flashes,
            csrf_token,
        })
    })
    .await
}

/// `GET /notes/{note_id}/update`
pub async fn show_update_note(
    State(state): State<AppState>,
    ctx: SessionContext,
    Path(note_id): Path<String>,
) -> AppResult<Response> {
    let note = load_note(&state, &note_id).await?;
    ctx.authorize(&note.owner).await?;
    let (title, content) = (note.title.clone(), note.content.clone());
    update_note_page(&ctx, &note, title, content, FieldErrors::new()).await
}

/// `POST /notes/{note_id}/update`
pub async fn update_note(
    State(state): State<AppState>,
    ctx: SessionContext,
    Path(note_id): Path<String>,
    Form(form): Form<NoteForm>,
) -> AppResult<Response> {
    let note = load_note(&state, &note_id).await?;
    let owner = ctx.authorize(&note.owner).await?;

    let mut errors = validate_form(&form);
    if !csrf_ok(&state, &ctx, &form.csrf_token).await? {
        errors.add_form(CSRF_FORM_ERROR);
    }
    if !errors.is_empty() {
        return update_note_page(&ctx, &note, form.title, form.content, errors).await;
    }

    let updated = Note {
        title: form.title,
        content: form.content,
        ..note
    };
    if !state.notes.update(&updated).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(note_id = updated.id, %owner, "updated note");
    ctx.flash(Flash::success("Note updated.")).await?;
    Ok(redirect_to_user(&owner))
}

async fn update_note_page(
    ctx: &SessionContext,
    note: &Note,
    title: String,
    content: String,
    errors: FieldErrors,
) -> AppResult<Response> {
    let action = format!("/notes/{}/update", note.id);
    let back = ui::user_path(&note.owner);
    render_page(ctx, |flashes, csrf_token| {
        ui::render_note_form(NoteFormPageProps {
            heading: "Edit note",
            action,
            submit_label: "Save",
            back,
            title,
            content,
            errors,
            flashes,
            csrf_token,
        })
    })
    .await
}

/// `POST /notes/{note_id}/delete`
pub async fn delete_note(
    State(state): State<AppState>,
    ctx: SessionContext,
    Path(note_id): Path<String>,
    Form(form): Form<DeleteForm>,
) -> AppResult<Response> {
    let note = load_note(&state, &note_id).await?;
    let owner = ctx.authorize(&note.owner).await?;
    require_csrf(&state, &ctx, &form.csrf_token).await?;

    if !state.notes.delete(note.id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(note_id = note.id, %owner, "deleted note");
    ctx.flash(Flash::success("Note deleted.")).await?;
    Ok(redirect_to_user(&owner))
}

/// Resolve a path segment to a stored note; anything unparseable is a 404.
async fn load_note(state: &AppState, raw_id: &str) -> AppResult<Note> {
    let id: NoteId = raw_id.parse().map_err(|_| AppError::NotFound)?;
    state.notes.get(id).await?.ok_or(AppError::NotFound)
}
