//! Registration, login and logout.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use store::{StoreError, UniqueField, User};
use ui::{FieldErrors, Flash, LoginPageProps, RegisterPageProps, RegisterValues};

use super::{csrf_ok, redirect_to_user, render_page, CSRF_FORM_ERROR};
use crate::auth::{hash_password, verify_password, SessionContext};
use crate::error::AppResult;
use crate::forms::{validate_form, LoginForm, RegisterForm};
use crate::state::AppState;

const EMAIL_TAKEN: &str = "Email already registered.";
const USERNAME_TAKEN: &str = "Username already taken.";
const BAD_CREDENTIALS: &str = "Invalid username/password.";

/// `GET /`
pub async fn home() -> Redirect {
    Redirect::to("/register")
}

/// `GET /register`
pub async fn show_register(ctx: SessionContext) -> AppResult<Response> {
    if let Some(username) = ctx.user_id().await? {
        return Ok(redirect_to_user(&username));
    }
    register_page(&ctx, RegisterValues::default(), FieldErrors::new()).await
}

/// `POST /register`
pub async fn register(
    State(state): State<AppState>,
    ctx: SessionContext,
    Form(form): Form<RegisterForm>,
) -> AppResult<Response> {
    if let Some(username) = ctx.user_id().await? {
        return Ok(redirect_to_user(&username));
    }

    let mut errors = validate_form(&form);
    if !csrf_ok(&state, &ctx, &form.csrf_token).await? {
        errors.add_form(CSRF_FORM_ERROR);
    }
    if errors.is_empty() && state.users.email_exists(&form.email).await? {
        errors.add("email", EMAIL_TAKEN);
    }
    if !errors.is_empty() {
        return register_page(&ctx, form.values(), errors).await;
    }

    let user = User {
        password_hash: hash_password(&form.password)?,
        username: form.username.clone(),
        email: form.email.clone(),
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
    };
    match state.users.insert(&user).await {
        Ok(()) => {}
        Err(StoreError::Duplicate(field)) => {
            match field {
                UniqueField::Email => errors.add("email", EMAIL_TAKEN),
                UniqueField::Username => errors.add("username", USERNAME_TAKEN),
            }
            return register_page(&ctx, form.values(), errors).await;
        }
        Err(other) => return Err(other.into()),
    }

    tracing::info!(username = %user.username, "registered user");
    ctx.log_in(&user.username).await?;
    ctx.flash(Flash::success(format!(
        "Welcome, {}! Your account has been created.",
        user.first_name
    )))
    .await?;
    Ok(redirect_to_user(&user.username))
}

async fn register_page(
    ctx: &SessionContext,
    values: RegisterValues,
    errors: FieldErrors,
) -> AppResult<Response> {
    render_page(ctx, |flashes, csrf_token| {
        ui::render_register(RegisterPageProps {
            values,
            errors,
            flashes,
            csrf_token,
        })
    })
    .await
}

/// `GET /login`
pub async fn show_login(ctx: SessionContext) -> AppResult<Response> {
    if let Some(username) = ctx.user_id().await? {
        return Ok(redirect_to_user(&username));
    }
    login_page(&ctx, String::new(), FieldErrors::new()).await
}

/// `POST /login`
pub async fn login(
    State(state): State<AppState>,
    ctx: SessionContext,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    if let Some(username) = ctx.user_id().await? {
        return Ok(redirect_to_user(&username));
    }

    let mut errors = validate_form(&form);
    if !csrf_ok(&state, &ctx, &form.csrf_token).await? {
        errors.add_form(CSRF_FORM_ERROR);
    }
    if !errors.is_empty() {
        return login_page(&ctx, form.username, errors).await;
    }

    let Some(user) = authenticate(&state, &form.username, &form.password).await? else {
        tracing::info!(username = %form.username, "failed login attempt");
        errors.add_form(BAD_CREDENTIALS);
        return login_page(&ctx, form.username, errors).await;
    };

    tracing::info!(username = %user.username, "user logged in");
    ctx.log_in(&user.username).await?;
    ctx.flash(Flash::success(format!("Welcome back, {}!", user.first_name)))
        .await?;
    Ok(redirect_to_user(&user.username))
}

/// The user whose stored hash matches `password`, if any.
async fn authenticate(state: &AppState, username: &str, password: &str) -> AppResult<Option<User>> {
    let Some(user) = state.users.find(username).await? else {
        return Ok(None);
    };
    if verify_password(password, &user.password_hash)? {
        Ok(Some(user))
    } else {
        Ok(None)
    }
}

async fn login_page(ctx: &SessionContext, username: String, errors: FieldErrors) -> AppResult<Response> {
    render_page(ctx, |flashes, csrf_token| {
        ui::render_login(LoginPageProps {
            username,
            errors,
            flashes,
            csrf_token,
        })
    })
    .await
}

/// `GET /logout`
pub async fn logout(ctx: SessionContext) -> AppResult<Response> {
    match ctx.log_out().await? {
        Some(username) => {
            tracing::info!(%username, "user logged out");
            ctx.flash(Flash::info("You have been logged out.")).await?;
        }
        None => {
            ctx.flash(Flash::info("No user is logged in.")).await?;
        }
    }
    Ok(Redirect::to("/").into_response())
}
