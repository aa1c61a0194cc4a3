use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use maud::Markup;
use tower_sessions::Session;
use tracing::{info, instrument, warn};

use super::dto::{LoginForm, PasswordUpdateForm, SignupForm};
use crate::{
    auth::{session, AuthUser},
    error::{AppError, ModelError},
    forms::{self, FormFields},
    state::AppState,
    templates::{self, PageContext},
};

const DEFAULT_AFTER_LOGIN: &str = "/snippet/create";

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/user/signup", get(signup_form).post(signup))
        .route("/user/login", get(login_form).post(login))
}

/// Routes that need a logged-in user; the caller wraps them in the guard.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/account/view", get(account_view))
        .route(
            "/account/password/update",
            get(password_update_form).post(password_update),
        )
}

/// POST-only routes that need a logged-in user.
pub fn action_routes() -> Router<AppState> {
    Router::new().route("/user/logout", post(logout))
}

fn unprocessable(page: Markup) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, page).into_response()
}

pub async fn signup_form(ctx: PageContext) -> Markup {
    templates::users::signup(&ctx, &SignupForm::default())
}

#[instrument(skip_all)]
pub async fn signup(
    State(state): State<AppState>,
    user: Option<AuthUser>,
    sess: Session,
    body: Result<Form<FormFields>, FormRejection>,
) -> Result<Response, AppError> {
    let mut form = SignupForm::parse(&forms::fields(body)?);
    if !form.validate() {
        let ctx = PageContext::load(&sess, user.is_some()).await?;
        return Ok(unprocessable(templates::users::signup(&ctx, &form)));
    }

    match state.users.insert(&form.name, &form.email, &form.password).await {
        Ok(()) => {}
        Err(ModelError::DuplicateEmail) => {
            warn!(email = %form.email, "email already registered");
            form.validator
                .add_field_error(false, "email", "Email address is already in use");
            let ctx = PageContext::load(&sess, user.is_some()).await?;
            return Ok(unprocessable(templates::users::signup(&ctx, &form)));
        }
        Err(e) => return Err(e.into()),
    }

    info!(email = %form.email, "user registered");
    session::put_flash(&sess, "Your signup was successful. Please log in.").await?;
    Ok(Redirect::to("/user/login").into_response())
}

pub async fn login_form(ctx: PageContext) -> Markup {
    templates::users::login(&ctx, &LoginForm::default())
}

#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    user: Option<AuthUser>,
    sess: Session,
    body: Result<Form<FormFields>, FormRejection>,
) -> Result<Response, AppError> {
    let mut form = LoginForm::parse(&forms::fields(body)?);
    if !form.validate() {
        let ctx = PageContext::load(&sess, user.is_some()).await?;
        return Ok(unprocessable(templates::users::login(&ctx, &form)));
    }

    let user_id = match state.users.authenticate(&form.email, &form.password).await {
        Ok(id) => id,
        Err(ModelError::InvalidCredentials) => {
            warn!(email = %form.email, "login rejected");
            form.validator
                .add_non_field_error("Email or password is incorrect");
            let ctx = PageContext::load(&sess, user.is_some()).await?;
            return Ok(unprocessable(templates::users::login(&ctx, &form)));
        }
        Err(e) => return Err(e.into()),
    };

    session::log_in(&sess, user_id).await?;
    info!(user_id, "user logged in");

    let target = session::take_redirect_after_login(&sess)
        .await?
        .unwrap_or_else(|| DEFAULT_AFTER_LOGIN.to_string());
    Ok(Redirect::to(&target).into_response())
}

#[instrument(skip_all)]
pub async fn logout(AuthUser(user_id): AuthUser, sess: Session) -> Result<Redirect, AppError> {
    session::log_out(&sess).await?;
    session::put_flash(&sess, "You've been logged out successfully!").await?;
    info!(user_id, "user logged out");
    Ok(Redirect::to("/"))
}

#[instrument(skip_all)]
pub async fn account_view(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    sess: Session,
) -> Result<Response, AppError> {
    match state.users.get_user(user_id).await {
        Ok(user) => {
            let ctx = PageContext::load(&sess, true).await?;
            Ok(templates::users::account(&ctx, &user).into_response())
        }
        Err(ModelError::NoRecord) => Ok(Redirect::to("/user/login").into_response()),
        Err(e) => Err(e.into()),
    }
}

pub async fn password_update_form(_user: AuthUser, ctx: PageContext) -> Markup {
    templates::users::password_update(&ctx, &PasswordUpdateForm::default())
}

#[instrument(skip_all)]
pub async fn password_update(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    sess: Session,
    body: Result<Form<FormFields>, FormRejection>,
) -> Result<Response, AppError> {
    let mut form = PasswordUpdateForm::parse(&forms::fields(body)?);
    if !form.validate() {
        let ctx = PageContext::load(&sess, true).await?;
        return Ok(unprocessable(templates::users::password_update(&ctx, &form)));
    }

    match state
        .users
        .update_password(user_id, &form.current_password, &form.new_password)
        .await
    {
        Ok(()) => {}
        Err(ModelError::InvalidCredentials) => {
            form.validator.add_field_error(
                false,
                "currentPassword",
                "Current password is incorrect",
            );
            let ctx = PageContext::load(&sess, true).await?;
            return Ok(unprocessable(templates::users::password_update(&ctx, &form)));
        }
        Err(e) => return Err(e.into()),
    }

    info!(user_id, "password updated");
    session::put_flash(&sess, "Your password has been updated!").await?;
    Ok(Redirect::to("/account/view").into_response())
}
