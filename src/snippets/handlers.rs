use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use maud::Markup;
use tower_sessions::Session;
use tracing::{info, instrument};

use super::dto::SnippetCreateForm;
use crate::{
    auth::{session, AuthUser},
    error::{AppError, ModelError},
    forms::{self, FormFields},
    state::AppState,
    templates::{self, PageContext},
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/snippet/view/:id", get(snippet_view))
}

/// Routes that need a logged-in user; the caller wraps them in the guard.
pub fn write_routes() -> Router<AppState> {
    Router::new().route(
        "/snippet/create",
        get(snippet_create_form).post(snippet_create),
    )
}

#[instrument(skip_all)]
pub async fn home(
    State(state): State<AppState>,
    user: Option<AuthUser>,
    sess: Session,
) -> Result<Markup, AppError> {
    let snippets = state.snippets.latest().await?;
    let ctx = PageContext::load(&sess, user.is_some()).await?;
    Ok(templates::snippets::home(&ctx, &snippets))
}

#[instrument(skip_all)]
pub async fn snippet_view(
    State(state): State<AppState>,
    user: Option<AuthUser>,
    sess: Session,
    Path(id): Path<String>,
) -> Result<Markup, AppError> {
    let id = match id.parse::<i64>() {
        Ok(id) if id >= 1 => id,
        _ => return Err(AppError::NotFound),
    };
    match state.snippets.get(id).await {
        Ok(snippet) => {
            let ctx = PageContext::load(&sess, user.is_some()).await?;
            Ok(templates::snippets::view(&ctx, &snippet))
        }
        Err(ModelError::NoRecord) => Err(AppError::NotFound),
        Err(e) => Err(e.into()),
    }
}

pub async fn snippet_create_form(_user: AuthUser, ctx: PageContext) -> Markup {
    templates::snippets::create(&ctx, &SnippetCreateForm::default())
}

#[instrument(skip_all)]
pub async fn snippet_create(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    sess: Session,
    body: Result<Form<FormFields>, FormRejection>,
) -> Result<Response, AppError> {
    let fields = forms::fields(body)?;
    let mut form = SnippetCreateForm::parse(&fields)?;

    if !form.validate() {
        let ctx = PageContext::load(&sess, true).await?;
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            templates::snippets::create(&ctx, &form),
        )
            .into_response());
    }

    let id = state
        .snippets
        .insert(&form.title, &form.content, form.expires)
        .await?;
    info!(snippet_id = id, user_id, "snippet created");

    session::put_flash(&sess, "Snippet successfully created!").await?;
    Ok(Redirect::to(&format!("/snippet/view/{id}")).into_response())
}
