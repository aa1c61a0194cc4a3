use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::{debug, warn};

use super::{extractors::AuthUser, session};
use crate::{error::AppError, state::AppState};

/// Marks the request as authenticated when the session carries the id of a
/// user that still exists.
pub async fn authenticate(
    State(state): State<AppState>,
    sess: Session,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(id) = session::user_id(&sess).await? {
        if state.users.exists(id).await? {
            req.extensions_mut().insert(AuthUser(id));
        } else {
            warn!(user_id = id, "session refers to unknown user");
        }
    }
    Ok(next.run(req).await)
}

/// Sends anonymous visitors to the login page, remembering where they were
/// headed. Pages behind it are never cached.
pub async fn require_authentication(
    sess: Session,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    guard(sess, req, next, true).await
}

/// Same as [`require_authentication`] but never records a return path. Used for
/// routes that only accept POST, where landing back after login would 405.
pub async fn require_authentication_for_action(
    sess: Session,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    guard(sess, req, next, false).await
}

async fn guard(
    sess: Session,
    req: Request,
    next: Next,
    remember_path: bool,
) -> Result<Response, AppError> {
    if req.extensions().get::<AuthUser>().is_none() {
        if remember_path && req.method() == Method::GET {
            session::set_redirect_after_login(&sess, req.uri().path()).await?;
        }
        debug!(path = %req.uri().path(), "login required");
        return Ok(Redirect::to("/user/login").into_response());
    }

    let mut res = next.run(req).await;
    res.headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    Ok(res)
}
