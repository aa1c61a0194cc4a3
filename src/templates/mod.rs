//! Server-rendered HTML pages.
//!
//! Every page is wrapped in [`layout`], which draws the navigation for the
//! current login state and shows the pending flash message, if any.

pub mod pages;
pub mod snippets;
pub mod users;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use maud::{html, Markup, DOCTYPE};
use time::{macros::format_description, OffsetDateTime};
use tower_sessions::Session;

use crate::auth::{session, AuthUser};
use crate::error::AppError;
use crate::validator::Validator;

/// Per-request data shared by all pages.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub flash: Option<String>,
    pub is_authenticated: bool,
    pub current_year: i32,
}

impl PageContext {
    /// Consumes the session's flash message. Handlers that may still fail call
    /// this only once they are about to render.
    pub async fn load(sess: &Session, is_authenticated: bool) -> Result<Self, AppError> {
        Ok(Self {
            flash: session::pop_flash(sess).await?,
            is_authenticated,
            current_year: OffsetDateTime::now_utc().year(),
        })
    }
}

/// Extracting the context consumes the session's flash message.
#[async_trait]
impl<S> FromRequestParts<S> for PageContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let sess = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::Internal(anyhow::anyhow!(msg)))?;
        Self::load(&sess, parts.extensions.get::<AuthUser>().is_some()).await
    }
}

pub fn human_date(t: OffsetDateTime) -> String {
    t.format(format_description!(
        "[day] [month repr:short] [year] at [hour]:[minute]"
    ))
    .unwrap_or_default()
}

pub fn layout(ctx: &PageContext, title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) " - Snippetbox" }
                link rel="stylesheet" href="/static/css/main.css";
            }
            body {
                header {
                    h1 { a href="/" { "Snippetbox" } }
                }
                (nav(ctx))
                main {
                    @if let Some(flash) = &ctx.flash {
                        div.flash { (flash) }
                    }
                    (content)
                }
                footer { "Powered by Rust in " (ctx.current_year) }
            }
        }
    }
}

fn nav(ctx: &PageContext) -> Markup {
    html! {
        nav {
            div {
                a href="/" { "Home" }
                a href="/about" { "About" }
                @if ctx.is_authenticated {
                    a href="/snippet/create" { "Create snippet" }
                }
            }
            div {
                @if ctx.is_authenticated {
                    a href="/account/view" { "Account" }
                    form action="/user/logout" method="POST" {
                        button { "Logout" }
                    }
                } @else {
                    a href="/user/signup" { "Signup" }
                    a href="/user/login" { "Login" }
                }
            }
        }
    }
}

/// Error label for `field`, rendered only when validation recorded one.
pub(crate) fn field_error(v: &Validator, field: &str) -> Markup {
    html! {
        @if let Some(msg) = v.field_error(field) {
            label.error { (msg) }
        }
    }
}
