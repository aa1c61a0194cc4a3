use axum::{http::StatusCode, response::Response, routing::get, Router};
use maud::Markup;

use crate::{
    error::client_error,
    state::AppState,
    templates::{self, PageContext},
};

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/about", get(about))
        .route("/ping", get(ping))
}

pub async fn about(ctx: PageContext) -> Markup {
    templates::pages::about(&ctx)
}

pub async fn ping() -> &'static str {
    "OK"
}

pub async fn not_found() -> Response {
    client_error(StatusCode::NOT_FOUND)
}
