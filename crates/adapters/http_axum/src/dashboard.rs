//! Server-side rendered pages (no JavaScript).

use askama::Template;
use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;

use gvd_adapter_render_html::page::STYLESHEET_PATH;
use gvd_adapter_render_html::{render_host_page, theme_stylesheet};

use crate::state::AppState;

/// Template rendering failed.
#[derive(Debug)]
pub struct DashboardError(askama::Error);

impl From<askama::Error> for DashboardError {
    fn from(err: askama::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "template rendering failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}

/// Build the dashboard sub-router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route(STYLESHEET_PATH, get(stylesheet))
}

/// `GET /` — host page with the sample thesis card.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, DashboardError> {
    let html = render_host_page(&state.theme).render()?;
    tracing::debug!(bytes = html.len(), "rendered host page");
    Ok(Html(html))
}

/// `GET /theme.css` — theme tokens and card styles.
pub async fn stylesheet(State(state): State<AppState>) -> Result<Response, DashboardError> {
    let css = theme_stylesheet(&state.theme).render()?;
    Ok(([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css).into_response())
}
