//! Shared application state for axum handlers.

use std::sync::Arc;

use gvd_domain::theme::Theme;

/// State shared across all axum handlers.
///
/// The theme is set once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub theme: Arc<Theme>,
}

impl AppState {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme: Arc::new(theme),
        }
    }
}
