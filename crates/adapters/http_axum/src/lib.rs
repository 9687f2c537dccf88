//! # gvd-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **host page** (`GET /`) as server-rendered HTML
//! - Serve the **theme stylesheet** (`GET /theme.css`) built from the
//!   configured [`Theme`](gvd_domain::theme::Theme)
//! - Expose a **health check** (`GET /health`)
//!
//! ## Dependency rule
//! Depends on `gvd-domain` for the theme and on `gvd-adapter-render-html`
//! for rendering. Never leaks axum types into either.

pub mod dashboard;
pub mod router;
pub mod state;
