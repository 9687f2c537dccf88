//! # gvd-domain
//!
//! Pure domain model for the GVD investment thesis card.
//!
//! ## Responsibilities
//! - Define the **status** verdict (`PASS`/`FAIL`/`HOLD`) and its badge tone
//! - Define the **thesis card input** and its **deal memo**
//! - Define the **theme** tokens the card is styled with
//! - Contain the display rules for absent values
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! Rendering lives in the `render_html` adapter.

pub mod error;
pub mod status;
pub mod theme;
pub mod thesis;
