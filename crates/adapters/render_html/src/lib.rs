//! # gvd-adapter-render-html
//!
//! Pure rendering of the investment thesis card with [askama](https://docs.rs/askama).
//!
//! ## Responsibilities
//! - Map a card input to the **thesis card** template
//! - Assemble the **host page** template around one card
//! - Render the **theme stylesheet** from the configured tokens
//!
//! ## Purity
//! Building a template performs no IO, logs nothing, and keeps no state.
//! Equal inputs produce equal templates and byte-identical output, so the
//! functions may be called from any number of threads without coordination.

pub mod card;
pub mod page;
pub mod stylesheet;

pub use card::{ThesisCard, render_thesis_card};
pub use page::{HostPage, render_host_page, sample_input};
pub use stylesheet::{ThemeStylesheet, theme_stylesheet};
