//! Investment thesis card.
//!
//! The card has a fixed shape: a header with the status badge, the narrative
//! paragraph above a divider, and the deal memo (metrics grid + thesis box).
//! The only data-dependent styling is the badge tone.

use askama::Template;

use gvd_domain::status::StatusTone;
use gvd_domain::theme::Theme;
use gvd_domain::thesis::ThesisCardInput;

/// Title shown in the card header.
pub const CARD_TITLE: &str = "Investment Thesis";

/// One labelled cell of the metrics grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
    /// Rendered in the monospace face.
    pub mono: bool,
}

/// Thesis card template.
#[derive(Debug, Clone, PartialEq, Eq, Template)]
#[template(path = "thesis_card.html")]
pub struct ThesisCard {
    pub title: &'static str,
    pub status_label: String,
    pub tone: StatusTone,
    pub dot_color: String,
    pub narrative: String,
    pub metrics: [Metric; 3],
    pub thesis: String,
}

/// Build the card for an input.
///
/// Pure: no validation, no IO, and the same input always yields the same card.
#[must_use]
pub fn render_thesis_card(input: &ThesisCardInput, theme: &Theme) -> ThesisCard {
    let tone = input.status.tone();
    let memo = &input.deal_memo;
    ThesisCard {
        title: CARD_TITLE,
        status_label: input.status.as_str().to_string(),
        tone,
        dot_color: theme.status_color(tone).to_string(),
        narrative: input.narrative.clone(),
        metrics: [
            Metric {
                label: "Ticker",
                value: memo.display_ticker(&input.ticker).to_string(),
                mono: true,
            },
            Metric {
                label: "Market Cap",
                value: memo.display_market_cap().to_string(),
                mono: false,
            },
            Metric {
                label: "P/E Ratio",
                value: memo.display_pe_ratio().to_string(),
                mono: false,
            },
        ],
        thesis: memo.display_thesis().to_string(),
    }
}
