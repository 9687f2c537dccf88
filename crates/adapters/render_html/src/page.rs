//! Host page — one hardcoded thesis card inside a static page shell.

use askama::Template;

use gvd_domain::status::Status;
use gvd_domain::theme::Theme;
use gvd_domain::thesis::{DealMemo, ThesisCardInput};

use crate::card::{ThesisCard, render_thesis_card};

pub const PAGE_TITLE: &str = "GVD Engine - Investment Analysis";
pub const PAGE_SUBTITLE: &str =
    "Refined Investment Thesis Card - Higher Density, Improved Legibility";
/// Path the page links its stylesheet from.
pub const STYLESHEET_PATH: &str = "/theme.css";

const DESIGN_NOTES: [&str; 6] = [
    "Metrics separated into dedicated grid layout with clear visual hierarchy",
    "Increased spacing between narrative and data sections for better scanability",
    "Thesis text in contained box with improved line-height for legibility",
    "Consistent use of monospace font for numerical data",
    "Reduced visual noise with subtle borders and backgrounds",
    "Higher information density while maintaining readability",
];

const SAMPLE_NARRATIVE: &str = "Based on the live screen, I have identified NVDA as the top candidate. \
This list is dominated by magnificent growth companies, but applying the undervalued filter requires \
us to look for the least demanding price tag among the highest quality assets. NVIDIA, despite its \
rapid ascent, currently holds the lowest P/E ratio among the trillion-dollar technology giants on \
this screen. We are buying quality and dominance: the company is the essential infrastructure \
provider for the AI revolution, a structural growth theme that will run for decades. While the price \
is high by traditional measures, we pay for a proven compounder with an almost unassailable moat, \
ensuring that capital is continuously reinvested at extraordinary rates of return.";

const SAMPLE_THESIS: &str = "The Essential Toll Booth. NVDA possesses an unshakeable competitive \
position as the key supplier of foundational infrastructure (GPUs) necessary for Global AI \
deployment. The relative P/E (lowest among the $1T+ cohort on this screen) suggests the market is \
pricing in less future growth deceleration than its peers, making it the most attractive \
quality-growth investment on this specific list.";

/// Host page template.
#[derive(Debug, Clone, PartialEq, Eq, Template)]
#[template(path = "host_page.html")]
pub struct HostPage {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub card: ThesisCard,
    pub notes: [&'static str; 6],
}

/// The card shown on the host page.
#[must_use]
pub fn sample_input() -> ThesisCardInput {
    ThesisCardInput {
        ticker: "NVDA".to_string(),
        status: Status::Pass.into(),
        narrative: SAMPLE_NARRATIVE.to_string(),
        deal_memo: DealMemo::new("NVDA", "4.65T", "191.32", SAMPLE_THESIS),
    }
}

/// Build the host page around the sample card.
#[must_use]
pub fn render_host_page(theme: &Theme) -> HostPage {
    HostPage {
        title: PAGE_TITLE,
        subtitle: PAGE_SUBTITLE,
        card: render_thesis_card(&sample_input(), theme),
        notes: DESIGN_NOTES,
    }
}
