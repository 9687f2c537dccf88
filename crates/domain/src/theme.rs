//! Theme tokens — the named styling values a card references.
//!
//! A [`Theme`] is built once (from configuration) and handed to the
//! renderer by reference; it is never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::status::StatusTone;

/// Named design tokens exposed to the page as CSS custom properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub bg_page: String,
    pub bg_card: String,
    pub border_subtle: String,
    pub border_tech: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub font_sans: String,
    pub font_mono: String,
    pub radius_card: String,
    pub status_positive: String,
    pub status_negative: String,
    pub status_neutral: String,
}

impl Theme {
    /// `(custom property, value)` pairs in a stable order.
    #[must_use]
    pub fn tokens(&self) -> [(&'static str, &str); 12] {
        [
            ("--bg-page", self.bg_page.as_str()),
            ("--bg-card", self.bg_card.as_str()),
            ("--border-subtle", self.border_subtle.as_str()),
            ("--border-tech", self.border_tech.as_str()),
            ("--text-primary", self.text_primary.as_str()),
            ("--text-secondary", self.text_secondary.as_str()),
            ("--font-sans", self.font_sans.as_str()),
            ("--font-mono", self.font_mono.as_str()),
            ("--radius-card", self.radius_card.as_str()),
            ("--status-positive", self.status_positive.as_str()),
            ("--status-negative", self.status_negative.as_str()),
            ("--status-neutral", self.status_neutral.as_str()),
        ]
    }

    /// Color used for a badge dot of the given tone.
    #[must_use]
    pub fn status_color(&self, tone: StatusTone) -> &str {
        match tone {
            StatusTone::Positive => &self.status_positive,
            StatusTone::Negative => &self.status_negative,
            StatusTone::Neutral => &self.status_neutral,
        }
    }

    /// Reject tokens configured as empty strings.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyThemeToken`] naming the first empty token.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self
            .tokens()
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            Some((name, _)) => Err(ValidationError::EmptyThemeToken(name)),
            None => Ok(()),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg_page: "#020617".to_string(),
            bg_card: "#0f172a".to_string(),
            border_subtle: "rgba(148, 163, 184, 0.1)".to_string(),
            border_tech: "rgba(148, 163, 184, 0.2)".to_string(),
            text_primary: "#e2e8f0".to_string(),
            text_secondary: "#94a3b8".to_string(),
            font_sans: "Inter, system-ui, sans-serif".to_string(),
            font_mono: "'JetBrains Mono', ui-monospace, monospace".to_string(),
            radius_card: "12px".to_string(),
            status_positive: "#22c55e".to_string(),
            status_negative: "#ef4444".to_string(),
            status_neutral: "#eab308".to_string(),
        }
    }
}
