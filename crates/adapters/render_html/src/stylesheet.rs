//! Theme stylesheet — token declarations followed by the card styles.

use askama::Template;

use gvd_domain::theme::Theme;

/// Stylesheet template; every color, font and radius comes from a token.
#[derive(Debug, Clone, PartialEq, Eq, Template)]
#[template(path = "theme.css", escape = "none")]
pub struct ThemeStylesheet {
    pub tokens: Vec<(&'static str, String)>,
}

/// Build the stylesheet for a theme.
#[must_use]
pub fn theme_stylesheet(theme: &Theme) -> ThemeStylesheet {
    ThemeStylesheet {
        tokens: theme
            .tokens()
            .into_iter()
            .map(|(name, value)| (name, value.to_string()))
            .collect(),
    }
}
