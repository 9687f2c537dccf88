//! Domain validation errors.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.
//! The renderer never fails; these errors only surface where input is
//! validated on purpose (strict status parsing, theme configuration).

/// A value did not satisfy a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The text is not one of `PASS`, `FAIL` or `HOLD`.
    #[error("unknown status {0:?}, expected PASS, FAIL or HOLD")]
    UnknownStatus(String),
    /// A theme token was configured with an empty value.
    #[error("theme token {0} must not be empty")]
    EmptyThemeToken(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_unknown_status_with_literal() {
        let err = ValidationError::UnknownStatus("maybe".to_string());
        assert_eq!(
            err.to_string(),
            "unknown status \"maybe\", expected PASS, FAIL or HOLD"
        );
    }

    #[test]
    fn should_display_empty_theme_token_name() {
        let err = ValidationError::EmptyThemeToken("--bg-page");
        assert_eq!(err.to_string(), "theme token --bg-page must not be empty");
    }
}
