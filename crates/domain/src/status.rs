//! Thesis status — the classification shown in the card's status badge.
//!
//! Inputs carry a [`StatusValue`], which keeps whatever text the caller
//! supplied. Only exact `PASS`/`FAIL`/`HOLD` become a known [`Status`];
//! everything else is kept as [`StatusValue::Unrecognized`] and shares the
//! neutral treatment with `HOLD`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// The closed set of verdicts an analysis can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Pass,
    Fail,
    Hold,
}

impl Status {
    /// The canonical upper-case label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Hold => "HOLD",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ValidationError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASS" => Ok(Self::Pass),
            "FAIL" => Ok(Self::Fail),
            "HOLD" => Ok(Self::Hold),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

/// Visual treatment derived from a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTone {
    Positive,
    Negative,
    Neutral,
}

impl StatusTone {
    /// Machine name, used for `data-tone` attributes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    /// CSS class of the badge dot.
    #[must_use]
    pub fn dot_class(self) -> &'static str {
        match self {
            Self::Positive => "dot-green",
            Self::Negative => "dot-red",
            Self::Neutral => "dot-amber",
        }
    }
}

impl fmt::Display for StatusTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status as supplied by a caller: either a known verdict or the raw text.
///
/// Conversion from a string never fails, so a card can always be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatusValue {
    Known(Status),
    Unrecognized(String),
}

impl StatusValue {
    /// The literal text to display in the badge.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(status) => status.as_str(),
            Self::Unrecognized(raw) => raw,
        }
    }

    /// The known verdict, if any.
    #[must_use]
    pub fn known(&self) -> Option<Status> {
        match self {
            Self::Known(status) => Some(*status),
            Self::Unrecognized(_) => None,
        }
    }

    /// Derive the badge tone.
    ///
    /// `HOLD` and any unrecognized text both map to [`StatusTone::Neutral`].
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub fn tone(&self) -> StatusTone {
        match self {
            Self::Known(Status::Pass) => StatusTone::Positive,
            Self::Known(Status::Fail) => StatusTone::Negative,
            Self::Known(Status::Hold) => StatusTone::Neutral,
            // No separate "invalid" treatment exists: unknown text looks like HOLD.
            Self::Unrecognized(_) => StatusTone::Neutral,
        }
    }
}

impl Default for StatusValue {
    fn default() -> Self {
        Self::Unrecognized(String::new())
    }
}

impl From<Status> for StatusValue {
    fn from(status: Status) -> Self {
        Self::Known(status)
    }
}

impl From<&str> for StatusValue {
    fn from(raw: &str) -> Self {
        raw.parse::<Status>()
            .map_or_else(|_| Self::Unrecognized(raw.to_string()), Self::Known)
    }
}

impl From<String> for StatusValue {
    fn from(raw: String) -> Self {
        match raw.parse::<Status>() {
            Ok(status) => Self::Known(status),
            Err(_) => Self::Unrecognized(raw),
        }
    }
}

impl fmt::Display for StatusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StatusValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StatusValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}
