//! Thesis card input — the value objects a card is rendered from.
//!
//! Both types are plain immutable values. Nothing here computes on the
//! financial figures: market cap and P/E arrive already formatted.
//!
//! Deal memo fields are optional so a memo deserialized without a key can be
//! told apart from one whose value is an empty string. Present values, empty
//! or not, are always displayed verbatim.

use serde::{Deserialize, Serialize};

use crate::status::StatusValue;

/// Placeholder shown for a metric whose key is absent.
pub const MISSING_METRIC: &str = "N/A";

/// Structured summary shown in the lower half of the card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DealMemo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    /// Pre-formatted display string, e.g. `4.65T`.
    #[serde(alias = "market_cap", skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<String>,
    /// Pre-formatted display string, e.g. `191.32`.
    #[serde(alias = "pe", alias = "pe_ratio", skip_serializing_if = "Option::is_none")]
    pub pe_ratio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thesis: Option<String>,
}

impl DealMemo {
    /// A memo with every field present.
    #[must_use]
    pub fn new(
        ticker: impl Into<String>,
        market_cap: impl Into<String>,
        pe_ratio: impl Into<String>,
        thesis: impl Into<String>,
    ) -> Self {
        Self {
            ticker: Some(ticker.into()),
            market_cap: Some(market_cap.into()),
            pe_ratio: Some(pe_ratio.into()),
            thesis: Some(thesis.into()),
        }
    }

    /// Ticker for the metrics grid; the card's ticker when the key is absent.
    #[must_use]
    pub fn display_ticker<'a>(&'a self, card_ticker: &'a str) -> &'a str {
        self.ticker.as_deref().unwrap_or(card_ticker)
    }

    /// Market cap as supplied, or [`MISSING_METRIC`] when absent.
    #[must_use]
    pub fn display_market_cap(&self) -> &str {
        self.market_cap.as_deref().unwrap_or(MISSING_METRIC)
    }

    /// P/E ratio as supplied, or [`MISSING_METRIC`] when absent.
    #[must_use]
    pub fn display_pe_ratio(&self) -> &str {
        self.pe_ratio.as_deref().unwrap_or(MISSING_METRIC)
    }

    /// Thesis text; an absent thesis shows as an empty box.
    #[must_use]
    pub fn display_thesis(&self) -> &str {
        self.thesis.as_deref().unwrap_or_default()
    }
}

/// Everything a thesis card needs.
///
/// `ticker` is independent of `deal_memo.ticker`; the two are never
/// checked against each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThesisCardInput {
    pub ticker: String,
    pub status: StatusValue,
    pub narrative: String,
    #[serde(alias = "deal_memo")]
    pub deal_memo: DealMemo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Status;

    fn memo() -> DealMemo {
        DealMemo::new("NVDA", "4.65T", "191.32", "T1")
    }

    #[test]
    fn should_display_values_verbatim() {
        let memo = memo();
        assert_eq!(memo.display_ticker("AAPL"), "NVDA");
        assert_eq!(memo.display_market_cap(), "4.65T");
        assert_eq!(memo.display_pe_ratio(), "191.32");
        assert_eq!(memo.display_thesis(), "T1");
    }

    #[test]
    fn should_keep_empty_strings_empty() {
        let memo = DealMemo::new("", "", "", "");
        assert_eq!(memo.display_ticker("AMD"), "");
        assert_eq!(memo.display_market_cap(), "");
        assert_eq!(memo.display_pe_ratio(), "");
        assert_eq!(memo.display_thesis(), "");
    }

    #[test]
    fn should_fall_back_when_keys_are_absent() {
        let memo = DealMemo::default();
        assert_eq!(memo.display_ticker("AMD"), "AMD");
        assert_eq!(memo.display_market_cap(), MISSING_METRIC);
        assert_eq!(memo.display_pe_ratio(), MISSING_METRIC);
        assert_eq!(memo.display_thesis(), "");
    }

    #[test]
    fn should_deserialize_camel_case_input() {
        let json = r#"{
            "ticker": "NVDA",
            "status": "PASS",
            "narrative": "N1",
            "dealMemo": {
                "ticker": "NVDA",
                "marketCap": "4.65T",
                "peRatio": "191.32",
                "thesis": "T1"
            }
        }"#;
        let input: ThesisCardInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.status.known(), Some(Status::Pass));
        assert_eq!(input.narrative, "N1");
        assert_eq!(input.deal_memo, memo());
    }

    #[test]
    fn should_accept_pe_alias() {
        let json = r#"{"ticker": "NVDA", "market_cap": "4.65T", "pe": "191.32", "thesis": "T1"}"#;
        let memo_in: DealMemo = serde_json::from_str(json).unwrap();
        assert_eq!(memo_in, memo());
    }

    #[test]
    fn should_distinguish_empty_from_missing_keys() {
        let memo_in: DealMemo = serde_json::from_str(r#"{"marketCap": ""}"#).unwrap();
        assert_eq!(memo_in.market_cap.as_deref(), Some(""));
        assert_eq!(memo_in.pe_ratio, None);
    }

    #[test]
    fn should_default_missing_fields() {
        let input: ThesisCardInput = serde_json::from_str(r#"{"ticker": "TSLA"}"#).unwrap();
        assert_eq!(input.ticker, "TSLA");
        assert_eq!(input.status.as_str(), "");
        assert!(input.narrative.is_empty());
        assert_eq!(input.deal_memo, DealMemo::default());
    }

    #[test]
    fn should_keep_unrecognized_status_text() {
        let input: ThesisCardInput = serde_json::from_str(r#"{"status": "UNKNOWN"}"#).unwrap();
        assert_eq!(input.status, StatusValue::Unrecognized("UNKNOWN".to_string()));
    }

    #[test]
    fn should_serialize_with_camel_case_names() {
        let input = ThesisCardInput {
            ticker: "NVDA".to_string(),
            status: Status::Hold.into(),
            narrative: "N1".to_string(),
            deal_memo: memo(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["status"], "HOLD");
        assert_eq!(json["dealMemo"]["marketCap"], "4.65T");
        assert_eq!(json["dealMemo"]["peRatio"], "191.32");
    }
}
