//! Analysis verdict domain model.
//!
//! Represents the structured verdict produced by one model invocation:
//! a tri-state rating, a one-sentence rationale, and a supporting
//! scripture citation.

use serde::{Deserialize, Serialize};

/// Tri-state moral-alignment rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Green,
    Yellow,
    Red,
}

impl Rating {
    /// Parse the exact wire literal. Case sensitive: anything other than
    /// `green`, `yellow`, or `red` is rejected, not coerced.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "green" => Some(Self::Green),
            "yellow" => Some(Self::Yellow),
            "red" => Some(Self::Red),
            _ => None,
        }
    }

    /// Convert to the wire literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }

    /// Display label shown with the verdict.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Green => "Aligns with Biblical Values",
            Self::Yellow => "Needs Discernment",
            Self::Red => "Conflicts with Biblical Principles",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The validated verdict returned by one analysis call.
///
/// Only ever constructed after all four fields pass validation; a verdict
/// with an unknown rating or an empty text field is rejected as a whole.
/// Serde names match the model's JSON contract (`verseReference`,
/// `verseText`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub rating: Rating,
    pub explanation: String,
    pub verse_reference: String,
    pub verse_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_wire_literals() {
        assert_eq!(Rating::from_wire("green"), Some(Rating::Green));
        assert_eq!(Rating::from_wire("yellow"), Some(Rating::Yellow));
        assert_eq!(Rating::from_wire("red"), Some(Rating::Red));
        assert_eq!(Rating::from_wire("blue"), None);
        assert_eq!(Rating::from_wire("GREEN"), None);
        assert_eq!(Rating::from_wire(""), None);
    }

    #[test]
    fn test_rating_round_trip() {
        for rating in [Rating::Green, Rating::Yellow, Rating::Red] {
            assert_eq!(Rating::from_wire(rating.as_str()), Some(rating));
        }
    }

    #[test]
    fn test_verdict_serde_field_names() {
        let verdict = Verdict {
            rating: Rating::Green,
            explanation: "Depicts generosity and compassion.".to_string(),
            verse_reference: "Luke 6:38".to_string(),
            verse_text: "Give, and it will be given to you...".to_string(),
        };

        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["rating"], "green");
        assert_eq!(json["verseReference"], "Luke 6:38");
        assert_eq!(json["verseText"], "Give, and it will be given to you...");
    }
}
