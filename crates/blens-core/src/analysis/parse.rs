//! Parsing and validation of raw model output into a verdict.

use serde::Deserialize;

use super::model::{Rating, Verdict};
use crate::error::{LensError, LensResult};

/// Unvalidated shape of the model's JSON answer.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVerdict {
    #[serde(default)]
    rating: String,
    #[serde(default)]
    explanation: String,
    #[serde(default)]
    verse_reference: String,
    #[serde(default)]
    verse_text: String,
}

/// Extract the JSON object substring from raw model output.
///
/// The model is asked for bare JSON but may wrap the answer in prose or
/// markdown code fences, so this takes the span from the first `{` to the
/// last `}` of the whole text. Replacing the heuristic with a stricter
/// schema-constrained decode only touches this function.
pub fn extract_json(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&raw[start..=end])
}

/// Parse raw model text into a validated verdict.
///
/// Rejects the whole result on any failure; a partially valid verdict is
/// never returned. Field checks mirror the request contract: the rating
/// must be one of the three exact literals and every text field must be
/// non-empty.
pub fn parse_verdict(raw: &str) -> LensResult<Verdict> {
    let json = extract_json(raw)
        .ok_or_else(|| LensError::malformed("no JSON object in model output"))?;

    let parsed: RawVerdict = serde_json::from_str(json)
        .map_err(|e| LensError::malformed(format!("invalid JSON: {e}")))?;

    let rating = Rating::from_wire(&parsed.rating)
        .ok_or_else(|| LensError::InvalidRating(parsed.rating.clone()))?;

    if parsed.explanation.is_empty() {
        return Err(LensError::IncompleteResponse("explanation"));
    }
    if parsed.verse_reference.is_empty() {
        return Err(LensError::IncompleteResponse("verseReference"));
    }
    if parsed.verse_text.is_empty() {
        return Err(LensError::IncompleteResponse("verseText"));
    }

    Ok(Verdict {
        rating,
        explanation: parsed.explanation,
        verse_reference: parsed.verse_reference,
        verse_text: parsed.verse_text,
    })
}
