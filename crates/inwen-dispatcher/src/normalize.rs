//! Tolerant decoding of the webhook's `explanation` field.
//!
//! The field is model output: sometimes bare JSON, sometimes JSON wrapped in
//! a markdown code fence with or without a language tag.

use inwen_types::Explanation;
use serde::Deserialize;
use serde_json::Value;

use crate::error::LookupError;

/// Characters of raw text kept in a parse error
pub const SNIPPET_LEN: usize = 100;

const FENCE: &str = "```";

/// Strip an enclosing code fence, if any. Unfenced text is only trimmed.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix(FENCE) else {
        return trimmed;
    };

    // Language tag: "json", "JSON", "jsonc", ...
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    let rest = rest.trim_end();
    let rest = rest.strip_suffix(FENCE).unwrap_or(rest);
    rest.trim()
}

/// Parse an `explanation` string into an `Explanation`
pub fn parse_explanation(raw: &str) -> Result<Explanation, LookupError> {
    serde_json::from_str(strip_code_fence(raw)).map_err(|e| {
        tracing::warn!("Failed to parse explanation JSON ({} chars): {}", raw.len(), e);
        LookupError::Parse {
            reason: e.to_string(),
            snippet: snippet(raw),
        }
    })
}

/// Pull the explanation out of a webhook response body.
///
/// An object-valued `explanation` is accepted as is.
pub fn explanation_from_body(body: &Value) -> Result<Explanation, LookupError> {
    match body.get("explanation") {
        Some(Value::String(raw)) if !raw.trim().is_empty() => parse_explanation(raw),
        Some(value @ Value::Object(_)) => {
            Explanation::deserialize(value).map_err(|e| LookupError::Parse {
                reason: e.to_string(),
                snippet: snippet(&value.to_string()),
            })
        }
        Some(Value::Null) | Some(Value::String(_)) | None => Err(LookupError::MalformedResponse(
            "No explanation field in response".to_string(),
        )),
        Some(_) => Err(LookupError::MalformedResponse(
            "Explanation field is not a string".to_string(),
        )),
    }
}

fn snippet(raw: &str) -> String {
    raw.chars().take(SNIPPET_LEN).collect()
}
