//! Envelopes exchanged between the page context and the background context.
//!
//! Every `PageMessage` gets exactly one `LookupResponse` carrying the same
//! sequence number.

use serde::{Deserialize, Serialize};

use crate::types::{Explanation, LookupRequest};

/// Monotonic per-page lookup counter
pub type Sequence = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PageMessage {
    #[serde(rename = "LOOKUP_REQUEST")]
    LookupRequest {
        #[serde(flatten)]
        request: LookupRequest,
        sequence: Sequence,
    },
}

impl PageMessage {
    pub fn lookup(request: LookupRequest, sequence: Sequence) -> Self {
        PageMessage::LookupRequest { request, sequence }
    }

    pub fn sequence(&self) -> Sequence {
        match self {
            PageMessage::LookupRequest { sequence, .. } => *sequence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResponse {
    pub sequence: Sequence,
    #[serde(flatten)]
    pub reply: LookupReply,
}

/// Result of one lookup as seen by the page: an explanation or a bounded
/// error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "WireReply", try_from = "WireReply")]
pub enum LookupReply {
    Ok(Explanation),
    Err(String),
}

impl<E: ToString> From<Result<Explanation, E>> for LookupReply {
    fn from(result: Result<Explanation, E>) -> Self {
        match result {
            Ok(explanation) => LookupReply::Ok(explanation),
            Err(e) => LookupReply::Err(e.to_string()),
        }
    }
}

/// `{ ok: true, data }` / `{ ok: false, error }`
#[derive(Serialize, Deserialize)]
struct WireReply {
    ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Explanation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<LookupReply> for WireReply {
    fn from(reply: LookupReply) -> Self {
        match reply {
            LookupReply::Ok(data) => WireReply {
                ok: true,
                data: Some(data),
                error: None,
            },
            LookupReply::Err(error) => WireReply {
                ok: false,
                data: None,
                error: Some(error),
            },
        }
    }
}

impl TryFrom<WireReply> for LookupReply {
    type Error = String;

    fn try_from(wire: WireReply) -> Result<Self, Self::Error> {
        match (wire.ok, wire.data) {
            (true, Some(data)) => Ok(LookupReply::Ok(data)),
            (true, None) => Err("reply marked ok without data".to_string()),
            (false, _) => Ok(LookupReply::Err(
                wire.error.unwrap_or_else(|| "Unknown error".to_string()),
            )),
        }
    }
}
