/// Failure of a single lookup. Display strings are what the overlay shows,
/// so none of them may embed an unbounded payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Connection failure, timeout or non-2xx status
    #[error("{message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },

    /// 2xx response without a usable `explanation` field
    #[error("{0}")]
    MalformedResponse(String),

    /// `explanation` is not JSON even after fence stripping
    #[error("Failed to parse response: {reason}. Raw: {snippet}...")]
    Parse { reason: String, snippet: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupErrorKind {
    Transport,
    MalformedResponse,
    Parse,
}

impl LookupError {
    pub fn http_status(status: u16) -> Self {
        LookupError::Transport {
            status: Some(status),
            message: format!("HTTP error! status: {status}"),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        LookupError::Transport {
            status: None,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> LookupErrorKind {
        match self {
            LookupError::Transport { .. } => LookupErrorKind::Transport,
            LookupError::MalformedResponse(_) => LookupErrorKind::MalformedResponse,
            LookupError::Parse { .. } => LookupErrorKind::Parse,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            LookupError::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return LookupError::http_status(status.as_u16());
        }
        if e.is_timeout() {
            return LookupError::network("Request to webhook timed out");
        }
        // Endpoint URLs stay out of user-facing messages
        LookupError::network(format!("Network error: {}", e.without_url()))
    }
}
