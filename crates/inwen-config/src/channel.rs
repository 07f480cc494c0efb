use serde::{Deserialize, Serialize};

fn default_request_capacity() -> usize {
    16
}

fn default_reply_capacity() -> usize {
    16
}

/// Capacities of the page <-> background channels
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    #[serde(default = "default_request_capacity")]
    pub request_capacity: usize,
    #[serde(default = "default_reply_capacity")]
    pub reply_capacity: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            request_capacity: default_request_capacity(),
            reply_capacity: default_reply_capacity(),
        }
    }
}
