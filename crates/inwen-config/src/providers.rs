use std::env;

use inwen_types::Provider;
use serde::{Deserialize, Serialize};

fn default_primary_url() -> String {
    "http://localhost:8080/webhook/gemini".to_string()
}

fn default_secondary_url() -> String {
    "http://localhost:8080/webhook/openrouter".to_string()
}

fn default_send_language() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderEndpoint {
    pub url: String,
    /// Include the user's locale as `language` in the payload
    #[serde(default = "default_send_language")]
    pub send_language: bool,
}

impl ProviderEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            send_language: default_send_language(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub primary: ProviderEndpoint,
    pub secondary: ProviderEndpoint,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            primary: ProviderEndpoint::new(default_primary_url()),
            secondary: ProviderEndpoint::new(default_secondary_url()),
        }
    }
}

impl ProvidersConfig {
    pub fn new() -> Self {
        let primary = env::var("INWEN_PRIMARY_URL").unwrap_or_else(|_| default_primary_url());
        let secondary =
            env::var("INWEN_SECONDARY_URL").unwrap_or_else(|_| default_secondary_url());

        Self {
            primary: ProviderEndpoint::new(primary),
            secondary: ProviderEndpoint::new(secondary),
        }
    }

    pub fn endpoint(&self, provider: Provider) -> &ProviderEndpoint {
        match provider {
            Provider::Primary => &self.primary,
            Provider::Secondary => &self.secondary,
        }
    }
}
