use std::sync::Arc;
use std::time::Duration;

use inwen_config::ConfigError;
use inwen_config::SettingsStore;
use inwen_config::dispatch::DispatchConfig;
use inwen_config::providers::ProvidersConfig;
use inwen_types::{Explanation, LookupRequest, Provider};
use reqwest::Url;

use crate::Dispatch;
use crate::client::{WebhookClient, WebhookPayload};
use crate::error::LookupError;
use crate::normalize;

/// Endpoint chosen for one dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub provider: Provider,
    pub endpoint: Url,
    pub send_language: bool,
}

#[derive(Debug, Clone)]
struct Endpoint {
    url: Url,
    send_language: bool,
}

impl Endpoint {
    fn parse(providers: &ProvidersConfig, provider: Provider) -> Result<Self, ConfigError> {
        let endpoint = providers.endpoint(provider);
        let url = Url::parse(&endpoint.url).map_err(|_| ConfigError::InvalidEndpoint {
            provider: provider.to_string(),
            url: endpoint.url.clone(),
        })?;
        Ok(Self {
            url,
            send_language: endpoint.send_language,
        })
    }
}

/// Background half of a lookup: picks the provider from settings, calls the
/// webhook and normalizes its answer.
pub struct LookupDispatcher {
    client: WebhookClient,
    settings: Arc<dyn SettingsStore>,
    primary: Endpoint,
    secondary: Endpoint,
    timeout: Duration,
}

impl LookupDispatcher {
    pub fn new(
        providers: &ProvidersConfig,
        dispatch: &DispatchConfig,
        settings: Arc<dyn SettingsStore>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            client: WebhookClient::new(),
            settings,
            primary: Endpoint::parse(providers, Provider::Primary)?,
            secondary: Endpoint::parse(providers, Provider::Secondary)?,
            timeout: dispatch.timeout(),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Snapshot the provider selection for one request
    pub fn resolve(&self) -> ProviderConfig {
        let provider = self.settings.get().provider();
        let endpoint = match provider {
            Provider::Primary => &self.primary,
            Provider::Secondary => &self.secondary,
        };
        ProviderConfig {
            provider,
            endpoint: endpoint.url.clone(),
            send_language: endpoint.send_language,
        }
    }
}

#[async_trait::async_trait]
impl Dispatch for LookupDispatcher {
    async fn dispatch(&self, request: LookupRequest) -> Result<Explanation, LookupError> {
        let provider = self.resolve();
        tracing::info!(
            "Using provider: {} URL: {}",
            provider.provider,
            provider.endpoint
        );

        let language = provider.send_language.then(|| request.locale.clone());
        let payload = WebhookPayload::now(request.term, request.context, request.source_url, language);

        let body = self
            .client
            .post(&provider.endpoint, &payload, self.timeout)
            .await
            .inspect_err(|e| tracing::error!("Webhook error: {}", e))?;

        let explanation = normalize::explanation_from_body(&body)?;
        tracing::debug!("Parsed explanation for '{}'", explanation.word);
        Ok(explanation)
    }
}
