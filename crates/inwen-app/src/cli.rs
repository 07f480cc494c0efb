use std::path::PathBuf;

use clap::Parser;
use inwen_config::Config;
use inwen_types::Provider;

/// Explain double-clicked words with an LLM webhook.
///
/// Reads gestures from stdin, one per line:
///   `word | surrounding paragraph`   double-click on `word`
///   `:esc` `:click` `:close`         dismiss the panel
///   `:enable` `:disable`             toggle lookups
///   `:provider primary|secondary`    switch webhook
///   `:quit`                          exit
#[derive(Debug, Parser)]
#[command(name = "inwen", version, verbatim_doc_comment)]
pub struct Cli {
    /// JSON config file replacing the environment defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON settings file holding `enabled` and `provider`
    #[arg(long)]
    pub settings: Option<String>,

    /// Language tag sent to the webhook, e.g. zh-TW
    #[arg(long)]
    pub locale: Option<String>,

    /// Page address reported as the lookup source
    #[arg(long, default_value = "about:blank")]
    pub source_url: String,

    /// Webhook provider to use for this session
    #[arg(long)]
    pub provider: Option<Provider>,

    /// Seconds before a pending lookup is reported as failed
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl Cli {
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::new(),
        };

        if let Some(settings) = &self.settings {
            config.settings_path = Some(settings.clone());
        }
        if let Some(locale) = &self.locale {
            config.locale = locale.clone();
        }
        if let Some(timeout) = self.timeout.filter(|t| *t > 0) {
            config.dispatch.timeout_seconds = timeout;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "inwen",
            "--locale",
            "ja-JP",
            "--timeout",
            "5",
            "--provider",
            "openrouter",
        ]);
        let config = cli.load_config().unwrap();
        assert_eq!(config.locale, "ja-JP");
        assert_eq!(config.dispatch.timeout_seconds, 5);
        assert_eq!(cli.provider, Some(Provider::Secondary));
        assert_eq!(cli.source_url, "about:blank");
    }
}
