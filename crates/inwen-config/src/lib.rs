use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::channel::ChannelConfig;
use self::dispatch::DispatchConfig;
use self::overlay::OverlayConfig;
use self::providers::ProvidersConfig;

pub mod channel;
pub mod dispatch;
pub mod error;
pub mod overlay;
pub mod providers;
pub mod settings;

pub use error::ConfigError;
pub use settings::{FileSettings, MemorySettings, Settings, SettingsStore};

fn default_locale() -> String {
    "en-US".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub providers: ProvidersConfig,
    pub dispatch: DispatchConfig,
    pub overlay: OverlayConfig,
    pub channel: ChannelConfig,

    /// Language tag sent with every lookup
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Settings file (enabled flag, provider). In-memory settings when unset
    pub settings_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            providers: ProvidersConfig::default(),
            dispatch: DispatchConfig::default(),
            overlay: OverlayConfig::default(),
            channel: ChannelConfig::default(),
            locale: default_locale(),
            settings_path: None,
        }
    }
}

impl Config {
    /// Defaults overridden by environment variables
    pub fn new() -> Self {
        let locale = env::var("INWEN_LOCALE")
            .ok()
            .and_then(|v| locale_from_env(&v))
            .or_else(|| env::var("LANG").ok().and_then(|v| locale_from_env(&v)))
            .unwrap_or_else(default_locale);

        let settings_path = env::var("INWEN_SETTINGS").ok().filter(|v| !v.is_empty());

        Config {
            providers: ProvidersConfig::new(),
            dispatch: DispatchConfig::new(),
            overlay: OverlayConfig::default(),
            channel: ChannelConfig::default(),
            locale,
            settings_path,
        }
    }

    /// Load a full config tree from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut config: Config =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                ConfigError::Parse {
                    path: path.display().to_string(),
                    source,
                }
            })?;

        // Zero would fail every request immediately
        if config.dispatch.timeout_seconds == 0 {
            tracing::warn!(
                "Ignoring timeout_seconds = 0 in {}, using the default",
                path.display()
            );
            config.dispatch.timeout_seconds = DispatchConfig::default().timeout_seconds;
        }
        Ok(config)
    }
}

/// Turn `en_US.UTF-8` style values into `en-US`. `C` and `POSIX` carry no
/// language and yield `None`.
pub fn locale_from_env(value: &str) -> Option<String> {
    let base = value.split(['.', '@']).next()?.trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_locale_from_env() {
        assert_eq!(locale_from_env("en_US.UTF-8").as_deref(), Some("en-US"));
        assert_eq!(locale_from_env("zh_TW"), Some("zh-TW".to_string()));
        assert_eq!(locale_from_env("de-DE"), Some("de-DE".to_string()));
        assert_eq!(locale_from_env("C.UTF-8"), None);
        assert_eq!(locale_from_env("POSIX"), None);
        assert_eq!(locale_from_env(""), None);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"locale":"ja-JP","dispatch":{{"timeout_seconds":5}}}}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.locale, "ja-JP");
        assert_eq!(config.dispatch.timeout_seconds, 5);
        assert_eq!(config.overlay.width, 320);
        assert!(config.providers.primary.url.ends_with("/webhook/gemini"));
    }

    #[test]
    fn test_zero_timeout_in_file_falls_back_to_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"dispatch":{{"timeout_seconds":0}}}}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.dispatch.timeout_seconds, 20);
        assert!(!config.dispatch.timeout().is_zero());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Config::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
