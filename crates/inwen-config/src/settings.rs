//! User settings owned by an outside writer (the toggle UI). Lookups only
//! ever read them.

use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use inwen_types::Provider;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Raw stored settings. Absent keys fall back to `enabled = true` and the
/// primary provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
}

impl Settings {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn provider(&self) -> Provider {
        self.provider.unwrap_or_default()
    }
}

pub trait SettingsStore: Send + Sync {
    /// Current snapshot
    fn get(&self) -> Settings;
}

/// Settings kept in process memory
#[derive(Debug, Default)]
pub struct MemorySettings {
    inner: RwLock<Settings>,
}

impl MemorySettings {
    pub fn new(settings: Settings) -> Self {
        Self {
            inner: RwLock::new(settings),
        }
    }

    pub fn set_enabled(&self, enabled: bool) {
        if let Ok(mut settings) = self.inner.write() {
            settings.enabled = Some(enabled);
        }
        tracing::info!("Extension enabled state saved: {}", enabled);
    }

    pub fn set_provider(&self, provider: Provider) {
        if let Ok(mut settings) = self.inner.write() {
            settings.provider = Some(provider);
        }
        tracing::info!("Provider saved: {}", provider);
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self) -> Settings {
        self.inner.read().map(|s| *s).unwrap_or_default()
    }
}

/// Settings stored as a JSON file, re-read on every `get` so an outside
/// writer's changes apply to the next lookup.
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Result<Settings, ConfigError> {
        let path = self.path.display().to_string();
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Settings::default()),
            Err(source) => return Err(ConfigError::Io { path, source }),
        };
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Read, modify and write back
    pub fn update(&self, f: impl FnOnce(&mut Settings)) -> Result<Settings, ConfigError> {
        let mut settings = self.read()?;
        f(&mut settings);
        self.save(&settings)?;
        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
        let path = self.path.display().to_string();
        let json = serde_json::to_string_pretty(settings).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|source| ConfigError::Io { path, source })
    }
}

impl SettingsStore for FileSettings {
    fn get(&self) -> Settings {
        self.read().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default settings: {}", e);
            Settings::default()
        })
    }
}
