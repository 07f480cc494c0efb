use std::sync::Arc;

use inwen_config::{Config, FileSettings, MemorySettings, SettingsStore};
use inwen_types::Provider;
use tokio::sync::RwLock;

/// Settings backend plus the writes the toggle UI is allowed to make
#[derive(Clone)]
pub enum SettingsHandle {
    Memory(Arc<MemorySettings>),
    File(Arc<FileSettings>),
}

impl SettingsHandle {
    pub fn store(&self) -> Arc<dyn SettingsStore> {
        match self {
            SettingsHandle::Memory(store) => store.clone(),
            SettingsHandle::File(store) => store.clone(),
        }
    }

    pub fn set_enabled(&self, enabled: bool) -> anyhow::Result<()> {
        match self {
            SettingsHandle::Memory(store) => store.set_enabled(enabled),
            SettingsHandle::File(store) => {
                store.update(|s| s.enabled = Some(enabled))?;
                tracing::info!("Extension enabled state saved: {}", enabled);
            }
        }
        Ok(())
    }

    pub fn set_provider(&self, provider: Provider) -> anyhow::Result<()> {
        match self {
            SettingsHandle::Memory(store) => store.set_provider(provider),
            SettingsHandle::File(store) => {
                store.update(|s| s.provider = Some(provider))?;
                tracing::info!("Provider saved: {}", provider);
            }
        }
        Ok(())
    }
}

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub settings: SettingsHandle,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let settings = match &config.settings_path {
            Some(path) => {
                tracing::info!("Reading settings from {}", path);
                SettingsHandle::File(Arc::new(FileSettings::new(path)))
            }
            None => SettingsHandle::Memory(Arc::new(MemorySettings::default())),
        };

        Self {
            config: Arc::new(RwLock::new(config)),
            settings,
        }
    }
}
