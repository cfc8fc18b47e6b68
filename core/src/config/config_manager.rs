use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use crate::storage::{FileKeyValueStore, KeyValueStore, Serializer, YamlSerializer};
use super::Validate;

pub const CONFIG_KEY: &str = "gomoku_config";

/// Loads a config once, validates it and caches it; falls back to `Default` when none is stored.
pub struct ConfigManager<TStore, TConfig, TSerializer = YamlSerializer>
where
    TStore: KeyValueStore,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: Serializer<TConfig>,
{
    serializer: TSerializer,
    store: TStore,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileKeyValueStore, TConfig, YamlSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    /// Reads `gomoku_config.yaml` from `directory`.
    pub fn from_yaml_dir(directory: &str) -> Self {
        Self::new(FileKeyValueStore::new(directory), YamlSerializer::new())
    }
}

impl<TStore, TConfig, TSerializer> ConfigManager<TStore, TConfig, TSerializer>
where
    TStore: KeyValueStore,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: Serializer<TConfig>,
{
    pub fn new(store: TStore, serializer: TSerializer) -> Self {
        Self {
            serializer,
            store,
            config: Arc::new(Mutex::new(None)),
        }
    }

    pub fn has_stored_config(&self) -> Result<bool, String> {
        Ok(self.store.get(CONFIG_KEY)?.is_some())
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.config.lock().unwrap();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        if let Some(content) = self.store.get(CONFIG_KEY)? {
            let config = self.serializer.deserialize(&content)?;

            config
                .validate()
                .map_err(|e| format!("Config validation error: {}", e))?;

            *current = Some(config.clone());
            return Ok(config);
        }

        Ok(TConfig::default())
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = self.serializer.serialize(config)?;
        self.store.set(CONFIG_KEY, &content)?;

        let mut current = self.config.lock().unwrap();
        *current = Some(config.clone());
        Ok(())
    }
}
