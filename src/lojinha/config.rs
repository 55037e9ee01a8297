use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CURRENCY: &str = "R$";

/// Presentation settings, stored as config.json next to the collections.
/// Only the CLI layer reads this; the core never formats currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LojinhaConfig {
    /// Currency symbol prepended to every rendered amount.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for LojinhaConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl LojinhaConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config = LojinhaConfig::load(dir.path()).unwrap();
        assert_eq!(config, LojinhaConfig::default());
        assert_eq!(config.currency, "R$");
    }

    #[test]
    fn save_and_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let config = LojinhaConfig {
            currency: "€".to_string(),
        };
        config.save(dir.path()).unwrap();

        let loaded = LojinhaConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.currency, "€");
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.json"),
            r#"{"currency":"US$","theme":"dark"}"#,
        )
        .unwrap();

        let loaded = LojinhaConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.currency, "US$");
    }
}
