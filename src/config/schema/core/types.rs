use super::super::{GatewayConfig, ProviderConfig, ShareConfig, StorageConfig};
use crate::error::ConfigError;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// `~/.powwow` - computed from home, not serialized
    #[serde(skip)]
    pub home_dir: PathBuf,
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub share: ShareConfig,
}

impl Default for Config {
    fn default() -> Self {
        let home =
            UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());
        let powwow_dir = home.join(".powwow");

        Self {
            config_path: powwow_dir.join("config.toml"),
            home_dir: powwow_dir,
            gateway: GatewayConfig::default(),
            provider: ProviderConfig::default(),
            storage: StorageConfig::default(),
            share: ShareConfig::default(),
        }
    }
}

impl Config {
    /// Directory holding the persisted form slot.
    pub fn state_dir(&self) -> PathBuf {
        self.storage
            .state_dir
            .clone()
            .unwrap_or_else(|| self.home_dir.join("state"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.provider.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "provider.timeout_secs must be greater than 0".into(),
            ));
        }
        if self.gateway.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "gateway.request_timeout_secs must be greater than 0".into(),
            ));
        }
        url::Url::parse(&self.provider.base_url).map_err(|e| {
            ConfigError::Validation(format!(
                "provider.base_url '{}' is not a URL: {e}",
                self.provider.base_url
            ))
        })?;
        url::Url::parse(&self.share.base_url).map_err(|e| {
            ConfigError::Validation(format!(
                "share.base_url '{}' is not a URL: {e}",
                self.share.base_url
            ))
        })?;
        Ok(())
    }
}
