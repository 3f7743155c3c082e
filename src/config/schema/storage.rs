use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Where the form slot lives (default: `~/.powwow/state`)
    #[serde(default)]
    pub state_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Page the share link points at
    #[serde(default = "default_share_base_url")]
    pub base_url: String,
}

fn default_share_base_url() -> String {
    "http://127.0.0.1:3000/".into()
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: default_share_base_url(),
        }
    }
}
