use super::Config;
use std::path::PathBuf;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("OPENAI_API_KEY").or_else(|_| std::env::var("POWWOW_API_KEY"))
            && !key.is_empty()
        {
            self.provider.api_key = Some(key);
        }

        if let Ok(base_url) = std::env::var("POWWOW_BASE_URL")
            && !base_url.is_empty()
        {
            self.provider.base_url = base_url;
        }

        if let Ok(port_str) =
            std::env::var("POWWOW_GATEWAY_PORT").or_else(|_| std::env::var("PORT"))
            && let Ok(port) = port_str.parse::<u16>()
        {
            self.gateway.port = port;
        }

        if let Ok(host) =
            std::env::var("POWWOW_GATEWAY_HOST").or_else(|_| std::env::var("HOST"))
            && !host.is_empty()
        {
            self.gateway.host = host;
        }

        if let Ok(dir) = std::env::var("POWWOW_STATE_DIR")
            && !dir.is_empty()
        {
            self.storage.state_dir = Some(PathBuf::from(dir));
        }

        if let Ok(share_url) = std::env::var("POWWOW_SHARE_URL")
            && !share_url.is_empty()
        {
            self.share.base_url = share_url;
        }
    }
}
