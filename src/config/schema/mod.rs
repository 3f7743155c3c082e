mod core;
mod gateway;
mod provider;
mod storage;

pub use self::core::Config;
pub use gateway::GatewayConfig;
pub use provider::ProviderConfig;
pub use storage::{ShareConfig, StorageConfig};
