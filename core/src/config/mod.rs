mod config_manager;
mod engine_config;
mod validate;

pub use config_manager::{CONFIG_KEY, ConfigManager};
pub use engine_config::EngineConfig;
pub use validate::Validate;
