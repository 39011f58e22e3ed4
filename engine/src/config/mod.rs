mod game_config;
mod manager;
mod provider;
mod validate;

pub use game_config::{GameConfig, GameSettings, ReplayConfig, get_config_manager};
pub use manager::ConfigManager;
pub use provider::{ConfigContentProvider, FileContentConfigProvider};
pub use validate::Validate;
