use serde::{Deserialize, Serialize};

use super::manager::ConfigManager;
use super::provider::FileContentConfigProvider;
use super::validate::Validate;
use crate::defaults::{CONFIG_FILE_NAME, DEFAULT_BOT_DELAY_MS, DEFAULT_REPLAY_LOCATION};
use crate::game::{FirstPlayerMode, Mark};
use crate::session::SessionSettings;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, GameConfig> {
    ConfigManager::from_yaml_file(&get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameSettings {
    pub starting_mark: Mark,
    pub first_player_mode: FirstPlayerMode,
    pub bot_delay_ms: u64,
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.starting_mark == Mark::Empty {
            return Err("starting_mark must be X or O".to_string());
        }
        if self.bot_delay_ms > 10_000 {
            return Err("bot_delay_ms must not exceed 10000".to_string());
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            starting_mark: Mark::X,
            first_player_mode: FirstPlayerMode::Ordered,
            bot_delay_ms: DEFAULT_BOT_DELAY_MS,
        }
    }
}

impl From<&GameSettings> for SessionSettings {
    fn from(settings: &GameSettings) -> Self {
        Self {
            starting_mark: settings.starting_mark,
            first_player_mode: settings.first_player_mode,
            bot_delay_ms: settings.bot_delay_ms,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ReplayConfig {
    pub save: bool,
    pub location: String,
}

impl Validate for ReplayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.save && self.location.trim().is_empty() {
            return Err("Replay location must not be empty when saving is enabled".to_string());
        }
        Ok(())
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            save: true,
            location: DEFAULT_REPLAY_LOCATION.to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct GameConfig {
    pub game: GameSettings,
    pub replays: ReplayConfig,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.replays.validate()?;
        Ok(())
    }
}
