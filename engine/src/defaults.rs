/// Pause before the computer seat moves, matching the feel of the desktop
/// game this engine was built for.
pub const DEFAULT_BOT_DELAY_MS: u64 = 300;

pub const DEFAULT_REPLAY_LOCATION: &str = "tictactoereplays";

pub const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";
