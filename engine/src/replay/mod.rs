pub mod file_io;
pub mod player;
pub mod recorder;

pub use file_io::{
    ReplayError, generate_replay_filename, load_replay, load_replay_from_str, save_replay,
    save_replay_to_string,
};
pub use player::ReplayPlayer;
pub use recorder::{
    RecordedMove, Replay, ReplayMetadata, ReplayPlayerEntry, ReplayRecorder, ReplaySettings,
};

pub const REPLAY_FILE_EXTENSION: &str = "tictactoereplay";
pub const REPLAY_VERSION: u32 = 1;
