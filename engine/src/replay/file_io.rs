use std::path::Path;

use super::recorder::Replay;
use super::{REPLAY_FILE_EXTENSION, REPLAY_VERSION};

#[derive(Debug)]
pub enum ReplayError {
    Io(std::io::Error),
    Parse(serde_yaml_ng::Error),
    UnsupportedVersion { found: u32, expected: u32 },
    EmptyFile,
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplayError::Io(e) => write!(f, "IO error: {}", e),
            ReplayError::Parse(e) => write!(f, "Parse error: {}", e),
            ReplayError::UnsupportedVersion { found, expected } => {
                write!(
                    f,
                    "Unsupported replay version: found {}, expected {}",
                    found, expected
                )
            }
            ReplayError::EmptyFile => write!(f, "Empty replay file"),
        }
    }
}

impl std::error::Error for ReplayError {}

impl From<std::io::Error> for ReplayError {
    fn from(e: std::io::Error) -> Self {
        ReplayError::Io(e)
    }
}

impl From<serde_yaml_ng::Error> for ReplayError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        ReplayError::Parse(e)
    }
}

pub fn save_replay(path: &Path, replay: &Replay) -> Result<(), ReplayError> {
    let encoded = save_replay_to_string(replay)?;
    std::fs::write(path, encoded)?;
    Ok(())
}

pub fn save_replay_to_string(replay: &Replay) -> Result<String, ReplayError> {
    Ok(serde_yaml_ng::to_string(replay)?)
}

pub fn load_replay(path: &Path) -> Result<Replay, ReplayError> {
    let content = std::fs::read_to_string(path)?;
    load_replay_from_str(&content)
}

pub fn load_replay_from_str(content: &str) -> Result<Replay, ReplayError> {
    if content.trim().is_empty() {
        return Err(ReplayError::EmptyFile);
    }

    let replay: Replay = serde_yaml_ng::from_str(content)?;
    if replay.version != REPLAY_VERSION {
        return Err(ReplayError::UnsupportedVersion {
            found: replay.version,
            expected: REPLAY_VERSION,
        });
    }
    Ok(replay)
}

pub fn generate_replay_filename(version: &str) -> String {
    let now = chrono::Local::now();
    let timestamp = now.format("%Y%m%d%H%M%S");
    let sanitized_version = version.replace('.', "_");

    format!(
        "{}_TICTACTOE_{}.{}",
        timestamp, sanitized_version, REPLAY_FILE_EXTENSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{FirstPlayerMode, Mark};
    use crate::replay::{ReplayMetadata, ReplayPlayerEntry, ReplaySettings};

    fn sample_replay() -> Replay {
        Replay {
            version: REPLAY_VERSION,
            metadata: ReplayMetadata {
                engine_version: "1.0.0".to_string(),
                game_started_timestamp_ms: 1234567890,
                seed: 42,
                settings: ReplaySettings {
                    starting_mark: Mark::X,
                    first_player_mode: FirstPlayerMode::Ordered,
                },
                players: vec![
                    ReplayPlayerEntry {
                        player_id: "player1".to_string(),
                        is_bot: false,
                    },
                    ReplayPlayerEntry {
                        player_id: "bot1".to_string(),
                        is_bot: true,
                    },
                ],
            },
            moves: vec![],
        }
    }

    #[test]
    fn test_save_load_replay_file() {
        let replay = sample_replay();
        let mut path = std::env::temp_dir();
        path.push(format!("tictactoe_replay_{}.yaml", rand::random::<u32>()));

        save_replay(&path, &replay).unwrap();
        let loaded = load_replay(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, replay);
    }

    #[test]
    fn test_load_empty_content_error() {
        let result = load_replay_from_str("");
        assert!(matches!(result, Err(ReplayError::EmptyFile)));
    }

    #[test]
    fn test_load_unsupported_version_error() {
        let mut replay = sample_replay();
        replay.version = 99;
        let content = save_replay_to_string(&replay).unwrap();

        let result = load_replay_from_str(&content);
        assert!(matches!(
            result,
            Err(ReplayError::UnsupportedVersion { found: 99, .. })
        ));
    }

    #[test]
    fn test_load_garbage_is_a_parse_error() {
        let result = load_replay_from_str("not: [valid");
        assert!(matches!(result, Err(ReplayError::Parse(_))));
    }

    #[test]
    fn test_generate_replay_filename() {
        let filename = generate_replay_filename("1.2.3");
        assert!(filename.ends_with(".tictactoereplay"));
        assert!(filename.contains("TICTACTOE"));
        assert!(filename.contains("1_2_3"));
    }
}
