use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::REPLAY_VERSION;
use crate::game::{FirstPlayerMode, Mark};

/// Everything needed to rebuild the initial game state of a recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaySettings {
    pub starting_mark: Mark,
    pub first_player_mode: FirstPlayerMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayPlayerEntry {
    pub player_id: String,
    pub is_bot: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMove {
    pub round: u32,
    pub turn: i64,
    pub player_index: i32,
    pub cell: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayMetadata {
    pub engine_version: String,
    pub game_started_timestamp_ms: i64,
    pub seed: u64,
    pub settings: ReplaySettings,
    pub players: Vec<ReplayPlayerEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replay {
    pub version: u32,
    pub metadata: ReplayMetadata,
    pub moves: Vec<RecordedMove>,
}

/// Collects moves across the rounds of a session; `finalize` produces the
/// serializable replay.
pub struct ReplayRecorder {
    engine_version: String,
    game_started_timestamp_ms: i64,
    seed: u64,
    settings: ReplaySettings,
    players: Vec<ReplayPlayerEntry>,
    moves: Vec<RecordedMove>,
    player_index_map: HashMap<String, i32>,
}

impl ReplayRecorder {
    pub fn new(
        engine_version: String,
        seed: u64,
        settings: ReplaySettings,
        players: Vec<ReplayPlayerEntry>,
    ) -> Self {
        let player_index_map = players
            .iter()
            .enumerate()
            .map(|(i, p)| (p.player_id.clone(), i as i32))
            .collect();

        Self {
            engine_version,
            game_started_timestamp_ms: chrono::Utc::now().timestamp_millis(),
            seed,
            settings,
            players,
            moves: Vec::new(),
            player_index_map,
        }
    }

    pub fn record_move(&mut self, round: u32, turn: i64, player_index: i32, cell: u32) {
        self.moves.push(RecordedMove {
            round,
            turn,
            player_index,
            cell,
        });
    }

    pub fn find_player_index(&self, player_id: &str) -> Option<i32> {
        self.player_index_map.get(player_id).copied()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn moves_count(&self) -> usize {
        self.moves.len()
    }

    pub fn finalize(&mut self) -> Replay {
        let mut moves = std::mem::take(&mut self.moves);
        moves.sort_by_key(|m| (m.round, m.turn));

        Replay {
            version: REPLAY_VERSION,
            metadata: ReplayMetadata {
                engine_version: std::mem::take(&mut self.engine_version),
                game_started_timestamp_ms: self.game_started_timestamp_ms,
                seed: self.seed,
                settings: self.settings,
                players: std::mem::take(&mut self.players),
            },
            moves,
        }
    }
}
