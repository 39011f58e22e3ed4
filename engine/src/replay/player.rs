use super::recorder::{RecordedMove, Replay, ReplayPlayerEntry, ReplaySettings};

/// Sequential cursor over a recorded session.
pub struct ReplayPlayer {
    replay: Replay,
    current_move_index: usize,
}

impl ReplayPlayer {
    pub fn new(replay: Replay) -> Self {
        Self {
            replay,
            current_move_index: 0,
        }
    }

    pub fn engine_version(&self) -> &str {
        &self.replay.metadata.engine_version
    }

    pub fn seed(&self) -> u64 {
        self.replay.metadata.seed
    }

    pub fn settings(&self) -> &ReplaySettings {
        &self.replay.metadata.settings
    }

    pub fn players(&self) -> &[ReplayPlayerEntry] {
        &self.replay.metadata.players
    }

    pub fn get_player(&self, index: i32) -> Option<&ReplayPlayerEntry> {
        self.replay.metadata.players.get(index as usize)
    }

    pub fn game_started_timestamp_ms(&self) -> i64 {
        self.replay.metadata.game_started_timestamp_ms
    }

    pub fn total_moves(&self) -> usize {
        self.replay.moves.len()
    }

    pub fn current_move_index(&self) -> usize {
        self.current_move_index
    }

    pub fn is_finished(&self) -> bool {
        self.current_move_index >= self.replay.moves.len()
    }

    pub fn peek_next_move(&self) -> Option<&RecordedMove> {
        self.replay.moves.get(self.current_move_index)
    }

    pub fn next_move(&mut self) -> Option<RecordedMove> {
        let recorded = self.replay.moves.get(self.current_move_index).copied();
        if recorded.is_some() {
            self.current_move_index += 1;
        }
        recorded
    }

    /// Consumes and returns every remaining move of `round`, stopping at the
    /// first move of a later round.
    pub fn moves_for_round(&mut self, round: u32) -> Vec<RecordedMove> {
        let mut moves = Vec::new();
        while let Some(recorded) = self.peek_next_move().copied() {
            if recorded.round > round {
                break;
            }
            self.current_move_index += 1;
            if recorded.round == round {
                moves.push(recorded);
            }
        }
        moves
    }

    pub fn reset(&mut self) {
        self.current_move_index = 0;
    }

    pub fn replay(&self) -> &Replay {
        &self.replay
    }

    pub fn into_replay(self) -> Replay {
        self.replay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{FirstPlayerMode, Mark};
    use crate::replay::{REPLAY_VERSION, ReplayMetadata};

    fn create_test_replay() -> Replay {
        let recorded = |round: u32, turn: i64, player_index: i32, cell: u32| RecordedMove {
            round,
            turn,
            player_index,
            cell,
        };

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
                        player_id: "player2".to_string(),
                        is_bot: false,
                    },
                ],
            },
            moves: vec![
                recorded(1, 0, 0, 4),
                recorded(1, 1, 1, 0),
                recorded(2, 0, 0, 8),
            ],
        }
    }

    #[test]
    fn test_replay_player_metadata() {
        let player = ReplayPlayer::new(create_test_replay());

        assert_eq!(player.engine_version(), "1.0.0");
        assert_eq!(player.seed(), 42);
        assert_eq!(player.players().len(), 2);
        assert_eq!(player.total_moves(), 3);
        assert!(!player.is_finished());
        assert!(player.get_player(1).is_some());
        assert!(player.get_player(5).is_none());
    }

    #[test]
    fn test_replay_player_next_move() {
        let mut player = ReplayPlayer::new(create_test_replay());

        let first = player.next_move().unwrap();
        assert_eq!((first.round, first.cell), (1, 4));

        let second = player.next_move().unwrap();
        assert_eq!((second.round, second.cell), (1, 0));

        let third = player.next_move().unwrap();
        assert_eq!((third.round, third.cell), (2, 8));

        assert!(player.next_move().is_none());
        assert!(player.is_finished());
    }

    #[test]
    fn test_replay_player_moves_for_round() {
        let mut player = ReplayPlayer::new(create_test_replay());

        let round1 = player.moves_for_round(1);
        assert_eq!(round1.len(), 2);

        let round2 = player.moves_for_round(2);
        assert_eq!(round2.len(), 1);

        assert!(player.is_finished());
    }

    #[test]
    fn test_replay_player_reset() {
        let mut player = ReplayPlayer::new(create_test_replay());

        player.next_move();
        player.next_move();
        assert_eq!(player.current_move_index(), 2);

        player.reset();
        assert_eq!(player.current_move_index(), 0);
        assert!(!player.is_finished());
    }
}
