mod game_session;
mod score;
mod session_rng;

pub use game_session::{GameSession, SessionState};
pub use score::Scoreboard;
pub use session_rng::SessionRng;

use std::future::Future;

use crate::defaults::DEFAULT_BOT_DELAY_MS;
use crate::game::{CELL_COUNT, FirstPlayerMode, GameStatus, Mark, WinningLine};
use crate::identifiers::{BotId, PlayerId, SessionId};

/// The seam where a presentation layer attaches: the session pushes every
/// state change through it and never talks to a UI directly.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, update: GameStateUpdate) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        notification: GameOverNotification,
    ) -> impl Future<Output = ()> + Send;
}

/// Who sits at the two seats. Zero, one or two of them may be bots.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub session_id: SessionId,
    pub human_players: Vec<PlayerId>,
    pub bots: Vec<BotId>,
}

impl SessionConfig {
    pub fn seat_count(&self) -> usize {
        self.human_players.len() + self.bots.len()
    }

    pub fn all_players(&self) -> Vec<PlayerId> {
        self.human_players
            .iter()
            .cloned()
            .chain(self.bots.iter().map(|bot| bot.to_player_id()))
            .collect()
    }

    pub fn is_bot(&self, player: &PlayerId) -> bool {
        self.bots.iter().any(|bot| bot.to_player_id() == *player)
    }
}

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub starting_mark: Mark,
    pub first_player_mode: FirstPlayerMode,
    pub bot_delay_ms: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            starting_mark: Mark::X,
            first_player_mode: FirstPlayerMode::Ordered,
            bot_delay_ms: DEFAULT_BOT_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameStateUpdate {
    pub cells: [Mark; CELL_COUNT],
    pub to_move: Mark,
    pub current_player: PlayerId,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    pub winning_line: Option<WinningLine>,
    pub totals: Scoreboard,
    pub round: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEndReason {
    Win,
    Draw,
}

/// Result of one seat for one finished round: 1 for the winner, 0 otherwise.
#[derive(Debug, Clone)]
pub struct ScoreEntry {
    pub player: PlayerId,
    pub mark: Mark,
    pub is_bot: bool,
    pub score: u32,
}

#[derive(Debug, Clone)]
pub struct GameOverNotification {
    pub reason: GameEndReason,
    pub winner: Option<PlayerId>,
    pub winning_line: Option<WinningLine>,
    pub scores: Vec<ScoreEntry>,
    pub totals: Scoreboard,
    pub round: u32,
}
