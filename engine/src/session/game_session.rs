use std::sync::Arc;
use tokio::sync::{Mutex, Notify};
use tokio::time::Duration;

use crate::game::{GameState, Mark, MoveError, best_move};
use crate::identifiers::PlayerId;
use crate::replay::ReplayRecorder;
use crate::session::{
    GameBroadcaster, GameEndReason, GameOverNotification, GameStateUpdate, Scoreboard, ScoreEntry,
    SessionConfig, SessionRng, SessionSettings,
};

/// Shared state of one session. Rounds are numbered from 1; the scoreboard
/// and the replay recorder span all of them.
#[derive(Clone)]
pub struct SessionState {
    pub game_state: Arc<Mutex<GameState>>,
    pub turn_notify: Arc<Notify>,
    settings: SessionSettings,
    scoreboard: Arc<Mutex<Scoreboard>>,
    round: Arc<Mutex<u32>>,
    turn_counter: Arc<Mutex<i64>>,
    round_scored: Arc<Mutex<bool>>,
    recorder: Option<Arc<Mutex<ReplayRecorder>>>,
    rng: Arc<Mutex<SessionRng>>,
}

impl SessionState {
    pub fn create(
        config: &SessionConfig,
        settings: &SessionSettings,
        seed: u64,
        recorder: Option<Arc<Mutex<ReplayRecorder>>>,
    ) -> Result<Self, String> {
        if config.seat_count() != 2 {
            return Err(format!(
                "Tic-tac-toe requires exactly 2 players, got {} humans and {} bots",
                config.human_players.len(),
                config.bots.len()
            ));
        }

        let mut rng = SessionRng::new(seed);
        let game_state = GameState::new(
            config.all_players(),
            settings.starting_mark,
            settings.first_player_mode,
            &mut rng,
        );

        Ok(Self {
            game_state: Arc::new(Mutex::new(game_state)),
            turn_notify: Arc::new(Notify::new()),
            settings: settings.clone(),
            scoreboard: Arc::new(Mutex::new(Scoreboard::default())),
            round: Arc::new(Mutex::new(1)),
            turn_counter: Arc::new(Mutex::new(0)),
            round_scored: Arc::new(Mutex::new(false)),
            recorder,
            rng: Arc::new(Mutex::new(rng)),
        })
    }

    pub async fn scoreboard(&self) -> Scoreboard {
        *self.scoreboard.lock().await
    }

    pub async fn round(&self) -> u32 {
        *self.round.lock().await
    }

    async fn record_move(&self, player: &PlayerId, cell: usize) {
        let Some(recorder) = &self.recorder else {
            return;
        };
        let round = *self.round.lock().await;
        let mut turn = self.turn_counter.lock().await;
        let mut recorder = recorder.lock().await;
        if let Some(player_index) = recorder.find_player_index(player.as_str()) {
            recorder.record_move(round, *turn, player_index, cell as u32);
            *turn += 1;
        }
    }
}

pub struct GameSession;

impl GameSession {
    /// Drives one round to its end: broadcasts every state change, waits on
    /// `turn_notify` for human seats and plays bot seats itself.
    pub async fn run<B: GameBroadcaster>(
        config: SessionConfig,
        state: SessionState,
        broadcaster: B,
    ) -> GameOverNotification {
        loop {
            Self::broadcast_state(&state, &broadcaster).await;

            let (is_over, is_bot_turn) = {
                let game_state = state.game_state.lock().await;
                let is_over = game_state.status().is_over();
                let is_bot_turn = config.is_bot(game_state.current_player());
                (is_over, is_bot_turn)
            };

            if is_over {
                break;
            }

            if is_bot_turn {
                Self::play_bot_turn(&state).await;
            } else {
                state.turn_notify.notified().await;
            }
        }

        let notification = Self::build_game_over_notification(&config, &state).await;
        match &notification.winner {
            Some(winner) => crate::log!("Round {} won by {}", notification.round, winner),
            None => crate::log!("Round {} drawn", notification.round),
        }
        broadcaster.broadcast_game_over(notification.clone()).await;
        notification
    }

    /// The user-move surface: validates through the engine, records the move
    /// and wakes the session loop.
    pub async fn handle_place(
        state: &SessionState,
        player: &PlayerId,
        cell: usize,
    ) -> Result<(), MoveError> {
        {
            let mut game_state = state.game_state.lock().await;
            game_state.place_mark(player, cell)?;
        }
        state.record_move(player, cell).await;
        state.turn_notify.notify_one();
        Ok(())
    }

    /// Discards the finished round and starts the next one with the same
    /// seats. The scoreboard carries over; call between `run` invocations.
    pub async fn restart(state: &SessionState) {
        let mut game_state = state.game_state.lock().await;
        let players = vec![
            game_state.player_x().clone(),
            game_state.player_o().clone(),
        ];
        let mut rng = state.rng.lock().await;
        *game_state = GameState::new(
            players,
            state.settings.starting_mark,
            state.settings.first_player_mode,
            &mut rng,
        );
        drop(rng);
        drop(game_state);

        let mut round = state.round.lock().await;
        *round += 1;
        let started = *round;
        drop(round);
        *state.turn_counter.lock().await = 0;
        *state.round_scored.lock().await = false;

        crate::log!("Round {} started", started);
    }

    async fn play_bot_turn(state: &SessionState) {
        let delay = Duration::from_millis(state.settings.bot_delay_ms);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let (board, bot_mark, current_player) = {
            let game_state = state.game_state.lock().await;
            (
                *game_state.board(),
                game_state.current_mark(),
                game_state.current_player().clone(),
            )
        };

        let chosen = tokio::task::spawn_blocking(move || best_move(&board, bot_mark)).await;

        if let Ok(Some(index)) = chosen {
            let mut game_state = state.game_state.lock().await;
            if game_state.place_mark(&current_player, index).is_ok() {
                drop(game_state);
                state.record_move(&current_player, index).await;
                crate::log!("Bot {} played cell {}", current_player, index);
            }
        }
    }

    async fn broadcast_state<B: GameBroadcaster>(state: &SessionState, broadcaster: &B) {
        let update = {
            let game_state = state.game_state.lock().await;
            GameStateUpdate {
                cells: *game_state.board().cells(),
                to_move: game_state.current_mark(),
                current_player: game_state.current_player().clone(),
                status: game_state.status(),
                last_move: game_state.last_move(),
                winning_line: game_state.winning_line(),
                totals: *state.scoreboard.lock().await,
                round: *state.round.lock().await,
            }
        };
        broadcaster.broadcast_state(update).await;
    }

    async fn build_game_over_notification(
        config: &SessionConfig,
        state: &SessionState,
    ) -> GameOverNotification {
        let game_state = state.game_state.lock().await;

        let totals = {
            let mut scored = state.round_scored.lock().await;
            let mut scoreboard = state.scoreboard.lock().await;
            if !*scored {
                scoreboard.record(game_state.status());
                *scored = true;
            }
            *scoreboard
        };

        let winner = game_state.get_winner();
        let reason = if winner.is_some() {
            GameEndReason::Win
        } else {
            GameEndReason::Draw
        };

        let scores = [
            (game_state.player_x().clone(), Mark::X),
            (game_state.player_o().clone(), Mark::O),
        ]
        .into_iter()
        .map(|(player, mark)| {
            let score = u32::from(winner.as_ref() == Some(&player));
            ScoreEntry {
                is_bot: config.is_bot(&player),
                player,
                mark,
                score,
            }
        })
        .collect();

        GameOverNotification {
            reason,
            winner,
            winning_line: game_state.winning_line(),
            scores,
            totals,
            round: *state.round.lock().await,
        }
    }
}
