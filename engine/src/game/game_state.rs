use super::board::Board;
use super::error::MoveError;
use super::types::{FirstPlayerMode, GameStatus, Mark, WinningLine};
use super::win_detector::check_win_with_line;
use crate::identifiers::PlayerId;
use crate::session::SessionRng;

/// One round of the game: the board plus who holds which mark.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    player_x: PlayerId,
    player_o: PlayerId,
    status: GameStatus,
    last_move: Option<usize>,
}

impl GameState {
    /// Panics unless exactly two players are given.
    pub fn new(
        players: Vec<PlayerId>,
        starting_mark: Mark,
        first_player_mode: FirstPlayerMode,
        rng: &mut SessionRng,
    ) -> Self {
        if players.len() != 2 {
            panic!("Tic-tac-toe requires exactly 2 players");
        }

        let swap = first_player_mode == FirstPlayerMode::Shuffle && rng.coin_flip();
        let (player_x, player_o) = if swap {
            (players[1].clone(), players[0].clone())
        } else {
            (players[0].clone(), players[1].clone())
        };

        Self {
            board: Board::starting_with(starting_mark),
            player_x,
            player_o,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, player: &PlayerId, index: usize) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if player != self.current_player() {
            return Err(MoveError::WrongTurn);
        }

        let mark = self.board.to_move();
        self.board.apply(index, mark)?;
        self.last_move = Some(index);
        self.update_status();
        Ok(())
    }

    fn update_status(&mut self) {
        self.status = match self.board.winner() {
            Some(Mark::X) => GameStatus::XWon,
            Some(Mark::O) => GameStatus::OWon,
            Some(Mark::Empty) => unreachable!(),
            None if self.board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        };
    }

    pub fn current_player(&self) -> &PlayerId {
        match self.board.to_move() {
            Mark::O => &self.player_o,
            _ => &self.player_x,
        }
    }

    pub fn current_mark(&self) -> Mark {
        self.board.to_move()
    }

    pub fn mark_of(&self, player: &PlayerId) -> Option<Mark> {
        if player == &self.player_x {
            Some(Mark::X)
        } else if player == &self.player_o {
            Some(Mark::O)
        } else {
            None
        }
    }

    pub fn get_winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::XWon => Some(self.player_x.clone()),
            GameStatus::OWon => Some(self.player_o.clone()),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(self.board.cells()).map(|(_, line)| line)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn player_x(&self) -> &PlayerId {
        &self.player_x
    }

    pub fn player_o(&self) -> &PlayerId {
        &self.player_o
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_players() -> Vec<PlayerId> {
        vec![
            PlayerId::new("alice".to_string()),
            PlayerId::new("bob".to_string()),
        ]
    }

    fn new_game() -> GameState {
        let mut rng = SessionRng::new(7);
        GameState::new(two_players(), Mark::X, FirstPlayerMode::Ordered, &mut rng)
    }

    #[test]
    fn test_ordered_mode_gives_x_to_the_first_player() {
        let game = new_game();
        assert_eq!(game.player_x().as_str(), "alice");
        assert_eq!(game.player_o().as_str(), "bob");
        assert_eq!(game.current_player().as_str(), "alice");
    }

    #[test]
    #[should_panic(expected = "exactly 2 players")]
    fn test_wrong_player_count_panics() {
        let mut rng = SessionRng::new(7);
        GameState::new(
            vec![PlayerId::new("solo".to_string())],
            Mark::X,
            FirstPlayerMode::Ordered,
            &mut rng,
        );
    }

    #[test]
    fn test_shuffle_mode_is_deterministic_per_seed() {
        let assignment = |seed: u64| {
            let mut rng = SessionRng::new(seed);
            let game = GameState::new(two_players(), Mark::X, FirstPlayerMode::Shuffle, &mut rng);
            game.player_x().clone()
        };
        for seed in [0, 1, 42, 1337] {
            assert_eq!(assignment(seed), assignment(seed));
        }
    }

    #[test]
    fn test_place_mark_rejects_the_wrong_player() {
        let mut game = new_game();
        let bob = game.player_o().clone();
        assert_eq!(game.place_mark(&bob, 0), Err(MoveError::WrongTurn));
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_play_through_a_win() {
        let mut game = new_game();
        let alice = game.player_x().clone();
        let bob = game.player_o().clone();

        for (player, index) in [(&alice, 0), (&bob, 3), (&alice, 1), (&bob, 4)] {
            game.place_mark(player, index).unwrap();
            assert_eq!(game.status(), GameStatus::InProgress);
        }
        game.place_mark(&alice, 2).unwrap();

        assert_eq!(game.status(), GameStatus::XWon);
        assert_eq!(game.get_winner(), Some(alice.clone()));
        assert_eq!(game.winning_line().unwrap().cells(), [0, 1, 2]);
        assert_eq!(game.last_move(), Some(2));
        assert_eq!(game.place_mark(&bob, 5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_mark_of_maps_both_seats() {
        let game = new_game();
        assert_eq!(game.mark_of(game.player_x()), Some(Mark::X));
        assert_eq!(game.mark_of(game.player_o()), Some(Mark::O));
        assert_eq!(game.mark_of(&PlayerId::new("nobody".to_string())), None);
    }
}
