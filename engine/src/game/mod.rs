mod board;
mod bot;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT};
pub use bot::{CENTER, best_move};
pub use error::MoveError;
pub use game_state::GameState;
pub use types::{FirstPlayerMode, GameStatus, Mark, WinningLine};
pub use win_detector::{WIN_LINES, check_win, check_win_with_line};
