use std::fmt;

/// Why a placement was rejected. The board is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfRange { index: usize },
    CellOccupied { index: usize },
    WrongTurn,
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange { index } => {
                write!(f, "Cell index {} is outside the board", index)
            }
            MoveError::CellOccupied { index } => write!(f, "Cell {} is already marked", index),
            MoveError::WrongTurn => write!(f, "Not your turn"),
            MoveError::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for MoveError {}
