use super::error::MoveError;
use super::types::Mark;
use super::win_detector::check_win;

pub const CELL_COUNT: usize = 9;

/// One snapshot of the 3x3 grid, row-major indices 0..8. The move counter
/// always equals the number of occupied cells, and the side to move
/// alternates strictly from the starting mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
    to_move: Mark,
    move_count: usize,
}

impl Board {
    pub fn new() -> Self {
        Self::starting_with(Mark::X)
    }

    /// Panics if `first` is `Empty`.
    pub fn starting_with(first: Mark) -> Self {
        if first == Mark::Empty {
            panic!("Starting mark must be X or O");
        }
        Self {
            cells: [Mark::Empty; CELL_COUNT],
            to_move: first,
            move_count: 0,
        }
    }

    /// Places `mark` at `index`. Rejection is atomic: on any error the board
    /// is exactly as it was.
    pub fn apply(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if mark != self.to_move {
            return Err(MoveError::WrongTurn);
        }
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfRange { index });
        }
        if self.cells[index] != Mark::Empty {
            return Err(MoveError::CellOccupied { index });
        }

        *self = self.with_move(index, mark);
        Ok(())
    }

    /// Copy-on-apply simulation: returns the position after `mark` is placed
    /// at `index`, leaving `self` untouched. Callers must pass a legal move
    /// for the side to move.
    pub fn with_move(&self, index: usize, mark: Mark) -> Board {
        debug_assert!(index < CELL_COUNT);
        debug_assert_eq!(self.cells[index], Mark::Empty);
        debug_assert_eq!(mark, self.to_move);

        let mut next = *self;
        next.cells[index] = mark;
        next.move_count += 1;
        next.to_move = if mark == Mark::X { Mark::O } else { Mark::X };
        next
    }

    /// First complete line in `WIN_LINES` order decides when more than one
    /// line is full.
    pub fn winner(&self) -> Option<Mark> {
        check_win(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        self.move_count == CELL_COUNT
    }

    pub fn is_terminal(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }

    /// Empty cell indices in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn cell(&self, index: usize) -> Mark {
        self.cells[index]
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
