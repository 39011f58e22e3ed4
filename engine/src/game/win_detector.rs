use super::types::{Mark, WinningLine};

/// The eight lines that win the game: rows, columns, diagonals. Scan order
/// is the tie-break when more than one line is complete.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &[Mark; 9]) -> Option<Mark> {
    check_win_with_line(cells).map(|(mark, _)| mark)
}

pub fn check_win_with_line(cells: &[Mark; 9]) -> Option<(Mark, WinningLine)> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && cells[b] == mark && cells[c] == mark {
            return Some((mark, WinningLine(line)));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Mark)]) -> [Mark; 9] {
        let mut cells = [Mark::Empty; 9];
        for &(index, mark) in marks {
            cells[index] = mark;
        }
        cells
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(check_win(&[Mark::Empty; 9]), None);
    }

    #[test]
    fn test_detects_row_win() {
        let cells = board_with(&[(3, Mark::O), (4, Mark::O), (5, Mark::O)]);
        let (mark, line) = check_win_with_line(&cells).unwrap();
        assert_eq!(mark, Mark::O);
        assert_eq!(line.cells(), [3, 4, 5]);
    }

    #[test]
    fn test_detects_column_win() {
        let cells = board_with(&[(1, Mark::X), (4, Mark::X), (7, Mark::X)]);
        assert_eq!(check_win(&cells), Some(Mark::X));
    }

    #[test]
    fn test_detects_diagonal_win() {
        let cells = board_with(&[(2, Mark::O), (4, Mark::O), (6, Mark::O)]);
        let (mark, line) = check_win_with_line(&cells).unwrap();
        assert_eq!(mark, Mark::O);
        assert_eq!(line.cells(), [2, 4, 6]);
    }

    #[test]
    fn test_two_in_a_line_is_not_a_win() {
        let cells = board_with(&[(0, Mark::X), (1, Mark::X)]);
        assert_eq!(check_win(&cells), None);
    }

    #[test]
    fn test_first_complete_line_in_scan_order_wins() {
        // Unreachable under alternating play, but the tie-break is defined:
        // the row [0, 1, 2] precedes the diagonal [0, 4, 8].
        let cells = board_with(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (4, Mark::X),
            (8, Mark::X),
        ]);
        let (_, line) = check_win_with_line(&cells).unwrap();
        assert_eq!(line.cells(), [0, 1, 2]);
    }
}
