//! Win condition checking
//!
//! A player wins by owning `run_length` consecutive cells along a row, a
//! column, or either diagonal. The whole grid is rescanned for every new
//! state rather than only the lines through the last piece.

use crate::board::{BoardState, GameStatus};

/// Direction vectors for run checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal NE
    (1, -1), // Diagonal NW
];

/// Check whether `run_length` identical non-empty cells start at (row, col)
/// and extend along (dr, dc).
pub fn has_run_at(state: &BoardState, row: usize, col: usize, dr: i32, dc: i32) -> bool {
    let first = state.cell(row, col);
    if first.owner().is_none() {
        return false;
    }
    (1..state.run_length() as i32).all(|i| {
        state.cell_at(row as i32 + dr * i, col as i32 + dc * i) == Some(first)
    })
}

/// Find the first completed run, scanning rows bottom-up and columns
/// left-to-right, trying each direction in turn.
///
/// Returns the run's starting cell.
pub fn find_run(state: &BoardState) -> Option<(usize, usize)> {
    for row in 0..state.rows() {
        for col in 0..state.cols() {
            if state.cell(row, col).owner().is_none() {
                continue;
            }
            if DIRECTIONS
                .iter()
                .any(|&(dr, dc)| has_run_at(state, row, col, dr, dc))
            {
                return Some((row, col));
            }
        }
    }
    None
}

/// Recompute a state's status from its grid and move count.
pub fn compute_status(state: &BoardState) -> GameStatus {
    if let Some((row, col)) = find_run(state) {
        if let Some(player) = state.cell(row, col).owner() {
            return GameStatus::win_for(player);
        }
    }

    if state.is_full() {
        GameStatus::Tie
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Dimensions, Player};

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::Max;
    const O: Cell = Cell::Min;

    fn dims(rows: usize, cols: usize, run_length: usize) -> Dimensions {
        Dimensions::new(rows, cols, run_length).unwrap()
    }

    #[test]
    fn test_horizontal_run() {
        let state = BoardState::from_rows(
            dims(2, 4, 3),
            &[&[O, X, X, X], &[E, O, E, E]],
            Player::Min,
        );
        assert_eq!(find_run(&state), Some((0, 1)));
        assert_eq!(compute_status(&state), GameStatus::MaxWin);
    }

    #[test]
    fn test_vertical_run() {
        let state = BoardState::from_rows(
            dims(3, 3, 3),
            &[&[X, O, E], &[X, O, E], &[E, O, E]],
            Player::Max,
        );
        assert_eq!(find_run(&state), Some((0, 1)));
        assert_eq!(compute_status(&state), GameStatus::MinWin);
    }

    #[test]
    fn test_diagonal_ne_run() {
        let state = BoardState::from_rows(
            dims(3, 3, 3),
            &[&[X, O, O], &[E, X, O], &[E, E, X]],
            Player::Min,
        );
        assert!(has_run_at(&state, 0, 0, 1, 1));
        assert_eq!(compute_status(&state), GameStatus::MaxWin);
    }

    #[test]
    fn test_diagonal_nw_run() {
        let state = BoardState::from_rows(
            dims(3, 3, 3),
            &[&[X, X, O], &[E, O, X], &[O, E, E]],
            Player::Max,
        );
        assert!(has_run_at(&state, 0, 2, 1, -1));
        assert_eq!(compute_status(&state), GameStatus::MinWin);
    }

    #[test]
    fn test_run_does_not_wrap_rows() {
        // X at the end of row 0 and the start of row 1 are not adjacent
        let state = BoardState::from_rows(
            dims(2, 3, 2),
            &[&[O, E, X], &[X, E, E]],
            Player::Min,
        );
        assert_eq!(find_run(&state), None);
        assert_eq!(compute_status(&state), GameStatus::InProgress);
    }

    #[test]
    fn test_full_board_without_run_is_tie() {
        let state = BoardState::from_rows(dims(1, 2, 2), &[&[X, O]], Player::Max);
        assert_eq!(compute_status(&state), GameStatus::Tie);
    }

    #[test]
    fn test_full_board_with_run_is_win() {
        let state = BoardState::from_rows(dims(1, 3, 2), &[&[O, X, X]], Player::Min);
        assert_eq!(compute_status(&state), GameStatus::MaxWin);
    }

    #[test]
    fn test_first_run_found_decides() {
        // Both players own a run; MIN's starts lower so it is found first
        let state = BoardState::from_rows(
            dims(2, 3, 3),
            &[&[O, O, O], &[X, X, X]],
            Player::Max,
        );
        assert_eq!(compute_status(&state), GameStatus::MinWin);
    }

    #[test]
    fn test_run_length_one_any_piece_wins() {
        let state = BoardState::new(dims(2, 2, 1)).apply_move(1).unwrap();
        assert_eq!(state.status(), GameStatus::MaxWin);
    }
}
