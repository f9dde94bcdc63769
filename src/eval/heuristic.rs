//! Static values for terminal and cutoff positions
//!
//! Both share a move-count magnitude, `Score::SCALE * rows * cols / moves`,
//! so a win reached in fewer moves is worth more than a slower one.

use crate::board::{BoardState, GameStatus};
use crate::search::SearchResult;

use super::score::Score;
use super::threat::threat_count;

/// Move-count magnitude shared by [`utility`] and [`heuristic_eval`].
///
/// An empty board is treated as one move in so the division is total.
#[must_use]
pub fn magnitude(state: &BoardState) -> i32 {
    let cells = state.dimensions().cells() as i32;
    Score::SCALE * cells / state.moves_made().max(1) as i32
}

/// Exact value of a decided position.
///
/// Positive for a MAX win, negative for a MIN win, zero for a tie. With
/// `heuristic_mode` the magnitude carries [`Score::TERMINAL_BIAS`] so it
/// outranks every heuristic value at the same move count.
///
/// # Returns
/// `0` for positions still in progress; the search never asks for those.
#[must_use]
pub fn utility(state: &BoardState, heuristic_mode: bool) -> i32 {
    let mut value = magnitude(state);
    if heuristic_mode {
        value += Score::TERMINAL_BIAS;
    }

    match state.status() {
        GameStatus::MaxWin => value,
        GameStatus::MinWin => -value,
        GameStatus::Tie | GameStatus::InProgress => 0,
    }
}

/// Estimate an undecided position cut off at the depth limit.
///
/// Picks the legal column whose landing cell joins the most threat windows
/// for the player to move (lowest column on ties) and scores it as
/// `sign * (threats + magnitude)`, with `sign` +1 when MAX is to move.
#[must_use]
pub fn heuristic_eval(state: &BoardState) -> SearchResult {
    let mut best: Option<(u32, usize)> = None;

    for col in state.legal_columns() {
        let threats = threat_count(state, state.lowest_free_row(col), col);
        if best.map_or(true, |(most, _)| threats > most) {
            best = Some((threats, col));
        }
    }

    let sign = state.to_move().sign();
    match best {
        Some((threats, col)) => {
            SearchResult::new(sign * (threats as i32 + magnitude(state)), Some(col))
        }
        None => SearchResult::terminal(sign * magnitude(state)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Dimensions, Player};

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::Max;
    const O: Cell = Cell::Min;

    fn play(dims: Dimensions, moves: &[usize]) -> BoardState {
        moves
            .iter()
            .fold(BoardState::new(dims), |s, &c| s.apply_move(c).unwrap())
    }

    #[test]
    fn test_utility_sign_law() {
        let dims = Dimensions::new(1, 3, 2).unwrap();
        let max_win = play(dims, &[1, 0, 2]);
        let min_win = BoardState::from_rows(dims, &[&[X, O, O]], Player::Max);
        let tie = play(Dimensions::new(1, 2, 2).unwrap(), &[0, 1]);

        assert_eq!(max_win.status(), GameStatus::MaxWin);
        assert_eq!(min_win.status(), GameStatus::MinWin);
        assert_eq!(tie.status(), GameStatus::Tie);

        for mode in [false, true] {
            assert!(utility(&max_win, mode) > 0);
            assert!(utility(&min_win, mode) < 0);
            assert_eq!(utility(&tie, mode), 0);
        }
    }

    #[test]
    fn test_utility_values() {
        let dims = Dimensions::new(1, 3, 2).unwrap();
        let max_win = play(dims, &[1, 0, 2]);
        assert_eq!(utility(&max_win, false), 10_000);
        assert_eq!(utility(&max_win, true), 10_009);
    }

    #[test]
    fn test_faster_win_scores_higher() {
        let dims = Dimensions::new(3, 3, 3).unwrap();
        // Column stack after 5 moves
        let fast = play(dims, &[0, 1, 0, 1, 0]);
        // Diagonal after 7 moves
        let slow = play(dims, &[0, 1, 1, 2, 2, 0, 2]);
        assert_eq!(fast.status(), GameStatus::MaxWin);
        assert_eq!(slow.status(), GameStatus::MaxWin);
        assert!(utility(&fast, false) > utility(&slow, false));
        assert_eq!(utility(&fast, false), 18_000);
        assert_eq!(utility(&slow, false), 12_857);
    }

    #[test]
    fn test_heuristic_picks_most_threats() {
        let dims = Dimensions::new(1, 3, 2).unwrap();
        let state = BoardState::new(dims);
        let result = heuristic_eval(&state);
        // Middle column joins two windows; empty board magnitude uses one move
        assert_eq!(result.best_column, Some(1));
        assert_eq!(result.value, 2 + 30_000);
    }

    #[test]
    fn test_heuristic_sign_follows_mover() {
        let dims = Dimensions::new(2, 3, 3).unwrap();
        let state = play(dims, &[0]);
        assert_eq!(state.to_move(), Player::Min);
        let result = heuristic_eval(&state);
        assert!(result.value < 0);
        assert_eq!(-result.value - magnitude(&state), {
            let col = result.best_column.unwrap();
            threat_count(&state, state.lowest_free_row(col), col) as i32
        });
    }

    #[test]
    fn test_heuristic_ties_keep_lowest_column() {
        let dims = Dimensions::new(2, 2, 2).unwrap();
        let state = BoardState::from_rows(dims, &[&[E, E], &[E, E]], Player::Max);
        let result = heuristic_eval(&state);
        assert_eq!(result.best_column, Some(0));
    }

    #[test]
    fn test_heuristic_bounded_by_terminal_bias() {
        let dims = Dimensions::new(4, 5, 3).unwrap();
        let state = play(dims, &[2, 1, 2, 3, 1]);
        let result = heuristic_eval(&state);
        assert!(result.value.abs() <= magnitude(&state) + Score::MAX_THREATS);
        assert!(result.value.abs() < magnitude(&state) + Score::TERMINAL_BIAS);
    }
}
