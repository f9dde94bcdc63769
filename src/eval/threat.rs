//! Threat counting for the cutoff heuristic
//!
//! For a hypothetical piece of the player to move, each of the four line axes
//! is scanned outward from the piece: first forward for up to `run_length - 1`
//! cells, then once backward along the mirrored direction. A window counts as
//! a threat when it fills with the mover's own pieces plus at most one empty
//! gap. The opponent's piece, a second gap, or the board edge breaks the
//! window; a break while scanning forward restarts the scan backward, a break
//! while scanning backward ends the axis.

use crate::board::{BoardState, Cell};

/// Line axes scanned from the candidate cell
const AXES: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal NE / SW
    (-1, 1), // Diagonal SE / NW
];

/// Number of near-complete windows a piece at (row, col) would join.
///
/// The cell itself is not read, so this may be called for the landing row of
/// any legal column. The result is at most 8.
#[must_use]
pub fn threat_count(state: &BoardState, row: usize, col: usize) -> u32 {
    AXES.iter()
        .map(|&(dr, dc)| axis_threats(state, row as i32, col as i32, dr, dc))
        .sum()
}

/// Scan state for one axis
struct Window {
    forward: bool,
    filled: i32,
    gap_available: bool,
}

impl Window {
    fn new() -> Self {
        Self {
            forward: true,
            filled: 0,
            gap_available: true,
        }
    }

    fn reverse(&mut self) {
        self.forward = false;
        self.filled = 0;
        self.gap_available = true;
    }
}

fn axis_threats(state: &BoardState, row: i32, col: i32, dr: i32, dc: i32) -> u32 {
    let span = state.run_length() as i32 - 1;
    let mover = state.to_move().cell();

    let mut total = 0;
    let mut window = Window::new();
    let mut i: i32 = 1;

    while i >= -span {
        let blocked = match state.cell_at(row + dr * i, col + dc * i) {
            Some(cell) if cell == mover => {
                window.filled += 1;
                false
            }
            Some(Cell::Empty) if window.gap_available => {
                window.gap_available = false;
                window.filled += 1;
                false
            }
            // Off the board, the opponent's piece, or a second gap
            _ => true,
        };

        if blocked {
            if !window.forward {
                break;
            }
            window.reverse();
            i = 0;
        }

        if window.filled == span {
            total += 1;
        }

        if i == span {
            window.reverse();
            i = 0;
        }

        i += if window.forward { 1 } else { -1 };
    }

    total
}
