//! Immutable board state with gravity drops

use std::fmt;
use std::hash::{Hash, Hasher};

use super::{Cell, Dimensions, GameStatus, Player};
use crate::error::MoveError;
use crate::rules::compute_status;

/// Snapshot of a game position.
///
/// Row 0 is the bottom row; a piece dropped into a column lands on that
/// column's lowest empty row. States are never mutated after construction:
/// every move produces a new state via [`BoardState::apply_move`].
///
/// Two states are equal when their grids and player to move match, no matter
/// which move order produced them.
#[derive(Debug, Clone)]
pub struct BoardState {
    dims: Dimensions,
    /// Row-major cells, row 0 first
    cells: Box<[Cell]>,
    /// Next insertion row per column (`== rows` means full)
    lowest_free_row: Box<[usize]>,
    to_move: Player,
    moves_made: usize,
    status: GameStatus,
}

impl BoardState {
    /// Empty starting position; MAX moves first.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![Cell::Empty; dims.cells()].into_boxed_slice(),
            lowest_free_row: vec![0; dims.cols].into_boxed_slice(),
            to_move: Player::Max,
            moves_made: 0,
            status: GameStatus::InProgress,
        }
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    #[inline]
    pub fn run_length(&self) -> usize {
        self.dims.run_length
    }

    /// Get the cell at (row, col). Panics if out of range.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.dims.cols + col]
    }

    /// Signed lookup used by line scans; `None` when off the board.
    #[inline]
    pub fn cell_at(&self, row: i32, col: i32) -> Option<Cell> {
        if self.dims.contains(row, col) {
            Some(self.cell(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Row a piece dropped into `col` would land on
    #[inline]
    pub fn lowest_free_row(&self, col: usize) -> usize {
        self.lowest_free_row[col]
    }

    #[inline]
    pub fn is_column_full(&self, col: usize) -> bool {
        self.lowest_free_row[col] == self.dims.rows
    }

    #[inline]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    #[inline]
    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.moves_made == self.dims.cells()
    }

    /// Winner of a decided game, `None` while in progress or tied
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::MaxWin => Some(Player::Max),
            GameStatus::MinWin => Some(Player::Min),
            GameStatus::InProgress | GameStatus::Tie => None,
        }
    }

    /// Columns that are not full, in ascending order
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.dims.cols).filter(move |&col| !self.is_column_full(col))
    }

    /// Drop the current player's piece into `col`.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfRange`] if `col >= cols`, [`MoveError::ColumnFull`]
    /// if the column has no free row.
    pub fn apply_move(&self, col: usize) -> Result<BoardState, MoveError> {
        if col >= self.dims.cols {
            return Err(MoveError::OutOfRange {
                column: col,
                cols: self.dims.cols,
            });
        }
        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull { column: col });
        }
        Ok(self.child(col))
    }

    /// Successor state for a column already known to be legal.
    pub(crate) fn child(&self, col: usize) -> BoardState {
        debug_assert!(col < self.dims.cols && !self.is_column_full(col));

        let row = self.lowest_free_row[col];
        let mut cells = self.cells.clone();
        cells[row * self.dims.cols + col] = self.to_move.cell();
        let mut lowest_free_row = self.lowest_free_row.clone();
        lowest_free_row[col] += 1;

        let mut next = BoardState {
            dims: self.dims,
            cells,
            lowest_free_row,
            to_move: self.to_move.opponent(),
            moves_made: self.moves_made + 1,
            status: GameStatus::InProgress,
        };
        next.status = compute_status(&next);
        next
    }

    /// Multi-line rendering, top row first, with a column-index footer.
    pub fn to_grid_string(&self) -> String {
        let mut out = String::with_capacity((self.dims.rows + 1) * (self.dims.cols * 2 + 1));
        for row in (0..self.dims.rows).rev() {
            for col in 0..self.dims.cols {
                out.push(self.cell(row, col).symbol());
                out.push(' ');
            }
            out.push('\n');
        }
        for col in 0..self.dims.cols {
            out.push_str(&(col % 10).to_string());
            out.push(' ');
        }
        out
    }

    /// Build a state from explicit rows (bottom row first), bypassing gravity.
    #[cfg(test)]
    pub(crate) fn from_rows(dims: Dimensions, rows: &[&[Cell]], to_move: Player) -> Self {
        assert_eq!(rows.len(), dims.rows);
        let cells: Vec<Cell> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        assert_eq!(cells.len(), dims.cells());
        let lowest_free_row = (0..dims.cols)
            .map(|col| {
                (0..dims.rows)
                    .find(|&row| cells[row * dims.cols + col] == Cell::Empty)
                    .unwrap_or(dims.rows)
            })
            .collect::<Vec<_>>()
            .into_boxed_slice();
        let moves_made = cells.iter().filter(|c| **c != Cell::Empty).count();
        let mut state = BoardState {
            dims,
            cells: cells.into_boxed_slice(),
            lowest_free_row,
            to_move,
            moves_made,
            status: GameStatus::InProgress,
        };
        state.status = compute_status(&state);
        state
    }
}

impl PartialEq for BoardState {
    fn eq(&self, other: &Self) -> bool {
        self.to_move == other.to_move && self.cells == other.cells
    }
}

impl Eq for BoardState {}

impl Hash for BoardState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
        self.to_move.hash(state);
    }
}

/// Single-line form: top row first, each row terminated by `|`.
impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.dims.rows).rev() {
            for col in 0..self.dims.cols {
                write!(f, "{}", self.cell(row, col).symbol())?;
            }
            f.write_str("|")?;
        }
        Ok(())
    }
}
