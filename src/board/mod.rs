//! Board representation for connect-K

pub mod board;


// Re-exports
pub use board::BoardState;

use crate::error::ConfigError;

/// Largest supported row or column count.
pub const MAX_DIMENSION: usize = 127;

/// The two players. MAX moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Max,
    Min,
}

impl Player {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }

    /// +1 for MAX, -1 for MIN
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Player::Max => 1,
            Player::Min => -1,
        }
    }

    /// The cell a piece of this player occupies
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Player::Max => Cell::Max,
            Player::Min => Cell::Min,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Max => "MAX",
            Player::Min => "MIN",
        }
    }
}

/// Contents of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Max,
    Min,
}

impl Cell {
    /// Owner of the piece in this cell, if any
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Max => Some(Player::Max),
            Cell::Min => Some(Player::Min),
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Max => 'X',
            Cell::Min => 'O',
        }
    }
}

/// Derived status of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    MaxWin,
    MinWin,
    Tie,
}

impl GameStatus {
    /// Status for a completed run owned by `player`
    #[inline]
    pub fn win_for(player: Player) -> GameStatus {
        match player {
            Player::Max => GameStatus::MaxWin,
            Player::Min => GameStatus::MinWin,
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Board geometry shared by every state of one game.
///
/// Fixed for the lifetime of a game and never part of a state's identity:
/// states are only ever compared against states of the same game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
    pub run_length: usize,
}

impl Dimensions {
    /// Validate and build a geometry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when either dimension is zero or larger than
    /// [`MAX_DIMENSION`], when the run length is zero, or when the run length
    /// exceeds both dimensions (no line could ever be completed).
    pub fn new(rows: usize, cols: usize, run_length: usize) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::NonPositiveDimensions { rows, cols });
        }
        if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
            return Err(ConfigError::DimensionTooLarge {
                rows,
                cols,
                max: MAX_DIMENSION,
            });
        }
        if run_length == 0 {
            return Err(ConfigError::ZeroRunLength);
        }
        if run_length > rows && run_length > cols {
            return Err(ConfigError::RunLengthTooLong {
                run_length,
                rows,
                cols,
            });
        }
        Ok(Self {
            rows,
            cols,
            run_length,
        })
    }

    /// Total number of cells
    #[inline]
    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Check if (row, col) lies on the board
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.cols
    }
}
