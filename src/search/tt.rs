//! Transposition table for caching search results
//!
//! The table maps a board state to the value and column found for it.
//! Keys compare by grid and player to move only, so positions reached
//! through different move orders share one entry.
//!
//! # Example
//!
//! ```
//! use connectk::board::{BoardState, Dimensions};
//! use connectk::search::{SearchResult, TranspositionTable};
//!
//! let mut tt = TranspositionTable::new();
//! let root = BoardState::new(Dimensions::new(1, 3, 2).unwrap());
//!
//! tt.store(root.clone(), SearchResult::new(10_000, Some(1)));
//! assert_eq!(tt.probe(&root).and_then(|r| r.best_column), Some(1));
//! ```
//!
//! Entries carry no bound type and no search depth. A value stored under a
//! narrow alpha-beta window, or at a shallow cutoff, is returned unchanged
//! to any later query for the same state.

use std::collections::HashMap;

use crate::board::BoardState;

use super::SearchResult;

/// Memo table from board state to search result.
///
/// Entries are only ever added; [`TranspositionTable::clear`] drops them all
/// when a search tree is rebuilt.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<BoardState, SearchResult>,
    terminal: usize,
}

impl TranspositionTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a state.
    #[must_use]
    pub fn probe(&self, state: &BoardState) -> Option<SearchResult> {
        self.entries.get(state).copied()
    }

    /// Check if a state has an entry
    #[must_use]
    pub fn contains(&self, state: &BoardState) -> bool {
        self.entries.contains_key(state)
    }

    /// Store a result, replacing any earlier entry for the same state.
    pub fn store(&mut self, state: BoardState, result: SearchResult) {
        let terminal = state.is_terminal();
        if self.entries.insert(state, result).is_none() && terminal {
            self.terminal += 1;
        }
    }

    /// Number of stored states
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries in the table.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.terminal = 0;
    }

    /// Get statistics about table usage.
    #[must_use]
    pub fn stats(&self) -> TTStats {
        TTStats {
            entries: self.entries.len(),
            terminal: self.terminal,
        }
    }
}

/// Statistics about transposition table usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTStats {
    /// Number of stored states
    pub entries: usize,
    /// How many of those are decided positions
    pub terminal: usize,
}
