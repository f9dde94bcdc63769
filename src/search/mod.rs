//! Search module for connect-K
//!
//! Contains:
//! - The memo table keyed by board state
//! - Minimax with optional alpha-beta pruning and depth cutoff

pub mod alphabeta;
pub mod tt;

pub use alphabeta::{SearchResult, SearchStats, Searcher};
pub use tt::{TTStats, TranspositionTable};
