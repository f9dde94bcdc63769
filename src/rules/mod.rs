//! Game rules for connect-K
//!
//! Win detection is a pure function of the grid: a state's status never
//! depends on the move that produced it.

pub mod win;

// Re-exports for convenient access
pub use win::{compute_status, find_run, has_run_at};
