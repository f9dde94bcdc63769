//! Evaluation module for connect-K positions
//!
//! This module provides the static scores the search stores in its table:
//! - Exact utilities for decided positions
//! - A threat-count heuristic for positions cut off at the depth limit

pub mod heuristic;
pub mod score;
pub mod threat;

pub use heuristic::{heuristic_eval, magnitude, utility};
pub use score::Score;
pub use threat::threat_count;
