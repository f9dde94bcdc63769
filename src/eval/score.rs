//! Scoring constants
//!
//! Values are signed from MAX's point of view: positive favours MAX,
//! negative favours MIN, zero is a draw.

/// Scoring weights for terminal and heuristic values
pub struct Score;

impl Score {
    /// Numerator scale for the move-count magnitude `SCALE * cells / moves`.
    /// Fewer moves give a larger magnitude, so faster outcomes weigh more.
    pub const SCALE: i32 = 10_000;

    /// Added to terminal magnitudes in heuristic mode.
    /// A heuristic value is at most `magnitude + MAX_THREATS`, so a decided
    /// position always outranks an undecided one at the same move count.
    pub const TERMINAL_BIAS: i32 = 9;

    /// Upper bound on a single threat count: two windows on each of four axes.
    pub const MAX_THREATS: i32 = 8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bias_exceeds_threat_bound() {
        assert!(Score::TERMINAL_BIAS > Score::MAX_THREATS);
    }
}
