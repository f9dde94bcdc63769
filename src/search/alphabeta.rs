//! Minimax search with optional alpha-beta pruning and depth cutoff
//!
//! This module implements the core search algorithm for the engine.
//! It uses plain minimax over MAX and MIN nodes with a memo table shared
//! across the whole tree.
//!
//! # Features
//!
//! - Memo table lookup before any other work (transpositions are free)
//! - Alpha-beta pruning in [`SearchMode::Pruned`] and
//!   [`SearchMode::PrunedWithHeuristic`]
//! - Depth cutoff with a threat-count heuristic in
//!   [`SearchMode::PrunedWithHeuristic`]
//! - Ascending column order: the lowest column wins ties
//!
//! # Example
//!
//! ```
//! use connectk::board::{BoardState, Dimensions};
//! use connectk::config::SearchMode;
//! use connectk::search::Searcher;
//!
//! let root = BoardState::new(Dimensions::new(1, 3, 2).unwrap());
//! let mut searcher = Searcher::new(SearchMode::Pruned, 0, false);
//!
//! let result = searcher.search_root(&root);
//! assert_eq!(result.best_column, Some(1));
//! ```
//!
//! # Known limitation
//!
//! Table entries carry no bound type. A node that fails low or high inside a
//! narrow window is still stored once its loop completes, and a cutoff value
//! stored at one depth is reused at any other depth. A later query through a
//! wider window can therefore be answered with a value that is not the true
//! minimax value. Pruned nodes themselves are never stored, and
//! [`Searcher::take_expanded`] reports when a query had to search rather
//! than hit the table.

use tracing::info;

use crate::board::{BoardState, Player};
use crate::config::SearchMode;
use crate::eval::{heuristic_eval, utility};

use super::{TTStats, TranspositionTable};

/// Value and chosen column for a position.
///
/// `value` is signed from MAX's point of view. `best_column` is `None` for
/// decided positions, which have no move to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub value: i32,
    pub best_column: Option<usize>,
}

impl SearchResult {
    #[inline]
    pub fn new(value: i32, best_column: Option<usize>) -> Self {
        Self { value, best_column }
    }

    /// Result for a decided position
    #[inline]
    pub fn terminal(value: i32) -> Self {
        Self {
            value,
            best_column: None,
        }
    }

    /// Starting point for a node's best-child scan: worst possible value
    /// for the player to move.
    #[inline]
    fn worst_for(player: Player) -> Self {
        match player {
            Player::Max => Self::terminal(i32::MIN),
            Player::Min => Self::terminal(i32::MAX),
        }
    }
}

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls into the recursive search
    pub nodes: u64,
    /// Calls answered straight from the table
    pub table_hits: u64,
    /// Positions scored by the heuristic at the depth limit
    pub cutoffs: u64,
    /// Nodes abandoned by an alpha-beta cutoff
    pub prunes: u64,
}

/// Recursive minimax searcher owning its memo table.
///
/// All mutable search state lives here, so independent searchers never
/// interfere. One searcher serves one caller at a time; there is no
/// internal locking.
#[derive(Debug)]
pub struct Searcher {
    mode: SearchMode,
    depth_limit: u32,
    diagnostics: bool,
    table: TranspositionTable,
    stats: SearchStats,
    /// Set whenever a node is expanded rather than read from the table
    expanded: bool,
}

impl Searcher {
    /// Create a searcher with an empty table.
    ///
    /// `depth_limit` only matters in [`SearchMode::PrunedWithHeuristic`].
    /// With `diagnostics` every table insertion is logged at `info` level
    /// under the `connectk::table` target.
    #[must_use]
    pub fn new(mode: SearchMode, depth_limit: u32, diagnostics: bool) -> Self {
        Self {
            mode,
            depth_limit,
            diagnostics,
            table: TranspositionTable::new(),
            stats: SearchStats::default(),
            expanded: false,
        }
    }

    #[must_use]
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    #[must_use]
    pub fn depth_limit(&self) -> u32 {
        self.depth_limit
    }

    /// Change the mode. The table is left as is until [`Searcher::reset`].
    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    pub fn set_depth_limit(&mut self, depth_limit: u32) {
        self.depth_limit = depth_limit;
    }

    /// Drop every table entry and zero all counters.
    pub fn reset(&mut self) {
        self.table.clear();
        self.stats = SearchStats::default();
        self.expanded = false;
    }

    /// Search `state` with an unbounded window at depth 0.
    pub fn search_root(&mut self, state: &BoardState) -> SearchResult {
        self.search(state, i32::MIN, i32::MAX, 0)
    }

    /// Read and clear the expansion flag.
    pub fn take_expanded(&mut self) -> bool {
        std::mem::take(&mut self.expanded)
    }

    /// Clear the expansion flag without reading it.
    pub fn clear_expanded(&mut self) {
        self.expanded = false;
    }

    /// Stored result for `state`, if any
    #[must_use]
    pub fn lookup(&self, state: &BoardState) -> Option<SearchResult> {
        self.table.probe(state)
    }

    #[must_use]
    pub fn table_size(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn prune_count(&self) -> u64 {
        self.stats.prunes
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[must_use]
    pub fn tt_stats(&self) -> TTStats {
        self.table.stats()
    }

    /// Recursive search.
    ///
    /// Order of checks: table hit, decided position, depth cutoff, then
    /// expansion of every legal column in ascending order.
    pub fn search(
        &mut self,
        state: &BoardState,
        mut alpha: i32,
        mut beta: i32,
        depth: u32,
    ) -> SearchResult {
        self.stats.nodes += 1;

        // Returned without checking the window
        if let Some(hit) = self.table.probe(state) {
            self.stats.table_hits += 1;
            return hit;
        }

        if state.is_terminal() {
            self.expanded = true;
            let result = SearchResult::terminal(utility(state, self.mode.uses_heuristic()));
            self.store(state, result);
            return result;
        }

        if self.mode.uses_heuristic() && depth >= self.depth_limit {
            self.stats.cutoffs += 1;
            let result = heuristic_eval(state);
            self.store(state, result);
            return result;
        }

        self.expanded = true;
        let mover = state.to_move();
        let prunes = self.mode.prunes();
        let mut best = SearchResult::worst_for(mover);

        for col in state.legal_columns() {
            let child = state.child(col);
            let reply = self.search(&child, alpha, beta, depth + 1);

            let improved = match mover {
                Player::Max => reply.value > best.value,
                Player::Min => reply.value < best.value,
            };
            if improved {
                best = SearchResult::new(reply.value, Some(col));
                if prunes {
                    match mover {
                        Player::Max => alpha = alpha.max(best.value),
                        Player::Min => beta = beta.min(best.value),
                    }
                }
            }

            if prunes {
                let cut = match mover {
                    Player::Max => best.value >= beta,
                    Player::Min => best.value <= alpha,
                };
                if cut {
                    // Not stored: the value is only a bound
                    self.stats.prunes += 1;
                    return best;
                }
            }
        }

        self.store(state, best);
        best
    }

    fn store(&mut self, state: &BoardState, result: SearchResult) {
        if self.diagnostics {
            let column = result
                .best_column
                .map_or_else(|| "none".to_string(), |c| c.to_string());
            info!(
                target: "connectk::table",
                "{} -> value={} column={}",
                state,
                result.value,
                column
            );
        }
        self.table.store(state.clone(), result);
    }
}
