//! Main engine tying the board model to the search
//!
//! The engine owns the root position, the searcher and its memo table.
//! A caller builds the tree once, then asks for the optimal move of each
//! position the live game reaches:
//!
//! 1. [`Engine::build_search_tree`] searches the root from scratch
//! 2. [`Engine::evaluate`] answers any reachable position, from the table
//!    when possible and by a fresh search otherwise
//! 3. [`Engine::was_freshly_expanded`] tells whether that answer needed a
//!    search (typically a branch pruned during the build)
//!
//! # Example
//!
//! ```
//! use connectk::{Engine, EngineConfig, Outcome, SearchMode};
//!
//! let config = EngineConfig::new(1, 3, 2).with_mode(SearchMode::Pruned);
//! let mut engine = Engine::new(config).unwrap();
//!
//! let root = engine.build_search_tree();
//! assert_eq!(root.best_column, Some(1));
//! assert_eq!(engine.predicted_outcome(&engine.root().clone()), Outcome::MaxWin);
//! ```

use tracing::debug;

use crate::board::BoardState;
use crate::config::{EngineConfig, SearchMode};
use crate::error::ConfigError;
use crate::search::{SearchResult, SearchStats, Searcher, TTStats};

/// Game-theoretic outcome predicted for a position under perfect play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    MaxWin,
    MinWin,
    Tie,
}

impl Outcome {
    /// Outcome implied by the sign of a search value
    #[inline]
    pub fn from_value(value: i32) -> Self {
        match value.signum() {
            1 => Outcome::MaxWin,
            -1 => Outcome::MinWin,
            _ => Outcome::Tie,
        }
    }

    /// One-sentence summary for display
    pub fn describe(self) -> &'static str {
        match self {
            Outcome::MaxWin => "First player has a guaranteed win with perfect play.",
            Outcome::MinWin => "Second player has a guaranteed win with perfect play.",
            Outcome::Tie => {
                "Neither player has a guaranteed win; game will end in tie with perfect play on both sides."
            }
        }
    }
}

/// Search engine for one connect-K game.
///
/// Holds mutable search state (table, prune counter, expansion flag), so
/// queries take `&mut self`. One engine serves one caller at a time.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    root: BoardState,
    searcher: Searcher,
}

impl Engine {
    /// Create an engine from a configuration.
    ///
    /// The table starts empty; call [`Engine::build_search_tree`] before
    /// querying. Querying first still works but searches from scratch.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configuration fails validation.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let root = BoardState::new(config.dimensions()?);
        let searcher = Searcher::new(config.mode, config.depth_limit, config.diagnostics);
        Ok(Self {
            config,
            root,
            searcher,
        })
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The empty starting position
    #[must_use]
    pub fn root(&self) -> &BoardState {
        &self.root
    }

    /// Switch search strategy. Takes effect for new entries only; call
    /// [`Engine::build_search_tree`] to rebuild the table under the new mode.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidDepthLimit`] when switching to heuristic mode
    /// with a zero depth limit.
    pub fn set_mode(&mut self, mode: SearchMode) -> Result<(), ConfigError> {
        let config = EngineConfig {
            mode,
            ..self.config.clone()
        };
        config.validate()?;
        self.config = config;
        self.searcher.set_mode(mode);
        Ok(())
    }

    /// Change the heuristic cutoff depth. Same rebuild caveat as
    /// [`Engine::set_mode`].
    pub fn set_depth_limit(&mut self, depth_limit: u32) -> Result<(), ConfigError> {
        let config = EngineConfig {
            depth_limit,
            ..self.config.clone()
        };
        config.validate()?;
        self.config = config;
        self.searcher.set_depth_limit(depth_limit);
        Ok(())
    }

    /// Reset the table and counters, then search the root with an unbounded
    /// window. Calling again rebuilds from scratch.
    pub fn build_search_tree(&mut self) -> SearchResult {
        self.searcher.reset();
        let result = self.searcher.search_root(&self.root);
        self.searcher.clear_expanded();

        debug!(
            mode = %self.config.mode,
            table_size = self.searcher.table_size(),
            prunes = self.searcher.prune_count(),
            value = result.value,
            column = ?result.best_column,
            "search tree built"
        );
        result
    }

    /// Optimal value and column for `state`.
    ///
    /// Answered from the table when the state is stored, otherwise searched
    /// with an unbounded window. A stored value is returned as is, even if it
    /// was computed under a narrower window.
    pub fn evaluate(&mut self, state: &BoardState) -> SearchResult {
        debug_assert_eq!(state.dimensions(), self.root.dimensions());
        self.searcher.clear_expanded();
        self.searcher.search_root(state)
    }

    /// Number of stored states
    #[must_use]
    pub fn table_size(&self) -> usize {
        self.searcher.table_size()
    }

    /// Alpha-beta cutoffs since the last build
    #[must_use]
    pub fn prune_count(&self) -> u64 {
        self.searcher.prune_count()
    }

    /// Whether the last [`Engine::evaluate`] had to expand any node rather
    /// than read the table. Reading clears the flag.
    pub fn was_freshly_expanded(&mut self) -> bool {
        self.searcher.take_expanded()
    }

    /// Outcome implied by the stored value for `state`; [`Outcome::Tie`] when
    /// the state is not stored.
    #[must_use]
    pub fn predicted_outcome(&self, state: &BoardState) -> Outcome {
        self.searcher
            .lookup(state)
            .map_or(Outcome::Tie, |result| Outcome::from_value(result.value))
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.searcher.stats()
    }

    #[must_use]
    pub fn tt_stats(&self) -> TTStats {
        self.searcher.tt_stats()
    }
}
