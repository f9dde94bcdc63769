//! Connect-K game-tree search engine
//!
//! Computes the game-theoretically optimal move and minimax value for any
//! reachable position of a generalised connect-four game:
//! - Configurable rows, columns and run length
//! - Pieces drop to the lowest free row of a column
//! - MAX moves first; the first run of `run_length` decides the game
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Immutable board states with structural equality and hashing
//! - [`rules`]: Whole-grid win detection
//! - [`eval`]: Terminal utility and the threat-count heuristic
//! - [`search`]: Memo table and minimax / alpha-beta search
//! - [`engine`]: Main engine integrating all components
//! - [`config`]: Engine configuration and TOML loading
//!
//! # Quick Start
//!
//! ```
//! use connectk::{Engine, EngineConfig, SearchMode};
//!
//! let config = EngineConfig::new(3, 3, 3).with_mode(SearchMode::Pruned);
//! let mut engine = Engine::new(config).unwrap();
//! engine.build_search_tree();
//!
//! // Play a move and ask for the reply
//! let state = engine.root().apply_move(1).unwrap();
//! let reply = engine.evaluate(&state);
//! if engine.was_freshly_expanded() {
//!     println!("position was pruned during the build; searched again");
//! }
//! println!("value {} column {:?}", reply.value, reply.best_column);
//! ```
//!
//! # Search Modes
//!
//! 1. Plain minimax over the full tree
//! 2. Alpha-beta pruning
//! 3. Alpha-beta with a depth limit and a static heuristic at the cutoff

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{BoardState, Cell, Dimensions, GameStatus, Player};
pub use config::{EngineConfig, SearchMode};
pub use engine::{Engine, Outcome};
pub use error::{ConfigError, MoveError};
pub use search::SearchResult;
