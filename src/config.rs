//! Engine configuration
//!
//! Configuration is supplied once when an [`Engine`](crate::Engine) is built.
//! It can be assembled in code, or loaded from a TOML file where every field
//! is optional:
//!
//! ```toml
//! rows = 4
//! cols = 5
//! run_length = 3
//! depth_limit = 4
//! mode = "heuristic"
//! diagnostics = false
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Dimensions;
use crate::error::ConfigError;

/// Which search strategy the engine runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// Exhaustive minimax
    Plain,
    /// Minimax with alpha-beta pruning
    Pruned,
    /// Alpha-beta with a depth limit and a static heuristic at the cutoff
    #[default]
    #[serde(alias = "heuristic")]
    PrunedWithHeuristic,
}

impl SearchMode {
    /// Whether alpha-beta cutoffs are applied
    #[inline]
    pub fn prunes(self) -> bool {
        match self {
            SearchMode::Plain => false,
            SearchMode::Pruned | SearchMode::PrunedWithHeuristic => true,
        }
    }

    /// Whether the depth limit and heuristic apply
    #[inline]
    pub fn uses_heuristic(self) -> bool {
        match self {
            SearchMode::Plain | SearchMode::Pruned => false,
            SearchMode::PrunedWithHeuristic => true,
        }
    }
}

impl FromStr for SearchMode {
    type Err = ConfigError;

    /// Accepts `plain`, `pruned`, `heuristic` (or `pruned-with-heuristic`),
    /// and the single letters `a`, `b`, `c`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "plain" | "minimax" => Ok(SearchMode::Plain),
            "b" | "pruned" | "alphabeta" | "alpha-beta" => Ok(SearchMode::Pruned),
            "c" | "heuristic" | "pruned-with-heuristic" => Ok(SearchMode::PrunedWithHeuristic),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchMode::Plain => "plain",
            SearchMode::Pruned => "pruned",
            SearchMode::PrunedWithHeuristic => "heuristic",
        };
        f.write_str(name)
    }
}

/// Engine configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rows: usize,
    pub cols: usize,
    pub run_length: usize,
    /// Cutoff depth, used only in heuristic mode
    pub depth_limit: u32,
    pub mode: SearchMode,
    /// Log every table insertion
    pub diagnostics: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            rows: 6,
            cols: 7,
            run_length: 4,
            depth_limit: 6,
            mode: SearchMode::PrunedWithHeuristic,
            diagnostics: false,
        }
    }
}

impl EngineConfig {
    /// Configuration for a board with the given geometry and otherwise
    /// default settings.
    pub fn new(rows: usize, cols: usize, run_length: usize) -> Self {
        EngineConfig {
            rows,
            cols,
            run_length,
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_depth_limit(mut self, depth_limit: u32) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: bool) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Board geometry, validated.
    pub fn dimensions(&self) -> Result<Dimensions, ConfigError> {
        Dimensions::new(self.rows, self.cols, self.run_length)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dimensions()?;
        if self.mode.uses_heuristic() && self.depth_limit == 0 {
            return Err(ConfigError::InvalidDepthLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("A".parse::<SearchMode>().unwrap(), SearchMode::Plain);
        assert_eq!("pruned".parse::<SearchMode>().unwrap(), SearchMode::Pruned);
        assert_eq!(
            " Heuristic ".parse::<SearchMode>().unwrap(),
            SearchMode::PrunedWithHeuristic
        );
        assert!(matches!(
            "d".parse::<SearchMode>(),
            Err(ConfigError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_mode_flags() {
        assert!(!SearchMode::Plain.prunes());
        assert!(SearchMode::Pruned.prunes());
        assert!(!SearchMode::Pruned.uses_heuristic());
        assert!(SearchMode::PrunedWithHeuristic.prunes());
        assert!(SearchMode::PrunedWithHeuristic.uses_heuristic());
    }

    #[test]
    fn test_mode_display_round_trips() {
        for mode in [
            SearchMode::Plain,
            SearchMode::Pruned,
            SearchMode::PrunedWithHeuristic,
        ] {
            assert_eq!(mode.to_string().parse::<SearchMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_from_toml_partial() {
        let config = EngineConfig::from_toml_str(
            r#"
            rows = 3
            cols = 4
            run_length = 3
            mode = "pruned"
            "#,
        )
        .unwrap();
        assert_eq!(config.rows, 3);
        assert_eq!(config.cols, 4);
        assert_eq!(config.mode, SearchMode::Pruned);
        assert_eq!(config.depth_limit, 6);
        assert!(!config.diagnostics);
    }

    #[test]
    fn test_from_toml_heuristic_alias() {
        let config = EngineConfig::from_toml_str("mode = \"heuristic\"").unwrap();
        assert_eq!(config.mode, SearchMode::PrunedWithHeuristic);
    }

    #[test]
    fn test_from_toml_rejects_bad_values() {
        assert!(matches!(
            EngineConfig::from_toml_str("rows = 0"),
            Err(ConfigError::NonPositiveDimensions { rows: 0, cols: 7 })
        ));
        assert!(matches!(
            EngineConfig::from_toml_str("rows = \"six\""),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_run_length_too_long() {
        let config = EngineConfig::new(3, 4, 5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RunLengthTooLong { .. })
        ));
        // Exceeding only one dimension is allowed
        assert!(EngineConfig::new(3, 5, 5).validate().is_ok());
    }

    #[test]
    fn test_zero_depth_only_matters_for_heuristic() {
        let base = EngineConfig::new(3, 3, 3).with_depth_limit(0);
        assert!(matches!(
            base.clone().validate(),
            Err(ConfigError::InvalidDepthLimit)
        ));
        assert!(base.with_mode(SearchMode::Plain).validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let err = EngineConfig::load(Path::new("/nonexistent/connectk.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
