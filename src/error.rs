use std::path::PathBuf;

/// Errors that can occur when building or loading an engine configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive (got {rows}x{cols})")]
    NonPositiveDimensions { rows: usize, cols: usize },

    #[error("board dimensions {rows}x{cols} exceed the maximum of {max}")]
    DimensionTooLarge { rows: usize, cols: usize, max: usize },

    #[error("run length must be at least 1")]
    ZeroRunLength,

    #[error("run length {run_length} exceeds both board dimensions ({rows}x{cols})")]
    RunLengthTooLong {
        run_length: usize,
        rows: usize,
        cols: usize,
    },

    #[error("heuristic search needs a depth limit of at least 1")]
    InvalidDepthLimit,

    #[error("unknown search mode '{0}' (expected plain, pruned or heuristic)")]
    UnknownMode(String),

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Errors raised when applying a move to a board state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {cols} columns)")]
    OutOfRange { column: usize, cols: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::RunLengthTooLong {
            run_length: 5,
            rows: 3,
            cols: 4,
        };
        assert_eq!(
            err.to_string(),
            "run length 5 exceeds both board dimensions (3x4)"
        );
    }

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::OutOfRange { column: 9, cols: 7 }.to_string(),
            "column 9 is out of range (board has 7 columns)"
        );
        assert_eq!(
            MoveError::ColumnFull { column: 2 }.to_string(),
            "column 2 is full"
        );
    }

    #[test]
    fn test_unknown_mode_display() {
        let err = ConfigError::UnknownMode("d".into());
        assert_eq!(
            err.to_string(),
            "unknown search mode 'd' (expected plain, pruned or heuristic)"
        );
    }
}
