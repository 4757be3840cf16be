use std::path::PathBuf;

/// Reasons a drop request is rejected. None of them change the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is outside the board (expected 0..7)")]
    InvalidColumn(isize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Consistency failures inside the bit board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
}

/// Errors while replaying a move list such as `"4455"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error("could not parse '{ch}' at position {index} as a column (expected 1-7)")]
    BadDigit { index: usize, ch: char },

    #[error("move {index} (column {column}) rejected: {source}")]
    Move {
        index: usize,
        column: usize,
        source: MoveError,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
