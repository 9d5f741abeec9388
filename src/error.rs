use std::path::PathBuf;

/// Errors raised while reading a column from an interactive source.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("not a valid column: {0:?}")]
    Parse(String),

    #[error("input closed before a move was entered")]
    Closed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that stop a game before it reaches a terminal state.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("move provider failed: {0}")]
    Input(#[from] InputError),

    #[error("game is already over")]
    GameOver,

    #[error("failed to report game progress: {0}")]
    Output(#[from] std::io::Error),
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
