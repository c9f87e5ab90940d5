use crossword_core::CrosswordError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CrosswordError),

    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("could not parse {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("unknown preset {0:?}, expected mini, daily or large")]
    UnknownPreset(String),

    #[error("unknown theme {0:?}, expected dark, light or high-contrast")]
    UnknownTheme(String),

    #[error("answer grid in {path} does not fit a {size}x{size} puzzle")]
    AnswerShape { path: PathBuf, size: usize },

    #[error("terminal output failed: {0}")]
    Output(#[from] io::Error),
}
