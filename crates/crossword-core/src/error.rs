use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, CrosswordError>;

/// Top-level error for the crossword engine
#[derive(Debug, Error)]
pub enum CrosswordError {
    #[error("invalid generator configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid word bank: {0}")]
    Bank(#[from] BankError),
}

/// Rejected generator settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size {size} is below the minimum of {min}")]
    GridTooSmall { size: usize, min: usize },

    #[error("grid size {size} exceeds the maximum of {max}")]
    GridTooLarge { size: usize, max: usize },

    #[error("min_words must be at least 1")]
    ZeroMinWords,
}

/// Problems found while loading a word bank. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("line {line}: expected ANSWER<TAB>clue")]
    MissingClue { line: usize },

    #[error("line {line}: empty answer")]
    EmptyAnswer { line: usize },

    #[error("line {line}: answer {answer:?} contains characters outside A-Z")]
    InvalidCharacters { line: usize, answer: String },

    #[error("line {line}: answer {answer:?} has length {len}, expected 3 to 13")]
    InvalidLength { line: usize, answer: String, len: usize },
}
