//! Error types for hop parsing.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HopError {
    #[error("malformed line {line}: expected at least 3 space-separated fields, got {tokens}")]
    MalformedLine { line: usize, tokens: usize },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

pub type HopResult<T> = Result<T, HopError>;
