//! Library error type

use thiserror::Error;

/// Failures outside the normal analysis path. A snippet that does not parse is
/// not an error: it is reported inside the `AnalysisResult`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to set Python language: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("Parser produced no syntax tree")]
    NoTree,

    #[error("Invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
