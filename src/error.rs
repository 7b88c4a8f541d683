//! Error type shared by grammar loading, expansion and interpretation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, expanding or interpreting an L-System.
#[derive(Debug, Error)]
pub enum FractalError {
    #[error("cannot read grammar source {}: {source}", path.display())]
    GrammarRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed grammar: {0}")]
    GrammarLoad(String),

    #[error("generation count must be at least 1, got {0}")]
    InvalidGenerationCount(i64),

    #[error("direction count must be at least 1, got {0}")]
    InvalidDirectionCount(i64),

    /// `]` with no matching `[`. `index` is the char offset in the command string.
    #[error("branch stack underflow at symbol {index}")]
    StackUnderflow { index: usize },

    #[error("segment sink failed: {0}")]
    Sink(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, FractalError>;
