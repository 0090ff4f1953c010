//! Error types for text filling and outline formatting.

use thiserror::Error;

/// Result type for outline formatting operations.
pub type Result<T> = std::result::Result<T, OutlineError>;

/// Error type for text filling and outline formatting.
///
/// Apart from [`OutlineError::Io`], every variant is a violated
/// precondition: callers are expected to validate configuration once at
/// setup time, and none of these are recovered internally.
#[derive(Error, Debug)]
pub enum OutlineError {
    /// Line width too small for filling.
    #[error("line width must be greater than 9 (got {0})")]
    LineWidth(usize),

    /// Indentation width per level must leave room for at least one space.
    #[error("level width must be greater than 0")]
    LevelWidth,

    /// Unrecognized alignment direction.
    #[error("alignment must be 'l', 'r' or 'c' (got {0:?})")]
    Alignment(char),

    /// Roman numerals have no representation for zero.
    #[error("roman numerals are only defined for numbers greater than 0 (got {0})")]
    RomanNumeral(u32),

    /// Failure writing to the output sink.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
