//! Error types for factorview-core.

use thiserror::Error;

/// Result type alias for factorview operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for factorview operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed token in a selection script.
    #[error("invalid selection token: {token:?}")]
    InvalidToken {
        /// The offending token, as written in the script.
        token: String,
    },

    /// Factor index outside the valid range for the factorization.
    #[error("factor index {index} out of range for {n_factors} factors")]
    IndexOutOfRange {
        /// The rejected index.
        index: i64,
        /// Total number of factors available.
        n_factors: usize,
    },

    /// Combiner error.
    #[error("combiner error: {0}")]
    Combiner(String),
}
