//! Error types for Ledger-FL

use thiserror::Error;

/// Recoverable errors in Ledger-FL.
///
/// Rejections (duplicate authentication, unauthenticated submission) and
/// integrity failures are reported as `bool` / [`ChainStatus`](crate::verification::ChainStatus)
/// values instead.
#[derive(Error, Debug)]
pub enum LedgerFlError {
    /// The global model has no weights
    #[error("Model dimension must be non-zero")]
    EmptyModel,

    /// A ledger payload does not match the model dimension
    #[error("Dimension mismatch at block {block}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Index of the offending block
        block: u64,
        /// Model dimension
        expected: usize,
        /// Payload length found in the block
        actual: usize,
    },

    /// Drift tolerance is negative or not finite
    #[error("Invalid drift tolerance: {0}")]
    InvalidTolerance(f32),

    /// Mining difficulty is too high to mine in practice
    #[error("Invalid proof difficulty: {0} (must be at most 8)")]
    InvalidDifficulty(usize),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    ConfigError(String),
}

impl From<toml::de::Error> for LedgerFlError {
    fn from(e: toml::de::Error) -> Self {
        LedgerFlError::ConfigError(e.to_string())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, LedgerFlError>;
