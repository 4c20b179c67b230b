use thiserror::Error;

/// Errors surfaced by tables, models and the sweep. Every failure is
/// returned to the caller immediately; nothing is retried or swallowed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("column {0:?} not found in feature table")]
    MissingColumn(String),

    #[error("unknown model family {0:?}, expected one of Ridge, Lasso, ElasticNet")]
    UnknownModelFamily(String),

    #[error("dimension mismatch: expected {expected} rows, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("model not fitted, call fit() first")]
    NotFitted,

    #[error("matrix is singular or nearly singular")]
    Singular,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, Error>;
