//! Error type shared by the metrics, the cost model loader and clustering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Hamming distance is only defined for inputs of equal length.
    #[error("sequences differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Minkowski distances need a strictly positive order.
    #[error("minkowski order must be positive, got {0}")]
    InvalidOrder(i32),

    /// Bloom digests are processed in 32 bit words.
    #[error("bloom digest length must be a positive multiple of 4 bytes, got {0}")]
    InvalidDigestLength(usize),

    /// A condensed distance vector must hold `n(n-1)/2` entries.
    #[error("condensed matrix of length {len} does not fit {n} items")]
    MatrixShape { len: usize, n: usize },

    /// Semantically invalid configuration, e.g. a multi-character symbol.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
