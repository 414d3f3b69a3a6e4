use {std::path::PathBuf, thiserror::Error};

/// Errors produced by the withdrawal fee calculator and vector tooling.
#[derive(Error, Debug)]
pub enum FeeError {
    /// Arithmetic overflow during fee calculation.
    #[error("Fee calculation overflow")]
    Overflow,

    /// `fake_exponential` was called with a zero denominator.
    #[error("Fee calculation denominator must be > 0")]
    ZeroDenominator,

    /// The generation parameters are invalid (e.g. empty request counts).
    #[error("Invalid test vector configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A stored vector does not match what the fee rule produces.
    #[error("Vector {index}: {field} is {actual}, fee rule gives {expected}")]
    VectorMismatch {
        index: usize,
        field: &'static str,
        expected: u128,
        actual: u128,
    },

    /// The fixture on disk differs from a fresh generation.
    #[error("Fixture {} is stale, regenerate it", path.display())]
    StaleFixture { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
