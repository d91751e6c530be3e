use thiserror::Error;

/// Message shown to the user whenever a trade amount is rejected.
/// Both rejection kinds share it.
pub const INVALID_TRADE_MESSAGE: &str =
    "Gain must be greater than 0 and Loss must be non-negative.";

/// A trade rejected before it could touch the ledger.
///
/// Recoverable: the ledger is left exactly as it was and the caller is
/// expected to surface [`INVALID_TRADE_MESSAGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Gain amount was zero, negative, missing or not a finite number.
    #[error("Gain must be greater than 0 and Loss must be non-negative.")]
    InvalidGain,

    /// Loss amount was negative, missing or not a finite number.
    #[error("Gain must be greater than 0 and Loss must be non-negative.")]
    InvalidLoss,
}

/// Unified error type for the trade-ledger-core library.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Business Logic ──────────────────────────────────────────────
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // ── Storage / File ──────────────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Invalid history file: {0}")]
    InvalidFileFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<csv::Error> for CoreError {
    fn from(e: csv::Error) -> Self {
        // Unwrap plain I/O failures so callers see one category for disk problems
        if let csv::ErrorKind::Io(_) = e.kind() {
            return CoreError::FileIO(e.to_string());
        }
        CoreError::Csv(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
