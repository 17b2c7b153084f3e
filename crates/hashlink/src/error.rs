//! Error types for the ledger.

use hashlink_core::CoreError;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The config rejects empty payloads and one was offered.
    #[error("empty payload rejected at index {index}")]
    EmptyPayload { index: u64 },

    /// Core error.
    #[error("core error: {0}")]
    Core(#[from] CoreError),
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
