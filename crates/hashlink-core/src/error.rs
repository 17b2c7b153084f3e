//! Error types for hashlink core.
//!
//! Verification outcomes are not errors: a record that fails a check is
//! described by a [`RecordIssue`] inside a report, never by an `Err` from the
//! verifier.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Digest;

/// Core errors that can occur when handling digests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid digest hex: {0}")]
    InvalidDigestHex(String),
}

/// Why a single record failed verification at its position.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordIssue {
    #[error("index mismatch: expected {expected}, got {got}")]
    IndexMismatch { expected: u64, got: u64 },

    #[error("genesis digest is not the sentinel: got {found}")]
    InvalidGenesis { found: Digest },

    #[error("payload is empty")]
    EmptyPayload,

    #[error("previous digest is missing")]
    MissingPreviousDigest,

    #[error("digest mismatch: stored {actual}, recomputed {expected}")]
    DigestMismatch { expected: Digest, actual: Digest },

    #[error("broken link: predecessor digest is {expected}, record points at {got:?}")]
    BrokenLink {
        expected: Digest,
        got: Option<Digest>,
    },
}
