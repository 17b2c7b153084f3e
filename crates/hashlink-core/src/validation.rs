//! Chain verification: per-record checks and whole-chain conjunction.
//!
//! A chain is valid only if every record passes at its position. One bad
//! interior record invalidates the whole chain even when the head still
//! verifies in isolation.

use serde::{Deserialize, Serialize};

use crate::error::RecordIssue;
use crate::record::{Record, GENESIS_DIGEST};

/// Check one record in the context of its chain.
///
/// Checks run in a fixed order and the first failure is returned:
///
/// 1. `record.index` must equal `position`.
/// 2. At position 0 the digest must equal [`GENESIS_DIGEST`]. Nothing else is
///    checked there.
/// 3. Elsewhere: payload non-empty, previous digest present, stored digest
///    equal to the recomputed one, and previous digest equal to the digest of
///    `chain[position - 1]` when that record is available.
pub fn check_record(record: &Record, position: usize, chain: &[Record]) -> Result<(), RecordIssue> {
    let expected_index = position as u64;
    if record.index != expected_index {
        return Err(RecordIssue::IndexMismatch {
            expected: expected_index,
            got: record.index,
        });
    }

    if position == 0 {
        if record.digest != GENESIS_DIGEST {
            return Err(RecordIssue::InvalidGenesis {
                found: record.digest,
            });
        }
        return Ok(());
    }

    if record.payload.is_empty() {
        return Err(RecordIssue::EmptyPayload);
    }

    if record.previous_digest.is_none() {
        return Err(RecordIssue::MissingPreviousDigest);
    }

    let recomputed = record.compute_digest();
    if recomputed != record.digest {
        return Err(RecordIssue::DigestMismatch {
            expected: recomputed,
            actual: record.digest,
        });
    }

    if let Some(previous) = chain.get(position - 1) {
        if record.previous_digest != Some(previous.digest) {
            return Err(RecordIssue::BrokenLink {
                expected: previous.digest,
                got: record.previous_digest,
            });
        }
    }

    Ok(())
}

/// Check whether one record is valid at its position.
pub fn verify_record(record: &Record, position: usize, chain: &[Record]) -> bool {
    check_record(record, position, chain).is_ok()
}

/// Check whether every record in the chain is valid.
///
/// Stops at the first invalid record. An empty chain has no genesis and is
/// invalid.
pub fn verify_chain(chain: &[Record]) -> bool {
    !chain.is_empty()
        && chain
            .iter()
            .enumerate()
            .all(|(position, record)| verify_record(record, position, chain))
}

/// Scan the whole chain and describe every failure.
///
/// `report.valid` always agrees with [`verify_chain`] on the same input.
pub fn verify_chain_report(chain: &[Record]) -> VerificationReport {
    let failures: Vec<RecordFailure> = chain
        .iter()
        .enumerate()
        .filter_map(|(position, record)| {
            check_record(record, position, chain)
                .err()
                .map(|issue| RecordFailure { position, issue })
        })
        .collect();

    VerificationReport {
        valid: !chain.is_empty() && failures.is_empty(),
        records_checked: chain.len(),
        first_invalid: failures.first().map(|f| f.position),
        failures,
    }
}

/// A record that failed verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFailure {
    /// Position of the record in the chain.
    pub position: usize,
    /// The first check it failed.
    pub issue: RecordIssue,
}

/// Result of a full verification scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Whether the chain is valid.
    pub valid: bool,
    /// Number of records examined.
    pub records_checked: usize,
    /// Position of the first invalid record, if any.
    pub first_invalid: Option<usize>,
    /// Every failing record, in chain order.
    pub failures: Vec<RecordFailure>,
}

impl VerificationReport {
    /// True when the report covers a chain with no records at all.
    pub fn is_empty_chain(&self) -> bool {
        self.records_checked == 0
    }

    /// The first failure, if any.
    pub fn first_failure(&self) -> Option<&RecordFailure> {
        self.failures.first()
    }
}
