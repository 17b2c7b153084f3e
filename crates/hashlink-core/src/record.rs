//! Record: one immutable entry of the chain.
//!
//! A record is bound to its predecessor through `previous_digest`, and to its
//! own content through `digest`. Once created it is never edited; the chain
//! only grows by appending new records.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::canonical::record_digest;
use crate::types::Digest;

/// The sentinel digest carried by the genesis record.
///
/// It is compared by equality and never recomputed.
pub const GENESIS_DIGEST: Digest = Digest::ZERO;

/// A single chain entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Zero-based position in the chain.
    pub index: u64,

    /// Digest of the preceding record (None only for genesis).
    pub previous_digest: Option<Digest>,

    /// Payload bytes. Empty only for genesis.
    pub payload: Bytes,

    /// Creation time (Unix milliseconds). Opaque digest input, not ordered.
    pub timestamp: i64,

    /// Digest over (index, previous_digest, payload, timestamp).
    pub digest: Digest,
}

impl Record {
    /// The genesis record, created at the given time.
    pub fn genesis(timestamp: i64) -> Self {
        Self {
            index: 0,
            previous_digest: None,
            payload: Bytes::new(),
            timestamp,
            digest: GENESIS_DIGEST,
        }
    }

    /// Create a record that follows `previous`, computing its digest.
    pub fn next(previous: &Record, payload: impl Into<Bytes>, timestamp: i64) -> Self {
        let index = previous.index + 1;
        let previous_digest = Some(previous.digest);
        let payload = payload.into();
        let digest = record_digest(index, previous_digest.as_ref(), &payload, timestamp);
        Self {
            index,
            previous_digest,
            payload,
            timestamp,
            digest,
        }
    }

    /// Recompute the digest from this record's own fields.
    ///
    /// For a well-formed non-genesis record this equals `self.digest`.
    pub fn compute_digest(&self) -> Digest {
        record_digest(
            self.index,
            self.previous_digest.as_ref(),
            &self.payload,
            self.timestamp,
        )
    }

    /// Check if this record sits at the genesis position.
    pub fn is_genesis(&self) -> bool {
        self.index == 0
    }

    /// Payload as text, replacing invalid UTF-8.
    pub fn payload_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }
}
