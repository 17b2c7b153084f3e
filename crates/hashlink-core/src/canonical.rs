//! Canonical encoding of record fields for digest computation.
//!
//! Every field is either fixed-width or length-prefixed, so two different
//! field tuples can never produce the same byte string:
//!
//! ```text
//! DOMAIN || index:u64be || prev_tag:u8 [|| prev:32] || len:u64be || payload || timestamp:i64be
//! ```
//!
//! `prev_tag` is `0x00` when there is no previous digest and `0x01` when 32
//! digest bytes follow. Integers are big-endian so the encoding is identical
//! on every platform.

use sha2::{Digest as _, Sha256};

use crate::types::Digest;

/// Domain separation tag prefixed to every encoded record.
pub const RECORD_DOMAIN: &[u8] = b"hashlink-record-v0:";

/// Tag bytes for the optional previous digest.
mod tags {
    pub const NO_PREVIOUS: u8 = 0x00;
    pub const PREVIOUS: u8 = 0x01;
}

/// Encode record fields to their canonical bytes.
pub fn canonical_record_bytes(
    index: u64,
    previous_digest: Option<&Digest>,
    payload: &[u8],
    timestamp: i64,
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(RECORD_DOMAIN.len() + 8 + 33 + 8 + payload.len() + 8);
    buf.extend_from_slice(RECORD_DOMAIN);
    buf.extend_from_slice(&index.to_be_bytes());
    encode_previous(&mut buf, previous_digest);
    encode_payload(&mut buf, payload);
    buf.extend_from_slice(&timestamp.to_be_bytes());
    buf
}

/// Compute the digest of a record's fields: SHA-256 of the canonical bytes.
pub fn record_digest(
    index: u64,
    previous_digest: Option<&Digest>,
    payload: &[u8],
    timestamp: i64,
) -> Digest {
    let bytes = canonical_record_bytes(index, previous_digest, payload, timestamp);
    Digest(Sha256::digest(&bytes).into())
}

fn encode_previous(buf: &mut Vec<u8>, previous_digest: Option<&Digest>) {
    match previous_digest {
        Some(digest) => {
            buf.push(tags::PREVIOUS);
            buf.extend_from_slice(digest.as_bytes());
        }
        None => buf.push(tags::NO_PREVIOUS),
    }
}

fn encode_payload(buf: &mut Vec<u8>, payload: &[u8]) {
    buf.extend_from_slice(&(payload.len() as u64).to_be_bytes());
    buf.extend_from_slice(payload);
}
