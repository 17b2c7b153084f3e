//! # hashlink core
//!
//! Pure primitives for a hash-linked ledger: records, digests, the chain
//! store, and its verifier.
//!
//! This crate contains no I/O and no logging. It is pure computation over
//! in-memory records.
//!
//! ## Key Types
//!
//! - [`Record`] - One immutable chain entry
//! - [`Digest`] - SHA-256 digest of a record's canonical bytes
//! - [`Chain`] - Append-only record store seeded with the genesis record
//! - [`VerificationReport`] - Every failing record found by a full scan
//!
//! ## Canonicalization
//!
//! Record digests are computed over a fixed, length-prefixed encoding. See
//! the [`canonical`] module.
//!
//! ## Usage
//!
//! ```rust
//! use hashlink_core::{verify_chain, Chain};
//!
//! let mut chain = Chain::initialize();
//! chain.append("a");
//! chain.append("b");
//! assert!(chain.verify());
//!
//! let mut records = chain.into_records();
//! records[1].payload = "tampered".into();
//! assert!(!verify_chain(&records));
//! ```

pub mod canonical;
pub mod chain;
pub mod error;
pub mod record;
pub mod types;
pub mod validation;

pub use canonical::{canonical_record_bytes, record_digest, RECORD_DOMAIN};
pub use chain::Chain;
pub use error::{CoreError, RecordIssue};
pub use record::{Record, GENESIS_DIGEST};
pub use types::Digest;
pub use validation::{
    check_record, verify_chain, verify_chain_report, verify_record, RecordFailure,
    VerificationReport,
};
