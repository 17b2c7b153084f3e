//! # hashlink
//!
//! A minimal hash-linked ledger: an append-only sequence of records, each
//! bound to its predecessor by digest, and a verifier that confirms no record
//! has been tampered with.
//!
//! ## Overview
//!
//! - **Records**: Immutable. Each carries the digest of the one before it.
//! - **Genesis**: The first record, with a fixed sentinel digest.
//! - **Verification**: Every record must pass at its position. One bad
//!   interior record invalidates the whole chain.
//!
//! ## Usage
//!
//! ```rust
//! use hashlink::{Ledger, LedgerConfig};
//!
//! let mut ledger = Ledger::new(LedgerConfig::default());
//! ledger.append_all(["a", "b", "c"]).unwrap();
//!
//! let report = ledger.verify_report();
//! assert!(report.valid);
//! assert_eq!(report.records_checked, 4);
//! ```
//!
//! ## Re-exports
//!
//! - `hashlink::core` - Core primitives (Record, Digest, Chain, verifier)

pub mod config;
pub mod error;
pub mod ledger;
pub mod source;

// Re-export component crates
pub use hashlink_core as core;

// Re-export main types for convenience
pub use config::{EmptyPayloadPolicy, LedgerConfig};
pub use error::{LedgerError, Result};
pub use ledger::Ledger;

// Re-export commonly used core types
pub use hashlink_core::{
    verify_chain, verify_chain_report, verify_record, Chain, Digest, Record, RecordFailure,
    RecordIssue, VerificationReport, GENESIS_DIGEST,
};
