//! # hashlink testkit
//!
//! Testing utilities for hashlink.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known digest inputs with expected outputs
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Deterministic chains and tampering helpers
//!
//! ## Golden Vectors
//!
//! ```rust
//! use hashlink_testkit::vectors::{all_vectors, digest_from_vector};
//!
//! for vector in all_vectors() {
//!     assert_eq!(digest_from_vector(&vector).to_hex(), vector.expected_digest);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use hashlink_testkit::generators::{chain_from_params, ChainParams};
//!
//! proptest! {
//!     #[test]
//!     fn built_chain_verifies(params: ChainParams) {
//!         prop_assert!(chain_from_params(&params).verify());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use hashlink_testkit::fixtures::{tamper_payload, ChainFixture};
//! use hashlink_core::verify_chain;
//!
//! let fixture = ChainFixture::with_payloads(["a", "b", "c"]);
//! let mut records = fixture.records();
//! tamper_payload(&mut records, 2, b"tampered");
//! assert!(!verify_chain(&records));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{forge_link, tamper_payload, tamper_timestamp, ChainFixture, FIXTURE_EPOCH};
pub use generators::{chain_from_params, ChainParams};
pub use vectors::{all_vectors, digest_from_vector, verify_all_vectors, GoldenVector};
