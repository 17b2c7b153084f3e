//! The Ledger: an owned chain plus the policy around it.
//!
//! The Ledger wraps a [`Chain`] with configuration and logging. All state is
//! owned by the value; there is no process-wide chain.

use bytes::Bytes;

use hashlink_core::{Chain, Digest, Record, VerificationReport};

use crate::config::{EmptyPayloadPolicy, LedgerConfig};
use crate::error::{LedgerError, Result};

/// The main Ledger struct.
///
/// Provides:
/// - Appending payloads under the configured empty-payload policy
/// - Querying records by position or digest
/// - Whole-chain verification with a failure report
#[derive(Debug, Clone)]
pub struct Ledger {
    /// The record store.
    chain: Chain,
    /// Configuration.
    config: LedgerConfig,
}

impl Ledger {
    /// Create a ledger seeded with a fresh genesis record.
    pub fn new(config: LedgerConfig) -> Self {
        Self::with_chain(Chain::initialize(), config)
    }

    /// Wrap an existing chain.
    pub fn with_chain(chain: Chain, config: LedgerConfig) -> Self {
        Self { chain, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Get the underlying chain.
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Give up the ledger, keeping the chain.
    pub fn into_chain(self) -> Chain {
        self.chain
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Append Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a payload stamped with the current time.
    ///
    /// Returns the new record's digest.
    pub fn append(&mut self, payload: impl Into<Bytes>) -> Result<Digest> {
        let payload = self.admit(payload.into())?;
        let record = self.chain.append(payload);
        tracing::debug!(index = record.index, digest = %record.digest, "appended record");
        Ok(record.digest)
    }

    /// Append a payload with an explicit timestamp.
    pub fn append_at(&mut self, payload: impl Into<Bytes>, timestamp: i64) -> Result<Digest> {
        let payload = self.admit(payload.into())?;
        let record = self.chain.append_at(payload, timestamp);
        tracing::debug!(index = record.index, digest = %record.digest, "appended record");
        Ok(record.digest)
    }

    /// Append every payload from an ordered source, in order.
    ///
    /// Stops at the first rejected payload; records appended before it stay.
    /// Returns the number of records appended.
    pub fn append_all<I>(&mut self, payloads: I) -> Result<usize>
    where
        I: IntoIterator,
        I::Item: Into<Bytes>,
    {
        let mut appended = 0;
        for payload in payloads {
            self.append(payload)?;
            appended += 1;
        }
        Ok(appended)
    }

    fn admit(&self, payload: Bytes) -> Result<Bytes> {
        if payload.is_empty() && self.config.empty_payloads == EmptyPayloadPolicy::Reject {
            let index = self.chain.len() as u64;
            tracing::warn!(index, "rejected empty payload");
            return Err(LedgerError::EmptyPayload { index });
        }
        Ok(payload)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Number of records, genesis included.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Always false: a ledger holds at least the genesis record.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Get a record by position.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.chain.get(index)
    }

    /// The most recent record.
    pub fn head(&self) -> &Record {
        self.chain.head()
    }

    /// Find a record by its stored digest.
    pub fn find(&self, digest: &Digest) -> Option<&Record> {
        self.chain.iter().find(|r| &r.digest == digest)
    }

    /// Find a record by the hex encoding of its digest.
    pub fn find_hex(&self, hex: &str) -> Result<Option<&Record>> {
        let digest: Digest = hex.parse()?;
        Ok(self.find(&digest))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Verification
    // ─────────────────────────────────────────────────────────────────────────

    /// Check whether every record is valid.
    pub fn verify(&self) -> bool {
        self.chain.verify()
    }

    /// Scan every record and report each failure.
    pub fn verify_report(&self) -> VerificationReport {
        let report = self.chain.verify_report();

        if self.config.log_failures {
            for failure in &report.failures {
                tracing::warn!(position = failure.position, issue = %failure.issue, "record failed verification");
            }
        }
        tracing::info!(
            valid = report.valid,
            records = report.records_checked,
            failures = report.failures.len(),
            "verified chain"
        );

        report
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(LedgerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashlink_core::RecordIssue;

    fn rejecting() -> LedgerConfig {
        LedgerConfig {
            empty_payloads: EmptyPayloadPolicy::Reject,
            ..LedgerConfig::default()
        }
    }

    #[test]
    fn test_new_ledger_is_valid() {
        let ledger = Ledger::default();
        assert_eq!(ledger.len(), 1);
        assert!(!ledger.is_empty());
        assert!(ledger.verify());
    }

    #[test]
    fn test_append_returns_head_digest() {
        let mut ledger = Ledger::default();
        let digest = ledger.append("hello").unwrap();
        assert_eq!(ledger.head().digest, digest);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_accept_policy_appends_empty() {
        let mut ledger = Ledger::default();
        ledger.append("").unwrap();
        assert_eq!(ledger.len(), 2);

        let report = ledger.verify_report();
        assert!(!report.valid);
        assert_eq!(report.failures[0].issue, RecordIssue::EmptyPayload);
    }

    #[test]
    fn test_reject_policy_refuses_empty() {
        let mut ledger = Ledger::new(rejecting());
        assert_eq!(ledger.config().empty_payloads, EmptyPayloadPolicy::Reject);
        ledger.append("a").unwrap();

        let err = ledger.append("").unwrap_err();
        assert!(matches!(err, LedgerError::EmptyPayload { index: 2 }));
        assert_eq!(ledger.len(), 2);
        assert!(ledger.verify());
    }

    #[test]
    fn test_append_all_stops_at_rejection() {
        let mut ledger = Ledger::new(rejecting());
        let result = ledger.append_all(["a", "b", "", "c"]);

        assert!(matches!(result, Err(LedgerError::EmptyPayload { index: 3 })));
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_append_all_counts() {
        let mut ledger = Ledger::default();
        assert_eq!(ledger.append_all(vec!["x".to_string(), "y".to_string()]).unwrap(), 2);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_find_by_digest() {
        let mut ledger = Ledger::default();
        ledger.append_at("a", 1).unwrap();
        let digest = ledger.append_at("b", 2).unwrap();

        let found = ledger.find(&digest).unwrap();
        assert_eq!(found.index, 2);

        let by_hex = ledger.find_hex(&digest.to_hex()).unwrap().unwrap();
        assert_eq!(by_hex.index, 2);

        let missing = Digest::from_bytes([0x77; 32]);
        assert!(ledger.find(&missing).is_none());
    }

    #[test]
    fn test_find_hex_rejects_garbage() {
        let ledger = Ledger::default();
        assert!(matches!(ledger.find_hex("zz"), Err(LedgerError::Core(_))));
    }

    #[test]
    fn test_into_chain_keeps_records() {
        let mut ledger = Ledger::default();
        ledger.append("a").unwrap();
        let chain = ledger.into_chain();
        assert_eq!(chain.len(), 2);
    }
}
