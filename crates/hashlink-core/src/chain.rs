//! Chain: the ordered, append-only record store.
//!
//! A chain always starts with the genesis record and only grows at the end.
//! It owns its records exclusively; readers get shared slices.

use bytes::Bytes;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::record::Record;
use crate::types::Digest;
use crate::validation::{verify_chain, verify_chain_report, VerificationReport};

/// An append-only sequence of hash-linked records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    records: Vec<Record>,
}

impl Chain {
    /// Create a chain holding only the genesis record, stamped with the
    /// current time.
    pub fn initialize() -> Self {
        Self::initialize_at(now_millis())
    }

    /// Create a chain holding only the genesis record, with an explicit
    /// timestamp.
    pub fn initialize_at(timestamp: i64) -> Self {
        Self {
            records: vec![Record::genesis(timestamp)],
        }
    }

    /// Append a payload, stamped with the current time.
    ///
    /// Empty payloads are accepted here and rejected by verification.
    pub fn append(&mut self, payload: impl Into<Bytes>) -> &Record {
        self.append_at(payload, now_millis())
    }

    /// Append a payload with an explicit timestamp.
    pub fn append_at(&mut self, payload: impl Into<Bytes>, timestamp: i64) -> &Record {
        let record = Record::next(self.head(), payload, timestamp);
        self.records.push(record);
        self.head()
    }

    /// Append every payload from an ordered source, in order.
    ///
    /// Returns the number of records appended.
    pub fn extend_payloads<I>(&mut self, payloads: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Bytes>,
    {
        let before = self.records.len();
        for payload in payloads {
            self.append(payload);
        }
        self.records.len() - before
    }

    /// The most recently appended record (genesis for a fresh chain).
    pub fn head(&self) -> &Record {
        // Never empty: construction seeds genesis and nothing removes records.
        &self.records[self.records.len() - 1]
    }

    /// Digest of the head record.
    pub fn head_digest(&self) -> Digest {
        self.head().digest
    }

    /// The genesis record.
    pub fn genesis(&self) -> &Record {
        &self.records[0]
    }

    /// Get a record by position.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Number of records, genesis included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a chain built through this type.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records from genesis to head.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// All records as a slice.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Give up ownership of the records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Check whether every record is valid.
    pub fn verify(&self) -> bool {
        verify_chain(&self.records)
    }

    /// Scan every record and describe each failure.
    pub fn verify_report(&self) -> VerificationReport {
        verify_chain_report(&self.records)
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::initialize()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::GENESIS_DIGEST;
    use crate::validation::verify_record;

    #[test]
    fn test_initialize_has_genesis() {
        let chain = Chain::initialize();
        assert_eq!(chain.len(), 1);
        assert!(!chain.is_empty());

        let genesis = chain.genesis();
        assert_eq!(genesis.index, 0);
        assert!(genesis.previous_digest.is_none());
        assert_eq!(genesis.digest, GENESIS_DIGEST);
        assert!(verify_record(genesis, 0, chain.records()));
        assert_eq!(chain.head(), genesis);
    }

    #[test]
    fn test_append_grows_by_one() {
        let mut chain = Chain::initialize_at(1000);
        let prior_head = chain.head_digest();

        let record = chain.append_at("hello", 1001).clone();
        assert_eq!(chain.len(), 2);
        assert_eq!(record.index, 1);
        assert_eq!(record.previous_digest, Some(prior_head));
        assert_eq!(chain.head(), &record);
    }

    #[test]
    fn test_append_indices_and_linkage() {
        let mut chain = Chain::initialize();
        for i in 0..10 {
            chain.append(format!("payload {}", i));
        }

        assert_eq!(chain.len(), 11);
        for (i, record) in chain.iter().enumerate() {
            assert_eq!(record.index, i as u64);
        }
        for pair in chain.records().windows(2) {
            assert_eq!(pair[1].previous_digest, Some(pair[0].digest));
        }
        assert!(chain.verify());
    }

    #[test]
    fn test_append_does_not_touch_earlier_records() {
        let mut chain = Chain::initialize_at(0);
        chain.append_at("a", 1);
        let snapshot = chain.records().to_vec();

        chain.append_at("b", 2);
        assert_eq!(&chain.records()[..2], snapshot.as_slice());
    }

    #[test]
    fn test_append_accepts_empty_payload() {
        let mut chain = Chain::initialize();
        chain.append("");
        assert_eq!(chain.len(), 2);
        assert!(!chain.verify());
    }

    #[test]
    fn test_extend_payloads_in_order() {
        let mut chain = Chain::initialize();
        let appended = chain.extend_payloads(["one", "two", "three"]);

        assert_eq!(appended, 3);
        let payloads: Vec<_> = chain.iter().skip(1).map(|r| r.payload_lossy()).collect();
        assert_eq!(payloads, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_end_to_end_tamper() {
        let mut chain = Chain::initialize();
        chain.append("a");
        chain.append("b");
        chain.append("c");
        assert_eq!(chain.len(), 4);
        assert!(chain.verify());

        let mut records = chain.into_records();
        records[2].payload = Bytes::from_static(b"tampered");
        assert!(!verify_chain(&records));
    }

    #[test]
    fn test_into_iter_ref() {
        let mut chain = Chain::initialize();
        chain.append("a");
        let mut count = 0;
        for record in &chain {
            assert_eq!(record.index, count);
            count += 1;
        }
        assert_eq!(count, 2);
    }
}
