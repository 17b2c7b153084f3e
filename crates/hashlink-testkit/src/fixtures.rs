//! Test fixtures and helpers.
//!
//! Common setup code for integration tests: deterministic chains and
//! tampering helpers.

use bytes::Bytes;
use hashlink_core::{Chain, Digest, Record};

/// Timestamp of the genesis record in fixture chains.
pub const FIXTURE_EPOCH: i64 = 1_736_870_400_000;

/// A chain with deterministic timestamps.
///
/// Genesis is stamped [`FIXTURE_EPOCH`]; the record at index `i` is stamped
/// `FIXTURE_EPOCH + i`.
pub struct ChainFixture {
    pub chain: Chain,
}

impl ChainFixture {
    /// A chain holding only the genesis record.
    pub fn new() -> Self {
        Self {
            chain: Chain::initialize_at(FIXTURE_EPOCH),
        }
    }

    /// A chain with the given payloads appended in order.
    pub fn with_payloads<I>(payloads: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Bytes>,
    {
        let mut fixture = Self::new();
        for payload in payloads {
            fixture.append(payload);
        }
        fixture
    }

    /// A chain with `count` generated payloads ("record 1", "record 2", ...).
    pub fn with_len(count: usize) -> Self {
        Self::with_payloads((1..=count).map(|i| format!("record {}", i)))
    }

    /// Append with the next deterministic timestamp.
    pub fn append(&mut self, payload: impl Into<Bytes>) -> Digest {
        let timestamp = FIXTURE_EPOCH + self.chain.len() as i64;
        self.chain.append_at(payload, timestamp).digest
    }

    /// A copy of the records, for tampering.
    pub fn records(&self) -> Vec<Record> {
        self.chain.records().to_vec()
    }
}

impl Default for ChainFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Overwrite one record's payload without recomputing anything.
pub fn tamper_payload(records: &mut [Record], index: usize, payload: &[u8]) {
    records[index].payload = Bytes::copy_from_slice(payload);
}

/// Overwrite one record's timestamp without recomputing anything.
pub fn tamper_timestamp(records: &mut [Record], index: usize, timestamp: i64) {
    records[index].timestamp = timestamp;
}

/// Replace one record with a self-consistent forgery.
///
/// The forged record carries the same payload and position but is hashed over
/// a fabricated predecessor, so its own digest recomputes correctly while its
/// link does not match the real predecessor. `index` must not be 0.
pub fn forge_link(records: &mut [Record], index: usize) {
    let original = &records[index];
    let fake_previous = Record {
        index: original.index - 1,
        previous_digest: None,
        payload: Bytes::from_static(b"forged predecessor"),
        timestamp: 0,
        digest: Digest::from_bytes([0xee; 32]),
    };
    let forged = Record::next(&fake_previous, original.payload.clone(), original.timestamp);
    records[index] = forged;
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashlink_core::{verify_chain, verify_chain_report, RecordIssue};

    #[test]
    fn test_fixture_is_deterministic() {
        let a = ChainFixture::with_payloads(["a", "b", "c"]);
        let b = ChainFixture::with_payloads(["a", "b", "c"]);
        assert_eq!(a.chain, b.chain);
        assert!(a.chain.verify());
    }

    #[test]
    fn test_fixture_timestamps() {
        let fixture = ChainFixture::with_len(3);
        for record in &fixture.chain {
            assert_eq!(record.timestamp, FIXTURE_EPOCH + record.index as i64);
        }
    }

    #[test]
    fn test_tamper_payload_detected() {
        let fixture = ChainFixture::with_len(5);
        let mut records = fixture.records();
        tamper_payload(&mut records, 2, b"evil");
        assert!(!verify_chain(&records));
    }

    #[test]
    fn test_tamper_timestamp_detected() {
        let fixture = ChainFixture::with_len(3);
        let mut records = fixture.records();
        tamper_timestamp(&mut records, 1, 0);
        assert!(!verify_chain(&records));
    }

    #[test]
    fn test_forge_link_detected_as_broken_link() {
        let fixture = ChainFixture::with_len(4);
        let mut records = fixture.records();
        forge_link(&mut records, 2);

        assert_eq!(records[2].digest, records[2].compute_digest());
        let report = verify_chain_report(&records);
        assert_eq!(report.first_invalid, Some(2));
        assert!(matches!(
            report.failures[0].issue,
            RecordIssue::BrokenLink { .. }
        ));
    }
}
