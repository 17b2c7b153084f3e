//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the canonical record encoding: any change to field
//! order, widths, tags, or the domain string changes the expected digests.

use serde::Serialize;

use hashlink_core::{record_digest, Digest};

use crate::fixtures::ChainFixture;

/// A golden test vector.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Record index.
    pub index: u64,
    /// Previous digest (hex), if any.
    pub previous_digest: Option<&'static str>,
    /// Payload bytes.
    pub payload: &'static [u8],
    /// Timestamp.
    pub timestamp: i64,
    /// Expected digest (hex).
    pub expected_digest: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "first record after genesis",
            index: 1,
            previous_digest: Some("0000000000000000000000000000000000000000000000000000000000000000"),
            payload: b"a",
            timestamp: 1736870400000,
            expected_digest: "b2537dd7ee9fbb555b8972e97facac2c8d2786a9bd7a841256924d74481bbbd4",
        },
        GoldenVector {
            name: "record without previous digest",
            index: 1,
            previous_digest: None,
            payload: b"a",
            timestamp: 1736870400000,
            expected_digest: "0f7919d84c729387de706a9669142c6621b83ccd93cb41bd3309f77ab3c0fe5c",
        },
        GoldenVector {
            name: "second record",
            index: 2,
            previous_digest: Some("abababababababababababababababababababababababababababababababab"),
            payload: b"b",
            timestamp: 1736870400001,
            expected_digest: "240c393565916805f2d5e78da87a16e1796ee57ebad9694cc88076dcf782ffba",
        },
        GoldenVector {
            name: "negative timestamp",
            index: 3,
            previous_digest: Some("1111111111111111111111111111111111111111111111111111111111111111"),
            payload: b"before the epoch",
            timestamp: -1,
            expected_digest: "b147fd753c35c1bd22bcfea1df14d1495f43022e17cd6d8109f97cca783e073f",
        },
        GoldenVector {
            name: "large index",
            index: 1 << 40,
            previous_digest: Some("4242424242424242424242424242424242424242424242424242424242424242"),
            payload: b"x",
            timestamp: 0,
            expected_digest: "4c00182fdb86ec31976ecca098397cebdd7c64e7299c9572b25d33d11f9640e6",
        },
        GoldenVector {
            name: "utf-8 payload",
            index: 1,
            previous_digest: Some("0000000000000000000000000000000000000000000000000000000000000000"),
            payload: "héllo wörld".as_bytes(),
            timestamp: 1736870400000,
            expected_digest: "178a270000144767258156e4c0d7ed2080f5afe83f766cff6f8b4071d2f16572",
        },
    ]
}

/// Expected digests of records 1, 2 and 3 of `ChainFixture::with_payloads(["a", "b", "c"])`.
pub const FIXTURE_ABC_DIGESTS: [&str; 3] = [
    "8e5ed658d62d67fe5cc5c63d50c75ecedf8ef9ec69baefc9e878a5bc36f27d1f",
    "71ee240d6f7dec9134013b2827994407b53df10b71f1305dd4b5b9bcbaacaec5",
    "cf0476b82945e93b829a89184f2c8862d86ebf15e0796e468036d29ccc1dc179",
];

/// Compute the digest described by a vector.
pub fn digest_from_vector(vector: &GoldenVector) -> Digest {
    let previous = vector
        .previous_digest
        .map(|hex| Digest::from_hex(hex).expect("golden vector previous digest is valid hex"));
    record_digest(vector.index, previous.as_ref(), vector.payload, vector.timestamp)
}

/// Verify all golden vectors. Returns a list of failures.
pub fn verify_all_vectors() -> Vec<String> {
    let mut failures = Vec::new();

    for vector in all_vectors() {
        let actual = digest_from_vector(&vector).to_hex();
        if actual != vector.expected_digest {
            failures.push(format!(
                "{}: expected {}, got {}",
                vector.name, vector.expected_digest, actual
            ));
        }
    }

    let fixture = ChainFixture::with_payloads(["a", "b", "c"]);
    for (record, expected) in fixture.chain.iter().skip(1).zip(FIXTURE_ABC_DIGESTS) {
        let actual = record.digest.to_hex();
        if actual != expected {
            failures.push(format!(
                "fixture record {}: expected {}, got {}",
                record.index, expected, actual
            ));
        }
    }

    failures
}

/// Render all vectors as JSON, for cross-implementation checks.
pub fn vectors_json() -> String {
    serde_json::to_string_pretty(&all_vectors()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_match() {
        let failures = verify_all_vectors();
        assert!(failures.is_empty(), "golden vector failures: {:#?}", failures);
    }

    #[test]
    fn test_vectors_have_unique_digests() {
        let vectors = all_vectors();
        let mut digests: Vec<_> = vectors.iter().map(|v| v.expected_digest).collect();
        digests.sort();
        digests.dedup();
        assert_eq!(digests.len(), vectors.len());
    }

    #[test]
    fn test_vectors_json() {
        let json: serde_json::Value = serde_json::from_str(&vectors_json()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), all_vectors().len());
        assert_eq!(json[0]["name"], "first record after genesis");
    }
}
