//! Proptest generators for property-based testing.

use proptest::prelude::*;

use hashlink_core::{Chain, Digest};

/// Generate a random Digest.
pub fn digest() -> impl Strategy<Value = Digest> {
    any::<[u8; 32]>().prop_map(Digest::from_bytes)
}

/// Generate an optional previous digest.
pub fn previous_digest() -> impl Strategy<Value = Option<Digest>> {
    proptest::option::of(digest())
}

/// Generate a reasonable timestamp.
pub fn timestamp() -> impl Strategy<Value = i64> {
    0i64..=i64::MAX / 2
}

/// Generate payload bytes of specified max length.
pub fn payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a non-empty payload of specified max length.
pub fn non_empty_payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..=max_len.max(1))
}

/// Generate an ordered list of non-empty payloads.
pub fn payloads(max_records: usize) -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(non_empty_payload(64), 0..=max_records)
}

/// Parameters for generating a chain.
#[derive(Debug, Clone)]
pub struct ChainParams {
    pub genesis_timestamp: i64,
    pub entries: Vec<(Vec<u8>, i64)>,
}

impl Arbitrary for ChainParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            timestamp(),
            prop::collection::vec((non_empty_payload(64), timestamp()), 0..=16),
        )
            .prop_map(|(genesis_timestamp, entries)| ChainParams {
                genesis_timestamp,
                entries,
            })
            .boxed()
    }
}

/// Build a chain from parameters.
pub fn chain_from_params(params: &ChainParams) -> Chain {
    let mut chain = Chain::initialize_at(params.genesis_timestamp);
    for (payload, timestamp) in &params.entries {
        chain.append_at(payload.clone(), *timestamp);
    }
    chain
}
