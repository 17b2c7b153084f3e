//! Ledger configuration.

use serde::{Deserialize, Serialize};

/// What the ledger does with an empty payload on append.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyPayloadPolicy {
    /// Append it anyway; verification will flag the record.
    #[default]
    Accept,
    /// Refuse the append with [`LedgerError::EmptyPayload`](crate::LedgerError::EmptyPayload).
    Reject,
}

/// Configuration for the Ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Empty payload handling on append.
    pub empty_payloads: EmptyPayloadPolicy,
    /// Whether verification logs a warning per failing record.
    pub log_failures: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            empty_payloads: EmptyPayloadPolicy::Accept,
            log_failures: true,
        }
    }
}

impl LedgerConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
