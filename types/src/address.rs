//! Miner address type with `bsv_` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The identity of a registered reward beneficiary, always prefixed with `bsv_`.
///
/// "Miner" is a nominal role here — a registered beneficiary of the emission
/// schedule, not a block producer. Key derivation and signature checking
/// belong to the host environment, so the address is an opaque string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MinerAddress(String);

impl MinerAddress {
    /// The standard prefix for all Bisective miner addresses.
    pub const PREFIX: &'static str = "bsv_";

    /// Create a new miner address from a raw string.
    ///
    /// # Panics
    /// Panics if the string does not start with `bsv_`.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(s.starts_with(Self::PREFIX), "address must start with bsv_");
        Self(s)
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this address is well-formed.
    pub fn is_valid(&self) -> bool {
        self.0.starts_with(Self::PREFIX) && self.0.len() > Self::PREFIX.len()
    }
}

impl fmt::Display for MinerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MinerAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
