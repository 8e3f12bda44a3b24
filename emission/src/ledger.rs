//! The population ledger — an append-only record of join events.
//!
//! Snapshots are stored ONCE globally, not per miner. A registration is O(1):
//! it either bumps the tail snapshot (same effective block) or appends one.
//! Reward computation for any miner intersects this sequence with the
//! halving schedule — O(s + k) where s = sections and k = joins spanned.

use crate::error::EmissionError;
use bisective_types::{BlockHeight, MinerAddress};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A recorded change in the active-miner count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationSnapshot {
    /// The effective block at which this count took effect
    /// (`max(genesis, join block)` — pre-genesis joins are pinned to genesis).
    pub block: BlockHeight,
    /// Active miners as of this snapshot. Non-decreasing across the
    /// sequence: there is no leave operation.
    pub num_miners: u64,
}

/// Ordered join history plus the per-miner starting index.
///
/// Snapshot indices are 1-based; index 0 is the "not a miner" sentinel, so
/// a missing entry in `miners` and an unset starting index mean the same
/// thing. The snapshot sequence is strictly increasing in `block`: joins
/// that land on the same effective block coalesce into one snapshot.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PopulationLedger {
    snapshots: Vec<PopulationSnapshot>,
    miners: HashMap<MinerAddress, u64>,
}

impl PopulationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a join at `effective_block` and return the 1-based index of
    /// the snapshot the miner starts from.
    ///
    /// Fails with `AlreadyRegistered` if the address already has a starting
    /// index; the rejection is atomic — no snapshot is touched.
    pub fn register(
        &mut self,
        address: MinerAddress,
        effective_block: BlockHeight,
    ) -> Result<u64, EmissionError> {
        if self.miners.contains_key(&address) {
            return Err(EmissionError::AlreadyRegistered(address));
        }

        let previous_total = match self.snapshots.last_mut() {
            // Coalesce simultaneous joins: same effective block, one snapshot.
            Some(last) if last.block == effective_block => {
                last.num_miners += 1;
                None
            }
            Some(last) => {
                debug_assert!(last.block < effective_block, "join block moved backwards");
                Some(last.num_miners)
            }
            None => Some(0),
        };
        if let Some(total) = previous_total {
            self.snapshots.push(PopulationSnapshot {
                block: effective_block,
                num_miners: total + 1,
            });
        }

        let index = self.snapshots.len() as u64;
        self.miners.insert(address, index);
        Ok(index)
    }

    /// Number of snapshots recorded so far.
    pub fn len(&self) -> u64 {
        self.snapshots.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot by 1-based index.
    pub fn snapshot(&self, index: u64) -> Option<&PopulationSnapshot> {
        index
            .checked_sub(1)
            .and_then(|i| self.snapshots.get(i as usize))
    }

    /// The most recent snapshot, if any miner has ever joined.
    pub fn latest(&self) -> Option<&PopulationSnapshot> {
        self.snapshots.last()
    }

    /// 1-based starting snapshot index for `address`, `None` if unregistered.
    pub fn starting_snapshot_of(&self, address: &MinerAddress) -> Option<u64> {
        self.miners.get(address).copied()
    }

    /// The full snapshot sequence, oldest first.
    pub fn snapshots(&self) -> &[PopulationSnapshot] {
        &self.snapshots
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, EmissionError> {
        bincode::serialize(self).map_err(|e| EmissionError::Serialization(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EmissionError> {
        bincode::deserialize(bytes).map_err(|e| EmissionError::Serialization(e.to_string()))
    }
}
