//! The accrual engine — overlays the halving schedule onto the population
//! ledger and sums each constant-rate, constant-population segment.

use crate::error::EmissionError;
use crate::ledger::PopulationLedger;
use crate::schedule;
use bisective_types::{BlockHeight, EmissionParams, MinerAddress};
use serde::{Deserialize, Serialize};

/// Blocks between engine creation and the emission genesis. Gives miners a
/// window to register before rewards start flowing; joins inside the window
/// are pinned to genesis.
pub const GENESIS_DELAY: u64 = 10;

/// The emission engine — registers miners and computes accrued rewards.
///
/// The only mutating operation is [`register_miner`](Self::register_miner);
/// queries are pure reads. Mutations must be serialized by the host (the
/// coalescing rule depends on strict ordering), which falls out of `&mut
/// self` for a single-owner host.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmissionEngine {
    params: EmissionParams,
    genesis: BlockHeight,
    ledger: PopulationLedger,
}

impl EmissionEngine {
    /// Create an engine at `created_at`; genesis lands `GENESIS_DELAY`
    /// blocks later. Zero-valued params are rejected here, never deferred
    /// into query-time division.
    pub fn new(params: EmissionParams, created_at: BlockHeight) -> Result<Self, EmissionError> {
        if params.initial_reward == 0 {
            return Err(EmissionError::ZeroInitialReward);
        }
        if params.bisection_interval == 0 {
            return Err(EmissionError::ZeroBisectionInterval);
        }
        Ok(Self {
            params,
            genesis: created_at.saturating_add(GENESIS_DELAY),
            ledger: PopulationLedger::new(),
        })
    }

    /// Register `address` as a miner at `current_block`.
    ///
    /// The effective join block is `max(genesis, current_block)`. A second
    /// registration for the same address fails and leaves all state
    /// unchanged.
    pub fn register_miner(
        &mut self,
        address: MinerAddress,
        current_block: BlockHeight,
    ) -> Result<(), EmissionError> {
        let effective = current_block.max(self.genesis);
        self.ledger.register(address, effective)?;
        Ok(())
    }

    /// Total reward accrued by `address` up to and including `current_block`.
    ///
    /// Pure and infallible: unregistered miners and miners with no elapsed
    /// blocks get 0, as does the (astronomically sized) overflowing case.
    pub fn available_reward(&self, address: &MinerAddress, current_block: BlockHeight) -> u128 {
        self.available_reward_checked(address, current_block)
            .unwrap_or(0)
    }

    /// Checked variant of [`available_reward`](Self::available_reward);
    /// fails with `Overflow` if the accrued total exceeds `u128`.
    pub fn available_reward_checked(
        &self,
        address: &MinerAddress,
        current_block: BlockHeight,
    ) -> Result<u128, EmissionError> {
        let Some(start_index) = self.ledger.starting_snapshot_of(address) else {
            return Ok(0);
        };
        self.accrue_from(start_index, current_block)
            .ok_or(EmissionError::Overflow)
    }

    /// Walks the merged boundary sequence of the two partitions: lazily
    /// generated halving-section boundaries and the stored population
    /// snapshots from `start_index` onward. Each segment has a constant rate
    /// and population, contributing `(rate × len) / population` with the
    /// division floored per segment. `None` on arithmetic overflow.
    fn accrue_from(&self, start_index: u64, current_block: BlockHeight) -> Option<u128> {
        // The starting index always points at a live snapshot.
        let mut cursor = self.ledger.snapshot(start_index)?.block;
        if current_block <= cursor {
            return Some(0);
        }

        let interval = self.params.bisection_interval;
        let mut snapshot_index = start_index;
        let mut total: u128 = 0;

        while cursor < current_block {
            let population = self.ledger.snapshot(snapshot_index)?.num_miners;
            let section = schedule::section_of(self.genesis, interval, cursor);
            let rate = schedule::rate_in_section(self.params.initial_reward, section);
            if rate == 0 {
                // The rate never recovers once it halves to zero; every
                // remaining segment contributes nothing.
                break;
            }

            let mut end = schedule::next_section_boundary(self.genesis, interval, cursor)
                .min(current_block);
            let next_join = self.ledger.snapshot(snapshot_index + 1).map(|s| s.block);
            if let Some(join_block) = next_join {
                if join_block < end {
                    end = join_block;
                }
            }

            let len = end.blocks_since(cursor) as u128;
            let contribution = rate.checked_mul(len)? / population as u128;
            total = total.checked_add(contribution)?;

            if next_join == Some(end) {
                snapshot_index += 1;
            }
            cursor = end;
        }

        Some(total)
    }

    // ── Read-only accessors ──────────────────────────────────────────────

    /// The block at which section 0 begins.
    pub fn genesis(&self) -> BlockHeight {
        self.genesis
    }

    pub fn params(&self) -> &EmissionParams {
        &self.params
    }

    pub fn ledger(&self) -> &PopulationLedger {
        &self.ledger
    }

    pub fn num_snapshots(&self) -> u64 {
        self.ledger.len()
    }

    /// Population snapshot by 1-based index.
    pub fn snapshot(&self, index: u64) -> Option<&crate::ledger::PopulationSnapshot> {
        self.ledger.snapshot(index)
    }

    /// 1-based starting snapshot index of `address`, `None` if unregistered.
    pub fn starting_snapshot_of(&self, address: &MinerAddress) -> Option<u64> {
        self.ledger.starting_snapshot_of(address)
    }

    // ── Persistence ──────────────────────────────────────────────────────

    /// Serialize the full engine state (params, genesis, ledger).
    pub fn to_bytes(&self) -> Result<Vec<u8>, EmissionError> {
        bincode::serialize(self).map_err(|e| EmissionError::Serialization(e.to_string()))
    }

    /// Restore an engine from [`to_bytes`](Self::to_bytes) output.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EmissionError> {
        let engine: Self =
            bincode::deserialize(bytes).map_err(|e| EmissionError::Serialization(e.to_string()))?;
        if !engine.params.is_valid() {
            return Err(EmissionError::Serialization(
                "restored engine has invalid params".into(),
            ));
        }
        Ok(engine)
    }
}
