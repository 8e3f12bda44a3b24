//! Emission parameters — the two values that define the entire schedule.

use serde::{Deserialize, Serialize};

/// Raw units per whole token (18 decimal places).
pub const TOKEN_UNIT: u128 = 1_000_000_000_000_000_000;

/// Immutable configuration of the emission schedule, set once at creation.
///
/// The per-block rate during section `k` is `initial_reward >> k`; a new
/// section begins every `bisection_interval` blocks after genesis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionParams {
    /// Reward rate (raw units per block) during the first halving section.
    pub initial_reward: u128,

    /// Number of blocks per halving section.
    pub bisection_interval: u64,
}

impl EmissionParams {
    /// The reference configuration: 50 tokens per block, halving every 5 blocks.
    pub fn bisective_defaults() -> Self {
        Self {
            initial_reward: 50 * TOKEN_UNIT,
            bisection_interval: 5,
        }
    }

    /// Whether both parameters are non-zero. A zero `bisection_interval`
    /// would make section arithmetic divide by zero; a zero `initial_reward`
    /// makes the whole schedule a no-op. Both are rejected at creation time.
    pub fn is_valid(&self) -> bool {
        self.initial_reward > 0 && self.bisection_interval > 0
    }
}

impl Default for EmissionParams {
    fn default() -> Self {
        Self::bisective_defaults()
    }
}
