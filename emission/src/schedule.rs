//! Halving-section arithmetic (pure, closed-form).
//!
//! The chain after genesis is partitioned into fixed-width sections of
//! `bisection_interval` blocks. Section `k` covers the blocks whose accrual
//! slot lies in `[genesis + k*interval, genesis + (k+1)*interval)` and pays
//! `initial_reward >> k` per block. Nothing accrues before genesis.

use bisective_types::BlockHeight;

/// Index of the section containing `height`.
///
/// `height` must be at or after `genesis`; callers clamp to genesis first.
pub fn section_of(genesis: BlockHeight, interval: u64, height: BlockHeight) -> u64 {
    debug_assert!(height >= genesis, "section lookup before genesis");
    debug_assert!(interval > 0, "zero bisection interval");
    height.blocks_since(genesis) / interval
}

/// Per-block reward rate during section `section`.
///
/// Halving is a binary right-shift; after 128 halvings the rate is zero for
/// any `u128` initial reward, so accrual simply stops growing.
pub fn rate_in_section(initial_reward: u128, section: u64) -> u128 {
    if section >= 128 {
        0
    } else {
        initial_reward >> section
    }
}

/// The first section boundary strictly after `height`.
///
/// Saturates at `u64::MAX`, which callers never reach because they truncate
/// every segment at the query height.
pub fn next_section_boundary(genesis: BlockHeight, interval: u64, height: BlockHeight) -> BlockHeight {
    let next = section_of(genesis, interval, height).saturating_add(1);
    genesis.saturating_add(next.saturating_mul(interval))
}
