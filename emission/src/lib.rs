//! Bisective emission core — reward accrual under a halving schedule.
//!
//! A miner's accrued reward is a deterministic function of block heights,
//! not a balance on the ledger:
//!
//! `reward(m) = Σ over segments of (rate(section) × segment_len) / population`
//!
//! where the segments partition the miner's active range by overlaying two
//! independent partitions of the chain: fixed-width halving sections (the
//! rate halves every `bisection_interval` blocks after genesis) and
//! variable-width population intervals (the divisor changes at every join).
//!
//! This crate handles:
//! - The halving-section arithmetic (pure, closed-form)
//! - The population ledger (append-only join snapshots, coalesced per block)
//! - The accrual engine (two-pointer overlay of both partitions)

pub mod engine;
pub mod error;
pub mod ledger;
pub mod schedule;

pub use engine::{EmissionEngine, GENESIS_DELAY};
pub use error::EmissionError;
pub use ledger::{PopulationLedger, PopulationSnapshot};
