//! Fundamental types for the Bisective emission protocol.
//!
//! This crate defines the core types shared by the emission engine and the
//! node host: block heights, miner addresses, and emission parameters.

pub mod address;
pub mod height;
pub mod params;

pub use address::MinerAddress;
pub use height::BlockHeight;
pub use params::EmissionParams;
