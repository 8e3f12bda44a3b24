//! Emission-specific errors.

use bisective_types::MinerAddress;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmissionError {
    #[error("{0} is already a registered miner")]
    AlreadyRegistered(MinerAddress),

    #[error("initial reward must be non-zero")]
    ZeroInitialReward,

    #[error("bisection interval must be non-zero")]
    ZeroBisectionInterval,

    #[error("arithmetic overflow in reward computation")]
    Overflow,

    #[error("serialization error: {0}")]
    Serialization(String),
}
