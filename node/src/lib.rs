//! Bisective in-process host.
//!
//! The emission core consumes exactly one fact from its environment: the
//! current block height. This crate supplies it — a simulated chain whose
//! height only moves forward, a `Node` that owns the engine and forwards
//! heights into it (giving the single-writer guarantee the coalescing rule
//! needs), and structured-logging initialisation.

pub mod chain;
pub mod logging;
pub mod node;

pub use chain::SimulatedChain;
pub use logging::{init_logging, LogFormat};
pub use node::Node;
