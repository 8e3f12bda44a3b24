//! The node — owns the chain and the engine and wires them together.

use crate::chain::SimulatedChain;
use bisective_emission::{EmissionEngine, EmissionError};
use bisective_types::{BlockHeight, EmissionParams, MinerAddress};

/// A Bisective host node.
///
/// Owning the engine makes every mutation go through one writer, which is
/// what the coalescing rule in the population ledger relies on.
#[derive(Debug)]
pub struct Node {
    chain: SimulatedChain,
    engine: EmissionEngine,
}

impl Node {
    /// Create a node whose engine is deployed at the chain's current height.
    pub fn new(params: EmissionParams, chain: SimulatedChain) -> Result<Self, EmissionError> {
        let engine = EmissionEngine::new(params, chain.height())?;
        tracing::info!(
            genesis = %engine.genesis(),
            created_at = %chain.height(),
            "emission engine deployed"
        );
        Ok(Self { chain, engine })
    }

    /// Register `address` as a miner at the current chain height.
    pub fn register_miner(&mut self, address: MinerAddress) -> Result<(), EmissionError> {
        let height = self.chain.height();
        match self.engine.register_miner(address.clone(), height) {
            Ok(()) => {
                tracing::info!(
                    miner = %address,
                    height = %height,
                    snapshots = self.engine.num_snapshots(),
                    "miner registered"
                );
                Ok(())
            }
            Err(err) => {
                tracing::warn!(miner = %address, height = %height, %err, "registration rejected");
                Err(err)
            }
        }
    }

    /// Reward accrued by `address` as of the current chain height.
    pub fn available_reward(&self, address: &MinerAddress) -> u128 {
        let reward = self.engine.available_reward(address, self.chain.height());
        tracing::debug!(miner = %address, height = %self.chain.height(), reward, "reward queried");
        reward
    }

    /// Mine `blocks` empty blocks; returns the new height.
    pub fn advance(&mut self, blocks: u64) -> BlockHeight {
        self.chain.advance(blocks)
    }

    /// Mine up to `target` (no-op if already past it).
    pub fn advance_to(&mut self, target: BlockHeight) -> BlockHeight {
        self.chain.advance_to(target)
    }

    pub fn height(&self) -> BlockHeight {
        self.chain.height()
    }

    pub fn genesis(&self) -> BlockHeight {
        self.engine.genesis()
    }

    pub fn engine(&self) -> &EmissionEngine {
        &self.engine
    }
}
