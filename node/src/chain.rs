//! A minimal stand-in for the host ledger: a block height that only advances.

use bisective_types::BlockHeight;

/// Simulated chain — the source of current block heights.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedChain {
    height: BlockHeight,
}

impl SimulatedChain {
    pub fn new(start: BlockHeight) -> Self {
        Self { height: start }
    }

    pub fn height(&self) -> BlockHeight {
        self.height
    }

    /// Mine `blocks` empty blocks; returns the new height.
    pub fn advance(&mut self, blocks: u64) -> BlockHeight {
        self.height = self.height.saturating_add(blocks);
        self.height
    }

    /// Mine up to `target`. Heights never move backwards; a past target is
    /// a no-op.
    pub fn advance_to(&mut self, target: BlockHeight) -> BlockHeight {
        self.height = self.height.max(target);
        self.height
    }
}

impl Default for SimulatedChain {
    fn default() -> Self {
        Self::new(BlockHeight::ZERO)
    }
}
