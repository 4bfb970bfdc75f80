use soroban_sdk::Env;

/// Source of the ledger height used for every deadline comparison.
pub trait BlockHeight {
    fn block_height(&self) -> u32;
}

impl BlockHeight for Env {
    fn block_height(&self) -> u32 {
        self.ledger().sequence()
    }
}
