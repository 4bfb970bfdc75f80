use soroban_sdk::{contracttype, Address};

use crate::errors::Error;
use crate::storage::PERSISTENT_LIFETIME_THRESHOLD;

/// Longest accepted project title, in ASCII bytes.
pub const MAX_TITLE_LEN: u32 = 64;
/// Longest accepted project description, in UTF-8 bytes.
pub const MAX_DESCRIPTION_LEN: u32 = 500;
/// Roughly 180 days of ledgers at a 5 second close time.
pub const DEFAULT_MAX_DEADLINE_OFFSET: u32 = 3_110_400;
pub const DEFAULT_QUORUM: u32 = 1;

/// Admin-tunable parameters, kept in instance storage.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractConfig {
    /// Token held in escrow for every project.
    pub token: Address,
    /// Upper bound on `deadline_offset` accepted by `register_project`.
    pub max_deadline_offset: u32,
    /// Votes required before a project can leave `Pending`.
    pub quorum: u32,
}

impl ContractConfig {
    pub fn with_token(token: Address) -> Self {
        Self {
            token,
            max_deadline_offset: DEFAULT_MAX_DEADLINE_OFFSET,
            quorum: DEFAULT_QUORUM,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        // Deadlines must fall inside the window a fresh project entry stays live.
        if self.max_deadline_offset == 0
            || self.max_deadline_offset > PERSISTENT_LIFETIME_THRESHOLD
            || self.quorum == 0
        {
            return Err(Error::InvalidInput);
        }
        Ok(())
    }
}
