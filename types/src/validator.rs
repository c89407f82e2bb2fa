//! Validator identities and the bonded vote set.

use crate::address::ValidatorAddress;
use crate::dec::Dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The 20-byte address a validator is known by in the consensus vote set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConsensusAddress([u8; 20]);

impl ConsensusAddress {
    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for ConsensusAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// One entry of the prior block's bonded vote set, in canonical consensus
/// order. Power is the validator's integer voting weight for that block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorVote {
    pub validator: ConsensusAddress,
    pub power: u64,
}

/// The narrow view of a validator the allocation engine needs: who gets the
/// commission and at what rate. The surrounding staking machinery maps its
/// full validator representation down to this.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondedValidator {
    pub operator: ValidatorAddress,
    pub commission_rate: Dec,
}
