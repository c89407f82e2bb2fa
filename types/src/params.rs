//! Distribution parameters — the two tax rates and the fixed-tax destination.

use crate::address::AccountAddress;
use crate::dec::Dec;
use serde::{Deserialize, Serialize};

/// Governable parameters of the fee distribution module.
///
/// The fixed tax is deducted from collected fees first and paid out to
/// `fixed_tax_address`; the community tax is then deducted from the remainder
/// and retained in the community pool. That ordering is a behavioral
/// contract: swapping it changes the economic outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionParams {
    /// Fraction of collected fees sent to `fixed_tax_address`. Default: 40%.
    pub fixed_tax: Dec,

    /// Destination account of the fixed tax.
    pub fixed_tax_address: AccountAddress,

    /// Fraction of the post-fixed-tax remainder retained in the community
    /// pool. Default: 2%.
    pub community_tax: Dec,

    /// Deprecated; kept for stored-state compatibility, never validated and
    /// never read by allocation.
    pub base_proposer_reward: Dec,

    /// Deprecated; kept for stored-state compatibility, never validated and
    /// never read by allocation.
    pub bonus_proposer_reward: Dec,

    /// Whether delegators may register a separate withdraw address. Not
    /// consulted by allocation.
    pub withdraw_addr_enabled: bool,
}

impl DistributionParams {
    /// Meridian defaults — the intended configuration for the live network.
    pub fn meridian_defaults() -> Self {
        Self {
            fixed_tax: Dec::with_prec(40, 2),    // 40%
            fixed_tax_address: AccountAddress::from_bytes(&FIXED_TAX_TREASURY),
            community_tax: Dec::with_prec(2, 2), // 2%
            base_proposer_reward: Dec::ZERO,     // deprecated
            bonus_proposer_reward: Dec::ZERO,    // deprecated
            withdraw_addr_enabled: true,
        }
    }
}

/// Account identifier of the network treasury that receives the fixed tax.
const FIXED_TAX_TREASURY: [u8; 20] = [
    0x6d, 0x65, 0x72, 0x69, 0x64, 0x69, 0x61, 0x6e, 0x2d, 0x74, 0x72, 0x65, 0x61, 0x73, 0x75,
    0x72, 0x79, 0x00, 0x00, 0x01,
];

impl Default for DistributionParams {
    fn default() -> Self {
        Self::meridian_defaults()
    }
}
