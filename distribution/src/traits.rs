//! Collaborator traits the engine needs from the surrounding node.
//!
//! The engine sees exactly the balance movements listed here and a two-field
//! view of a bonded validator; the rest of the bank and staking machinery
//! stays behind these seams.

use meridian_store::StoreError;
use meridian_types::{AccountAddress, BondedValidator, Coins, ConsensusAddress};

/// Name of the module account that collects transaction fees each block.
pub const FEE_COLLECTOR_NAME: &str = "fee_collector";

/// Name of the distribution module's own account.
pub const MODULE_NAME: &str = "distribution";

/// Balance movement between module accounts and out to user accounts.
pub trait TokenTransfer {
    fn transfer_module_to_module(
        &mut self,
        from: &str,
        to: &str,
        amount: &Coins,
    ) -> Result<(), StoreError>;

    fn transfer_module_to_account(
        &mut self,
        from: &str,
        to: &AccountAddress,
        amount: &Coins,
    ) -> Result<(), StoreError>;

    /// All balances currently held by a module account.
    fn all_balances(&self, module: &str) -> Result<Coins, StoreError>;
}

/// Resolution of a consensus-vote address to the bonded validator behind it.
pub trait ValidatorLookup {
    fn validator_by_cons_addr(
        &self,
        addr: &ConsensusAddress,
    ) -> Result<BondedValidator, StoreError>;
}
