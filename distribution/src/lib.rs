//! Fee and reward allocation for the Meridian ledger.
//!
//! Once per block-closing step, collected transaction fees are:
//! 1. taxed at the fixed rate, with the whole-coin part paid to the
//!    configured fixed-tax address,
//! 2. taxed at the community rate, retained in the community pool,
//! 3. split across the bonded validators in proportion to voting power,
//! 4. split per validator between operator commission and delegator rewards.
//!
//! All arithmetic is fixed-precision and truncating, and every truncation
//! remainder is folded into the community pool, so the allocation conserves
//! value exactly and is bit-identical on every replica. Any failure at any
//! stage aborts the whole cycle; there is no partial application.

pub mod allocation;
pub mod error;
pub mod params;
pub mod traits;

pub use allocation::{
    allocate_by_power, deduct_taxes, split_validator_reward, AllocationEngine, TaxDeduction,
};
pub use error::DistributionError;
pub use params::validate_basic;
pub use traits::{TokenTransfer, ValidatorLookup, FEE_COLLECTOR_NAME, MODULE_NAME};
