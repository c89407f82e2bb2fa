use crate::StoreError;
use meridian_types::{DecCoins, DistributionParams, FeePool, ValidatorAddress};

/// Store trait for the distribution module's persistent state: parameters,
/// the fee pool singleton, and the three per-validator reward accumulators.
///
/// Accumulator getters return empty `DecCoins` for a validator with no
/// recorded state, so a freshly bonded validator needs no initialization
/// step. Writes are expected to land in the host's block-level transaction;
/// the engine never retries a failed write, it fails the whole cycle.
pub trait DistributionStore {
    fn get_params(&self) -> Result<DistributionParams, StoreError>;
    fn set_params(&mut self, params: &DistributionParams) -> Result<(), StoreError>;

    fn get_fee_pool(&self) -> Result<FeePool, StoreError>;
    fn set_fee_pool(&mut self, pool: &FeePool) -> Result<(), StoreError>;

    fn get_accumulated_commission(
        &self,
        validator: &ValidatorAddress,
    ) -> Result<DecCoins, StoreError>;
    fn set_accumulated_commission(
        &mut self,
        validator: &ValidatorAddress,
        commission: &DecCoins,
    ) -> Result<(), StoreError>;

    fn get_current_rewards(&self, validator: &ValidatorAddress) -> Result<DecCoins, StoreError>;
    fn set_current_rewards(
        &mut self,
        validator: &ValidatorAddress,
        rewards: &DecCoins,
    ) -> Result<(), StoreError>;

    fn get_outstanding_rewards(
        &self,
        validator: &ValidatorAddress,
    ) -> Result<DecCoins, StoreError>;
    fn set_outstanding_rewards(
        &mut self,
        validator: &ValidatorAddress,
        rewards: &DecCoins,
    ) -> Result<(), StoreError>;
}
