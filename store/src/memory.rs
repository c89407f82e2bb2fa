//! In-memory storage backend for testing.

use crate::{DistributionStore, StoreError};
use meridian_types::{DecCoins, DistributionParams, FeePool, ValidatorAddress};
use std::collections::BTreeMap;

/// Map-backed [`DistributionStore`] used by tests and tooling.
///
/// Starts with default parameters and an empty fee pool, matching the
/// genesis state of a fresh chain.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    params: DistributionParams,
    fee_pool: FeePool,
    commission: BTreeMap<ValidatorAddress, DecCoins>,
    current_rewards: BTreeMap<ValidatorAddress, DecCoins>,
    outstanding_rewards: BTreeMap<ValidatorAddress, DecCoins>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with explicit parameters.
    pub fn with_params(params: DistributionParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }
}

impl DistributionStore for MemoryStore {
    fn get_params(&self) -> Result<DistributionParams, StoreError> {
        Ok(self.params.clone())
    }

    fn set_params(&mut self, params: &DistributionParams) -> Result<(), StoreError> {
        self.params = params.clone();
        Ok(())
    }

    fn get_fee_pool(&self) -> Result<FeePool, StoreError> {
        Ok(self.fee_pool.clone())
    }

    fn set_fee_pool(&mut self, pool: &FeePool) -> Result<(), StoreError> {
        self.fee_pool = pool.clone();
        Ok(())
    }

    fn get_accumulated_commission(
        &self,
        validator: &ValidatorAddress,
    ) -> Result<DecCoins, StoreError> {
        Ok(self.commission.get(validator).cloned().unwrap_or_default())
    }

    fn set_accumulated_commission(
        &mut self,
        validator: &ValidatorAddress,
        commission: &DecCoins,
    ) -> Result<(), StoreError> {
        self.commission.insert(validator.clone(), commission.clone());
        Ok(())
    }

    fn get_current_rewards(&self, validator: &ValidatorAddress) -> Result<DecCoins, StoreError> {
        Ok(self
            .current_rewards
            .get(validator)
            .cloned()
            .unwrap_or_default())
    }

    fn set_current_rewards(
        &mut self,
        validator: &ValidatorAddress,
        rewards: &DecCoins,
    ) -> Result<(), StoreError> {
        self.current_rewards.insert(validator.clone(), rewards.clone());
        Ok(())
    }

    fn get_outstanding_rewards(
        &self,
        validator: &ValidatorAddress,
    ) -> Result<DecCoins, StoreError> {
        Ok(self
            .outstanding_rewards
            .get(validator)
            .cloned()
            .unwrap_or_default())
    }

    fn set_outstanding_rewards(
        &mut self,
        validator: &ValidatorAddress,
        rewards: &DecCoins,
    ) -> Result<(), StoreError> {
        self.outstanding_rewards
            .insert(validator.clone(), rewards.clone());
        Ok(())
    }
}
