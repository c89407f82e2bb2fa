//! The per-block allocation cycle.
//!
//! Collected fees pass through three strictly sequential stages: the tax
//! deduction pipeline, the power-proportional allocator, and the validator
//! reward splitter. Every stage is a pure function over `DecCoins`; the
//! [`AllocationEngine`] threads the fee pool through them as an owned value
//! and commits it once at the end. Every fractional remainder produced by
//! truncation lands in the community pool, so tokens out always equal
//! tokens in.

use crate::error::DistributionError;
use crate::params::validate_basic;
use crate::traits::{TokenTransfer, ValidatorLookup, FEE_COLLECTOR_NAME, MODULE_NAME};
use meridian_store::DistributionStore;
use meridian_types::{
    BondedValidator, Coins, ConsensusAddress, Dec, DecCoins, DistributionParams, ValidatorVote,
};

/// Output of the tax deduction pipeline.
#[derive(Clone, Debug)]
pub struct TaxDeduction {
    /// Post-tax amount available for validator distribution.
    pub net: DecCoins,
    /// Whole-coin fixed tax, ready for transfer to the fixed-tax address.
    pub fixed_tax_payable: Coins,
    /// Community tax, kept fractional; it never leaves the module.
    pub community_tax: DecCoins,
    /// Fractional remainder of the fixed-tax truncation; pool-bound.
    pub leftover: DecCoins,
}

/// Apply the fixed tax, then the community tax to what remains.
///
/// The fixed tax is truncated to whole coins because it is transferred out
/// to an external account; its fractional remainder is returned as
/// `leftover`. The community tax stays fractional. The fixed-then-community
/// order is a behavioral contract, not an implementation detail.
///
/// Empty `fees` produce all-empty outputs.
pub fn deduct_taxes(
    fees: &DecCoins,
    params: &DistributionParams,
) -> Result<TaxDeduction, DistributionError> {
    let fixed = fees.mul_dec_truncate(params.fixed_tax)?;
    let after_fixed = fees.checked_sub(&fixed)?;
    let (fixed_tax_payable, leftover) = fixed.truncate_decimal();

    let community_tax = after_fixed.mul_dec_truncate(params.community_tax)?;
    let net = after_fixed.checked_sub(&community_tax)?;

    Ok(TaxDeduction {
        net,
        fixed_tax_payable,
        community_tax,
        leftover,
    })
}

/// Split `net` across the vote set in proportion to voting power.
///
/// Shares are returned in vote order, one entry per vote, so downstream
/// processing (and any event emission by the host) is reproducible across
/// replicas. Each share depends only on its own vote, `net`, and
/// `total_power`, so order never affects the amounts.
///
/// `total_power == 0` is the "no active validators" case: no shares, the
/// whole `net` comes back as leftover. Otherwise
/// `Σ shares + leftover == net` exactly, with `leftover` never negative.
pub fn allocate_by_power(
    net: &DecCoins,
    votes: &[ValidatorVote],
    total_power: u64,
) -> Result<(Vec<(ConsensusAddress, DecCoins)>, DecCoins), DistributionError> {
    if total_power == 0 {
        return Ok((Vec::new(), net.clone()));
    }

    let total = Dec::from_int(total_power as u128)?;
    let mut shares = Vec::with_capacity(votes.len());
    let mut distributed = DecCoins::new();
    for vote in votes {
        let fraction = Dec::from_int(vote.power as u128)?.quo_truncate(total)?;
        let share = net.mul_dec_truncate(fraction)?;
        distributed = distributed.add(&share)?;
        shares.push((vote.validator, share));
    }

    let leftover = net.checked_sub(&distributed)?;
    Ok((shares, leftover))
}

/// Split one validator's reward into operator commission and the amount
/// shared with its delegators.
///
/// No truncation to whole coins happens here, so
/// `commission + shared == tokens` exactly.
pub fn split_validator_reward(
    tokens: &DecCoins,
    commission_rate: Dec,
) -> Result<(DecCoins, DecCoins), DistributionError> {
    let commission = tokens.mul_dec_truncate(commission_rate)?;
    let shared = tokens.checked_sub(&commission)?;
    Ok((commission, shared))
}

/// Orchestrates one allocation cycle over the external collaborators.
///
/// Holds the collaborators for the duration of a single cycle; the host's
/// block-level transaction makes the whole cycle atomic, so any error simply
/// propagates out and the cycle's writes are discarded with the block.
pub struct AllocationEngine<'a> {
    store: &'a mut dyn DistributionStore,
    bank: &'a mut dyn TokenTransfer,
    validators: &'a dyn ValidatorLookup,
}

impl<'a> AllocationEngine<'a> {
    pub fn new(
        store: &'a mut dyn DistributionStore,
        bank: &'a mut dyn TokenTransfer,
        validators: &'a dyn ValidatorLookup,
    ) -> Self {
        Self {
            store,
            bank,
            validators,
        }
    }

    /// Run the block-closing allocation cycle. Invoked exactly once per
    /// block by the host lifecycle, with the bonded vote set of the prior
    /// block in canonical consensus order.
    pub fn allocate_tokens(
        &mut self,
        total_previous_power: u64,
        bonded_votes: &[ValidatorVote],
    ) -> Result<(), DistributionError> {
        // Drain the fee collector into the distribution module account.
        let fees_collected_int = self
            .bank
            .all_balances(FEE_COLLECTOR_NAME)
            .map_err(|e| DistributionError::TransferFailed(e.to_string()))?;
        let fees_collected = DecCoins::from_coins(&fees_collected_int)?;
        self.bank
            .transfer_module_to_module(FEE_COLLECTOR_NAME, MODULE_NAME, &fees_collected_int)
            .map_err(|e| DistributionError::TransferFailed(e.to_string()))?;

        // Invalid stored parameters are a fatal precondition, never
        // something to partially correct mid-cycle.
        let params = self.store.get_params()?;
        validate_basic(&params)?;
        let mut fee_pool = self.store.get_fee_pool()?;

        let deduction = deduct_taxes(&fees_collected, &params)?;
        if !deduction.fixed_tax_payable.is_zero() {
            self.bank
                .transfer_module_to_account(
                    MODULE_NAME,
                    &params.fixed_tax_address,
                    &deduction.fixed_tax_payable,
                )
                .map_err(|e| DistributionError::TransferFailed(e.to_string()))?;
        }

        let mut community_pool = fee_pool.community_pool.add(&deduction.community_tax)?;
        if !deduction.leftover.is_zero() {
            community_pool = community_pool.add(&deduction.leftover)?;
        }

        // No validator signed the previous block: the whole net amount is
        // carried forward in the community pool.
        if total_previous_power == 0 {
            community_pool = community_pool.add(&deduction.net)?;
            fee_pool.community_pool = community_pool;
            self.store.set_fee_pool(&fee_pool)?;
            return Ok(());
        }

        let (shares, leftover) =
            allocate_by_power(&deduction.net, bonded_votes, total_previous_power)?;
        for (cons_addr, reward) in &shares {
            let validator = self
                .validators
                .validator_by_cons_addr(cons_addr)
                .map_err(|_| DistributionError::ValidatorLookupFailed(*cons_addr))?;
            self.allocate_to_validator(&validator, reward)?;
        }

        if !leftover.is_zero() {
            community_pool = community_pool.add(&leftover)?;
        }
        fee_pool.community_pool = community_pool;
        self.store.set_fee_pool(&fee_pool)?;
        Ok(())
    }

    /// Credit one validator's reward, split between operator commission and
    /// the delegator pool. The three accumulator updates stand or fall
    /// together: any storage error aborts the cycle before the host commits.
    fn allocate_to_validator(
        &mut self,
        validator: &BondedValidator,
        tokens: &DecCoins,
    ) -> Result<(), DistributionError> {
        let (commission, shared) = split_validator_reward(tokens, validator.commission_rate)?;

        tracing::debug!(
            validator = %validator.operator,
            amount = %commission,
            "accrued commission"
        );
        let accumulated = self.store.get_accumulated_commission(&validator.operator)?;
        self.store
            .set_accumulated_commission(&validator.operator, &accumulated.add(&commission)?)?;

        let current = self.store.get_current_rewards(&validator.operator)?;
        self.store
            .set_current_rewards(&validator.operator, &current.add(&shared)?)?;

        tracing::debug!(
            validator = %validator.operator,
            amount = %tokens,
            "accrued rewards"
        );
        let outstanding = self.store.get_outstanding_rewards(&validator.operator)?;
        self.store
            .set_outstanding_rewards(&validator.operator, &outstanding.add(tokens)?)?;
        Ok(())
    }
}
