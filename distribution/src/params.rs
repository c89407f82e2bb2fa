//! Distribution parameter validation.

use crate::error::DistributionError;
use meridian_types::{Dec, DistributionParams};

/// Validate a parameter set.
///
/// Both tax rates must lie in [0, 1] and the fixed-tax destination must
/// decode under the address codec. The deprecated proposer-reward fields are
/// not validated: historical stored state may carry arbitrary values there
/// and must keep loading.
///
/// Runs on every parameter change, and again by the engine at the start of
/// each allocation cycle as a fatal precondition.
pub fn validate_basic(params: &DistributionParams) -> Result<(), DistributionError> {
    validate_rate("fixed tax", params.fixed_tax)?;
    validate_rate("community tax", params.community_tax)?;
    params
        .fixed_tax_address
        .decode()
        .map_err(|e| DistributionError::ParameterInvalid(format!("fixed tax address: {e}")))?;
    Ok(())
}

fn validate_rate(name: &str, rate: Dec) -> Result<(), DistributionError> {
    if rate.is_negative() {
        return Err(DistributionError::ParameterInvalid(format!(
            "{name} must not be negative: {rate}"
        )));
    }
    if rate > Dec::ONE {
        return Err(DistributionError::ParameterInvalid(format!(
            "{name} too large: {rate}"
        )));
    }
    Ok(())
}
