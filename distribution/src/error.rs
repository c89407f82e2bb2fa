//! Distribution-specific errors.
//!
//! Every error here is fatal for the allocation cycle that raised it: the
//! engine never skips a validator or partially applies a stage, because any
//! partial application would break conservation. The host's transactional
//! commit discards whatever the failed cycle wrote.

use meridian_store::StoreError;
use meridian_types::{CoinError, ConsensusAddress};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DistributionError {
    #[error("invalid distribution parameters: {0}")]
    ParameterInvalid(String),

    #[error("balance transfer failed: {0}")]
    TransferFailed(String),

    #[error("no bonded validator found for consensus address {0}")]
    ValidatorLookupFailed(ConsensusAddress),

    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),

    #[error("coin arithmetic failure: {0}")]
    Coin(#[from] CoinError),
}
