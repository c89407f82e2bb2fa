//! The fee pool — the module's accumulator of undistributed value.

use crate::coins::DecCoins;
use serde::{Deserialize, Serialize};

/// Singleton accumulator of undistributed value, fed by the community tax
/// and by every truncation leftover.
///
/// The pool is loaded once at the start of an allocation cycle, threaded
/// through the pipeline as an owned value, and persisted once at the end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeePool {
    pub community_pool: DecCoins,
}

impl FeePool {
    pub fn new() -> Self {
        Self {
            community_pool: DecCoins::new(),
        }
    }
}
