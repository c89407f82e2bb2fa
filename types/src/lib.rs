//! Fundamental types for the Meridian ledger.
//!
//! Everything here is a pure value type: the fixed-precision decimal and the
//! coin collections built on it, addresses, validator identities, the
//! distribution parameters, and the fee pool. All arithmetic is integer
//! based and truncating, so results are bit-reproducible across replicas.

pub mod address;
pub mod coins;
pub mod dec;
pub mod error;
pub mod fee_pool;
pub mod params;
pub mod validator;

pub use address::{AccountAddress, ValidatorAddress};
pub use coins::{Coins, DecCoins};
pub use dec::{Dec, PRECISION};
pub use error::{AddressError, CoinError};
pub use fee_pool::FeePool;
pub use params::DistributionParams;
pub use validator::{BondedValidator, ConsensusAddress, ValidatorVote};
