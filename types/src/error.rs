//! Errors for the fundamental value types.

use thiserror::Error;

/// Errors from decimal and coin arithmetic.
#[derive(Debug, Error)]
pub enum CoinError {
    #[error("arithmetic overflow in decimal computation")]
    Overflow,

    #[error("division by zero")]
    DivisionByZero,

    #[error("subtraction would make {0} negative")]
    Negative(String),

    #[error("amount must not be negative")]
    NegativeAmount,

    #[error("invalid denomination: {0:?}")]
    InvalidDenom(String),
}

/// Errors from address decoding.
#[derive(Debug, Error)]
pub enum AddressError {
    #[error("address {0:?} does not carry the {1:?} prefix")]
    BadPrefix(String, &'static str),

    #[error("address payload is not valid hex: {0}")]
    BadHex(#[from] hex::FromHexError),

    #[error("address payload must be 20 bytes, got {0}")]
    BadLength(usize),
}
