//! Fixed-precision decimal arithmetic.
//!
//! `Dec` is a signed fixed-point decimal with 18 fractional digits, stored as
//! raw `i128` units scaled by 10^18. Multiplication and division truncate
//! toward zero, never round, so every replica of a computation produces
//! bit-identical results. Native floating point is forbidden throughout.

use crate::error::CoinError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of fractional decimal digits carried by [`Dec`].
pub const PRECISION: u32 = 18;

/// Scale factor: one whole unit in raw terms (10^18).
const UNIT: i128 = 1_000_000_000_000_000_000;

/// A fixed-precision decimal amount.
///
/// Ordering and equality compare raw units, which matches numeric order.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Dec(i128);

impl Dec {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(UNIT);

    /// A decimal representing `whole` units.
    pub fn new(whole: i64) -> Self {
        Self(whole as i128 * UNIT)
    }

    /// A decimal with `prec` fractional digits: `value · 10^(18 − prec)`.
    ///
    /// `with_prec(2, 2)` is 0.02; `with_prec(40, 2)` is 0.40.
    ///
    /// # Panics
    /// Panics if `prec > 18`.
    pub fn with_prec(value: i64, prec: u32) -> Self {
        assert!(prec <= PRECISION, "precision exceeds {PRECISION} digits");
        Self(value as i128 * 10i128.pow(PRECISION - prec))
    }

    /// A decimal from raw 10^-18 units.
    pub fn from_raw(raw: i128) -> Self {
        Self(raw)
    }

    /// A decimal representing `value` whole units, checked against overflow.
    pub fn from_int(value: u128) -> Result<Self, CoinError> {
        let raw = value.checked_mul(UNIT as u128).ok_or(CoinError::Overflow)?;
        to_signed(raw, false)
    }

    /// The raw 10^-18 units.
    pub fn raw(&self) -> i128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Multiply two decimals, truncating the result toward zero.
    ///
    /// The intermediate product is computed at 256-bit width, so the result
    /// is exact up to the final truncation; only an `i128` overflow of the
    /// truncated result itself fails.
    pub fn mul_truncate(self, rhs: Self) -> Result<Self, CoinError> {
        let negative = (self.0 < 0) != (rhs.0 < 0);
        let mag = mul_div_truncate(self.0.unsigned_abs(), rhs.0.unsigned_abs(), UNIT as u128)
            .ok_or(CoinError::Overflow)?;
        to_signed(mag, negative)
    }

    /// Divide `self` by `rhs`, truncating the result toward zero.
    pub fn quo_truncate(self, rhs: Self) -> Result<Self, CoinError> {
        if rhs.0 == 0 {
            return Err(CoinError::DivisionByZero);
        }
        let negative = (self.0 < 0) != (rhs.0 < 0);
        let mag = mul_div_truncate(self.0.unsigned_abs(), UNIT as u128, rhs.0.unsigned_abs())
            .ok_or(CoinError::Overflow)?;
        to_signed(mag, negative)
    }

    /// The whole-unit part, truncated toward zero.
    pub fn truncate_int(&self) -> i128 {
        self.0 / UNIT
    }

    /// The fractional part left behind by [`truncate_int`](Self::truncate_int).
    ///
    /// `Dec::new(n) * truncate_int() + fractional() == self` exactly.
    pub fn fractional(&self) -> Self {
        Self(self.0 % UNIT)
    }
}

fn to_signed(mag: u128, negative: bool) -> Result<Dec, CoinError> {
    if mag > i128::MAX as u128 {
        return Err(CoinError::Overflow);
    }
    let raw = mag as i128;
    Ok(Dec(if negative { -raw } else { raw }))
}

/// `⌊a · b / d⌋` with a 256-bit intermediate product.
///
/// Returns `None` on division by zero or if the quotient exceeds `u128`.
fn mul_div_truncate(a: u128, b: u128, d: u128) -> Option<u128> {
    if d == 0 {
        return None;
    }
    let (hi, lo) = widening_mul(a, b);
    if hi >= d {
        // quotient would need more than 128 bits
        return None;
    }
    if hi == 0 {
        return Some(lo / d);
    }
    Some(div_wide(hi, lo, d))
}

/// Full 128×128 → 256-bit multiplication via 64-bit limbs.
fn widening_mul(a: u128, b: u128) -> (u128, u128) {
    const MASK: u128 = u64::MAX as u128;
    let (a1, a0) = (a >> 64, a & MASK);
    let (b1, b0) = (b >> 64, b & MASK);

    let ll = a0 * b0;
    let lh = a0 * b1;
    let hl = a1 * b0;
    let hh = a1 * b1;

    let (mid, mid_carry) = lh.overflowing_add(hl);
    let (lo, lo_carry) = ll.overflowing_add((mid & MASK) << 64);
    let hi = hh + (mid >> 64) + ((mid_carry as u128) << 64) + lo_carry as u128;
    (hi, lo)
}

/// Bit-serial division of the 256-bit value `(hi, lo)` by `d`.
///
/// Requires `hi < d`, which guarantees the quotient fits in `u128`.
fn div_wide(hi: u128, lo: u128, d: u128) -> u128 {
    debug_assert!(d != 0 && hi < d);
    let mut quotient: u128 = 0;
    let mut rem = hi;
    for i in (0..128).rev() {
        let carry = rem >> 127;
        rem = (rem << 1) | ((lo >> i) & 1);
        if carry == 1 || rem >= d {
            rem = rem.wrapping_sub(d);
            quotient |= 1 << i;
        }
    }
    quotient
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / UNIT;
        let frac = (self.0 % UNIT).unsigned_abs();
        if frac == 0 {
            return write!(f, "{whole}");
        }
        let sign = if self.0 < 0 && whole == 0 { "-" } else { "" };
        let digits = format!("{frac:018}");
        write!(f, "{sign}{whole}.{}", digits.trim_end_matches('0'))
    }
}
