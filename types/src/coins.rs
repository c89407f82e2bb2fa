//! Coin collections: decimal (`DecCoins`) and integer (`Coins`) amounts
//! keyed by denomination.
//!
//! Both collections are ordered by denomination and hold only strictly
//! positive amounts; zero entries are pruned by every operation. `Coins` is
//! produced from `DecCoins` only through [`DecCoins::truncate_decimal`],
//! which returns the fractional remainder so that nothing is ever lost:
//! `coins + leftover == original`, exactly.

use crate::dec::Dec;
use crate::error::CoinError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Decimal amounts per denomination, ordered, all strictly positive.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecCoins(BTreeMap<String, Dec>);

impl DecCoins {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Build from `(denom, amount)` pairs; duplicate denominations are
    /// summed. Fails on negative amounts or empty denominations.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, CoinError>
    where
        I: IntoIterator<Item = (S, Dec)>,
        S: Into<String>,
    {
        let mut coins = Self::new();
        for (denom, amount) in pairs {
            coins.add_amount(denom.into(), amount)?;
        }
        Ok(coins)
    }

    /// Lift integer coins into decimal coins.
    pub fn from_coins(coins: &Coins) -> Result<Self, CoinError> {
        let mut map = BTreeMap::new();
        for (denom, amount) in coins.iter() {
            map.insert(denom.to_string(), Dec::from_int(amount)?);
        }
        Ok(Self(map))
    }

    /// Add `amount` of `denom` in place.
    pub fn add_amount(&mut self, denom: String, amount: Dec) -> Result<(), CoinError> {
        if denom.is_empty() {
            return Err(CoinError::InvalidDenom(denom));
        }
        if amount.is_negative() {
            return Err(CoinError::NegativeAmount);
        }
        if amount.is_zero() {
            return Ok(());
        }
        let current = self.0.get(&denom).copied().unwrap_or(Dec::ZERO);
        let updated = current.checked_add(amount).ok_or(CoinError::Overflow)?;
        self.0.insert(denom, updated);
        Ok(())
    }

    /// Union of two coin sets, amounts summed per denomination.
    pub fn add(&self, other: &DecCoins) -> Result<DecCoins, CoinError> {
        let mut result = self.clone();
        for (denom, amount) in other.iter() {
            result.add_amount(denom.to_string(), amount)?;
        }
        Ok(result)
    }

    /// Subtract `other`, failing if any denomination would go negative.
    pub fn checked_sub(&self, other: &DecCoins) -> Result<DecCoins, CoinError> {
        let mut map = self.0.clone();
        for (denom, amount) in other.iter() {
            let current = map.get(denom).copied().unwrap_or(Dec::ZERO);
            let updated = current.checked_sub(amount).ok_or(CoinError::Overflow)?;
            if updated.is_negative() {
                return Err(CoinError::Negative(denom.to_string()));
            }
            if updated.is_zero() {
                map.remove(denom);
            } else {
                map.insert(denom.to_string(), updated);
            }
        }
        Ok(DecCoins(map))
    }

    /// Scale every amount by `rate`, truncating toward zero per denomination.
    pub fn mul_dec_truncate(&self, rate: Dec) -> Result<DecCoins, CoinError> {
        if rate.is_negative() {
            return Err(CoinError::NegativeAmount);
        }
        let mut map = BTreeMap::new();
        for (denom, amount) in &self.0 {
            let scaled = amount.mul_truncate(rate)?;
            if !scaled.is_zero() {
                map.insert(denom.clone(), scaled);
            }
        }
        Ok(DecCoins(map))
    }

    /// Split into whole integer coins and the fractional remainder.
    ///
    /// Conservation: `coins + remainder == self` exactly, per denomination.
    pub fn truncate_decimal(&self) -> (Coins, DecCoins) {
        let mut whole = BTreeMap::new();
        let mut remainder = BTreeMap::new();
        for (denom, amount) in &self.0 {
            let int = amount.truncate_int();
            let frac = amount.fractional();
            if int > 0 {
                whole.insert(denom.clone(), int as u128);
            }
            if !frac.is_zero() {
                remainder.insert(denom.clone(), frac);
            }
        }
        (Coins(whole), DecCoins(remainder))
    }

    /// The amount of `denom`, zero if absent.
    pub fn amount_of(&self, denom: &str) -> Dec {
        self.0.get(denom).copied().unwrap_or(Dec::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Dec)> {
        self.0.iter().map(|(d, a)| (d.as_str(), *a))
    }
}

/// Integer amounts per denomination, ordered, all strictly positive.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coins(BTreeMap<String, u128>);

impl Coins {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Build from `(denom, amount)` pairs; duplicate denominations are
    /// summed; zero amounts are dropped.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, CoinError>
    where
        I: IntoIterator<Item = (S, u128)>,
        S: Into<String>,
    {
        let mut coins = Self::new();
        for (denom, amount) in pairs {
            coins.add_amount(denom.into(), amount)?;
        }
        Ok(coins)
    }

    /// Add `amount` of `denom` in place.
    pub fn add_amount(&mut self, denom: String, amount: u128) -> Result<(), CoinError> {
        if denom.is_empty() {
            return Err(CoinError::InvalidDenom(denom));
        }
        if amount == 0 {
            return Ok(());
        }
        let current = self.0.get(&denom).copied().unwrap_or(0);
        let updated = current.checked_add(amount).ok_or(CoinError::Overflow)?;
        self.0.insert(denom, updated);
        Ok(())
    }

    /// Union of two coin sets, amounts summed per denomination.
    pub fn add(&self, other: &Coins) -> Result<Coins, CoinError> {
        let mut result = self.clone();
        for (denom, amount) in other.iter() {
            result.add_amount(denom.to_string(), amount)?;
        }
        Ok(result)
    }

    /// Subtract `other`, failing if any denomination would go negative.
    pub fn checked_sub(&self, other: &Coins) -> Result<Coins, CoinError> {
        let mut map = self.0.clone();
        for (denom, amount) in other.iter() {
            let current = map.get(denom).copied().unwrap_or(0);
            let updated = current
                .checked_sub(amount)
                .ok_or_else(|| CoinError::Negative(denom.to_string()))?;
            if updated == 0 {
                map.remove(denom);
            } else {
                map.insert(denom.to_string(), updated);
            }
        }
        Ok(Coins(map))
    }

    /// The amount of `denom`, zero if absent.
    pub fn amount_of(&self, denom: &str) -> u128 {
        self.0.get(denom).copied().unwrap_or(0)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u128)> {
        self.0.iter().map(|(d, a)| (d.as_str(), *a))
    }
}

impl fmt::Display for DecCoins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (denom, amount) in &self.0 {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{amount}{denom}")?;
            first = false;
        }
        Ok(())
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (denom, amount) in &self.0 {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{amount}{denom}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec_coins(pairs: &[(&str, Dec)]) -> DecCoins {
        DecCoins::from_pairs(pairs.iter().map(|(d, a)| (d.to_string(), *a))).unwrap()
    }

    #[test]
    fn test_zero_entries_are_pruned() {
        let coins = dec_coins(&[("umer", Dec::new(5)), ("uatom", Dec::ZERO)]);
        assert_eq!(coins.len(), 1);
        assert_eq!(coins.amount_of("uatom"), Dec::ZERO);

        let scaled = coins.mul_dec_truncate(Dec::ZERO).unwrap();
        assert!(scaled.is_zero());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result = DecCoins::from_pairs([("umer", Dec::new(-1))]);
        assert!(matches!(result, Err(CoinError::NegativeAmount)));
    }

    #[test]
    fn test_add_unions_denominations() {
        let a = dec_coins(&[("umer", Dec::new(3))]);
        let b = dec_coins(&[("umer", Dec::new(2)), ("uatom", Dec::new(7))]);
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.amount_of("umer"), Dec::new(5));
        assert_eq!(sum.amount_of("uatom"), Dec::new(7));
        assert_eq!(sum.len(), 2);
    }

    #[test]
    fn test_sub_to_zero_prunes_entry() {
        let a = dec_coins(&[("umer", Dec::new(3)), ("uatom", Dec::new(1))]);
        let b = dec_coins(&[("umer", Dec::new(3))]);
        let diff = a.checked_sub(&b).unwrap();
        assert_eq!(diff.len(), 1);
        assert_eq!(diff.amount_of("uatom"), Dec::new(1));
    }

    #[test]
    fn test_sub_below_zero_fails() {
        let a = dec_coins(&[("umer", Dec::new(1))]);
        let b = dec_coins(&[("umer", Dec::new(2))]);
        match a.checked_sub(&b) {
            Err(CoinError::Negative(denom)) => assert_eq!(denom, "umer"),
            other => panic!("expected Negative error, got {other:?}"),
        }
        // absent denomination also fails
        let c = dec_coins(&[("uatom", Dec::new(1))]);
        assert!(a.checked_sub(&c).is_err());
    }

    #[test]
    fn test_truncate_decimal_conserves_value() {
        let coins = dec_coins(&[
            ("umer", Dec::with_prec(4116, 1)),  // 411.6
            ("uatom", Dec::with_prec(25, 1)),   // 2.5
            ("uiris", Dec::with_prec(9999, 4)), // 0.9999
        ]);
        let (whole, remainder) = coins.truncate_decimal();
        assert_eq!(whole.amount_of("umer"), 411);
        assert_eq!(whole.amount_of("uatom"), 2);
        assert_eq!(whole.amount_of("uiris"), 0);
        assert_eq!(remainder.amount_of("umer"), Dec::with_prec(6, 1));
        assert_eq!(remainder.amount_of("uiris"), Dec::with_prec(9999, 4));

        let rebuilt = DecCoins::from_coins(&whole)
            .unwrap()
            .add(&remainder)
            .unwrap();
        assert_eq!(rebuilt, coins);
    }

    #[test]
    fn test_mul_dec_truncate_scales_each_denom() {
        let coins = dec_coins(&[("umer", Dec::new(1000)), ("uatom", Dec::new(10))]);
        let taxed = coins.mul_dec_truncate(Dec::with_prec(40, 2)).unwrap();
        assert_eq!(taxed.amount_of("umer"), Dec::new(400));
        assert_eq!(taxed.amount_of("uatom"), Dec::new(4));
    }

    #[test]
    fn test_mul_by_negative_rate_fails() {
        let coins = dec_coins(&[("umer", Dec::new(1))]);
        assert!(matches!(
            coins.mul_dec_truncate(Dec::new(-1)),
            Err(CoinError::NegativeAmount)
        ));
    }

    #[test]
    fn test_iteration_is_ordered_by_denom() {
        let coins = dec_coins(&[("zdenom", Dec::new(1)), ("adenom", Dec::new(2))]);
        let denoms: Vec<&str> = coins.iter().map(|(d, _)| d).collect();
        assert_eq!(denoms, vec!["adenom", "zdenom"]);
    }

    #[test]
    fn test_display() {
        let coins = dec_coins(&[("umer", Dec::with_prec(4116, 1)), ("uatom", Dec::new(2))]);
        assert_eq!(coins.to_string(), "2uatom, 411.6umer");
        assert_eq!(DecCoins::new().to_string(), "");
    }

    #[test]
    fn test_integer_coins_sub() {
        let a = Coins::from_pairs([("umer", 1000u128), ("uatom", 5u128)]).unwrap();
        let b = Coins::from_pairs([("umer", 400u128), ("uatom", 5u128)]).unwrap();
        let diff = a.checked_sub(&b).unwrap();
        assert_eq!(diff.amount_of("umer"), 600);
        assert_eq!(diff.len(), 1);

        let overdraft = Coins::from_pairs([("umer", 601u128)]).unwrap();
        assert!(matches!(
            diff.checked_sub(&overdraft),
            Err(CoinError::Negative(_))
        ));
    }

    #[test]
    fn test_integer_coins_roundtrip() {
        let coins = Coins::from_pairs([("umer", 400u128), ("uatom", 0u128)]).unwrap();
        assert_eq!(coins.len(), 1);
        let lifted = DecCoins::from_coins(&coins).unwrap();
        let (back, rest) = lifted.truncate_decimal();
        assert_eq!(back, coins);
        assert!(rest.is_zero());
    }
}
