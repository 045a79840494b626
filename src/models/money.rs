//! Money type for representing currency amounts
//!
//! Wraps `rust_decimal::Decimal` so sums stay exact. The scale a value was
//! created with is preserved when it is rendered, so `"100.50"` written to
//! a file comes back as `"100.50"`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// An exact decimal monetary amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from a mantissa and a scale
    ///
    /// # Examples
    /// ```
    /// use finledger::models::Money;
    /// let amount = Money::from_parts(1050, 2); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub fn from_parts(mantissa: i64, scale: u32) -> Self {
        Self(Decimal::new(mantissa, scale))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Addition that returns `None` instead of overflowing
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtraction that returns `None` instead of overflowing
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Addition clamped to the representable range
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Subtraction clamped to the representable range
    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Parse a money amount from text
    ///
    /// Accepts plain ("10.50", "-3") and scientific ("1E+3") notation.
    /// Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map(Self)
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<i64> for Money {
    fn from(units: i64) -> Self {
        Self(Decimal::from(units))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Sums saturate at the decimal limits rather than overflow
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Money::saturating_add)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_scale() {
        let m = Money::parse("100.50").unwrap();
        assert_eq!(m.to_string(), "100.50");
        assert_eq!(m, Money::from_parts(1005, 1));
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!(Money::parse(" 42 ").unwrap(), Money::from(42));
        assert_eq!(Money::parse("-3.25").unwrap(), Money::from_parts(-325, 2));
        assert_eq!(Money::parse("1E+3").unwrap(), Money::from(1000));
        assert!(Money::parse("").is_err());
        assert!(Money::parse("ten").is_err());
    }

    #[test]
    fn test_exact_arithmetic() {
        let a = Money::parse("0.1").unwrap();
        let b = Money::parse("0.2").unwrap();
        assert_eq!(a + b, Money::parse("0.3").unwrap());

        let mut m = Money::from(500);
        m -= Money::from(120);
        assert_eq!(m, Money::from(380));
        assert_eq!(-m, Money::from(-380));
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::from(1).is_positive());
        assert!(Money::from(-1).is_negative());
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_positive());
    }

    #[test]
    fn test_sum() {
        let total: Money = ["1.10", "2.20", "3.30"]
            .iter()
            .map(|s| Money::parse(s).unwrap())
            .sum();
        assert_eq!(total, Money::parse("6.60").unwrap());
    }

    #[test]
    fn test_arithmetic_at_decimal_limit() {
        let max = Money::parse("79228162514264337593543950335").unwrap();
        let one = Money::from(1);

        assert_eq!(max.checked_add(one), None);
        assert_eq!((-max).checked_sub(one), None);
        assert_eq!(max.checked_sub(one), Some(max - one));
        assert_eq!(max.saturating_add(one), max);

        let total: Money = [max, one, one].into_iter().sum();
        assert_eq!(total, max);
    }
}
