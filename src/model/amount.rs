//! Amount type for monetary values.
//!
//! This module provides the `Amount` type which wraps `Decimal` and handles
//! parsing values that may carry a leading currency symbol or thousands
//! separators, as some bank exports do.

use rust_decimal::Decimal;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// Represents a signed monetary amount.
///
/// Wraps `Decimal` so that amounts can be summed exactly and rendered with a
/// fixed two-decimal format. Parsing accepts plain decimals as well as values
/// like `-$1,234.56`.
///
/// # Examples
///
/// ```
/// # use weeksum::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("-$1,234.5").unwrap();
/// assert_eq!(amount.to_string(), "-1234.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Creates a new Amount from a Decimal value.
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Rescales to two decimal places. Midpoints round half-to-even
    /// (banker's rounding), the `rust_decimal` default.
    pub fn rounded(&self) -> Amount {
        Amount(self.0.round_dp(2))
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.0.is_sign_negative()
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let unsigned = unsigned.strip_prefix('$').unwrap_or(unsigned);
        let cleaned = unsigned.replace(',', "");

        let mut value = Decimal::from_str(&cleaned)?;
        if negative {
            value.set_sign_negative(true);
        }
        Ok(Amount(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0.round_dp(2))
    }
}

serde_plain::derive_serialize_from_display!(Amount);
serde_plain::derive_deserialize_from_fromstr!(Amount, "a decimal amount");

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        self.0 += rhs.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}
