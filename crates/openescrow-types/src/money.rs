//! Currency-aware money values.
//!
//! Every escrowed amount carries its denomination. Arithmetic across
//! denominations is a hard error, never a silent reinterpretation — the
//! one place the engine intentionally crosses denominations (re-issuing a
//! claim's security deposit in the settlement currency) goes through
//! [`Money::minor_units`] + [`Money::from_minor_units`] so the conversion
//! is visible at the call site.

use std::cmp::Ordering;
use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::{EscrowError, Result};

/// A denomination: currency code plus the number of decimal places carried
/// in its minor unit (e.g. EOS has precision 4, so 1.0000 EOS = 10_000
/// minor units).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    /// Currency code, e.g. "EOS".
    pub code: String,
    /// Decimal places in the minor unit.
    pub precision: u32,
}

impl Currency {
    #[must_use]
    pub fn new(code: impl Into<String>, precision: u32) -> Self {
        Self {
            code: code.into(),
            precision,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// An amount in a specific denomination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: Decimal,
    pub currency: Currency,
}

impl Money {
    #[must_use]
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Construct from an integer count of minor units, e.g.
    /// `from_minor_units(10_000, eos)` is 1.0000 EOS.
    #[must_use]
    pub fn from_minor_units(units: i64, currency: Currency) -> Self {
        Self {
            amount: Decimal::new(units, currency.precision),
            currency,
        }
    }

    /// A zero amount in the given denomination.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// The amount as a whole number of minor units, truncated toward zero.
    /// `None` if the scaled value does not fit an `i64`.
    #[must_use]
    pub fn minor_units(&self) -> Option<i64> {
        let scale = Decimal::from(10u64.checked_pow(self.currency.precision)?);
        self.amount.checked_mul(scale)?.trunc().to_i64()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Same-denomination addition.
    ///
    /// # Errors
    /// Returns `InvalidArgument` on a denomination mismatch.
    pub fn checked_add(&self, other: &Money) -> Result<Money> {
        self.require_same_currency(other)?;
        Ok(Money::new(self.amount + other.amount, self.currency.clone()))
    }

    /// Same-denomination subtraction.
    ///
    /// # Errors
    /// Returns `InvalidArgument` on a denomination mismatch or if the
    /// result would be negative.
    pub fn checked_sub(&self, other: &Money) -> Result<Money> {
        self.require_same_currency(other)?;
        let result = self.amount - other.amount;
        if result < Decimal::ZERO {
            return Err(EscrowError::InvalidArgument {
                reason: format!(
                    "subtracting {} from {} would produce a negative amount",
                    other, self
                ),
            });
        }
        Ok(Money::new(result, self.currency.clone()))
    }

    /// Same-denomination comparison.
    ///
    /// # Errors
    /// Returns `InvalidArgument` on a denomination mismatch.
    pub fn try_cmp(&self, other: &Money) -> Result<Ordering> {
        self.require_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    fn require_same_currency(&self, other: &Money) -> Result<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(EscrowError::InvalidArgument {
                reason: format!(
                    "denomination mismatch: {} vs {}",
                    self.currency, other.currency
                ),
            })
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eos() -> Currency {
        Currency::new("EOS", 4)
    }

    #[test]
    fn minor_units_round_trip() {
        let m = Money::from_minor_units(10_000, eos());
        assert_eq!(m.amount, Decimal::new(10_000, 4)); // 1.0000
        assert_eq!(m.minor_units(), Some(10_000));
    }

    #[test]
    fn minor_units_truncate_toward_zero() {
        // 1.00005 EOS at precision 4 truncates to 10_000 minor units.
        let m = Money::new(Decimal::new(100_005, 5), eos());
        assert_eq!(m.minor_units(), Some(10_000));
    }

    #[test]
    fn checked_add_same_currency() {
        let a = Money::from_minor_units(50_000, eos());
        let b = Money::from_minor_units(1_000_000, eos());
        let sum = a.checked_add(&b).unwrap();
        assert_eq!(sum.minor_units(), Some(1_050_000));
    }

    #[test]
    fn checked_add_rejects_mismatch() {
        let a = Money::from_minor_units(100, eos());
        let b = Money::from_minor_units(100, Currency::new("SYS", 4));
        let err = a.checked_add(&b).unwrap_err();
        assert!(matches!(err, EscrowError::InvalidArgument { .. }));
    }

    #[test]
    fn checked_sub_rejects_negative_result() {
        let a = Money::from_minor_units(100, eos());
        let b = Money::from_minor_units(200, eos());
        let err = a.checked_sub(&b).unwrap_err();
        assert!(matches!(err, EscrowError::InvalidArgument { .. }));
    }

    #[test]
    fn try_cmp_orders_amounts() {
        let a = Money::from_minor_units(100, eos());
        let b = Money::from_minor_units(200, eos());
        assert_eq!(a.try_cmp(&b).unwrap(), Ordering::Less);
        assert_eq!(b.try_cmp(&a).unwrap(), Ordering::Greater);
        assert_eq!(a.try_cmp(&a.clone()).unwrap(), Ordering::Equal);
    }

    #[test]
    fn try_cmp_rejects_mismatch() {
        let a = Money::from_minor_units(100, eos());
        let b = Money::from_minor_units(100, Currency::new("SYS", 4));
        assert!(a.try_cmp(&b).is_err());
    }

    #[test]
    fn zero_and_positive() {
        assert!(Money::zero(eos()).is_zero());
        assert!(!Money::zero(eos()).is_positive());
        assert!(Money::from_minor_units(1, eos()).is_positive());
    }

    #[test]
    fn display_includes_code() {
        let m = Money::from_minor_units(10_500_000, eos());
        assert_eq!(m.to_string(), "1050.0000 EOS");
    }

    #[test]
    fn serde_roundtrip() {
        let m = Money::from_minor_units(123_456, eos());
        let json = serde_json::to_string(&m).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
