// ============================================================================
// Money Value Object
// Exact fixed-point amounts tagged with their currency
// ============================================================================

use crate::domain::Currency;
use crate::errors::{MoneyError, MoneyResult};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An exact monetary amount: a signed count of sub-units plus its currency.
///
/// The sub-unit count (e.g. cents) is the authoritative representation; the
/// main-unit view is a floating-point convenience only. Every operation
/// returns a new value, and binary operations require both operands to share
/// a currency.
///
/// # Example
/// ```
/// use exact_money::prelude::*;
///
/// # fn main() -> MoneyResult<()> {
/// let registry = CurrencyRegistry::new();
/// let eur = registry.eur()?;
///
/// let price = Money::of(12.5, &eur)?;
/// let shipping = Money::of_sub_units(495, &eur);
/// let total = price.plus(&shipping)?;
///
/// assert_eq!(total.sub_units(), 1745);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Money {
    sub_units: i64,
    currency: Currency,
}

/// Truncate a floating value toward zero into the sub-unit range.
///
/// Truncation, not rounding, is the crate-wide conversion policy: fractional
/// sub-units beyond the divisor's resolution are discarded.
pub(crate) fn truncate_to_sub_units(value: f64) -> MoneyResult<i64> {
    if !value.is_finite() {
        return Err(MoneyError::Overflow);
    }

    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if truncated >= i64::MAX as f64 || truncated < i64::MIN as f64 {
        return Err(MoneyError::Overflow);
    }

    Ok(truncated as i64)
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an amount from a number of main units.
    ///
    /// The value is scaled by the currency's sub-unit divisor and truncated
    /// toward zero. `Money::of(100.0 / 3.0, &eur)` therefore holds 3333
    /// cents, not 3334.
    ///
    /// # Errors
    /// Returns `Overflow` if the scaled value does not fit the sub-unit
    /// range, or if `main_units` is not finite.
    pub fn of(main_units: f64, currency: &Currency) -> MoneyResult<Self> {
        let sub_units = truncate_to_sub_units(main_units * currency.sub_unit_divisor() as f64)?;
        Ok(Self::of_sub_units(sub_units, currency))
    }

    /// Create an amount from an exact sub-unit count. No truncation risk.
    #[inline]
    pub fn of_sub_units(sub_units: i64, currency: &Currency) -> Self {
        Self {
            sub_units,
            currency: currency.clone(),
        }
    }

    /// The zero amount of `currency`.
    #[inline]
    pub fn zero(currency: &Currency) -> Self {
        Self::of_sub_units(0, currency)
    }

    /// Same currency, replaced sub-unit count.
    #[inline]
    pub fn with_sub_units(&self, sub_units: i64) -> Self {
        Self::of_sub_units(sub_units, &self.currency)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The exact sub-unit count.
    #[inline]
    pub fn sub_units(&self) -> i64 {
        self.sub_units
    }

    /// The currency this amount is denominated in.
    #[inline]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Main-unit view of this amount (e.g. 2.5 for 250 cents).
    ///
    /// Display convenience only; never feed this back into exact arithmetic.
    #[inline]
    pub fn main_units(&self) -> f64 {
        self.sub_units as f64 / self.currency.sub_unit_divisor() as f64
    }

    /// Check if the amount is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sub_units == 0
    }

    /// Check if the amount is positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sub_units > 0
    }

    /// Check if the amount is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sub_units < 0
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Exact sum of two same-currency amounts.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ, `Overflow` if
    /// the sum leaves the sub-unit range.
    pub fn plus(&self, other: &Money) -> MoneyResult<Self> {
        self.assert_same_currency(other)?;

        self.sub_units
            .checked_add(other.sub_units)
            .map(|sum| self.with_sub_units(sum))
            .ok_or(MoneyError::Overflow)
    }

    /// Exact difference of two same-currency amounts.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ, `Overflow` if
    /// the difference leaves the sub-unit range.
    pub fn minus(&self, other: &Money) -> MoneyResult<Self> {
        self.assert_same_currency(other)?;

        self.sub_units
            .checked_sub(other.sub_units)
            .map(|diff| self.with_sub_units(diff))
            .ok_or(MoneyError::Overflow)
    }

    /// Scale by a floating multiplier, truncating toward zero.
    ///
    /// This can lose sub-units; callers that need an exact split of an
    /// amount must use [`Money::allocate`] instead.
    ///
    /// # Errors
    /// Returns `Overflow` if the scaled value leaves the sub-unit range or
    /// the product is not finite.
    ///
    /// [`Money::allocate`]: crate::domain::Money::allocate
    pub fn times(&self, multiplier: f64) -> MoneyResult<Self> {
        let scaled = truncate_to_sub_units(self.sub_units as f64 * multiplier)?;
        Ok(self.with_sub_units(scaled))
    }

    /// Signed comparison of two same-currency amounts.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the currencies differ.
    pub fn compare_to(&self, other: &Money) -> MoneyResult<Ordering> {
        self.assert_same_currency(other)?;
        Ok(self.sub_units.cmp(&other.sub_units))
    }

    fn assert_same_currency(&self, other: &Money) -> MoneyResult<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                left: self.currency.symbol().to_string(),
                right: other.currency.symbol().to_string(),
            })
        }
    }

    // ========================================================================
    // Decimal boundary (parsing user input, emitting API responses)
    // ========================================================================

    /// Create an amount of main units from a `rust_decimal::Decimal`.
    ///
    /// The same truncation-toward-zero policy as [`Money::of`] applies, but
    /// without the float detour, so values like `19.99` convert exactly.
    ///
    /// # Errors
    /// Returns `Overflow` if the scaled value does not fit the sub-unit
    /// range.
    pub fn from_decimal(main_units: rust_decimal::Decimal, currency: &Currency) -> MoneyResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        let scaled = main_units * rust_decimal::Decimal::from(currency.sub_unit_divisor());
        let sub_units = scaled.trunc().to_i64().ok_or(MoneyError::Overflow)?;

        Ok(Self::of_sub_units(sub_units, currency))
    }

    /// The exact main-unit value as a `rust_decimal::Decimal`.
    pub fn to_decimal(&self) -> rust_decimal::Decimal {
        rust_decimal::Decimal::from(self.sub_units)
            / rust_decimal::Decimal::from(self.currency.sub_unit_divisor())
    }
}

// Cross-currency amounts are unordered; same-currency amounts order by
// sub-unit count.
impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency == other.currency {
            Some(self.sub_units.cmp(&other.sub_units))
        } else {
            None
        }
    }
}

impl fmt::Display for Money {
    /// Diagnostic rendering as `"<symbol> <sub_units>"`. Not parseable, no
    /// round-trip guarantee.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.sub_units)
    }
}
