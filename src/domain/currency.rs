// ============================================================================
// Currency Value Object
// ============================================================================

use crate::errors::{MoneyError, MoneyResult};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default sub-unit divisor for two-decimal currencies (100 cents per unit).
pub const DEFAULT_SUB_UNIT_DIVISOR: i64 = 100;

#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct CurrencyInner {
    symbol: String,
    sub_unit_divisor: i64,
}

/// Immutable currency identity: a symbol plus its sub-unit divisor.
///
/// A `Currency` is a cheap-to-clone handle; all clones of an interned
/// currency share one allocation. Equality, ordering into maps, and the
/// currency-match guard on [`Money`] operations are all keyed by symbol
/// alone, since the divisor is fixed at first definition.
///
/// Currencies are created through a [`CurrencyRegistry`], which guarantees
/// one canonical instance per symbol.
///
/// [`Money`]: crate::domain::Money
/// [`CurrencyRegistry`]: crate::domain::CurrencyRegistry
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Currency {
    inner: Arc<CurrencyInner>,
}

impl Currency {
    /// Create a new currency value.
    ///
    /// Only the registry constructs currencies; interning is its job.
    ///
    /// # Errors
    /// Returns `InvalidCurrencyDefinition` if the divisor is not positive.
    pub(crate) fn new(symbol: &str, sub_unit_divisor: i64) -> MoneyResult<Self> {
        if sub_unit_divisor <= 0 {
            return Err(MoneyError::InvalidCurrencyDefinition {
                symbol: symbol.to_string(),
                sub_unit_divisor,
            });
        }

        Ok(Self {
            inner: Arc::new(CurrencyInner {
                symbol: symbol.to_string(),
                sub_unit_divisor,
            }),
        })
    }

    /// The symbol identifying this currency (e.g. "EUR").
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.inner.symbol
    }

    /// Number of sub-units per main unit (e.g. 100 cents per euro).
    #[inline]
    pub fn sub_unit_divisor(&self) -> i64 {
        self.inner.sub_unit_divisor
    }

    /// The zero amount of this currency.
    #[inline]
    pub fn zero(&self) -> crate::domain::Money {
        crate::domain::Money::zero(self)
    }

    /// Amount of this currency from a number of main units.
    ///
    /// Fractional sub-units beyond the divisor's resolution are truncated
    /// toward zero, the same policy as [`Money::of`].
    ///
    /// # Errors
    /// Returns `Overflow` if the value exceeds the sub-unit range.
    ///
    /// [`Money::of`]: crate::domain::Money::of
    pub fn amount_of_main_units(&self, main_units: f64) -> MoneyResult<crate::domain::Money> {
        crate::domain::Money::of(main_units, self)
    }

    /// Amount of this currency from an exact sub-unit count.
    #[inline]
    pub fn amount_of_sub_units(&self, sub_units: i64) -> crate::domain::Money {
        crate::domain::Money::of_sub_units(sub_units, self)
    }
}

// Identity is the symbol; the divisor is fixed per symbol by the registry.
impl PartialEq for Currency {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner.symbol == other.inner.symbol
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.symbol.hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let eur = Currency::new("EUR", 100).unwrap();
        assert_eq!(eur.symbol(), "EUR");
        assert_eq!(eur.sub_unit_divisor(), 100);
    }

    #[test]
    fn test_non_positive_divisor_rejected() {
        for divisor in [0, -1, -100] {
            let result = Currency::new("XTS", divisor);
            assert_eq!(
                result.unwrap_err(),
                MoneyError::InvalidCurrencyDefinition {
                    symbol: "XTS".to_string(),
                    sub_unit_divisor: divisor,
                }
            );
        }
    }

    #[test]
    fn test_equality_by_symbol() {
        let a = Currency::new("EUR", 100).unwrap();
        let b = Currency::new("EUR", 100).unwrap();
        let c = Currency::new("USD", 100).unwrap();

        assert_eq!(a, b);
        assert_eq!(a, a.clone());
        assert_ne!(a, c);
    }

    #[test]
    fn test_display() {
        let eur = Currency::new("EUR", 100).unwrap();
        assert_eq!(eur.to_string(), "EUR");
    }

    #[test]
    fn test_convenience_constructors() {
        let thousands = Currency::new("thousands", 1000).unwrap();

        assert_eq!(thousands.zero().sub_units(), 0);
        assert_eq!(thousands.amount_of_sub_units(250).sub_units(), 250);
        assert_eq!(
            thousands.amount_of_main_units(2.5).unwrap().sub_units(),
            2500
        );
    }
}
