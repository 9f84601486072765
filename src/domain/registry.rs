// ============================================================================
// Currency Registry
// Explicit interning registry: one canonical Currency per symbol
// ============================================================================

use crate::domain::currency::{Currency, DEFAULT_SUB_UNIT_DIVISOR};
use crate::errors::MoneyResult;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Interning registry for [`Currency`] values.
///
/// A registry owns the canonical instance for every symbol it has seen.
/// The first definition of a symbol fixes its sub-unit divisor; later
/// definitions return the existing instance and ignore their divisor
/// argument. Registration is the only mutation in the crate and is guarded
/// for concurrent first use, so a registry can be shared freely across
/// threads behind an `Arc`.
///
/// Intended lifecycle: build once at program start, pass it where currencies
/// are resolved, read thereafter.
#[derive(Debug, Default)]
pub struct CurrencyRegistry {
    currencies: RwLock<HashMap<String, Currency>>,
}

impl CurrencyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `symbol` with the given sub-unit divisor and return the
    /// canonical instance.
    ///
    /// First definition wins: if the symbol is already registered, the
    /// existing instance is returned and `sub_unit_divisor` is ignored.
    ///
    /// # Errors
    /// Returns `InvalidCurrencyDefinition` if the symbol is new and the
    /// divisor is not positive.
    pub fn define(&self, symbol: &str, sub_unit_divisor: i64) -> MoneyResult<Currency> {
        if let Some(existing) = self.currencies.read().get(symbol) {
            return Ok(existing.clone());
        }

        let mut currencies = self.currencies.write();
        // Double-check under the write lock: another thread may have won
        // the race between our read and write acquisition.
        if let Some(existing) = currencies.get(symbol) {
            return Ok(existing.clone());
        }

        let currency = Currency::new(symbol, sub_unit_divisor)?;
        currencies.insert(symbol.to_string(), currency.clone());
        tracing::debug!(symbol, sub_unit_divisor, "registered currency");

        Ok(currency)
    }

    /// Return the instance for `symbol`, defining it with the default
    /// divisor of 100 if it has not been seen before.
    pub fn of(&self, symbol: &str) -> MoneyResult<Currency> {
        self.define(symbol, DEFAULT_SUB_UNIT_DIVISOR)
    }

    /// The euro, 100 cents per unit.
    pub fn eur(&self) -> MoneyResult<Currency> {
        self.define("EUR", 100)
    }

    /// The US dollar, 100 cents per unit.
    pub fn usd(&self) -> MoneyResult<Currency> {
        self.define("USD", 100)
    }

    /// Look up a symbol without defining it.
    pub fn get(&self, symbol: &str) -> Option<Currency> {
        self.currencies.read().get(symbol).cloned()
    }

    /// Whether `symbol` has been defined.
    pub fn contains(&self, symbol: &str) -> bool {
        self.currencies.read().contains_key(symbol)
    }

    /// Number of defined currencies.
    pub fn len(&self) -> usize {
        self.currencies.read().len()
    }

    /// Whether no currency has been defined yet.
    pub fn is_empty(&self) -> bool {
        self.currencies.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MoneyError;
    use std::sync::Arc;

    #[test]
    fn test_define_and_get() {
        let registry = CurrencyRegistry::new();
        assert!(registry.is_empty());

        let eur = registry.define("EUR", 100).unwrap();
        assert_eq!(eur.symbol(), "EUR");
        assert_eq!(eur.sub_unit_divisor(), 100);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("EUR"));
        assert_eq!(registry.get("EUR").unwrap(), eur);
        assert!(registry.get("USD").is_none());
    }

    #[test]
    fn test_first_definition_wins() {
        let registry = CurrencyRegistry::new();

        let first = registry.define("EUR", 100).unwrap();
        let second = registry.define("EUR", 1000).unwrap();

        assert_eq!(first, second);
        assert_eq!(second.sub_unit_divisor(), 100);
    }

    #[test]
    fn test_redefinition_ignores_invalid_divisor() {
        let registry = CurrencyRegistry::new();

        registry.define("EUR", 100).unwrap();
        // Symbol already interned, so the bad divisor is never inspected.
        let redefined = registry.define("EUR", -1).unwrap();
        assert_eq!(redefined.sub_unit_divisor(), 100);
    }

    #[test]
    fn test_invalid_first_definition() {
        let registry = CurrencyRegistry::new();

        let result = registry.define("XTS", 0);
        assert_eq!(
            result.unwrap_err(),
            MoneyError::InvalidCurrencyDefinition {
                symbol: "XTS".to_string(),
                sub_unit_divisor: 0,
            }
        );
        assert!(!registry.contains("XTS"));
    }

    #[test]
    fn test_of_uses_default_divisor() {
        let registry = CurrencyRegistry::new();

        let custom = registry.of("custom").unwrap();
        assert_eq!(custom.sub_unit_divisor(), 100);

        // Existing symbols are returned as-is.
        registry.define("JPY", 1).unwrap();
        assert_eq!(registry.of("JPY").unwrap().sub_unit_divisor(), 1);
    }

    #[test]
    fn test_presets() {
        let registry = CurrencyRegistry::new();

        let eur = registry.eur().unwrap();
        let usd = registry.usd().unwrap();

        assert_eq!(eur.symbol(), "EUR");
        assert_eq!(usd.symbol(), "USD");
        assert_eq!(eur.sub_unit_divisor(), 100);
        assert_eq!(usd.sub_unit_divisor(), 100);
        assert_ne!(eur, usd);
    }

    #[test]
    fn test_concurrent_first_use() {
        let registry = Arc::new(CurrencyRegistry::new());

        let handles: Vec<_> = (0..8i64)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.define("EUR", 100 + i).unwrap())
            })
            .collect();

        let currencies: Vec<Currency> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();

        // Exactly one divisor won, and every thread saw the same instance.
        let divisor = currencies[0].sub_unit_divisor();
        assert!(currencies.iter().all(|c| c.sub_unit_divisor() == divisor));
        assert_eq!(registry.len(), 1);
    }
}
