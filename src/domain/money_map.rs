// ============================================================================
// Money Map
// Insertion-ordered key -> Money store used for allocation results
// ============================================================================

use crate::domain::Money;
use crate::errors::MoneyResult;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Key addressing one portion of an allocation: a positional index or a
/// caller-supplied label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PortionKey {
    /// Positional key, used for counted and unlabeled weighted portions
    Index(usize),
    /// Named key, used for labeled weighted portions
    Label(String),
}

impl From<usize> for PortionKey {
    fn from(index: usize) -> Self {
        PortionKey::Index(index)
    }
}

impl From<&str> for PortionKey {
    fn from(label: &str) -> Self {
        PortionKey::Label(label.to_string())
    }
}

impl From<String> for PortionKey {
    fn from(label: String) -> Self {
        PortionKey::Label(label)
    }
}

impl fmt::Display for PortionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortionKey::Index(index) => write!(f, "{}", index),
            PortionKey::Label(label) => f.write_str(label),
        }
    }
}

/// Insertion-ordered mapping from [`PortionKey`] to [`Money`].
///
/// Values are `Money` by construction, so the container cannot hold anything
/// else; it does not itself enforce currency uniformity across entries (the
/// allocator guarantees that for the maps it produces). Setting an existing
/// key replaces the value in place, keeping its original position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoneyMap {
    entries: Vec<(PortionKey, Money)>,
}

impl MoneyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Store `value` under `key`, replacing any existing value in place.
    pub fn set(&mut self, key: impl Into<PortionKey>, value: Money) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// The value stored under `key`, if any.
    pub fn get(&self, key: &PortionKey) -> Option<&Money> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Remove and return the value stored under `key`, preserving the order
    /// of the remaining entries.
    pub fn unset(&mut self, key: &PortionKey) -> Option<Money> {
        let position = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(position).1)
    }

    /// Whether `key` has a stored value.
    pub fn contains(&self, key: &PortionKey) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&PortionKey, &Money)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &PortionKey> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Money> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Exact sum of all stored amounts, or `None` for an empty map.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` if the entries span more than one
    /// currency, `Overflow` if the sum leaves the sub-unit range.
    pub fn total(&self) -> MoneyResult<Option<Money>> {
        let mut values = self.values();
        let first = match values.next() {
            Some(first) => first.clone(),
            None => return Ok(None),
        };

        values
            .try_fold(first, |sum, value| sum.plus(value))
            .map(Some)
    }
}

impl FromIterator<(PortionKey, Money)> for MoneyMap {
    fn from_iter<I: IntoIterator<Item = (PortionKey, Money)>>(iter: I) -> Self {
        let mut map = MoneyMap::new();
        for (key, value) in iter {
            map.set(key, value);
        }
        map
    }
}

impl IntoIterator for MoneyMap {
    type Item = (PortionKey, Money);
    type IntoIter = std::vec::IntoIter<(PortionKey, Money)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoneyMap {
    type Item = &'a (PortionKey, Money);
    type IntoIter = std::slice::Iter<'a, (PortionKey, Money)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Currency, CurrencyRegistry};
    use crate::errors::MoneyError;

    fn eur() -> Currency {
        CurrencyRegistry::new().eur().unwrap()
    }

    #[test]
    fn test_set_get_unset() {
        let eur = eur();
        let mut map = MoneyMap::new();
        assert!(map.is_empty());

        map.set(0usize, Money::of_sub_units(34, &eur));
        map.set("fees", Money::of_sub_units(33, &eur));
        assert_eq!(map.len(), 2);

        assert_eq!(
            map.get(&PortionKey::Index(0)).unwrap().sub_units(),
            34
        );
        assert_eq!(
            map.get(&PortionKey::from("fees")).unwrap().sub_units(),
            33
        );
        assert!(map.get(&PortionKey::Index(7)).is_none());

        let removed = map.unset(&PortionKey::Index(0)).unwrap();
        assert_eq!(removed.sub_units(), 34);
        assert!(!map.contains(&PortionKey::Index(0)));
        assert_eq!(map.len(), 1);
        assert!(map.unset(&PortionKey::Index(0)).is_none());
    }

    #[test]
    fn test_set_replaces_in_place() {
        let eur = eur();
        let mut map = MoneyMap::new();

        map.set("a", Money::of_sub_units(1, &eur));
        map.set("b", Money::of_sub_units(2, &eur));
        map.set("a", Money::of_sub_units(10, &eur));

        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec![PortionKey::from("a"), PortionKey::from("b")]);
        assert_eq!(map.get(&PortionKey::from("a")).unwrap().sub_units(), 10);
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let eur = eur();
        let mut map = MoneyMap::new();

        for (i, sub_units) in [50, 30, 20].iter().enumerate() {
            map.set(i, Money::of_sub_units(*sub_units, &eur));
        }

        let sub_units: Vec<i64> = map.values().map(Money::sub_units).collect();
        assert_eq!(sub_units, vec![50, 30, 20]);

        let collected: MoneyMap = map.clone().into_iter().collect();
        assert_eq!(collected, map);
    }

    #[test]
    fn test_total() {
        let eur = eur();
        let registry = CurrencyRegistry::new();
        let usd = registry.usd().unwrap();

        assert_eq!(MoneyMap::new().total().unwrap(), None);

        let mut map = MoneyMap::new();
        map.set(0usize, Money::of_sub_units(34, &eur));
        map.set(1usize, Money::of_sub_units(33, &eur));
        map.set(2usize, Money::of_sub_units(33, &eur));
        assert_eq!(
            map.total().unwrap(),
            Some(Money::of_sub_units(100, &eur))
        );

        map.set(3usize, Money::of_sub_units(1, &usd));
        assert!(matches!(
            map.total(),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_portion_key_display() {
        assert_eq!(PortionKey::Index(3).to_string(), "3");
        assert_eq!(PortionKey::from("fees").to_string(), "fees");
    }
}
