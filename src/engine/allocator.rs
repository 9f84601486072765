// ============================================================================
// Largest-Remainder Allocator
// Splits an exact amount into proportional shares without losing sub-units
// ============================================================================

use crate::domain::money::truncate_to_sub_units;
use crate::domain::{Money, MoneyMap, PortionKey};
use crate::errors::{MoneyError, MoneyResult};
use smallvec::SmallVec;
use std::collections::HashSet;

// Most allocations split an amount a handful of ways; keep the scratch
// buffers on the stack for those.
type EntryVec = SmallVec<[(PortionKey, f64); 8]>;
type ShareVec = SmallVec<[i64; 8]>;
type OrderVec = SmallVec<[usize; 8]>;

/// How an amount should be split.
///
/// The two cases make the loosely-typed "count or weight collection" input
/// explicit at the type level:
///
/// - [`Portions::EqualCount`]: `n` equal shares, keyed `0..n`.
/// - [`Portions::WeightedShares`]: ordered, keyed, non-negative weights;
///   shares are proportional to weight within one sub-unit.
///
/// # Example
/// ```
/// use exact_money::prelude::*;
///
/// let equal = Portions::equal(3);
/// let weighted = Portions::weights([5.0, 3.0, 1.0]);
/// let labeled = Portions::labeled([("rent", 70.0), ("food", 30.0)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Portions {
    /// Split into this many equal shares
    EqualCount(usize),
    /// Split proportionally to keyed weights, in the given order
    WeightedShares(Vec<(PortionKey, f64)>),
}

impl Portions {
    /// `count` equal shares, keyed by index.
    pub fn equal(count: usize) -> Self {
        Portions::EqualCount(count)
    }

    /// Proportional shares keyed by index, in the given order.
    pub fn weights(weights: impl IntoIterator<Item = f64>) -> Self {
        Portions::WeightedShares(
            weights
                .into_iter()
                .enumerate()
                .map(|(index, weight)| (PortionKey::Index(index), weight))
                .collect(),
        )
    }

    /// Proportional shares keyed by label, in the given order.
    pub fn labeled<L: Into<String>>(weights: impl IntoIterator<Item = (L, f64)>) -> Self {
        Portions::WeightedShares(
            weights
                .into_iter()
                .map(|(label, weight)| (PortionKey::Label(label.into()), weight))
                .collect(),
        )
    }

    /// Resolve into a validated, keyed weight list.
    ///
    /// # Errors
    /// Returns `InvalidPortions` for a zero count, an empty weight list,
    /// duplicate keys, non-finite or negative weights, or weights summing
    /// to zero.
    fn into_entries(self) -> MoneyResult<EntryVec> {
        let entries: EntryVec = match self {
            Portions::EqualCount(0) => {
                return Err(invalid_portions("portion count must be positive"));
            },
            Portions::EqualCount(count) => {
                (0..count).map(|i| (PortionKey::Index(i), 1.0)).collect()
            },
            Portions::WeightedShares(weights) => weights.into_iter().collect(),
        };

        if entries.is_empty() {
            return Err(invalid_portions("weight collection is empty"));
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for (key, weight) in &entries {
            if !weight.is_finite() {
                return Err(invalid_portions(&format!(
                    "weight for key {} is not finite",
                    key
                )));
            }
            if *weight < 0.0 {
                return Err(invalid_portions(&format!(
                    "weight for key {} is negative",
                    key
                )));
            }
            if !seen.insert(key.clone()) {
                return Err(invalid_portions(&format!("duplicate portion key {}", key)));
            }
        }

        let total: f64 = entries.iter().map(|(_, weight)| weight).sum();
        if total == 0.0 {
            return Err(invalid_portions("weights sum to zero"));
        }

        Ok(entries)
    }
}

fn invalid_portions(reason: &str) -> MoneyError {
    MoneyError::InvalidPortions {
        reason: reason.to_string(),
    }
}

impl Money {
    /// Split this amount into proportional shares that sum back exactly.
    ///
    /// Each share is the truncated-toward-zero proportional value; the
    /// sub-units left over from truncation are then handed out one at a
    /// time (carrying the sign of the total) to the shares in descending
    /// weight order, cycling, ties broken by original key order. Larger
    /// weights therefore get the leftover sub-units first.
    ///
    /// The result has one entry per portion key, in the original key order,
    /// and its sub-unit sum always equals this amount's. The allocation is
    /// deterministic for identical inputs.
    ///
    /// # Example
    /// ```
    /// use exact_money::prelude::*;
    ///
    /// # fn main() -> MoneyResult<()> {
    /// let registry = CurrencyRegistry::new();
    /// let eur = registry.eur()?;
    ///
    /// let shares = Money::of_sub_units(100, &eur).allocate(Portions::equal(3))?;
    /// let sub_units: Vec<i64> = shares.values().map(Money::sub_units).collect();
    /// assert_eq!(sub_units, vec![34, 33, 33]);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns `InvalidPortions` for malformed portion input (see
    /// [`Portions`]), `Overflow` only for amounts near the sub-unit range
    /// limits.
    pub fn allocate(&self, portions: Portions) -> MoneyResult<MoneyMap> {
        let entries = portions.into_entries()?;
        let total_weight: f64 = entries.iter().map(|(_, weight)| weight).sum();

        // Remainder priority: descending weight, stable on ties so equal
        // weights keep their original relative order.
        let mut order: OrderVec = (0..entries.len()).collect();
        order.sort_by(|&a, &b| entries[b].1.total_cmp(&entries[a].1));

        let total = self.sub_units();
        let mut shares: ShareVec = SmallVec::from_elem(0, entries.len());
        let mut allocated: i64 = 0;

        for &index in &order {
            let weight = entries[index].1;
            let share = truncate_to_sub_units(total as f64 * (weight / total_weight))?;
            shares[index] = share;
            allocated = allocated.checked_add(share).ok_or(MoneyError::Overflow)?;
        }

        // Whole sub-units lost to truncation; hand them out one at a time
        // over the sorted keys, wrapping around.
        let mut remainder = total.checked_sub(allocated).ok_or(MoneyError::Overflow)?;
        let step: i64 = if remainder >= 0 { 1 } else { -1 };
        let mut cursor = 0;
        while remainder != 0 {
            shares[order[cursor % order.len()]] += step;
            remainder -= step;
            cursor += 1;
        }

        let mut result = MoneyMap::with_capacity(entries.len());
        for ((key, _), share) in entries.into_iter().zip(shares) {
            result.set(key, self.with_sub_units(share));
        }

        Ok(result)
    }
}
