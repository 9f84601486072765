// ============================================================================
// Exact Money Library
// Currency-tagged fixed-point amounts with lossless proportional allocation
// ============================================================================

//! # Exact Money
//!
//! Exact, currency-tagged fixed-point money values with safe arithmetic and
//! fair largest-remainder allocation.
//!
//! ## Features
//!
//! - **Exact sub-unit arithmetic**: amounts are signed i64 sub-unit counts
//!   (e.g. cents), never floats, with checked addition and subtraction
//! - **Currency safety**: binary operations fail with `CurrencyMismatch`
//!   instead of silently mixing currencies
//! - **Lossless allocation**: splitting an amount into proportional shares
//!   never loses or invents a sub-unit
//! - **Interned currencies**: an explicit, thread-safe registry hands out
//!   one canonical instance per symbol
//!
//! ## Example
//!
//! ```rust
//! use exact_money::prelude::*;
//!
//! # fn main() -> MoneyResult<()> {
//! let registry = CurrencyRegistry::new();
//! let eur = registry.eur()?;
//!
//! // EUR 100.00, split 5:3:1
//! let invoice = Money::of_sub_units(10_000, &eur);
//! let shares = invoice.allocate(Portions::weights([5.0, 3.0, 1.0]))?;
//!
//! // Every sub-unit is accounted for.
//! assert_eq!(shares.total()?, Some(invoice));
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod engine;
pub mod errors;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Currency, CurrencyRegistry, Money, MoneyMap, PortionKey, DEFAULT_SUB_UNIT_DIVISOR,
    };
    pub use crate::engine::Portions;
    pub use crate::errors::{MoneyError, MoneyResult};
}
