// ============================================================================
// Domain Module
// Core value objects: currencies, money amounts, and allocation results
// ============================================================================

pub mod currency;
pub mod money;
pub mod money_map;
pub mod registry;

pub use currency::{Currency, DEFAULT_SUB_UNIT_DIVISOR};
pub use money::Money;
pub use money_map::{MoneyMap, PortionKey};
pub use registry::CurrencyRegistry;
