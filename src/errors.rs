// ============================================================================
// Money Errors
// Error types for money construction, arithmetic, and allocation
// ============================================================================

use std::fmt;

/// Errors that can occur when constructing or combining money values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MoneyError {
    /// Binary operation attempted between two different currencies
    CurrencyMismatch {
        /// Symbol of the left-hand operand's currency
        left: String,
        /// Symbol of the right-hand operand's currency
        right: String,
    },
    /// Currency defined with a non-positive sub-unit divisor
    InvalidCurrencyDefinition {
        /// Symbol the definition was attempted for
        symbol: String,
        /// The rejected divisor
        sub_unit_divisor: i64,
    },
    /// Allocation requested with a malformed or zero-sum portion set
    InvalidPortions {
        /// What was wrong with the portions
        reason: String,
    },
    /// Result exceeded the representable i64 sub-unit range
    Overflow,
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::CurrencyMismatch { left, right } => {
                write!(f, "currencies {} and {} do not match", left, right)
            },
            MoneyError::InvalidCurrencyDefinition {
                symbol,
                sub_unit_divisor,
            } => write!(
                f,
                "invalid definition for currency {}: sub-unit divisor must be positive, got {}",
                symbol, sub_unit_divisor
            ),
            MoneyError::InvalidPortions { reason } => {
                write!(f, "invalid portions: {}", reason)
            },
            MoneyError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded the sub-unit range")
            },
        }
    }
}

impl std::error::Error for MoneyError {}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MoneyError::CurrencyMismatch {
            left: "EUR".to_string(),
            right: "USD".to_string(),
        };
        assert_eq!(err.to_string(), "currencies EUR and USD do not match");

        let err = MoneyError::InvalidCurrencyDefinition {
            symbol: "XTS".to_string(),
            sub_unit_divisor: 0,
        };
        assert_eq!(
            err.to_string(),
            "invalid definition for currency XTS: sub-unit divisor must be positive, got 0"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(MoneyError::Overflow, MoneyError::Overflow);
        assert_ne!(
            MoneyError::Overflow,
            MoneyError::InvalidPortions {
                reason: "empty".to_string()
            }
        );
    }
}
