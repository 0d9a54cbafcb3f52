// ============================================================================
// Currency Errors
// Error types for parsing, arithmetic and configuration
// ============================================================================

use std::fmt;

/// Errors that can occur while building or combining currency amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrencyError {
    /// Scaled result exceeded i64::MAX minor units
    Overflow,
    /// Scaled result below i64::MIN minor units
    Underflow,
    /// Attempted division by zero (zero divisor or zero distribution count)
    DivisionByZero,
    /// Unsupported input while strict parsing is enabled
    InvalidInput,
    /// Settings failed validation
    InvalidSettings,
}

impl CurrencyError {
    /// Pick `Overflow` or `Underflow` from the sign of the out-of-range result.
    #[inline]
    pub(crate) fn out_of_range(negative: bool) -> Self {
        if negative {
            CurrencyError::Underflow
        } else {
            CurrencyError::Overflow
        }
    }
}

impl fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            CurrencyError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
            CurrencyError::DivisionByZero => write!(f, "division by zero"),
            CurrencyError::InvalidInput => write!(f, "invalid input: unsupported value type"),
            CurrencyError::InvalidSettings => write!(f, "invalid currency settings"),
        }
    }
}

impl std::error::Error for CurrencyError {}

/// Result type alias for currency operations
pub type CurrencyResult<T> = Result<T, CurrencyError>;
