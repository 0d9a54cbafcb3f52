// ============================================================================
// Parser Input
// Tagged variant for every value type accepted by construction and arithmetic
// ============================================================================

use super::currency::Currency;
use rust_decimal::Decimal;
use std::borrow::Cow;

/// A value that can be turned into minor units.
///
/// Every constructor and arithmetic method accepts `impl Into<Input>`, so
/// callers pass plain numbers, strings or other amounts directly:
///
/// ```rust
/// use currency::Currency;
///
/// let total = Currency::new("$1,234.56")?.add(0.44)?.add(10)?;
/// assert_eq!(total.int_value(), 124_500);
/// # Ok::<(), currency::CurrencyError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Input<'a> {
    /// Binary float, read by its shortest round-trip decimal form
    Number(f64),
    /// Whole number of major units
    Integer(i64),
    /// Exact decimal
    Decimal(Decimal),
    /// Free-form text such as `"$1,234.56"` or `"(1.99)"`
    Text(Cow<'a, str>),
    /// An existing amount; its minor units are reused
    Currency(Currency),
    /// Anything else (booleans, missing values)
    Unsupported,
}

impl From<f64> for Input<'_> {
    fn from(value: f64) -> Self {
        Input::Number(value)
    }
}

impl From<f32> for Input<'_> {
    fn from(value: f32) -> Self {
        // f32 -> f64 widening would expose binary noise (0.1f32 = 0.100000001...)
        match value.to_string().parse::<Decimal>() {
            Ok(decimal) => Input::Decimal(decimal),
            Err(_) => Input::Number(value as f64),
        }
    }
}

impl From<i64> for Input<'_> {
    fn from(value: i64) -> Self {
        Input::Integer(value)
    }
}

impl From<i32> for Input<'_> {
    fn from(value: i32) -> Self {
        Input::Integer(value as i64)
    }
}

impl From<u32> for Input<'_> {
    fn from(value: u32) -> Self {
        Input::Integer(value as i64)
    }
}

impl From<Decimal> for Input<'_> {
    fn from(value: Decimal) -> Self {
        Input::Decimal(value)
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(value: &'a str) -> Self {
        Input::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(value: &'a String) -> Self {
        Input::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Input<'_> {
    fn from(value: String) -> Self {
        Input::Text(Cow::Owned(value))
    }
}

impl From<Currency> for Input<'_> {
    fn from(value: Currency) -> Self {
        Input::Currency(value)
    }
}

impl From<&Currency> for Input<'_> {
    fn from(value: &Currency) -> Self {
        Input::Currency(*value)
    }
}

impl From<bool> for Input<'_> {
    fn from(_: bool) -> Self {
        Input::Unsupported
    }
}

impl<'a, T: Into<Input<'a>>> From<Option<T>> for Input<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Input::Unsupported, Into::into)
    }
}
