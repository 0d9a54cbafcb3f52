// ============================================================================
// Currency Amount
// Immutable fixed-point amount backed by a scaled integer
// ============================================================================

use super::config::{self, Settings, DEFAULT_PRECISION};
use super::input::Input;
use crate::engine::parser;
use crate::numeric::{scaled, CurrencyError, CurrencyResult, MAX_PRECISION};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Neg, Sub};

/// Fixed-point currency amount.
///
/// Internally stores `value × 10^precision` as an i64 ("minor units"),
/// together with the precision those minor units were produced at. The
/// precision is taken from the settings at construction time; every
/// arithmetic result is re-normalised to the settings in force when the
/// operation runs.
///
/// # Example
/// ```rust
/// use currency::Currency;
///
/// let price = Currency::new("$1,234.56")?;
/// assert_eq!(price.int_value(), 123_456);
/// assert_eq!(price.add(0.44)?.to_fixed(), "1235.00");
/// # Ok::<(), currency::CurrencyError>(())
/// ```
#[derive(Clone, Copy)]
pub struct Currency {
    int_value: i64,
    precision: u8,
}

impl Currency {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Parse `value` under the process-wide settings.
    ///
    /// # Errors
    /// - `InvalidInput` for unsupported input in strict mode
    /// - `Overflow`/`Underflow` if the scaled value does not fit in i64
    pub fn new<'a>(value: impl Into<Input<'a>>) -> CurrencyResult<Self> {
        Self::with_settings(value, &config::settings())
    }

    /// Parse `value` under explicit settings.
    pub fn with_settings<'a>(
        value: impl Into<Input<'a>>,
        settings: &Settings,
    ) -> CurrencyResult<Self> {
        let scaled = parser::parse(&value.into(), settings, true)?;
        Self::from_scaled(scaled, settings.precision)
    }

    /// Create from minor units already expressed at `precision` digits.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `precision` exceeds `MAX_PRECISION`.
    pub fn from_minor_units(int_value: i64, precision: u8) -> CurrencyResult<Self> {
        if precision > MAX_PRECISION {
            return Err(CurrencyError::InvalidInput);
        }
        Ok(Self::from_raw(int_value, precision))
    }

    /// Zero at the given precision.
    pub fn zero(precision: u8) -> CurrencyResult<Self> {
        Self::from_minor_units(0, precision)
    }

    /// Round a scaled value to minor units at `precision`.
    pub(crate) fn from_scaled(scaled: Decimal, precision: u8) -> CurrencyResult<Self> {
        scaled::to_minor_units(scaled).map(|raw| Self::from_raw(raw, precision))
    }

    #[inline]
    pub(crate) const fn from_raw(int_value: i64, precision: u8) -> Self {
        Self {
            int_value,
            precision,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The scaled integer (minor units).
    #[inline]
    pub const fn int_value(self) -> i64 {
        self.int_value
    }

    /// Number of fractional digits the minor units are expressed in.
    #[inline]
    pub const fn precision(self) -> u8 {
        self.precision
    }

    /// Exact decimal view: `int_value / 10^precision`.
    ///
    /// Informational only; arithmetic works on the minor units.
    #[inline]
    pub fn value(self) -> Decimal {
        Decimal::new(self.int_value, self.precision as u32)
    }

    /// Whole major units, rounded half away from zero.
    pub fn dollars(self) -> i64 {
        let scale = scaled::pow10(self.precision) as i128;
        // Rounded quotient never exceeds |int_value|, so it fits back into i64
        scaled::div_round_half_away(self.int_value as i128, scale) as i64
    }

    /// Minor units left over after whole major units; sign follows the amount.
    #[inline]
    pub fn cents(self) -> i64 {
        self.int_value % scaled::pow10(self.precision)
    }

    /// Same amount with the opposite sign, keeping its precision.
    ///
    /// # Errors
    /// Returns `Overflow` for `i64::MIN` minor units.
    #[inline]
    pub fn negate(self) -> CurrencyResult<Self> {
        self.int_value
            .checked_neg()
            .map(|int_value| Self::from_raw(int_value, self.precision))
            .ok_or(CurrencyError::Overflow)
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.int_value == 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.int_value > 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.int_value < 0
    }

    /// Minor units re-expressed at `precision` digits, unrounded.
    ///
    /// Equal precisions return the stored integer unchanged.
    pub(crate) fn scaled_at(self, precision: u8) -> CurrencyResult<Decimal> {
        if precision == self.precision {
            return Ok(Decimal::from(self.int_value));
        }
        self.value()
            .checked_mul(scaled::scale_factor(precision))
            .ok_or_else(|| CurrencyError::out_of_range(self.is_negative()))
    }

    /// Re-expressed at the precision in `settings`, rounded half away from zero.
    pub(crate) fn normalized(self, settings: &Settings) -> CurrencyResult<Self> {
        let precision = settings.checked_precision()?;
        if precision == self.precision {
            return Ok(self);
        }
        Self::from_scaled(self.scaled_at(precision)?, precision)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Currency {
    #[inline]
    fn default() -> Self {
        Self::from_raw(0, DEFAULT_PRECISION)
    }
}

// Comparisons use the exact decimal value, so 1.00 (p=2) == 1.000 (p=3)
impl PartialEq for Currency {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for Currency {}

impl PartialOrd for Currency {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Currency {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl Hash for Currency {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().normalize().hash(state);
    }
}

// Infallible Neg/Add/Sub for ergonomics (panics on overflow - use negate/add/subtract in production)
impl Neg for Currency {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate().expect("Currency negation overflow")
    }
}

impl Add for Currency {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.add_with(rhs, &config::settings())
            .expect("Currency addition overflow")
    }
}

impl Sub for Currency {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract_with(rhs, &config::settings())
            .expect("Currency subtraction overflow")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Currency({}, raw={}, precision={})",
            self.value(),
            self.int_value,
            self.precision
        )
    }
}

/// Same text as [`Currency::to_fixed`].
impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fixed())
    }
}

// ============================================================================
// Serde (JSON projection)
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Currency;
    use crate::domain::input::Input;
    use rust_decimal::prelude::ToPrimitive;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    /// Serialises as the plain decimal value, e.g. `1234.5`.
    impl Serialize for Currency {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_f64(self.value().to_f64().unwrap_or_default())
        }
    }

    struct CurrencyVisitor;

    impl CurrencyVisitor {
        fn build<'a, E: de::Error>(input: impl Into<Input<'a>>) -> Result<Currency, E> {
            Currency::new(input).map_err(E::custom)
        }
    }

    impl<'de> Visitor<'de> for CurrencyVisitor {
        type Value = Currency;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number or a currency string")
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Currency, E> {
            Self::build(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Currency, E> {
            Self::build(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Currency, E> {
            match i64::try_from(value) {
                Ok(value) => Self::build(value),
                Err(_) => Self::build(value as f64),
            }
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Currency, E> {
            Self::build(value)
        }
    }

    /// Accepts a number or a string, parsed under the process-wide settings.
    impl<'de> Deserialize<'de> for Currency {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(CurrencyVisitor)
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_serialize_as_decimal_value() {
        let x = Currency::from_minor_units(123_450, 2).unwrap();
        assert_eq!(serde_json::to_string(&x).unwrap(), "1234.5");

        let neg = Currency::from_minor_units(-199, 2).unwrap();
        assert_eq!(serde_json::to_value(neg).unwrap(), serde_json::json!(-1.99));
    }

    #[test]
    fn test_deserialize_number_or_string() {
        let from_number: Currency = serde_json::from_str("19.99").unwrap();
        assert_eq!(from_number.int_value(), 1999);

        let from_integer: Currency = serde_json::from_str("7").unwrap();
        assert_eq!(from_integer.int_value(), 700);

        let from_text: Currency = serde_json::from_str("\"$1,234.56\"").unwrap();
        assert_eq!(from_text.int_value(), 123_456);
    }

    #[test]
    fn test_settings_round_trip_json() {
        let json = serde_json::to_string(&Settings::euro()).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Settings::euro());

        let partial: crate::domain::SettingsUpdate =
            serde_json::from_str(r#"{"symbol":"£"}"#).unwrap();
        assert_eq!(partial.symbol.as_deref(), Some("£"));
        assert_eq!(partial.precision, None);
    }
}
