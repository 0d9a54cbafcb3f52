// ============================================================================
// Currency Arithmetic
// Add, subtract, multiply and divide on scaled minor units
// ============================================================================
//
// Every operation reads the receiver's minor units at the current precision,
// combines them with the parsed operand and rounds the result back to whole
// minor units immediately. Intermediate precision is never carried from one
// operation into the next.

use super::parser;
use crate::domain::{config, Currency, Input, Settings};
use crate::numeric::{scaled, CurrencyError, CurrencyResult};

impl Currency {
    /// Add `other` under the process-wide settings.
    pub fn add<'a>(self, other: impl Into<Input<'a>>) -> CurrencyResult<Self> {
        self.add_with(other, &config::settings())
    }

    /// Subtract `other` under the process-wide settings.
    pub fn subtract<'a>(self, other: impl Into<Input<'a>>) -> CurrencyResult<Self> {
        self.subtract_with(other, &config::settings())
    }

    /// Multiply by `factor` under the process-wide settings.
    pub fn multiply<'a>(self, factor: impl Into<Input<'a>>) -> CurrencyResult<Self> {
        self.multiply_with(factor, &config::settings())
    }

    /// Divide by `divisor` under the process-wide settings.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if the divisor parses to zero.
    pub fn divide<'a>(self, divisor: impl Into<Input<'a>>) -> CurrencyResult<Self> {
        self.divide_with(divisor, &config::settings())
    }

    /// `self + other`, both rounded to minor units first.
    pub fn add_with<'a>(
        self,
        other: impl Into<Input<'a>>,
        settings: &Settings,
    ) -> CurrencyResult<Self> {
        let precision = settings.checked_precision()?;
        let lhs = self.scaled_at(precision)?;
        let rhs = parser::parse(&other.into(), settings, true)?;

        let sum = lhs
            .checked_add(rhs)
            .ok_or_else(|| CurrencyError::out_of_range(rhs.is_sign_negative()))?;
        Self::from_scaled(sum, precision)
    }

    /// `self - other`, both rounded to minor units first.
    pub fn subtract_with<'a>(
        self,
        other: impl Into<Input<'a>>,
        settings: &Settings,
    ) -> CurrencyResult<Self> {
        let precision = settings.checked_precision()?;
        let lhs = self.scaled_at(precision)?;
        let rhs = parser::parse(&other.into(), settings, true)?;

        let difference = lhs
            .checked_sub(rhs)
            .ok_or_else(|| CurrencyError::out_of_range(!rhs.is_sign_negative()))?;
        Self::from_scaled(difference, precision)
    }

    /// `self × factor`, rescaled once.
    ///
    /// The factor keeps its full precision (`1.23 × 0.333 = 0.40959 -> 0.41`).
    pub fn multiply_with<'a>(
        self,
        factor: impl Into<Input<'a>>,
        settings: &Settings,
    ) -> CurrencyResult<Self> {
        let precision = settings.checked_precision()?;
        let lhs = self.scaled_at(precision)?;
        let rhs = parser::parse(&factor.into(), settings, false)?;
        let negative = lhs.is_sign_negative() != rhs.is_sign_negative();

        let product = lhs
            .checked_mul(rhs)
            .and_then(|product| product.checked_div(scaled::scale_factor(precision)))
            .ok_or_else(|| CurrencyError::out_of_range(negative))?;
        Self::from_scaled(product, precision)
    }

    /// `self ÷ divisor`; the divisor keeps its full precision.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if the divisor is zero, including text that
    /// parses to zero.
    pub fn divide_with<'a>(
        self,
        divisor: impl Into<Input<'a>>,
        settings: &Settings,
    ) -> CurrencyResult<Self> {
        let precision = settings.checked_precision()?;
        let lhs = self.scaled_at(precision)?;
        let rhs = parser::parse(&divisor.into(), settings, false)?;

        if rhs.is_zero() {
            tracing::debug!(dividend = %self.value(), "Currency division by zero");
            return Err(CurrencyError::DivisionByZero);
        }

        let negative = lhs.is_sign_negative() != rhs.is_sign_negative();
        let quotient = lhs
            .checked_mul(scaled::scale_factor(precision))
            .and_then(|scaled_lhs| scaled_lhs.checked_div(rhs))
            .ok_or_else(|| CurrencyError::out_of_range(negative))?;
        Self::from_scaled(quotient, precision)
    }

    /// Sum of `amounts` at the process-wide precision (zero when empty).
    pub fn sum<I>(amounts: I) -> CurrencyResult<Self>
    where
        I: IntoIterator<Item = Currency>,
    {
        let settings = config::settings();
        let start = Self::zero(settings.checked_precision()?)?;
        amounts
            .into_iter()
            .try_fold(start, |total, amount| total.add_with(amount, &settings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn usd() -> Settings {
        Settings::default()
    }

    fn amount<'a>(value: impl Into<Input<'a>>) -> Currency {
        Currency::with_settings(value, &usd()).unwrap()
    }

    #[test]
    fn test_add_has_no_float_residue() {
        let sum = amount(0.1).add_with(0.2, &usd()).unwrap();
        assert_eq!(sum.int_value(), 30);
        assert_eq!(sum.value(), Decimal::new(3, 1));
    }

    #[test]
    fn test_add_mixed_inputs() {
        let x = amount("$1,234.56");
        let y = x.add_with("(0.56)", &usd()).unwrap();
        assert_eq!(y.int_value(), 123_400);

        let z = y.add_with(amount(1), &usd()).unwrap();
        assert_eq!(z.int_value(), 123_500);
    }

    #[test]
    fn test_subtract() {
        let x = amount(2.51).subtract_with(0.01, &usd()).unwrap();
        assert_eq!(x.int_value(), 250);

        let y = amount(1).subtract_with("5.25", &usd()).unwrap();
        assert_eq!(y.int_value(), -425);
    }

    #[test]
    fn test_operand_rounded_before_add() {
        // 0.004 rounds to zero minor units before it is added
        let x = amount(1).add_with(0.004, &usd()).unwrap();
        assert_eq!(x.int_value(), 100);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(amount(1.23).multiply_with(2, &usd()).unwrap().int_value(), 246);
        assert_eq!(amount(1.23).multiply_with(0.333, &usd()).unwrap().int_value(), 41);
        assert_eq!(amount(-2.5).multiply_with(1.5, &usd()).unwrap().int_value(), -375);
        assert_eq!(amount(10).multiply_with(amount(0.5), &usd()).unwrap().int_value(), 500);
    }

    #[test]
    fn test_divide() {
        assert_eq!(amount(10).divide_with(3, &usd()).unwrap().int_value(), 333);
        assert_eq!(amount(10).divide_with(-4, &usd()).unwrap().int_value(), -250);
        // The divisor is not rounded: 1 / 0.001 = 1000
        assert_eq!(amount(1).divide_with(0.001, &usd()).unwrap().int_value(), 100_000);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            amount(5).divide_with(0, &usd()),
            Err(CurrencyError::DivisionByZero)
        );
        assert_eq!(
            amount(5).divide_with("abc", &usd()),
            Err(CurrencyError::DivisionByZero)
        );
    }

    #[test]
    fn test_result_uses_current_precision() {
        let cents = amount(1.25);
        let tenths = usd().with_precision(1);

        // 1.25 + 0 at one digit re-rounds half away from zero
        let x = cents.add_with(0, &tenths).unwrap();
        assert_eq!(x.precision(), 1);
        assert_eq!(x.int_value(), 13);
    }

    #[test]
    fn test_overflow() {
        let max = Currency::from_minor_units(i64::MAX, 2).unwrap();
        assert_eq!(max.add_with(1, &usd()), Err(CurrencyError::Overflow));

        let min = Currency::from_minor_units(i64::MIN, 2).unwrap();
        assert_eq!(min.subtract_with(1, &usd()), Err(CurrencyError::Underflow));
        assert_eq!(min.multiply_with(2, &usd()), Err(CurrencyError::Underflow));
    }

    #[test]
    fn test_strict_mode_operand() {
        let strict = usd().with_error_on_invalid(true);
        assert_eq!(
            amount(1).add_with(None::<f64>, &strict),
            Err(CurrencyError::InvalidInput)
        );
        assert_eq!(amount(1).add_with(None::<f64>, &usd()).unwrap().int_value(), 100);
    }
}
