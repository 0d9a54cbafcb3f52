// ============================================================================
// Scaled Integers
// Minor-unit helpers: scale factors, rescaling and half-away-from-zero rounding
// ============================================================================

use super::errors::{CurrencyError, CurrencyResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Largest supported precision. 10^18 is the largest power of ten in an i64.
pub const MAX_PRECISION: u8 = 18;

/// Compute 10^n at compile time
pub const fn pow10(n: u8) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// The scale factor 10^precision as a `Decimal`.
///
/// Callers must keep `precision <= MAX_PRECISION`.
#[inline]
pub fn scale_factor(precision: u8) -> Decimal {
    Decimal::from(pow10(precision))
}

/// Round to an integer, ties away from zero (0.5 -> 1, -0.5 -> -1).
#[inline]
pub fn round_half_away(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a scaled value and narrow it to i64 minor units.
///
/// # Errors
/// Returns `Overflow` or `Underflow` if the rounded value does not fit.
pub fn to_minor_units(scaled: Decimal) -> CurrencyResult<i64> {
    let rounded = round_half_away(scaled);
    rounded
        .to_i64()
        .ok_or_else(|| CurrencyError::out_of_range(rounded.is_sign_negative()))
}

/// Integer division rounding ties away from zero. `divisor` must be positive.
#[inline]
pub fn div_round_half_away(value: i128, divisor: i128) -> i128 {
    let quotient = value / divisor;
    let remainder = value % divisor;

    if remainder.unsigned_abs() * 2 >= divisor.unsigned_abs() {
        if value < 0 {
            quotient - 1
        } else {
            quotient + 1
        }
    } else {
        quotient
    }
}

/// Re-express `raw` minor units at `from` digits as minor units at `to` digits.
///
/// Widening is exact; narrowing rounds half away from zero. Both precisions
/// must be at most `MAX_PRECISION`, which keeps the result inside i128.
pub fn rescale(raw: i64, from: u8, to: u8) -> i128 {
    let raw = raw as i128;
    if to >= from {
        raw * pow10(to - from) as i128
    } else {
        div_round_half_away(raw, pow10(from - to) as i128)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), 1);
        assert_eq!(pow10(2), 100);
        assert_eq!(pow10(MAX_PRECISION), 1_000_000_000_000_000_000);
    }

    #[test]
    fn test_round_half_away() {
        assert_eq!(round_half_away(Decimal::new(5, 1)), Decimal::ONE);
        assert_eq!(round_half_away(Decimal::new(-5, 1)), -Decimal::ONE);
        assert_eq!(round_half_away(Decimal::new(49, 2)), Decimal::ZERO);
        assert_eq!(round_half_away(Decimal::new(-1995, 1)), Decimal::from(-200));
    }

    #[test]
    fn test_to_minor_units() {
        assert_eq!(to_minor_units(Decimal::new(12345, 1)), Ok(1235));
        assert_eq!(to_minor_units(Decimal::new(-12345, 1)), Ok(-1235));

        let too_big = Decimal::from(i64::MAX) + Decimal::ONE;
        assert_eq!(to_minor_units(too_big), Err(CurrencyError::Overflow));
        assert_eq!(to_minor_units(-too_big - Decimal::ONE), Err(CurrencyError::Underflow));
    }

    #[test]
    fn test_div_round_half_away() {
        assert_eq!(div_round_half_away(15, 10), 2);
        assert_eq!(div_round_half_away(14, 10), 1);
        assert_eq!(div_round_half_away(-15, 10), -2);
        assert_eq!(div_round_half_away(-14, 10), -1);
        assert_eq!(div_round_half_away(0, 10), 0);
    }

    #[test]
    fn test_rescale() {
        assert_eq!(rescale(199, 2, 4), 19_900);
        assert_eq!(rescale(19_950, 4, 2), 200);
        assert_eq!(rescale(-19_950, 4, 2), -200);
        assert_eq!(rescale(-19_949, 4, 2), -199);
        assert_eq!(rescale(42, 2, 2), 42);
        assert_eq!(rescale(i64::MAX, 0, MAX_PRECISION), i64::MAX as i128 * pow10(18) as i128);
    }
}
