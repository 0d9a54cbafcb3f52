// ============================================================================
// Parser
// Converts numbers, strings and amounts into scaled minor units
// ============================================================================

use crate::domain::{Input, Settings};
use crate::numeric::{scaled, CurrencyError, CurrencyResult};
use rust_decimal::Decimal;

/// Convert `input` into minor units at `settings.precision`.
///
/// With `round` set the result is rounded half away from zero to an integer;
/// without it the exact scaled value is returned (multiplication and division
/// keep operand precision this way until the final re-normalisation).
///
/// Malformed strings yield zero. Unsupported input yields zero unless
/// `settings.error_on_invalid` is set.
///
/// # Errors
/// - `InvalidInput` for unsupported input in strict mode
/// - `InvalidSettings` if the precision is out of range
/// - `Overflow`/`Underflow` if scaling leaves the decimal range
pub fn parse(input: &Input<'_>, settings: &Settings, round: bool) -> CurrencyResult<Decimal> {
    let precision = settings.checked_precision()?;

    let scaled = match input {
        Input::Number(number) if !number.is_finite() => unsupported(settings)?,
        Input::Number(number) => scale(decimal_from_f64(*number)?, precision)?,
        Input::Integer(integer) => scale(Decimal::from(*integer), precision)?,
        Input::Decimal(decimal) => scale(*decimal, precision)?,
        Input::Currency(currency) => currency.scaled_at(precision)?,
        Input::Text(text) => match parse_text(text, &settings.decimal)? {
            Some(decimal) => scale(decimal, precision)?,
            None => {
                tracing::trace!(input = %text, "Unparsable currency string, using zero");
                Decimal::ZERO
            },
        },
        Input::Unsupported => unsupported(settings)?,
    };

    Ok(if round {
        scaled::round_half_away(scaled)
    } else {
        scaled
    })
}

/// Parse free-form text into a decimal (not yet scaled).
///
/// Returns `Ok(None)` when the cleaned text is not a number.
///
/// # Errors
/// Returns `Overflow`/`Underflow` when the digits exceed the decimal range.
pub fn parse_text(text: &str, decimal: &str) -> CurrencyResult<Option<Decimal>> {
    parse_plain_decimal(&normalize(text, decimal))
}

/// Rewrite accounting negatives, strip decoration and canonicalise the decimal
/// marker: `"($1.234,50)"` with marker `","` becomes `"-1234.50"`.
pub fn normalize(text: &str, decimal: &str) -> String {
    let text = negate_parenthesized(text);

    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || decimal.contains(*c))
        .collect();

    if decimal == "." {
        cleaned
    } else {
        cleaned.replace(decimal, ".")
    }
}

/// `(X)` becomes `-X`, from the first `(` to the last `)`.
fn negate_parenthesized(text: &str) -> String {
    match (text.find('('), text.rfind(')')) {
        (Some(open), Some(close)) if open < close => {
            format!("{}-{}{}", &text[..open], &text[open + 1..close], &text[close + 1..])
        },
        _ => text.to_string(),
    }
}

/// Parse `-?digits[.digits]`, the whole string or nothing.
///
/// Either side of the point may be empty as long as one digit is present;
/// an empty string is zero.
fn parse_plain_decimal(cleaned: &str) -> CurrencyResult<Option<Decimal>> {
    if cleaned.is_empty() {
        return Ok(Some(Decimal::ZERO));
    }

    let (negative, unsigned) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned),
    };

    let (int_digits, frac_digits) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_digits)
        || !all_digits(frac_digits)
        || (int_digits.is_empty() && frac_digits.is_empty())
    {
        return Ok(None);
    }

    let canonical = format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        if int_digits.is_empty() { "0" } else { int_digits },
        if frac_digits.is_empty() { "0" } else { frac_digits },
    );

    canonical
        .parse::<Decimal>()
        .map(Some)
        .map_err(|_| CurrencyError::out_of_range(negative))
}

/// Read a finite float by its shortest round-trip decimal form, so `0.1` is
/// exactly one tenth and `1.005` ties the way it reads.
fn decimal_from_f64(number: f64) -> CurrencyResult<Decimal> {
    match number.to_string().parse::<Decimal>() {
        Ok(decimal) => Ok(decimal),
        // More fractional digits than a Decimal holds: far below any minor unit
        Err(_) if number.abs() < 1.0 => Ok(Decimal::ZERO),
        Err(_) => Err(CurrencyError::out_of_range(number.is_sign_negative())),
    }
}

/// Multiply a decimal by 10^precision.
fn scale(value: Decimal, precision: u8) -> CurrencyResult<Decimal> {
    value
        .checked_mul(scaled::scale_factor(precision))
        .ok_or_else(|| CurrencyError::out_of_range(value.is_sign_negative()))
}

fn unsupported(settings: &Settings) -> CurrencyResult<Decimal> {
    if settings.error_on_invalid {
        tracing::debug!("Rejecting unsupported currency input in strict mode");
        Err(CurrencyError::InvalidInput)
    } else {
        Ok(Decimal::ZERO)
    }
}
