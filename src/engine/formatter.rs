// ============================================================================
// Formatter
// Renders minor units as fixed-precision and grouped display strings
// ============================================================================

use crate::domain::{config, Currency, Settings};
use crate::numeric::{pow10, scaled, MAX_PRECISION};

impl Currency {
    /// Fixed-point text with exactly `precision` fractional digits, under the
    /// process-wide settings (`"1234.50"`, `"-0.05"`).
    pub fn to_fixed(self) -> String {
        self.to_fixed_with(&config::settings())
    }

    /// Fixed-point text under explicit settings.
    ///
    /// Amounts carrying more digits than `settings.precision` are re-rounded
    /// half away from zero; a precision above `MAX_PRECISION` is clamped.
    pub fn to_fixed_with(self, settings: &Settings) -> String {
        let precision = settings.precision.min(MAX_PRECISION);
        let raw = scaled::rescale(self.int_value(), self.precision(), precision);
        render_fixed(raw, precision)
    }

    /// Display text under the process-wide settings.
    ///
    /// `use_symbol` overrides `format_with_symbol` when given.
    pub fn format(self, use_symbol: Option<bool>) -> String {
        self.format_with(use_symbol, &config::settings())
    }

    /// Display text under explicit settings: optional symbol, grouped
    /// integer digits, configured decimal marker (`"$1,234.50"`).
    ///
    /// The symbol precedes the sign: `"$-1,234.50"`.
    pub fn format_with(self, use_symbol: Option<bool>, settings: &Settings) -> String {
        let fixed = self.to_fixed_with(settings);
        let (sign, unsigned) = match fixed.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", fixed.as_str()),
        };
        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (unsigned, None),
        };

        let mut out = String::with_capacity(fixed.len() + settings.symbol.len() + integer.len() / 3);
        if use_symbol.unwrap_or(settings.format_with_symbol) {
            out.push_str(&settings.symbol);
        }
        out.push_str(sign);
        out.push_str(&group_digits(integer, &settings.separator));
        if let Some(fraction) = fraction {
            out.push_str(&settings.decimal);
            out.push_str(fraction);
        }
        out
    }

    /// Numeric view of [`to_fixed`](Self::to_fixed), for native comparison
    /// and sorting.
    pub fn value_of(self) -> f64 {
        self.value_of_with(&config::settings())
    }

    pub fn value_of_with(self, settings: &Settings) -> f64 {
        // to_fixed output is always a plain decimal literal
        self.to_fixed_with(settings).parse().unwrap_or_default()
    }
}

/// `raw` minor units at `precision` digits as `[-]int[.frac]`.
fn render_fixed(raw: i128, precision: u8) -> String {
    let sign = if raw < 0 { "-" } else { "" };

    if precision == 0 {
        return format!("{}{}", sign, raw.unsigned_abs());
    }

    let scale = pow10(precision) as u128;
    let magnitude = raw.unsigned_abs();
    format!(
        "{}{}.{:0>width$}",
        sign,
        magnitude / scale,
        magnitude % scale,
        width = precision as usize
    )
}

/// Insert `separator` every three digits from the right.
fn group_digits(digits: &str, separator: &str) -> String {
    if separator.is_empty() || digits.len() <= 3 {
        return digits.to_string();
    }

    let mut result = String::with_capacity(digits.len() + separator.len() * (digits.len() / 3));
    for (i, ch) in digits.chars().enumerate() {
        result.push(ch);
        let remaining = digits.len() - i - 1;
        if remaining > 0 && remaining % 3 == 0 {
            result.push_str(separator);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(int_value: i64) -> Currency {
        Currency::from_minor_units(int_value, 2).unwrap()
    }

    #[test]
    fn test_to_fixed() {
        let usd = Settings::default();
        assert_eq!(cents(123_450).to_fixed_with(&usd), "1234.50");
        assert_eq!(cents(0).to_fixed_with(&usd), "0.00");
        assert_eq!(cents(-5).to_fixed_with(&usd), "-0.05");
        assert_eq!(cents(-199).to_fixed_with(&usd), "-1.99");
    }

    #[test]
    fn test_to_fixed_rerounds_at_display_precision() {
        let usd = Settings::default();
        let mills = Currency::from_minor_units(1_005, 3).unwrap();
        assert_eq!(mills.to_fixed_with(&usd), "1.01");

        let negative = Currency::from_minor_units(-1_005, 3).unwrap();
        assert_eq!(negative.to_fixed_with(&usd), "-1.01");

        // Widening pads with zeros
        assert_eq!(cents(199).to_fixed_with(&usd.clone().with_precision(4)), "1.9900");
        assert_eq!(cents(199).to_fixed_with(&usd.with_precision(0)), "2");
    }

    #[test]
    fn test_format_with_symbol() {
        let usd = Settings::default();
        assert_eq!(cents(123_450).format_with(Some(true), &usd), "$1,234.50");
        assert_eq!(cents(123_450).format_with(None, &usd), "1,234.50");
        assert_eq!(cents(-123_450).format_with(Some(true), &usd), "$-1,234.50");

        let symbol_default = usd.with_format_with_symbol(true);
        assert_eq!(cents(99).format_with(None, &symbol_default), "$0.99");
        assert_eq!(cents(99).format_with(Some(false), &symbol_default), "0.99");
    }

    #[test]
    fn test_format_grouping() {
        let usd = Settings::default();
        assert_eq!(cents(100).format_with(None, &usd), "1.00");
        assert_eq!(cents(100_000).format_with(None, &usd), "1,000.00");
        assert_eq!(cents(123_456_789_00).format_with(None, &usd), "123,456,789.00");
        assert_eq!(cents(-100_000_000).format_with(None, &usd), "-1,000,000.00");
    }

    #[test]
    fn test_format_leaves_fraction_ungrouped() {
        let fine = Settings::default().with_precision(6);
        let x = Currency::from_minor_units(1_234_123_456, 6).unwrap();
        assert_eq!(x.format_with(None, &fine), "1,234.123456");
    }

    #[test]
    fn test_format_custom_profile() {
        let euro = Settings::euro();
        assert_eq!(cents(123_456_7).format_with(Some(true), &euro), "€12.345,67");

        let spaced = Settings::default().with_separator(" ").with_decimal(",");
        assert_eq!(cents(123_456_7).format_with(None, &spaced), "12 345,67");

        let yen = Settings::yen();
        let x = Currency::with_settings(1234.5, &yen).unwrap();
        assert_eq!(x.format_with(Some(true), &yen), "¥1,235");
    }

    #[test]
    fn test_valid_profiles_parse_back() {
        let profiles = [
            Settings::default(),
            Settings::euro(),
            Settings::default().with_symbol("CHF ").with_separator("'"),
            Settings::euro().with_symbol("Fr."),
        ];

        for settings in profiles {
            assert!(settings.validate().is_ok());
            for x in [cents(123_450), cents(-987_654_321), cents(7)] {
                let text = x.format_with(Some(true), &settings);
                let back = Currency::with_settings(text.as_str(), &settings).unwrap();
                assert_eq!(back.int_value(), x.int_value(), "text was {}", text);
            }
        }

        // Profiles that would lose the value are refused up front
        for rejected in [
            Settings::default().with_separator("-"),
            Settings::default().with_symbol("Fr."),
        ] {
            assert!(rejected.validate().is_err());
        }
    }

    #[test]
    fn test_value_of() {
        let usd = Settings::default();
        assert_eq!(cents(30).value_of_with(&usd), 0.3);
        assert_eq!(cents(-199).value_of_with(&usd), -1.99);
        assert!(cents(100).value_of_with(&usd) < cents(101).value_of_with(&usd));
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1", ","), "1");
        assert_eq!(group_digits("123", ","), "123");
        assert_eq!(group_digits("1234", ","), "1,234");
        assert_eq!(group_digits("1234567", ""), "1234567");
        assert_eq!(group_digits("1234567", "'"), "1'234'567");
    }
}
