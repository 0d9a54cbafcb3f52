// ============================================================================
// Currency Settings
// Symbol, separators and precision used by parsing and formatting
// ============================================================================

use crate::numeric::{CurrencyError, CurrencyResult, MAX_PRECISION};
use parking_lot::RwLock;
use std::sync::LazyLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of fractional digits (cents)
pub const DEFAULT_PRECISION: u8 = 2;

// ============================================================================
// Settings
// ============================================================================

/// Formatting and parsing profile.
///
/// Read at the moment of every parse/format call. Amounts never cache it;
/// they only remember the precision their own minor units are expressed in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Currency symbol prefixed by `format` (e.g. "$", "€")
    pub symbol: String,

    /// Grouping separator inserted every three integer digits
    pub separator: String,

    /// Decimal marker used by both `format` and string parsing
    pub decimal: String,

    /// Number of fractional digits kept in minor units (0..=18)
    pub precision: u8,

    /// Whether `format(None)` includes the symbol
    pub format_with_symbol: bool,

    /// Strict mode: unsupported input fails instead of becoming zero
    pub error_on_invalid: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            separator: ",".to_string(),
            decimal: ".".to_string(),
            precision: DEFAULT_PRECISION,
            format_with_symbol: false,
            error_on_invalid: false,
        }
    }
}

impl Settings {
    /// Builder method: Set the currency symbol
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Builder method: Set the grouping separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Builder method: Set the decimal marker
    pub fn with_decimal(mut self, decimal: impl Into<String>) -> Self {
        self.decimal = decimal.into();
        self
    }

    /// Builder method: Set the precision
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Include the symbol by default when formatting
    pub fn with_format_with_symbol(mut self, enabled: bool) -> Self {
        self.format_with_symbol = enabled;
        self
    }

    /// Builder method: Enable strict parsing
    pub fn with_error_on_invalid(mut self, enabled: bool) -> Self {
        self.error_on_invalid = enabled;
        self
    }

    /// Return a copy with every field present in `update` overwritten.
    pub fn apply(&self, update: &SettingsUpdate) -> Self {
        let mut next = self.clone();
        if let Some(symbol) = &update.symbol {
            next.symbol = symbol.clone();
        }
        if let Some(separator) = &update.separator {
            next.separator = separator.clone();
        }
        if let Some(decimal) = &update.decimal {
            next.decimal = decimal.clone();
        }
        if let Some(precision) = update.precision {
            next.precision = precision;
        }
        if let Some(enabled) = update.format_with_symbol {
            next.format_with_symbol = enabled;
        }
        if let Some(enabled) = update.error_on_invalid {
            next.error_on_invalid = enabled;
        }
        next
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if self.precision > MAX_PRECISION {
            return Err(format!("Precision cannot exceed {}", MAX_PRECISION));
        }

        if self.decimal.is_empty() {
            return Err("Decimal marker cannot be empty".to_string());
        }

        // The marker survives string cleaning, so it must not collide with number syntax
        if self.decimal.chars().any(|c| c.is_ascii_digit() || c == '-') {
            return Err("Decimal marker cannot contain digits or '-'".to_string());
        }

        if self.separator == self.decimal {
            return Err("Separator and decimal marker must differ".to_string());
        }

        // Formatted text must parse back: separator and symbol are stripped only
        // when none of their characters are kept by the parser
        if self.separator.chars().any(|c| self.survives_cleaning(c)) {
            return Err("Separator would survive parsing".to_string());
        }

        if self.symbol.chars().any(|c| self.survives_cleaning(c)) {
            return Err("Symbol would survive parsing".to_string());
        }

        Ok(())
    }

    #[inline]
    fn survives_cleaning(&self, c: char) -> bool {
        c.is_ascii_digit() || c == '-' || self.decimal.contains(c)
    }

    /// Precision usable for scaling, or `InvalidSettings` when out of range.
    #[inline]
    pub(crate) fn checked_precision(&self) -> CurrencyResult<u8> {
        if self.precision > MAX_PRECISION {
            Err(CurrencyError::InvalidSettings)
        } else {
            Ok(self.precision)
        }
    }
}

// ============================================================================
// Preset Settings (Factory Methods)
// ============================================================================

impl Settings {
    /// US dollar profile: `$1,234.56` (same as `Settings::default()`)
    pub fn us_dollar() -> Self {
        Self::default()
    }

    /// Euro profile with continental separators: `€1.234,56`
    pub fn euro() -> Self {
        Self::default()
            .with_symbol("€")
            .with_separator(".")
            .with_decimal(",")
    }

    /// Japanese yen profile without minor units: `¥1,235`
    pub fn yen() -> Self {
        Self::default().with_symbol("¥").with_precision(0)
    }
}

// ============================================================================
// Partial Update
// ============================================================================

/// Partial settings record accepted by [`configure`].
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SettingsUpdate {
    pub symbol: Option<String>,
    pub separator: Option<String>,
    pub decimal: Option<String>,
    pub precision: Option<u8>,
    pub format_with_symbol: Option<bool>,
    pub error_on_invalid: Option<bool>,
}

impl SettingsUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn with_decimal(mut self, decimal: impl Into<String>) -> Self {
        self.decimal = Some(decimal.into());
        self
    }

    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_format_with_symbol(mut self, enabled: bool) -> Self {
        self.format_with_symbol = Some(enabled);
        self
    }

    pub fn with_error_on_invalid(mut self, enabled: bool) -> Self {
        self.error_on_invalid = Some(enabled);
        self
    }
}

impl From<Settings> for SettingsUpdate {
    fn from(settings: Settings) -> Self {
        Self {
            symbol: Some(settings.symbol),
            separator: Some(settings.separator),
            decimal: Some(settings.decimal),
            precision: Some(settings.precision),
            format_with_symbol: Some(settings.format_with_symbol),
            error_on_invalid: Some(settings.error_on_invalid),
        }
    }
}

// ============================================================================
// Process-wide Settings
// ============================================================================

static SETTINGS: LazyLock<RwLock<Settings>> = LazyLock::new(|| RwLock::new(Settings::default()));

/// Snapshot of the process-wide settings.
pub fn settings() -> Settings {
    SETTINGS.read().clone()
}

/// Merge `update` into the process-wide settings.
///
/// The update is applied atomically: either every field changes or, when the
/// merged settings fail validation, none does.
///
/// # Errors
/// Returns `InvalidSettings` if the merged settings are invalid.
pub fn configure(update: impl Into<SettingsUpdate>) -> CurrencyResult<Settings> {
    let update = update.into();
    let mut current = SETTINGS.write();
    let next = current.apply(&update);

    if let Err(reason) = next.validate() {
        tracing::warn!(%reason, ?update, "Rejected currency settings update");
        return Err(CurrencyError::InvalidSettings);
    }

    *current = next.clone();
    tracing::debug!(settings = ?next, "Currency settings updated");
    Ok(next)
}

/// Restore the process-wide settings to their defaults.
pub fn reset_settings() -> Settings {
    let defaults = Settings::default();
    *SETTINGS.write() = defaults.clone();
    tracing::debug!("Currency settings reset to defaults");
    defaults
}
