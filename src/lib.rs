// ============================================================================
// Currency Library
// Fixed-point currency arithmetic without binary floating-point drift
// ============================================================================

//! # Currency
//!
//! Exact money arithmetic on scaled integers.
//!
//! ## Features
//!
//! - **Scaled-integer amounts**: every value is stored as minor units (`value × 10^precision`)
//! - **Lenient parsing** of numbers, decimals and strings such as `"$1,234.56"` or `"(1.99)"`
//! - **Immediate re-rounding**: every operation result is rounded half away from zero
//! - **Exact distribution**: splits always sum back to the original minor units
//! - **Configurable formatting**: symbol, grouping separator, decimal marker and precision
//!
//! ## Example
//!
//! ```rust
//! use currency::prelude::*;
//!
//! let total = Currency::new("$1,234.56")?;
//! let shares = total.distribute(3)?;
//!
//! assert_eq!(shares[0].to_fixed(), "411.52");
//! assert_eq!(shares[1].to_fixed(), "411.52");
//! assert_eq!(shares[2].to_fixed(), "411.52");
//!
//! assert_eq!(Currency::new(0.1)?.add(0.2)?.to_fixed(), "0.30");
//! assert_eq!(Currency::new(1234.5)?.format(Some(true)), "$1,234.50");
//! # Ok::<(), CurrencyError>(())
//! ```
//!
//! ## Settings
//!
//! Parsing and formatting read a process-wide [`Settings`] profile at call
//! time. Change it with [`configure`], or thread an explicit profile through
//! the `*_with` methods:
//!
//! ```rust
//! use currency::prelude::*;
//!
//! let euro = Settings::euro();
//! let price = Currency::with_settings("1.234,56", &euro)?;
//! assert_eq!(price.format_with(Some(true), &euro), "€1.234,56");
//! # Ok::<(), CurrencyError>(())
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

pub use domain::{configure, reset_settings, settings, Currency, Input, Settings, SettingsUpdate};
pub use numeric::{CurrencyError, CurrencyResult};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        configure, reset_settings, settings, Currency, Input, Settings, SettingsUpdate,
    };
    pub use crate::numeric::{CurrencyError, CurrencyResult};
}
