// ============================================================================
// Domain Models Module
// Currency value type, its accepted inputs and the settings profile
// ============================================================================

pub mod config;
pub mod currency;
pub mod input;

pub use config::{configure, reset_settings, settings, Settings, SettingsUpdate, DEFAULT_PRECISION};
pub use currency::Currency;
pub use input::Input;
