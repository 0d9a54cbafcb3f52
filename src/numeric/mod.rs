// ============================================================================
// Numeric Module
// Scaled-integer arithmetic primitives for currency amounts
// ============================================================================
//
// This module provides:
// - CurrencyError: Error types for parsing and arithmetic
// - Scale helpers: powers of ten, rescaling between precisions, rounding
//
// Design principles:
// - No binary floating point in arithmetic paths
// - All fallible arithmetic returns Result (no panics)
// - Ties always round half away from zero

mod errors;
pub mod scaled;

pub use errors::{CurrencyError, CurrencyResult};
pub use scaled::{pow10, MAX_PRECISION};
