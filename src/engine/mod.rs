// ============================================================================
// Engine Module
// Parsing, arithmetic, distribution and formatting of currency amounts
// ============================================================================

mod arithmetic;
mod distribution;
mod formatter;
pub mod parser;

pub use parser::{normalize, parse, parse_text};
