// ============================================================================
// Numeric Module
// Digit alphabets and the double-precision decimal bridge
// ============================================================================
//
// This module provides:
// - alphabet: symbol <-> value mapping for radices 2-36
// - bridge: to_decimal / from_decimal with per-step trace emission
// - ConvertError: error types for parsing and conversion
//
// Design principles:
// - Pure functions of their inputs, no shared state
// - All fallible operations return Result (no panics)
// - Fractional precision bounded by truncation, never rounding
// - Double-precision intermediate; representational error is accepted
//   rather than compensated

pub mod alphabet;
pub mod bridge;
mod errors;

pub use bridge::MAX_FRACTION_DIGITS;
pub use errors::{ConvertError, ConvertResult};
