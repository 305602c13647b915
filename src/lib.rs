// ============================================================================
// Radix Convert Library
// Positional numeral conversion with digit-by-digit derivation traces
// ============================================================================

//! # Radix Convert
//!
//! Converts a numeral written in one positional base into its equivalent in
//! another, for radices 2-36, integer and fractional parts included.
//!
//! ## Features
//!
//! - **Validated domain types**: radices, signs and digit sequences are
//!   checked once at the boundary, never downstream
//! - **Double-precision decimal bridge**: Horner's method in, repeated
//!   division/multiplication out, fractions truncated at 10 digits
//! - **Structured derivation traces** for every arithmetic step, with
//!   pluggable sinks for logging or live display
//! - **Pure, synchronous core**: every conversion is a side-effect-free
//!   computation over its inputs
//!
//! ## Example
//!
//! ```rust
//! use radix_convert::prelude::*;
//!
//! let result = convert("10101100", Radix::BINARY, Radix::HEXADECIMAL).unwrap();
//! assert_eq!(result.output, "AC");
//! assert_eq!(result.decimal.value(), 172.0);
//!
//! // One derivation line per arithmetic step
//! for line in result.trace_lines() {
//!     println!("{}", line);
//! }
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ConversionResult, DecimalValue, Numeral, Radix, Sign};
    pub use crate::engine::{convert, Converter};
    pub use crate::interfaces::{LoggingTraceSink, NoOpTraceSink, TraceRecord, TraceSink};
    pub use crate::numeric::{ConvertError, ConvertResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_decimal_to_binary() {
        let result = convert("255", Radix::DECIMAL, Radix::BINARY).unwrap();
        assert_eq!(result.output, "11111111");
    }

    #[test]
    fn test_binary_to_hex() {
        let result = convert("10101100", Radix::BINARY, Radix::HEXADECIMAL).unwrap();
        assert_eq!(result.output, "AC");
    }

    #[test]
    fn test_hex_to_decimal() {
        let result = convert("FF", Radix::HEXADECIMAL, Radix::DECIMAL).unwrap();
        assert_eq!(result.output, "255");
        assert_eq!(result.input, "FF");
    }

    #[test]
    fn test_intermediate_decimal_exposed() {
        let result = convert("FF", Radix::HEXADECIMAL, Radix::BINARY).unwrap();
        assert_eq!(result.decimal.value(), 255.0);
        assert_eq!(result.output, "11111111");
    }

    #[test]
    fn test_fractional_truncation() {
        let result = convert("0.1", Radix::DECIMAL, Radix::BINARY).unwrap();

        // 0.1 expands forever in binary; ten digits are kept and the last
        // retained digit is not rounded upward
        assert_eq!(result.output, "0.0001100110");
        let fraction = result.output.split('.').nth(1).unwrap();
        assert!(fraction.len() <= 10);
    }

    #[test]
    fn test_fractional_exact() {
        let result = convert("0.5", Radix::DECIMAL, Radix::BINARY).unwrap();
        assert_eq!(result.output, "0.1");

        let result = convert("A.8", Radix::HEXADECIMAL, Radix::DECIMAL).unwrap();
        assert_eq!(result.output, "10.5");
    }

    #[test]
    fn test_zero_for_all_radix_pairs() {
        for b1 in 2..=36 {
            for b2 in 2..=36 {
                let source = Radix::new(b1).unwrap();
                let target = Radix::new(b2).unwrap();
                let result = convert("0", source, target).unwrap();
                assert_eq!(result.output, "0", "0 from base {} to base {}", b1, b2);
            }
        }
    }

    #[test]
    fn test_identity_normalizes() {
        let result = convert("ff", Radix::HEXADECIMAL, Radix::HEXADECIMAL).unwrap();
        assert_eq!(result.output, "FF");

        let result = convert("+ac", Radix::HEXADECIMAL, Radix::HEXADECIMAL).unwrap();
        assert_eq!(result.output, "AC");
    }

    #[test]
    fn test_negative_conversion() {
        let result = convert("-FF", Radix::HEXADECIMAL, Radix::DECIMAL).unwrap();
        assert_eq!(result.output, "-255");

        let result = convert("-255", Radix::DECIMAL, Radix::BINARY).unwrap();
        assert_eq!(result.output, "-11111111");
    }

    #[test]
    fn test_error_paths() {
        assert_eq!(
            convert("A", Radix::DECIMAL, Radix::BINARY).unwrap_err(),
            ConvertError::InvalidDigit {
                symbol: 'A',
                position: 0
            }
        );
        assert_eq!(
            convert("1.2.3", Radix::DECIMAL, Radix::BINARY).unwrap_err(),
            ConvertError::MalformedNumeral {
                detail: "more than one radix point"
            }
        );
        assert_eq!(
            Radix::new(37).unwrap_err(),
            ConvertError::InvalidRadix { radix: 37 }
        );
    }

    #[test]
    fn test_base36_extremes() {
        let result = convert("Z", Radix::new(36).unwrap(), Radix::DECIMAL).unwrap();
        assert_eq!(result.output, "35");

        let result = convert("35", Radix::DECIMAL, Radix::new(36).unwrap()).unwrap();
        assert_eq!(result.output, "Z");
    }
}
