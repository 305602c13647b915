// ============================================================================
// Trace Interface
// Structured derivation records and the contract for observing them
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One arithmetic step of a conversion, as operation kind plus operands.
///
/// Records are structured rather than pre-formatted so callers can render
/// them however they like; `Display` provides the canned human-readable
/// derivation line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TraceRecord {
    /// Source radix is 10: the to-decimal stage was a pass-through
    SourceIsDecimal { value: f64 },

    /// One Horner fold of an integer digit (to-decimal)
    HornerStep {
        radix: u8,
        digit: u8,
        acc_before: f64,
        acc_after: f64,
    },

    /// One fraction digit's contribution `digit / radix^position` (to-decimal)
    FractionTerm {
        radix: u8,
        digit: u8,
        /// 1-indexed position behind the radix point
        position: u32,
        term: f64,
        acc_after: f64,
    },

    /// Target radix is 10: the from-decimal stage was a pass-through
    TargetIsDecimal { value: f64 },

    /// One division-remainder step of the integer part (from-decimal)
    DivisionStep {
        radix: u8,
        dividend: f64,
        quotient: f64,
        remainder: u8,
        symbol: char,
    },

    /// One repeated-multiplication step of the fraction part (from-decimal)
    MultiplicationStep {
        radix: u8,
        multiplicand: f64,
        product: f64,
        digit: u8,
        symbol: char,
    },
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceRecord::SourceIsDecimal { value } => {
                write!(f, "source radix is 10: {} is already decimal", value)
            },
            TraceRecord::HornerStep {
                radix,
                digit,
                acc_before,
                acc_after,
            } => {
                write!(f, "{} * {} + {} = {}", acc_before, radix, digit, acc_after)
            },
            TraceRecord::FractionTerm {
                radix,
                digit,
                position,
                term,
                acc_after,
            } => {
                write!(
                    f,
                    "{} / {}^{} = {}, running total {}",
                    digit, radix, position, term, acc_after
                )
            },
            TraceRecord::TargetIsDecimal { value } => {
                write!(f, "target radix is 10: {} is emitted directly", value)
            },
            TraceRecord::DivisionStep {
                radix,
                dividend,
                quotient,
                remainder,
                symbol,
            } => {
                write!(
                    f,
                    "{} / {} = {} remainder {} -> digit '{}'",
                    dividend, radix, quotient, remainder, symbol
                )
            },
            TraceRecord::MultiplicationStep {
                radix,
                multiplicand,
                product,
                symbol,
                ..
            } => {
                write!(
                    f,
                    "{} * {} = {} -> digit '{}'",
                    multiplicand, radix, product, symbol
                )
            },
        }
    }
}

/// Observer contract for conversion traces.
/// Implementations can handle logging, metrics, live step display, etc.
pub trait TraceSink: Send + Sync {
    /// Handle a single trace record
    fn on_record(&self, record: &TraceRecord);

    /// Batch handler (optional optimization)
    fn on_records(&self, records: &[TraceRecord]) {
        for record in records {
            self.on_record(record);
        }
    }
}

/// No-op sink for callers that only want the assembled result
pub struct NoOpTraceSink;

impl TraceSink for NoOpTraceSink {
    fn on_record(&self, _record: &TraceRecord) {
        // Do nothing
    }
}

/// Sink that forwards every record to `tracing`
pub struct LoggingTraceSink;

impl TraceSink for LoggingTraceSink {
    fn on_record(&self, record: &TraceRecord) {
        tracing::debug!("conversion step: {}", record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lines() {
        let step = TraceRecord::HornerStep {
            radix: 16,
            digit: 15,
            acc_before: 15.0,
            acc_after: 255.0,
        };
        assert_eq!(step.to_string(), "15 * 16 + 15 = 255");

        let division = TraceRecord::DivisionStep {
            radix: 16,
            dividend: 255.0,
            quotient: 15.0,
            remainder: 15,
            symbol: 'F',
        };
        assert_eq!(
            division.to_string(),
            "255 / 16 = 15 remainder 15 -> digit 'F'"
        );
    }

    #[test]
    fn test_noop_sink() {
        let sink = NoOpTraceSink;
        sink.on_record(&TraceRecord::SourceIsDecimal { value: 255.0 });
        sink.on_records(&[TraceRecord::TargetIsDecimal { value: 255.0 }]);
        // Should not panic
    }
}
