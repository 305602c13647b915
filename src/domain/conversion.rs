// ============================================================================
// Conversion Result Model
// ============================================================================

use crate::domain::{DecimalValue, Radix};
use crate::interfaces::TraceRecord;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The complete outcome of one conversion.
///
/// Immutable once assembled; the caller owns display, history and storage.
/// A failed conversion never produces one of these, partially populated or
/// otherwise.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversionResult {
    /// Unique result identifier
    pub id: Uuid,

    /// The parsed input in normalized (uppercase) form
    pub input: String,

    /// Radix the input was written in
    pub source_radix: Radix,

    /// The double-precision intermediate, for display when neither side
    /// is base 10
    pub decimal: DecimalValue,

    /// The converted numeral in normalized (uppercase) form
    pub output: String,

    /// Radix the output is written in
    pub target_radix: Radix,

    /// Ordered derivation steps, one record per arithmetic operation
    pub trace: Vec<TraceRecord>,

    /// Conversion timestamp
    pub timestamp: DateTime<Utc>,
}

impl ConversionResult {
    pub(crate) fn new(
        input: String,
        source_radix: Radix,
        decimal: DecimalValue,
        output: String,
        target_radix: Radix,
        trace: Vec<TraceRecord>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            input,
            source_radix,
            decimal,
            output,
            target_radix,
            trace,
            timestamp: Utc::now(),
        }
    }

    /// Render the structured trace to human-readable derivation lines.
    pub fn trace_lines(&self) -> Vec<String> {
        self.trace.iter().map(ToString::to_string).collect()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::engine::convert;
    use crate::domain::Radix;

    #[test]
    fn test_result_serializes_to_json() {
        let result = convert("FF", Radix::HEXADECIMAL, Radix::DECIMAL).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"input\":\"FF\""));
        assert!(json.contains("\"output\":\"255\""));
        assert!(json.contains("TargetIsDecimal"));
    }
}
