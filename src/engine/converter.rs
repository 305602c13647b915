// ============================================================================
// Conversion Engine
// Orchestrates parse -> to-decimal -> from-decimal and assembles the trace
// ============================================================================

use crate::domain::{ConversionResult, Numeral, Radix};
use crate::interfaces::{NoOpTraceSink, TraceRecord, TraceSink};
use crate::numeric::{bridge, ConvertResult};
use std::sync::Arc;

/// Stateless conversion orchestrator with a pluggable trace sink.
///
/// Every call is a pure computation over its inputs; the engine holds no
/// per-call state, so one instance can serve any number of independent
/// conversions.
pub struct Converter {
    /// Sink notified with the full trace of each successful conversion
    sink: Arc<dyn TraceSink>,
}

impl Converter {
    pub fn new(sink: Arc<dyn TraceSink>) -> Self {
        Self { sink }
    }

    /// Convert `raw`, written in `source`, into its `target` representation.
    ///
    /// The trace records one line per Horner step and fraction term on the
    /// way to decimal, and one per division and multiplication step on the
    /// way out. When either side is already base 10 that stage collapses to
    /// a single pass-through record; with radix 10 substituted, both paths
    /// produce the same numeral by construction, so this is an optimization
    /// rather than a behavioral special case.
    ///
    /// # Errors
    /// `InvalidDigit` or `MalformedNumeral` from parsing; an invalid radix
    /// is rejected before a `Radix` value can exist. Errors never come with
    /// a partial result.
    pub fn convert(
        &self,
        raw: &str,
        source: Radix,
        target: Radix,
    ) -> ConvertResult<ConversionResult> {
        let numeral = Numeral::parse(raw, source)?;
        let mut trace = Vec::new();

        let decimal = if source.is_decimal() {
            let value = bridge::to_decimal(&numeral, source, &mut Vec::new());
            trace.push(TraceRecord::SourceIsDecimal {
                value: value.value(),
            });
            value
        } else {
            bridge::to_decimal(&numeral, source, &mut trace)
        };

        let converted = if target.is_decimal() {
            let pass_through = bridge::from_decimal(&decimal, target, &mut Vec::new());
            trace.push(TraceRecord::TargetIsDecimal {
                value: decimal.value(),
            });
            pass_through
        } else {
            bridge::from_decimal(&decimal, target, &mut trace)
        };

        tracing::debug!(
            input = %numeral,
            %source,
            output = %converted,
            %target,
            steps = trace.len(),
            "conversion complete"
        );

        let result = ConversionResult::new(
            numeral.to_string(),
            source,
            decimal,
            converted.to_string(),
            target,
            trace,
        );
        self.sink.on_records(&result.trace);

        Ok(result)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Arc::new(NoOpTraceSink))
    }
}

/// One-shot conversion for callers that only want the result.
pub fn convert(raw: &str, source: Radix, target: Radix) -> ConvertResult<ConversionResult> {
    Converter::default().convert(raw, source, target)
}
