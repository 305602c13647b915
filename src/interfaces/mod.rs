// ============================================================================
// Interfaces Module
// Caller-facing contracts
// ============================================================================

pub mod trace;

pub use trace::{LoggingTraceSink, NoOpTraceSink, TraceRecord, TraceSink};
