// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod conversion;
pub mod decimal;
pub mod numeral;
pub mod radix;

pub use conversion::ConversionResult;
pub use decimal::DecimalValue;
pub use numeral::{Numeral, Sign};
pub use radix::Radix;
