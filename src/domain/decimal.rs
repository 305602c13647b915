// ============================================================================
// Decimal Intermediate Value
// ============================================================================

use crate::domain::Sign;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The double-precision intermediate every conversion passes through.
///
/// Invariants: `integer` is non-negative and integral, `fraction` lies in
/// `[0, 1)`; the sign is carried separately so the bridge works on
/// magnitudes only. Exists transiently within one conversion, and is
/// surfaced on the result for display when neither side is base 10.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalValue {
    sign: Sign,
    integer: f64,
    fraction: f64,
}

impl DecimalValue {
    pub(crate) fn new(sign: Sign, integer: f64, fraction: f64) -> Self {
        debug_assert!(integer >= 0.0);
        debug_assert!((0.0..1.0).contains(&fraction));
        Self {
            sign,
            integer,
            fraction,
        }
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Non-negative integral part of the magnitude.
    #[inline]
    pub fn integer(&self) -> f64 {
        self.integer
    }

    /// Fractional part of the magnitude, in `[0, 1)`.
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// The signed combined value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.sign.as_f64() * (self.integer + self.fraction)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.integer == 0.0 && self.fraction == 0.0
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
