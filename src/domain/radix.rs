// ============================================================================
// Radix Value Object
// ============================================================================

use crate::numeric::{ConvertError, ConvertResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A positional numeral system base, guaranteed to lie in [2, 36].
///
/// The invariant is enforced at construction; every downstream component
/// (parser, bridge, orchestrator) can rely on it and has no radix failure
/// path of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Radix(u8);

impl Radix {
    /// Smallest supported radix
    pub const MIN: u32 = 2;

    /// Largest supported radix (digits 0-9 then A-Z)
    pub const MAX: u32 = 36;

    pub const BINARY: Radix = Radix(2);
    pub const OCTAL: Radix = Radix(8);
    pub const DECIMAL: Radix = Radix(10);
    pub const HEXADECIMAL: Radix = Radix(16);

    /// Create a radix, validating the [2, 36] range.
    ///
    /// # Errors
    /// Returns `InvalidRadix` for anything outside the range. This is a
    /// defensive check: callers are expected to offer only valid radices,
    /// but the core never trusts them to.
    pub fn new(value: u32) -> ConvertResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ConvertError::InvalidRadix { radix: value })
        }
    }

    /// The numeric base value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The base as an `f64`, for bridge arithmetic.
    #[inline]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Whether this is base 10, the bridge's pass-through case.
    #[inline]
    pub const fn is_decimal(self) -> bool {
        self.0 == 10
    }
}

impl TryFrom<u32> for Radix {
    type Error = ConvertError;

    fn try_from(value: u32) -> ConvertResult<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
