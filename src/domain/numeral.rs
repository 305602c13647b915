// ============================================================================
// Numeral Domain Model
// Validated digit sequences and the raw-string parser
// ============================================================================

use crate::domain::Radix;
use crate::numeric::{alphabet, ConvertError, ConvertResult};
use smallvec::SmallVec;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sign of a numeral or decimal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }
}

/// Digit storage. Sixteen inline slots cover typical numerals without a
/// heap allocation; longer inputs spill transparently.
pub(crate) type DigitVec = SmallVec<[u8; 16]>;

/// A validated numeral: sign, integer digits, fraction digits.
///
/// Digits are stored as values in `[0, radix - 1]`, most significant first,
/// never as symbols. Construction goes through [`Numeral::parse`] (or the
/// bridge, for conversion output); instances are not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeral {
    sign: Sign,
    integer_digits: DigitVec,
    fraction_digits: DigitVec,
}

impl Numeral {
    /// Parse and validate a raw string against a radix.
    ///
    /// Accepts an optional leading `+`/`-`, case-insensitive digits, and at
    /// most one radix point. An empty integer part means zero digits
    /// (`".5"` parses); an empty fraction part means no fractional component
    /// (`"5."` parses). An input with no digits at all is malformed.
    ///
    /// # Errors
    /// - `MalformedNumeral` for a second radix point or a digitless input
    /// - `InvalidDigit` for the first character outside the radix's
    ///   alphabet, with its byte position in the trimmed input
    pub fn parse(raw: &str, radix: Radix) -> ConvertResult<Self> {
        let trimmed = raw.trim();

        let (sign, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let sign_offset = trimmed.len() - rest.len();

        let (integer_str, fraction_str) = match rest.find('.') {
            Some(point) => {
                let fraction = &rest[point + 1..];
                if fraction.contains('.') {
                    return Err(ConvertError::MalformedNumeral {
                        detail: "more than one radix point",
                    });
                }
                (&rest[..point], fraction)
            },
            None => (rest, ""),
        };

        if integer_str.is_empty() && fraction_str.is_empty() {
            return Err(ConvertError::MalformedNumeral {
                detail: "no digits",
            });
        }

        let integer_digits = Self::parse_digits(integer_str, radix, sign_offset)?;
        let fraction_digits =
            Self::parse_digits(fraction_str, radix, sign_offset + integer_str.len() + 1)?;

        Ok(Self {
            sign,
            integer_digits,
            fraction_digits,
        })
    }

    fn parse_digits(part: &str, radix: Radix, offset: usize) -> ConvertResult<DigitVec> {
        let mut digits = DigitVec::new();
        for (index, symbol) in part.char_indices() {
            let value = alphabet::digit_value(symbol, radix).ok_or(ConvertError::InvalidDigit {
                symbol,
                position: offset + index,
            })?;
            digits.push(value);
        }
        Ok(digits)
    }

    /// Assemble a numeral from already-validated parts (bridge output).
    pub(crate) fn from_parts(
        sign: Sign,
        integer_digits: DigitVec,
        fraction_digits: DigitVec,
    ) -> Self {
        Self {
            sign,
            integer_digits,
            fraction_digits,
        }
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Integer digit values, most significant first. Empty means zero.
    #[inline]
    pub fn integer_digits(&self) -> &[u8] {
        &self.integer_digits
    }

    /// Fraction digit values, most significant first. Empty means no
    /// fractional component.
    #[inline]
    pub fn fraction_digits(&self) -> &[u8] {
        &self.fraction_digits
    }
}

impl fmt::Display for Numeral {
    /// Renders the normalized form: uppercase symbols, `-` only when
    /// negative, `.` only when fraction digits exist, `0` for an empty
    /// integer part.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign.is_negative() {
            write!(f, "-")?;
        }

        if self.integer_digits.is_empty() {
            write!(f, "0")?;
        } else {
            for &digit in &self.integer_digits {
                write!(f, "{}", alphabet::digit_symbol(digit))?;
            }
        }

        if !self.fraction_digits.is_empty() {
            write!(f, ".")?;
            for &digit in &self.fraction_digits {
                write!(f, "{}", alphabet::digit_symbol(digit))?;
            }
        }

        Ok(())
    }
}
