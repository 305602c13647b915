// ============================================================================
// Decimal Bridge
// Horner folding into a double, division/multiplication back out
// ============================================================================

use crate::domain::numeral::DigitVec;
use crate::domain::{DecimalValue, Numeral, Radix};
use crate::interfaces::TraceRecord;
use crate::numeric::alphabet;
use arrayvec::ArrayVec;

/// Fractional precision bound for `from_decimal`. Digits beyond this are
/// truncated, never rounded.
pub const MAX_FRACTION_DIGITS: usize = 10;

/// Fold a validated numeral into its decimal value, recording one trace
/// record per digit.
///
/// The integer part uses Horner's method (`acc = acc * radix + digit`), so
/// every partial product matches conventional positional semantics exactly
/// for values the double can represent without loss. The fraction part sums
/// `digit / radix^k` per 1-indexed position `k`; the floating-point division
/// error this carries is bounded by the precision policy and deliberately
/// not compensated.
pub fn to_decimal(numeral: &Numeral, radix: Radix, trace: &mut Vec<TraceRecord>) -> DecimalValue {
    let base = radix.as_f64();

    let mut integer = 0.0;
    for &digit in numeral.integer_digits() {
        let acc_before = integer;
        integer = integer * base + f64::from(digit);
        trace.push(TraceRecord::HornerStep {
            radix: radix.value(),
            digit,
            acc_before,
            acc_after: integer,
        });
    }

    let mut fraction = 0.0;
    for (index, &digit) in numeral.fraction_digits().iter().enumerate() {
        let position = index as u32 + 1;
        let term = f64::from(digit) / base.powi(position as i32);
        fraction += term;
        trace.push(TraceRecord::FractionTerm {
            radix: radix.value(),
            digit,
            position,
            term,
            acc_after: fraction,
        });
    }

    // A long run of maximal digits can round the sum to exactly 1.0;
    // fold the carry to keep the fraction inside [0, 1)
    if fraction >= 1.0 {
        integer += 1.0;
        fraction = 0.0;
    }

    DecimalValue::new(numeral.sign(), integer, fraction)
}

/// Expand a decimal value into a numeral in the target radix, recording one
/// trace record per emitted digit.
///
/// The integer part uses the division-remainder algorithm; an exactly-zero
/// integer part yields the single digit `0` with no steps. The fraction part
/// uses repeated multiplication, stopping at an exactly-zero remainder or at
/// [`MAX_FRACTION_DIGITS`]. The result carries the value's sign.
pub fn from_decimal(value: &DecimalValue, radix: Radix, trace: &mut Vec<TraceRecord>) -> Numeral {
    let base = radix.as_f64();

    let mut integer_digits = DigitVec::new();
    let mut remaining = value.integer();
    if remaining == 0.0 {
        integer_digits.push(0);
    } else {
        // A non-finite accumulator would never reach zero
        while remaining > 0.0 && remaining.is_finite() {
            let remainder = (remaining % base) as u8;
            let quotient = (remaining / base).floor();
            trace.push(TraceRecord::DivisionStep {
                radix: radix.value(),
                dividend: remaining,
                quotient,
                remainder,
                symbol: alphabet::digit_symbol(remainder),
            });
            integer_digits.push(remainder);
            remaining = quotient;
        }
        // The loop emits least significant first
        integer_digits.reverse();
    }

    let mut fraction_digits: ArrayVec<u8, MAX_FRACTION_DIGITS> = ArrayVec::new();
    let mut fraction = value.fraction();
    while fraction > 0.0 && !fraction_digits.is_full() {
        let multiplicand = fraction;
        let product = fraction * base;
        let digit = product.floor() as u8;
        debug_assert!(digit < radix.value());
        trace.push(TraceRecord::MultiplicationStep {
            radix: radix.value(),
            multiplicand,
            product,
            digit,
            symbol: alphabet::digit_symbol(digit),
        });
        fraction_digits.push(digit);
        fraction = product - f64::from(digit);
    }

    Numeral::from_parts(
        value.sign(),
        integer_digits,
        DigitVec::from_slice(&fraction_digits),
    )
}
