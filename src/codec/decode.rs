use crate::{
    codec::{
        EXPONENT_BIAS, EXPONENT_SIGN_BIT, FIELD_MASK, NAN_BYTE, NEGATIVE_INFINITY_BYTE,
        NINES_SIGNIFIER, POSITIVE_INFINITY_BYTE, SIGN_BIT, SMALL_INT_BIAS, SMALL_INT_HIGH_BIAS,
        ZEROS_SIGNIFIER, baseconv, encode::implicit_exponent,
    },
    decimal::value::{BASE, Decimal, MAX_E, MIN_E, Sign},
};

/// Reconstructs a decimal from its wire bytes.
///
/// The empty byte string carries no value and decodes to `None`. Everything
/// else decodes to some decimal: byte patterns the encoder cannot produce
/// (a malformed single byte, a dangling run marker, a missing mantissa) and
/// exponents outside the supported range come back as `NaN`.
///
/// # Parameters
/// - `bytes`: The wire bytes.
///
/// # Returns
/// The decoded decimal, or `None` for the empty input.
///
/// # Example
/// ```
/// use decima::{codec::decode::decode, decimal::value::Decimal};
///
/// assert_eq!(decode(&[0x40]), Some(Decimal::NaN));
/// assert_eq!(decode(&[]), None);
/// ```
#[must_use]
pub fn decode(bytes: &[u8]) -> Option<Decimal> {
    let (&first, rest) = bytes.split_first()?;
    if rest.is_empty() {
        return Some(decode_single(first));
    }
    Some(decode_general(first, rest))
}

/// Decodes a one-byte string: a reserved special or a small integer.
fn decode_single(byte: u8) -> Decimal {
    match byte {
        NAN_BYTE => Decimal::NaN,
        POSITIVE_INFINITY_BYTE => Decimal::Infinite(Sign::Positive),
        NEGATIVE_INFINITY_BYTE => Decimal::Infinite(Sign::Negative),
        _ => {
            let sign = if byte & SIGN_BIT == 0 { Sign::Positive } else { Sign::Negative };
            let field = byte & FIELD_MASK;
            if field < SMALL_INT_BIAS {
                return Decimal::NaN;
            }
            let value = if byte & EXPONENT_SIGN_BIT == 0 {
                u32::from(field - SMALL_INT_BIAS)
            } else {
                u32::from(field - SMALL_INT_HIGH_BIAS)
            };
            Decimal::Finite { sign,
                              exponent: implicit_exponent(value),
                              limbs: vec![value] }
        },
    }
}

/// Decodes the general layout: exponent, then base-converted mantissa.
fn decode_general(first: u8, rest: &[u8]) -> Decimal {
    let sign = if first & SIGN_BIT == 0 { Sign::Positive } else { Sign::Negative };

    let field = u64::from(first & FIELD_MASK);
    let (magnitude, consumed) = if field > u64::from(EXPONENT_BIAS) {
        (field - u64::from(EXPONENT_BIAS), 0)
    } else if field == 0 {
        (0, 0)
    } else {
        let count = (field as usize).min(rest.len());
        let mut magnitude: u64 = 0;
        for (index, &byte) in rest[..count].iter().enumerate() {
            magnitude |= u64::from(byte) << (8 * index);
        }
        (magnitude, count)
    };

    let mut exponent = magnitude as i64;
    if first & EXPONENT_SIGN_BIT != 0 {
        exponent = -exponent;
    }
    if !(MIN_E..=MAX_E).contains(&exponent) {
        return Decimal::NaN;
    }

    let digits = baseconv::to_digits(&rest[consumed..]);
    let limbs = materialize_limbs(&digits);
    if limbs.is_empty() {
        return Decimal::NaN;
    }
    Decimal::Finite { sign, exponent, limbs }
}

/// Expands run markers into limbs, walking the digits in mantissa order.
///
/// The digit list arrives least significant first, so the walk runs from
/// the back. A signifier consumes the following digit as its repeat count;
/// a signifier with no digit left after it marks a malformed mantissa and
/// ends the walk.
fn materialize_limbs(digits: &[u32]) -> Vec<u32> {
    let mut limbs = Vec::with_capacity(digits.len());
    let mut iter = digits.iter().rev();

    while let Some(&digit) = iter.next() {
        if digit == ZEROS_SIGNIFIER || digit == NINES_SIGNIFIER {
            let Some(&count) = iter.next() else {
                break;
            };
            let limb = if digit == ZEROS_SIGNIFIER { 0 } else { BASE - 1 };
            limbs.extend(std::iter::repeat_n(limb, count as usize));
        } else {
            limbs.push(digit);
        }
    }
    limbs
}
