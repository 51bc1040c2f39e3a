use crate::{
    codec::{
        EXPONENT_BIAS, EXPONENT_SIGN_BIT, INLINE_EXPONENT_MAX, NAN_BYTE, NEGATIVE_INFINITY_BYTE,
        NINES_SIGNIFIER, POSITIVE_INFINITY_BYTE, RADIX, SIGN_BIT, SMALL_INT_BIAS,
        SMALL_INT_HIGH_BIAS, SMALL_INT_MAX, SMALL_INT_SPLIT, ZEROS_SIGNIFIER, baseconv,
    },
    decimal::value::{BASE, Decimal, Sign},
};

/// Serializes a decimal into its compact binary form.
///
/// Specials and integers up to magnitude 50 take exactly one byte. Every
/// other value takes a first byte carrying the sign and exponent layout,
/// up to seven exponent bytes, and the base-converted mantissa.
///
/// # Parameters
/// - `value`: The decimal to serialize.
///
/// # Returns
/// The wire bytes; never empty.
///
/// # Example
/// ```
/// use decima::{codec::encode::encode, decimal::value::Decimal};
///
/// let zero: Decimal = "0".parse().unwrap();
/// let negative_one: Decimal = "-1".parse().unwrap();
///
/// assert_eq!(encode(&zero), vec![0x26]);
/// assert_eq!(encode(&negative_one), vec![0xA7]);
/// ```
#[must_use]
pub fn encode(value: &Decimal) -> Vec<u8> {
    match value {
        Decimal::NaN => vec![NAN_BYTE],
        Decimal::Infinite(Sign::Positive) => vec![POSITIVE_INFINITY_BYTE],
        Decimal::Infinite(Sign::Negative) => vec![NEGATIVE_INFINITY_BYTE],
        Decimal::Finite { sign, exponent, limbs } => encode_finite(*sign, *exponent, limbs),
    }
}

fn encode_finite(sign: Sign, exponent: i64, limbs: &[u32]) -> Vec<u8> {
    let sign_bit = if sign.is_negative() { SIGN_BIT } else { 0 };

    if let [single] = limbs
        && *single <= SMALL_INT_MAX
        && exponent == implicit_exponent(*single)
    {
        return vec![small_integer_byte(sign_bit, *single)];
    }

    let mut out = exponent_bytes(sign_bit, exponent);

    let mut acc = vec![0u8];
    for token in run_length_tokens(limbs) {
        baseconv::accumulate(&mut acc, token);
    }
    out.extend_from_slice(&acc);
    out
}

/// The exponent a single-limb small integer carries without encoding it.
pub(crate) const fn implicit_exponent(value: u32) -> i64 {
    if value < 10 { 0 } else { 1 }
}

/// Builds the one-byte form for an integer in `[0, 50]`.
fn small_integer_byte(sign_bit: u8, value: u32) -> u8 {
    if value <= SMALL_INT_SPLIT {
        sign_bit | (value as u8 + SMALL_INT_BIAS)
    } else {
        sign_bit | EXPONENT_SIGN_BIT | (value as u8 + SMALL_INT_HIGH_BIAS)
    }
}

/// Builds the first byte and any trailing exponent bytes.
///
/// A magnitude up to 30 rides inline in the six-bit field, biased by 7.
/// Larger magnitudes store the byte count in the field and follow with
/// that many little-endian bytes.
fn exponent_bytes(sign_bit: u8, exponent: i64) -> Vec<u8> {
    let mut first = sign_bit;
    if exponent < 0 {
        first |= EXPONENT_SIGN_BIT;
    }

    let magnitude = exponent.unsigned_abs();
    if magnitude == 0 {
        return vec![first];
    }
    if magnitude <= INLINE_EXPONENT_MAX {
        return vec![first | (magnitude as u8 + EXPONENT_BIAS)];
    }

    let count = (u64::BITS - magnitude.leading_zeros()).div_ceil(8) as usize;
    let mut out = vec![first | count as u8];
    out.extend_from_slice(&magnitude.to_le_bytes()[..count]);
    out
}

/// Rewrites the limbs as mantissa digits with runs compressed.
///
/// A run of more than two equal all-zero or all-nine limbs becomes a
/// signifier digit followed by the repeat count. Shorter runs, and runs of
/// any other limb, stay literal. A run never exceeds `RADIX − 1` repeats,
/// so the count always fits a single digit.
fn run_length_tokens(limbs: &[u32]) -> Vec<u32> {
    let mut tokens = Vec::with_capacity(limbs.len());
    let mut index = 0;

    while index < limbs.len() {
        let value = limbs[index];
        let mut end = index + 1;
        while end < limbs.len() && limbs[end] == value && end - index < (RADIX - 1) as usize {
            end += 1;
        }

        let run = end - index;
        if run > 2 && (value == 0 || value == BASE - 1) {
            tokens.push(if value == 0 { ZEROS_SIGNIFIER } else { NINES_SIGNIFIER });
            tokens.push(run as u32);
        } else {
            tokens.extend(std::iter::repeat_n(value, run));
        }
        index = end;
    }
    tokens
}
