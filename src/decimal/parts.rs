use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::Zero;

use crate::decimal::value::{Decimal, LIMB_DIGITS, MAX_E, MIN_E, Sign};

/// Powers of ten up to one limb's worth of digits.
const POW10: [u32; 8] = [1, 10, 100, 1_000, 10_000, 100_000, 1_000_000, 10_000_000];

/// Groups a run of significant digits into base-10⁷ limbs.
///
/// The digits must be ASCII with no leading or trailing zeros. The exponent
/// fixes the grouping: the first limb receives `(exponent + 1) mod 7` digits
/// (wrapping zero and negatives up into `[1, 7]`) and every following limb
/// receives seven, the last right-padded with zeros.
///
/// # Parameters
/// - `digits`: The significant digits, most significant first.
/// - `exponent`: The base-10 exponent of the first digit.
///
/// # Returns
/// The mantissa limbs, most significant first.
///
/// # Example
/// ```
/// use decima::decimal::parts::limbs_for_digits;
///
/// // 123.45 has exponent 2: three digits land in the first limb.
/// assert_eq!(limbs_for_digits(b"12345", 2), vec![123, 4_500_000]);
/// ```
#[must_use]
pub fn limbs_for_digits(digits: &[u8], exponent: i64) -> Vec<u32> {
    let mut head = (exponent + 1).rem_euclid(LIMB_DIGITS as i64) as usize;
    if head == 0 {
        head = LIMB_DIGITS;
    }

    if digits.len() <= head {
        return vec![chunk_value(digits) * POW10[head - digits.len()]];
    }

    let mut limbs = vec![chunk_value(&digits[..head])];
    for chunk in digits[head..].chunks(LIMB_DIGITS) {
        limbs.push(chunk_value(chunk) * POW10[LIMB_DIGITS - chunk.len()]);
    }
    limbs
}

/// Renders limbs back into one digit string.
///
/// The first limb prints without padding; every other limb is zero-padded to
/// seven digits. The result may end in padding zeros, which callers trim
/// when they need only the significant digits.
#[must_use]
pub fn digit_string(limbs: &[u32]) -> String {
    let mut out = limbs.first().map_or_else(String::new, ToString::to_string);
    for limb in limbs.iter().skip(1) {
        out.push_str(&format!("{limb:07}"));
    }
    out
}

/// Builds the host [`BigDecimal`] for a finite value.
///
/// # Parameters
/// - `sign`: The value's sign. The sign of a zero is dropped; `BigDecimal`
///   has no negative zero.
/// - `exponent`: The base-10 exponent of the first significant digit.
/// - `limbs`: The mantissa limbs.
pub fn finite_to_big(sign: Sign, exponent: i64, limbs: &[u32]) -> BigDecimal {
    let digits = digit_string(limbs);
    let digits = digits.trim_end_matches('0');
    if digits.is_empty() {
        return BigDecimal::zero();
    }

    let mut int = BigInt::zero();
    for byte in digits.bytes() {
        int = int * 10 + u32::from(byte - b'0');
    }
    if sign.is_negative() {
        int = -int;
    }

    let scale = digits.len() as i64 - 1 - exponent;
    BigDecimal::new(int, scale)
}

/// Builds the host [`BigDecimal`] for any finite [`Decimal`].
///
/// Specials have no host representation and yield `None`.
#[must_use]
pub fn to_big(value: &Decimal) -> Option<BigDecimal> {
    match value {
        Decimal::Finite { sign, exponent, limbs } => {
            Some(finite_to_big(*sign, *exponent, limbs))
        },
        _ => None,
    }
}

/// Converts a host result back into a [`Decimal`].
///
/// The exponent range is enforced here: overflow becomes a signed infinity
/// and underflow becomes a signed zero.
///
/// # Parameters
/// - `value`: The host value.
/// - `zero_sign`: The sign an exactly-zero result carries, since the host
///   cannot distinguish `0` from `-0`.
#[must_use]
pub fn from_big(value: &BigDecimal, zero_sign: Sign) -> Decimal {
    let (int, scale) = value.as_bigint_and_exponent();
    if int.is_zero() {
        return Decimal::zero(zero_sign);
    }

    let sign = if int.sign() == num_bigint::Sign::Minus {
        Sign::Negative
    } else {
        Sign::Positive
    };
    let digits = int.magnitude().to_string();
    let exponent = digits.len() as i64 - 1 - scale;
    if exponent > MAX_E {
        return Decimal::Infinite(sign);
    }
    if exponent < MIN_E {
        return Decimal::zero(sign);
    }

    let trimmed = digits.trim_end_matches('0');
    Decimal::Finite { sign,
                      exponent,
                      limbs: limbs_for_digits(trimmed.as_bytes(), exponent) }
}

/// Converts ASCII digits into one integer chunk value.
fn chunk_value(chunk: &[u8]) -> u32 {
    chunk.iter()
         .fold(0, |acc, byte| acc * 10 + u32::from(byte - b'0'))
}
