use std::str::FromStr;

use bigdecimal::RoundingMode;

use crate::{decimal::parts, error::ParseDecimalError};

/// The base of one mantissa limb: each limb holds seven decimal digits.
pub const BASE: u32 = 10_000_000;
/// The number of decimal digits carried by one limb.
pub const LIMB_DIGITS: usize = 7;
/// The largest decimal exponent a finite value may carry.
pub const MAX_E: i64 = 9_000_000_000_000_000;
/// The smallest decimal exponent a finite value may carry.
pub const MIN_E: i64 = -MAX_E;
/// The number of significant digits arithmetic results are rounded to.
pub const PRECISION: u64 = 20;
/// The rounding mode applied when results exceed [`PRECISION`].
pub const ROUNDING: RoundingMode = RoundingMode::HalfUp;

/// The sign of a finite or infinite decimal.
///
/// `NaN` carries no sign at all; it is a separate [`Decimal`] variant rather
/// than a third sign state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// The value is below zero, or is the negative zero.
    Negative,
    /// The value is above zero, or is the positive zero.
    Positive,
}

impl Sign {
    /// Returns `true` for [`Sign::Negative`].
    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }

    /// Returns the opposite sign.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Positive => Self::Negative,
        }
    }

    /// Returns the sign a product or quotient of two values carries.
    #[must_use]
    pub const fn product(self, other: Self) -> Self {
        match (self, other) {
            (Self::Negative, Self::Positive) | (Self::Positive, Self::Negative) => Self::Negative,
            _ => Self::Positive,
        }
    }
}

/// An arbitrary-precision decimal number.
///
/// A value is either a special (`NaN`, `±Infinity`) or finite. A finite value
/// stores its sign, the base-10 exponent of its first significant digit, and
/// its mantissa as base-10⁷ limbs. The first limb carries between one and
/// seven digits (determined by the exponent) and never starts with a zero
/// digit; the last limb is right-padded to seven digits. Zero is the single
/// limb `0` with exponent `0`, and the negative zero is preserved as a
/// distinct value.
///
/// The derived equality is structural: `NaN` equals `NaN` and `0` differs
/// from `-0`. Use [`Decimal::eq`](Decimal::eq) and friends for numeric
/// comparison, where `NaN` equals nothing and the two zeros coincide.
///
/// # Example
/// ```
/// use decima::decimal::value::Decimal;
///
/// let a: Decimal = "0.1".parse().unwrap();
/// let b: Decimal = "0.2".parse().unwrap();
///
/// assert_eq!(a.plus(&b).to_string(), "0.3");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Decimal {
    /// Not a number. Carries no sign, no exponent and no limbs.
    NaN,
    /// A signed infinity.
    Infinite(Sign),
    /// A finite value.
    Finite {
        /// The sign, distinguishing `0` from `-0`.
        sign: Sign,
        /// The base-10 exponent of the first significant digit.
        exponent: i64,
        /// The mantissa, in base-10⁷ limbs.
        limbs: Vec<u32>,
    },
}

impl Decimal {
    /// Returns the zero value with the given sign.
    #[must_use]
    pub fn zero(sign: Sign) -> Self {
        Self::Finite { sign, exponent: 0, limbs: vec![0] }
    }

    /// Returns the value one.
    #[must_use]
    pub fn one() -> Self {
        Self::Finite { sign: Sign::Positive, exponent: 0, limbs: vec![1] }
    }

    /// Returns `true` if the value is `NaN`.
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        matches!(self, Self::NaN)
    }

    /// Returns `true` if the value is neither `NaN` nor infinite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        matches!(self, Self::Finite { .. })
    }

    /// Returns `true` for both the positive and the negative zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Finite { limbs, .. } if limbs.first() == Some(&0))
    }

    /// Returns `true` if the value carries a negative sign.
    ///
    /// The negative zero is negative; `NaN` is not.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        matches!(self,
                 Self::Infinite(Sign::Negative) | Self::Finite { sign: Sign::Negative, .. })
    }

    /// Returns the sign, or `None` for `NaN`.
    #[must_use]
    pub const fn sign(&self) -> Option<Sign> {
        match self {
            Self::NaN => None,
            Self::Infinite(sign) | Self::Finite { sign, .. } => Some(*sign),
        }
    }

    /// Returns the decimal exponent, or `None` for specials.
    #[must_use]
    pub const fn exponent(&self) -> Option<i64> {
        match self {
            Self::Finite { exponent, .. } => Some(*exponent),
            _ => None,
        }
    }

    /// Returns the mantissa limbs; specials have none.
    #[must_use]
    pub fn limbs(&self) -> &[u32] {
        match self {
            Self::Finite { limbs, .. } => limbs,
            _ => &[],
        }
    }

    /// Converts the value to the nearest `f64`.
    ///
    /// The conversion is lossy: an `f64` holds at most 17 significant digits
    /// and a far narrower exponent range.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        use bigdecimal::ToPrimitive;

        match self {
            Self::NaN => f64::NAN,
            Self::Infinite(Sign::Positive) => f64::INFINITY,
            Self::Infinite(Sign::Negative) => f64::NEG_INFINITY,
            Self::Finite { sign, .. } => {
                let magnitude = parts::to_big(self).and_then(|big| big.to_f64())
                                                   .unwrap_or(f64::NAN);
                if sign.is_negative() && magnitude == 0.0 {
                    -0.0
                } else {
                    magnitude
                }
            },
        }
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    /// Parses a decimal from its text form.
    ///
    /// Accepts an optional sign, digits with an optional fraction, and an
    /// optional `e`/`E` exponent, plus the literals `NaN` and `Infinity`.
    /// Exponents beyond the supported range clamp to `±Infinity` (overflow)
    /// or `±0` (underflow).
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let error = || ParseDecimalError { input: input.to_string() };

        let (sign, body) = match input.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, input.strip_prefix('+').unwrap_or(input)),
        };
        if body == "NaN" {
            return Ok(Self::NaN);
        }
        if body == "Infinity" {
            return Ok(Self::Infinite(sign));
        }

        let (mantissa, exponent_text) = match body.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => (mantissa, Some(exponent)),
            None => (body, None),
        };
        let (int_part, frac_part) = match mantissa.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (mantissa, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(error());
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
           || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(error());
        }

        let mut shift: i128 = 0;
        if let Some(text) = exponent_text {
            let (negative, digits) = match text.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, text.strip_prefix('+').unwrap_or(text)),
            };
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(error());
            }
            for byte in digits.bytes() {
                shift = shift.saturating_mul(10)
                             .saturating_add(i128::from(byte - b'0'));
            }
            if negative {
                shift = -shift;
            }
        }

        let digits: Vec<u8> = int_part.bytes().chain(frac_part.bytes()).collect();
        let Some(first) = digits.iter().position(|byte| *byte != b'0') else {
            return Ok(Self::zero(sign));
        };
        let last = digits.iter().rposition(|byte| *byte != b'0').unwrap_or(first) + 1;

        let exponent = int_part.len() as i128 - first as i128 - 1 + shift;
        if exponent > i128::from(MAX_E) {
            return Ok(Self::Infinite(sign));
        }
        if exponent < i128::from(MIN_E) {
            return Ok(Self::zero(sign));
        }

        let exponent = exponent as i64;
        Ok(Self::Finite { sign,
                          exponent,
                          limbs: parts::limbs_for_digits(&digits[first..last], exponent) })
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        value.to_string().parse().unwrap_or(Self::NaN)
    }
}

impl From<u32> for Decimal {
    fn from(value: u32) -> Self {
        value.to_string().parse().unwrap_or(Self::NaN)
    }
}

impl std::fmt::Display for Decimal {
    /// Formats the value the way decimal.js does: positional notation, or
    /// exponential notation once the exponent reaches 21 or drops below −6.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self::Finite { sign, exponent, limbs } = self else {
            return match self {
                Self::NaN => write!(f, "NaN"),
                Self::Infinite(Sign::Positive) => write!(f, "Infinity"),
                _ => write!(f, "-Infinity"),
            };
        };

        let prefix = if sign.is_negative() { "-" } else { "" };
        if self.is_zero() {
            return write!(f, "{prefix}0");
        }

        let digits = parts::digit_string(limbs);
        let digits = digits.trim_end_matches('0');
        let exponent = *exponent;

        if !(-6..21).contains(&exponent) {
            let marker = if exponent < 0 { '-' } else { '+' };
            let magnitude = exponent.unsigned_abs();
            return if digits.len() > 1 {
                write!(f, "{prefix}{}.{}e{marker}{magnitude}", &digits[..1], &digits[1..])
            } else {
                write!(f, "{prefix}{digits}e{marker}{magnitude}")
            };
        }
        if exponent < 0 {
            let padding = "0".repeat(exponent.unsigned_abs() as usize - 1);
            return write!(f, "{prefix}0.{padding}{digits}");
        }
        let point = exponent as usize + 1;
        if point >= digits.len() {
            let padding = "0".repeat(point - digits.len());
            return write!(f, "{prefix}{digits}{padding}");
        }
        write!(f, "{prefix}{}.{}", &digits[..point], &digits[point..])
    }
}
