use std::{cmp::Ordering, num::NonZeroU64};

use bigdecimal::{BigDecimal, One};

use crate::decimal::{
    parts,
    value::{Decimal, PRECISION, ROUNDING, Sign},
};

impl Decimal {
    /// Returns the value with its sign flipped.
    ///
    /// `NaN` stays `NaN`; the zeros swap between `0` and `-0`.
    #[must_use]
    pub fn neg(&self) -> Self {
        match self {
            Self::NaN => Self::NaN,
            Self::Infinite(sign) => Self::Infinite(sign.flipped()),
            Self::Finite { sign, exponent, limbs } => Self::Finite { sign: sign.flipped(),
                                                                    exponent: *exponent,
                                                                    limbs: limbs.clone(), },
        }
    }

    /// Adds two values.
    ///
    /// `NaN` propagates, opposite infinities cancel to `NaN`, and an exact
    /// zero sum is `0` unless both operands were negative.
    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::NaN, _) | (_, Self::NaN) => Self::NaN,

            (Self::Infinite(a), Self::Infinite(b)) => {
                if a == b {
                    Self::Infinite(*a)
                } else {
                    Self::NaN
                }
            },

            (Self::Infinite(sign), Self::Finite { .. })
            | (Self::Finite { .. }, Self::Infinite(sign)) => Self::Infinite(*sign),

            (Self::Finite { sign: a, exponent: ea, limbs: la },
             Self::Finite { sign: b, exponent: eb, limbs: lb }) => {
                let sum = parts::finite_to_big(*a, *ea, la) + parts::finite_to_big(*b, *eb, lb);
                let zero_sign = if a.is_negative() && b.is_negative() {
                    Sign::Negative
                } else {
                    Sign::Positive
                };
                parts::from_big(&rounded(sum), zero_sign)
            },
        }
    }

    /// Subtracts `other` from the value.
    #[must_use]
    pub fn minus(&self, other: &Self) -> Self {
        self.plus(&other.neg())
    }

    /// Multiplies two values.
    ///
    /// Zero times an infinity is `NaN`; otherwise the result carries the
    /// product of the operand signs, including on zero results.
    #[must_use]
    pub fn times(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::NaN, _) | (_, Self::NaN) => Self::NaN,

            (Self::Infinite(a), Self::Infinite(b)) => Self::Infinite(a.product(*b)),

            (Self::Infinite(a), Self::Finite { sign: b, limbs, .. })
            | (Self::Finite { sign: b, limbs, .. }, Self::Infinite(a)) => {
                if limbs.first() == Some(&0) {
                    Self::NaN
                } else {
                    Self::Infinite(a.product(*b))
                }
            },

            (Self::Finite { sign: a, exponent: ea, limbs: la },
             Self::Finite { sign: b, exponent: eb, limbs: lb }) => {
                let product =
                    parts::finite_to_big(*a, *ea, la) * parts::finite_to_big(*b, *eb, lb);
                parts::from_big(&rounded(product), a.product(*b))
            },
        }
    }

    /// Divides the value by `other`.
    ///
    /// A nonzero value over zero is a signed infinity; zero over zero and
    /// infinity over infinity are `NaN`. Results are rounded to
    /// [`PRECISION`] significant digits.
    #[must_use]
    pub fn div(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::NaN, _) | (_, Self::NaN) | (Self::Infinite(_), Self::Infinite(_)) => Self::NaN,

            (Self::Infinite(a), Self::Finite { sign: b, .. }) => Self::Infinite(a.product(*b)),

            (Self::Finite { sign: a, .. }, Self::Infinite(b)) => Self::zero(a.product(*b)),

            (Self::Finite { sign: a, exponent: ea, limbs: la },
             Self::Finite { sign: b, exponent: eb, limbs: lb }) => {
                let result_sign = a.product(*b);
                if other.is_zero() {
                    return if self.is_zero() {
                        Self::NaN
                    } else {
                        Self::Infinite(result_sign)
                    };
                }
                if self.is_zero() {
                    return Self::zero(result_sign);
                }
                let quotient =
                    parts::finite_to_big(*a, *ea, la) / parts::finite_to_big(*b, *eb, lb);
                parts::from_big(&rounded(quotient), result_sign)
            },
        }
    }

    /// Computes the remainder of truncated division.
    ///
    /// The result takes the dividend's sign. An infinite dividend or a zero
    /// divisor is `NaN`; a finite value modulo an infinity is the value
    /// itself.
    #[must_use]
    pub fn modulo(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::NaN, _) | (_, Self::NaN) | (Self::Infinite(_), _) => Self::NaN,

            (Self::Finite { .. }, Self::Infinite(_)) => self.clone(),

            (Self::Finite { sign: a, exponent: ea, limbs: la },
             Self::Finite { sign: b, exponent: eb, limbs: lb }) => {
                if other.is_zero() {
                    return Self::NaN;
                }
                if self.is_zero() {
                    return Self::zero(*a);
                }
                let remainder =
                    parts::finite_to_big(*a, *ea, la) % parts::finite_to_big(*b, *eb, lb);
                parts::from_big(&rounded(remainder), *a)
            },
        }
    }

    /// Raises the value to a power.
    ///
    /// Any base to the power zero is one. Integer exponents use exact binary
    /// exponentiation followed by one rounding (and one division when the
    /// exponent is negative). A fractional exponent falls back to `f64`
    /// exponentiation at reduced precision; a negative base with a
    /// fractional exponent is `NaN`.
    #[must_use]
    pub fn pow(&self, power: &Self) -> Self {
        if power.is_zero() {
            return Self::one();
        }
        if self.is_nan() || power.is_nan() {
            return Self::NaN;
        }
        if let Self::Infinite(direction) = power {
            return self.pow_infinite(*direction);
        }

        let rises = !power.is_negative();
        if let Self::Infinite(sign) = self {
            let result_sign = if sign.is_negative() && power.is_odd_integer() {
                Sign::Negative
            } else {
                Sign::Positive
            };
            return if rises {
                Self::Infinite(result_sign)
            } else {
                Self::zero(result_sign)
            };
        }
        if self.is_zero() {
            let result_sign = if self.is_negative() && power.is_odd_integer() {
                Sign::Negative
            } else {
                Sign::Positive
            };
            return if rises {
                Self::zero(result_sign)
            } else {
                Self::Infinite(result_sign)
            };
        }

        if let Some(n) = power.as_integer() {
            return self.integer_pow(n);
        }
        Self::from_f64_approx(self.to_f64().powf(power.to_f64()))
    }

    /// Computes the square root.
    ///
    /// The roots of `±0` are `±0`; the root of any other negative value is
    /// `NaN`.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        match self {
            Self::NaN | Self::Infinite(Sign::Negative) => Self::NaN,
            Self::Infinite(Sign::Positive) => Self::Infinite(Sign::Positive),
            Self::Finite { sign, exponent, limbs } => {
                if self.is_zero() {
                    return self.clone();
                }
                if sign.is_negative() {
                    return Self::NaN;
                }
                parts::finite_to_big(*sign, *exponent, limbs)
                    .sqrt()
                    .map_or(Self::NaN, |root| parts::from_big(&rounded(root), Sign::Positive))
            },
        }
    }

    /// Numeric equality: `NaN` equals nothing and `0` equals `-0`.
    #[must_use]
    pub fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }

    /// Numeric strictly-greater comparison; `false` whenever `NaN` is involved.
    #[must_use]
    pub fn gt(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Greater)
    }

    /// Numeric greater-or-equal comparison; `false` whenever `NaN` is involved.
    #[must_use]
    pub fn gte(&self, other: &Self) -> bool {
        matches!(self.compare(other), Some(Ordering::Greater | Ordering::Equal))
    }

    /// Numeric strictly-less comparison; `false` whenever `NaN` is involved.
    #[must_use]
    pub fn lt(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Less)
    }

    /// Numeric less-or-equal comparison; `false` whenever `NaN` is involved.
    #[must_use]
    pub fn lte(&self, other: &Self) -> bool {
        matches!(self.compare(other), Some(Ordering::Less | Ordering::Equal))
    }

    /// Orders two values numerically, or `None` when `NaN` is involved.
    fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::NaN, _) | (_, Self::NaN) => None,

            (Self::Infinite(a), Self::Infinite(b)) => Some(match (a, b) {
                (Sign::Negative, Sign::Positive) => Ordering::Less,
                (Sign::Positive, Sign::Negative) => Ordering::Greater,
                _ => Ordering::Equal,
            }),

            (Self::Infinite(sign), Self::Finite { .. }) => Some(if sign.is_negative() {
                Ordering::Less
            } else {
                Ordering::Greater
            }),

            (Self::Finite { .. }, Self::Infinite(sign)) => Some(if sign.is_negative() {
                Ordering::Greater
            } else {
                Ordering::Less
            }),

            (Self::Finite { .. }, Self::Finite { .. }) => {
                Some(parts::to_big(self)?.cmp(&parts::to_big(other)?))
            },
        }
    }

    /// Resolves a power with an infinite exponent from the base's magnitude.
    fn pow_infinite(&self, direction: Sign) -> Self {
        let toward_zero = direction.is_negative();
        match self.magnitude_cmp_one() {
            Some(Ordering::Greater) => {
                if toward_zero {
                    Self::zero(Sign::Positive)
                } else {
                    Self::Infinite(Sign::Positive)
                }
            },
            Some(Ordering::Less) => {
                if toward_zero {
                    Self::Infinite(Sign::Positive)
                } else {
                    Self::zero(Sign::Positive)
                }
            },
            _ => Self::NaN,
        }
    }

    /// Compares the value's magnitude with one.
    fn magnitude_cmp_one(&self) -> Option<Ordering> {
        match self {
            Self::NaN => None,
            Self::Infinite(_) => Some(Ordering::Greater),
            Self::Finite { .. } => {
                parts::to_big(self).map(|big| big.abs().cmp(&BigDecimal::one()))
            },
        }
    }

    /// Returns the value as an `i64` when it is an integer in range.
    fn as_integer(&self) -> Option<i64> {
        let Self::Finite { sign, exponent, limbs } = self else {
            return None;
        };
        if self.is_zero() {
            return Some(0);
        }

        let digits = parts::digit_string(limbs);
        let digits = digits.trim_end_matches('0');
        if *exponent < digits.len() as i64 - 1 {
            return None;
        }
        let zeros = usize::try_from(*exponent - digits.len() as i64 + 1).ok()?;
        if digits.len() + zeros > 19 {
            return None;
        }

        let mut value: i128 = 0;
        for byte in digits.bytes() {
            value = value * 10 + i128::from(byte - b'0');
        }
        value *= 10i128.pow(zeros as u32);
        if sign.is_negative() {
            value = -value;
        }
        i64::try_from(value).ok()
    }

    /// Returns `true` when the value is an odd integer of any size.
    fn is_odd_integer(&self) -> bool {
        let Self::Finite { exponent, limbs, .. } = self else {
            return false;
        };
        if self.is_zero() {
            return false;
        }

        let digits = parts::digit_string(limbs);
        let digits = digits.trim_end_matches('0');
        *exponent == digits.len() as i64 - 1
            && digits.bytes().last().is_some_and(|byte| (byte - b'0') % 2 == 1)
    }

    /// Computes an integer power by binary exponentiation.
    ///
    /// Intermediate products carry guard digits past [`PRECISION`]; the
    /// result is rounded once at the end. A negative exponent inverts the
    /// accumulated power with a single division.
    fn integer_pow(&self, n: i64) -> Self {
        let Some(base) = parts::to_big(self) else {
            return Self::NaN;
        };

        let mut result = BigDecimal::one();
        let mut factor = base;
        let mut remaining = n.unsigned_abs();
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = guard_rounded(&result * &factor);
            }
            remaining >>= 1;
            if remaining > 0 {
                factor = guard_rounded(&factor * &factor);
            }
        }
        if n < 0 {
            result = &BigDecimal::one() / &result;
        }
        parts::from_big(&rounded(result), Sign::Positive)
    }

    /// Builds a decimal from an `f64` approximation.
    fn from_f64_approx(value: f64) -> Self {
        if value.is_nan() {
            return Self::NaN;
        }
        if value.is_infinite() {
            return Self::Infinite(if value < 0.0 { Sign::Negative } else { Sign::Positive });
        }
        if value == 0.0 {
            return Self::zero(if value.is_sign_negative() {
                Sign::Negative
            } else {
                Sign::Positive
            });
        }
        format!("{value:e}").parse().unwrap_or(Self::NaN)
    }
}

/// Rounds a host result to [`PRECISION`] significant digits.
fn rounded(value: BigDecimal) -> BigDecimal {
    round_to(value, PRECISION)
}

/// Rounds an intermediate product, keeping guard digits past [`PRECISION`].
fn guard_rounded(value: BigDecimal) -> BigDecimal {
    round_to(value, PRECISION + 12)
}

fn round_to(value: BigDecimal, digits: u64) -> BigDecimal {
    if value.digits() <= digits {
        return value;
    }
    match NonZeroU64::new(digits) {
        Some(precision) => value.with_precision_round(precision, ROUNDING),
        None => value,
    }
}
