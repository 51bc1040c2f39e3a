/// Arithmetic and comparisons over decimal values.
///
/// Implements the numeric operations the evaluator invokes: addition,
/// subtraction, multiplication, division, remainder, powers, square roots,
/// negation, and the ordered comparisons. Finite operands are bridged into
/// the host big-decimal type, computed, rounded to the working precision,
/// and converted back; special values (`NaN`, infinities, signed zeros) are
/// resolved beforehand by explicit rules.
///
/// # Responsibilities
/// - Propagates `NaN` and resolves infinity and signed-zero edge cases.
/// - Rounds every inexact result to the working precision, half-up.
/// - Keeps numeric comparison (`NaN` unequal to itself, `0` equal to `-0`)
///   separate from structural equality.
pub mod arith;
/// Decomposition of decimals into digits and limbs.
///
/// Converts between the sign/exponent/limb representation and the host
/// big-decimal type. The limb grouping is anchored to the decimal exponent,
/// so a value has exactly one representation and the wire format can rely
/// on it.
///
/// # Responsibilities
/// - Groups significant digits into base-10⁷ limbs and back.
/// - Builds host values from finite decimals and vice versa.
/// - Enforces the exponent range on results, clamping to infinity or zero.
pub mod parts;
/// The decimal value type.
///
/// Defines the `Decimal` enum with its special values, construction from
/// strings and integers, field accessors, and decimal.js-style display.
///
/// # Responsibilities
/// - Stores sign, exponent and base-10⁷ mantissa limbs for finite values.
/// - Preserves `NaN`, the infinities and the negative zero as first-class
///   values.
/// - Parses and formats the textual representation.
pub mod value;
