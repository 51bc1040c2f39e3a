//! # decima
//!
//! decima extends arbitrary-precision decimals with two independent cores:
//! a compact, self-describing binary serialization and an infix expression
//! evaluator with user-supplied variables and functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{decimal::value::Decimal, error::EvalError, evaluator::core::Evaluator};

/// Converts decimals to and from their compact binary form.
///
/// The wire format is self-delimiting and length-minimizing: special values
/// and small integers take one byte, exponents pack into the first byte
/// when they fit, and repeated all-zero or all-nine mantissa limbs are
/// run-length compressed. Encoding then decoding reproduces the value
/// bit-exactly, including `NaN` and the negative zero.
///
/// # Responsibilities
/// - Serializes any decimal into its shortest wire form.
/// - Reconstructs decimals from bytes without ever failing.
/// - Validates decoded exponents against the supported range.
pub mod codec;
/// The decimal value type and its arithmetic.
///
/// Defines the sign/exponent/limb representation both cores share, bridges
/// finite values into the host big-decimal library for arithmetic, and
/// carries the special values (`NaN`, infinities, signed zeros) the host
/// cannot represent.
///
/// # Responsibilities
/// - Construction from strings and integers, display, field access.
/// - Arithmetic and comparisons at the working precision.
pub mod decimal;
/// Provides unified error types for all failure modes.
///
/// This module defines the errors raised while parsing decimals, while
/// tokenizing or evaluating expressions, and while installing or mutating
/// scopes. It standardizes error reporting and carries the offending
/// symbol or identifier in each message.
///
/// # Responsibilities
/// - Defines error enums for decimal parsing, expression parsing and scope
///   management.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Evaluates infix expressions over decimals.
///
/// This module ties together the tokenizer, the scope manager and the
/// Pratt evaluation loop. Expressions support the usual arithmetic,
/// comparison and selection operators, prefix `√` and `!`, implicit
/// multiplication, and calls to host-supplied functions.
///
/// # Responsibilities
/// - Tokenizes and evaluates expressions against a scope.
/// - Re-evaluates a compiled expression under re-bound values.
/// - Exposes the parsed expression text.
pub mod evaluator;

/// Evaluates a single expression with an empty scope.
///
/// This is the one-shot convenience entry. Expressions that refer to
/// variables or functions need an [`Evaluator`] with an installed scope
/// instead.
///
/// # Errors
/// Returns an error if tokenization or evaluation fails.
///
/// # Examples
/// ```
/// use decima::evaluate;
///
/// let value = evaluate("0.1 + 0.2").unwrap();
/// assert_eq!(value.to_string(), "0.3");
///
/// // Unknown names are an error with an empty scope.
/// assert!(evaluate("x + 1").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Decimal, EvalError> {
    let mut engine = Evaluator::new();
    engine.evaluate(source)
}
