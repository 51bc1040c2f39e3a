/// Decimal construction errors.
///
/// Contains the error type raised when a string cannot be interpreted as a
/// decimal number by the `Decimal` constructor.
pub mod decimal_error;
/// Expression errors.
///
/// Defines all error types that can occur during tokenization and evaluation
/// of an expression. Parse errors include unknown symbols, identifiers with
/// no binding, and misplaced or missing tokens.
pub mod parse_error;
/// Scope errors.
///
/// Contains all error types that can be raised while installing a scope or
/// re-binding its values: invalid identifiers, unknown names, kind changes,
/// and re-binding before anything was evaluated.
pub mod scope_error;

pub use decimal_error::ParseDecimalError;
pub use parse_error::ParseError;
pub use scope_error::ScopeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any error the expression evaluator can produce.
///
/// The evaluator reports two families of failures: errors in the expression
/// itself ([`ParseError`]) and errors in the supplied bindings
/// ([`ScopeError`]). This enum is the union the public entry points return.
pub enum EvalError {
    /// The expression could not be tokenized or evaluated.
    Parse(ParseError),
    /// The scope could not be installed or re-bound.
    Scope(ScopeError),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "{error}"),
            Self::Scope(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            Self::Scope(error) => Some(error),
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<ScopeError> for EvalError {
    fn from(error: ScopeError) -> Self {
        Self::Scope(error)
    }
}
