#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while installing or mutating a scope.
pub enum ScopeError {
    /// A scope key does not match the identifier pattern.
    InvalidIdentifier {
        /// The rejected key.
        name: String,
    },
    /// A re-binding named an identifier the scope does not contain.
    NotInScope {
        /// The unknown identifier.
        name: String,
    },
    /// A re-binding tried to change a binding between value and function.
    KindMismatch {
        /// The identifier whose kind would change.
        name: String,
    },
    /// A re-binding was requested before any expression was evaluated.
    NothingToEvaluate,
}

impl std::fmt::Display for ScopeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIdentifier { name } => {
                write!(f, "Invalid identifier: {name}.")
            },

            Self::NotInScope { name } => {
                write!(f, "Identifier {name} is not in scope.")
            },

            Self::KindMismatch { name } => {
                write!(f, "Cannot rebind {name} to a different kind of binding.")
            },

            Self::NothingToEvaluate => {
                write!(f, "No expression to evaluate.")
            },
        }
    }
}

impl std::error::Error for ScopeError {}
