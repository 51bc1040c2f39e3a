use crate::{
    decimal::value::Decimal,
    error::{EvalError, ScopeError},
    evaluator::{
        lexer::{self, ExprToken},
        pratt::Cursor,
        scope::{Binding, Scope},
    },
};

/// Stores the expression evaluation state.
///
/// An evaluator owns the installed scope, the most recently compiled token
/// list and the parsed expression text. Re-binding mutates scope values in
/// place and re-evaluates the stored tokens, so an expression compiled once
/// can be re-run under new values without touching its source again.
///
/// A failed call leaves all three parts exactly as the last successful call
/// left them.
///
/// ## Usage
///
/// `Evaluator` is created once and reused. Evaluation is synchronous and
/// the state is not synchronized; use one evaluator per thread or guard it
/// with a lock.
///
/// # Example
/// ```
/// use decima::evaluator::{core::Evaluator, scope::Binding};
///
/// let mut engine = Evaluator::new();
/// let scope = [("x".to_string(), Binding::from(2))];
///
/// let result = engine.evaluate_with("x^3", scope).unwrap();
/// assert_eq!(result.to_string(), "8");
///
/// let result = engine.rebind([("x".to_string(), Binding::from(10))]).unwrap();
/// assert_eq!(result.to_string(), "1000");
/// ```
#[derive(Default)]
pub struct Evaluator {
    scope:      Scope,
    tokens:     Vec<ExprToken>,
    expression: String,
}

impl Evaluator {
    /// Creates an evaluator with an empty scope and no stored expression.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a fresh scope, then tokenizes and evaluates an expression.
    ///
    /// The new scope, token list and expression text replace the stored
    /// ones only if the whole call succeeds.
    ///
    /// # Parameters
    /// - `source`: The expression text.
    /// - `bindings`: The scope contents; every key must be a valid
    ///   identifier.
    ///
    /// # Returns
    /// The decimal the expression evaluates to.
    ///
    /// # Errors
    /// Scope installation, tokenization and evaluation errors, as
    /// [`EvalError`].
    pub fn evaluate_with<I>(&mut self, source: &str, bindings: I) -> Result<Decimal, EvalError>
        where I: IntoIterator<Item = (String, Binding)>
    {
        let scope = Scope::install(bindings)?;
        let (tokens, expression) = lexer::tokenize(source, &scope)?;
        let value = Cursor::run(&tokens, &scope)?;

        self.scope = scope;
        self.tokens = tokens;
        self.expression = expression;
        Ok(value)
    }

    /// Tokenizes and evaluates an expression against the current scope.
    ///
    /// # Errors
    /// Tokenization and evaluation errors, as [`EvalError`].
    pub fn evaluate(&mut self, source: &str) -> Result<Decimal, EvalError> {
        let (tokens, expression) = lexer::tokenize(source, &self.scope)?;
        let value = Cursor::run(&tokens, &self.scope)?;

        self.tokens = tokens;
        self.expression = expression;
        Ok(value)
    }

    /// Updates scope values in place and re-evaluates the stored expression.
    ///
    /// Only existing names may be updated, and a binding never changes
    /// between value and function. All updates are validated before any is
    /// applied.
    ///
    /// # Parameters
    /// - `updates`: The bindings to replace.
    ///
    /// # Returns
    /// The stored expression's value under the updated scope.
    ///
    /// # Errors
    /// - `NothingToEvaluate` if no expression was evaluated yet.
    /// - `NotInScope` and `KindMismatch` from the scope update.
    pub fn rebind<I>(&mut self, updates: I) -> Result<Decimal, EvalError>
        where I: IntoIterator<Item = (String, Binding)>
    {
        if self.tokens.is_empty() {
            return Err(ScopeError::NothingToEvaluate.into());
        }
        self.scope.rebind(updates)?;
        Ok(Cursor::run(&self.tokens, &self.scope)?)
    }

    /// The most recently parsed expression text, including any `*` the
    /// tokenizer inserted for implicit multiplication.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The currently installed scope.
    #[must_use]
    pub const fn scope(&self) -> &Scope {
        &self.scope
    }
}
