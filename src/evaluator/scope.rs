use std::{collections::HashMap, rc::Rc};

use crate::{decimal::value::Decimal, error::ScopeError};

/// A host-side function callable from expressions.
///
/// The function receives the evaluated arguments in order and returns the
/// decimal the call produces. Functions live behind an `Rc` so scopes stay
/// cheap to clone.
pub type HostFunction = Rc<dyn Fn(&[Decimal]) -> Decimal>;

/// One scope entry: a decimal value or a host function.
///
/// A binding keeps its kind for the lifetime of the scope; re-binding may
/// replace the payload but never switch between value and function.
#[derive(Clone)]
pub enum Binding {
    /// A variable holding a decimal value.
    Value(Decimal),
    /// A function implemented by the host.
    Function(HostFunction),
}

impl Binding {
    /// Wraps a closure as a function binding.
    ///
    /// # Example
    /// ```
    /// use decima::{decimal::value::Decimal, evaluator::scope::Binding};
    ///
    /// let double = Binding::function(|args: &[Decimal]| {
    ///     args.first().map_or(Decimal::NaN, |x| x.plus(x))
    /// });
    /// assert!(double.is_function());
    /// ```
    pub fn function(f: impl Fn(&[Decimal]) -> Decimal + 'static) -> Self {
        Self::Function(Rc::new(f))
    }

    /// Returns `true` for function bindings.
    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }
}

impl From<Decimal> for Binding {
    fn from(value: Decimal) -> Self {
        Self::Value(value)
    }
}

impl From<i64> for Binding {
    fn from(value: i64) -> Self {
        Self::Value(Decimal::from(value))
    }
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Function(_) => f.write_str("Function"),
        }
    }
}

/// The identifier table an expression is evaluated against.
///
/// A scope is populated once, with every key validated against the
/// identifier pattern. After that, values may be swapped via
/// [`Scope::rebind`] but names are never added and kinds never change, so
/// a tokenized expression stays valid across mutations.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    bindings: HashMap<String, Binding>,
}

impl Scope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a scope from bindings, validating every identifier.
    ///
    /// # Errors
    /// `InvalidIdentifier` if a key does not match the identifier pattern;
    /// nothing is kept from a failed installation.
    pub fn install<I>(bindings: I) -> Result<Self, ScopeError>
        where I: IntoIterator<Item = (String, Binding)>
    {
        let mut map = HashMap::new();
        for (name, binding) in bindings {
            if !is_valid_identifier(&name) {
                return Err(ScopeError::InvalidIdentifier { name });
            }
            map.insert(name, binding);
        }
        Ok(Self { bindings: map })
    }

    /// Replaces the payloads of existing bindings.
    ///
    /// Every update is validated before any is applied, so a failed call
    /// leaves the scope untouched.
    ///
    /// # Errors
    /// - `NotInScope` if an update names an identifier the scope lacks.
    /// - `KindMismatch` if an update would turn a value into a function or
    ///   the other way around.
    pub fn rebind<I>(&mut self, updates: I) -> Result<(), ScopeError>
        where I: IntoIterator<Item = (String, Binding)>
    {
        let updates: Vec<(String, Binding)> = updates.into_iter().collect();
        for (name, binding) in &updates {
            match self.bindings.get(name) {
                None => return Err(ScopeError::NotInScope { name: name.clone() }),
                Some(existing) if existing.is_function() != binding.is_function() => {
                    return Err(ScopeError::KindMismatch { name: name.clone() });
                },
                Some(_) => {},
            }
        }
        for (name, binding) in updates {
            self.bindings.insert(name, binding);
        }
        Ok(())
    }

    /// Looks up a binding by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }
}

/// Tests a scope key against the identifier pattern.
///
/// An identifier starts with an ASCII letter, `_`, `$` or a Greek-block
/// character, and continues with the same set plus ASCII digits.
///
/// # Example
/// ```
/// use decima::evaluator::scope::is_valid_identifier;
///
/// assert!(is_valid_identifier("x"));
/// assert!(is_valid_identifier("$price_2"));
/// assert!(is_valid_identifier("π"));
/// assert!(!is_valid_identifier("2x"));
/// assert!(!is_valid_identifier(""));
/// ```
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    is_identifier_start(first) && chars.all(is_identifier_continue)
}

const fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$' || matches!(c, '\u{0370}'..='\u{03FF}')
}

const fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}
