/// The evaluation engine holding scope, tokens and expression text.
///
/// The engine ties tokenization, scope management and the Pratt loop
/// together behind three entry points: evaluate with a fresh scope,
/// evaluate against the current scope, and re-bind values then re-evaluate
/// the stored expression.
///
/// # Responsibilities
/// - Owns the mutable evaluation state and its commit-on-success rule.
/// - Exposes the parsed expression text.
pub mod core;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw source and produces expression tokens: decimal
/// literals, scope-resolved identifiers, operators and delimiters. It also
/// inserts the synthetic `*` of implicit multiplication and accumulates the
/// parsed expression string.
///
/// # Responsibilities
/// - Converts the input into tokens, rewriting `**` to `^` first.
/// - Resolves identifiers to variable or function tokens via the scope.
/// - Reports lexical errors for unknown characters and unbound names.
pub mod lexer;
/// The Pratt module evaluates compiled token lists.
///
/// A cursor walks the tokens once, dispatching on each token's prefix or
/// infix role by binding power and computing decimal results directly;
/// there is no intermediate syntax tree.
///
/// # Responsibilities
/// - Implements the operator table: powers, products, sums, comparisons,
///   selection operators and the prefix forms.
/// - Parses function calls and parenthesized groups.
/// - Reports syntax errors with the offending token.
pub mod pratt;
/// The scope module manages identifier bindings.
///
/// A scope maps validated identifiers to decimal values or host functions.
/// It is populated once and mutated only by value, so compiled token lists
/// remain valid across re-binding.
///
/// # Responsibilities
/// - Validates identifiers against the accepted pattern.
/// - Enforces that re-binding never adds names or changes binding kinds.
pub mod scope;
