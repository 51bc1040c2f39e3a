use logos::Logos;

use crate::{
    decimal::value::Decimal,
    error::ParseError,
    evaluator::scope::{Binding, Scope},
};

/// Represents a lexical token in an expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the expression grammar.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum RawToken {
    /// Numeric literal tokens, such as `42`, `3.14` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),
    /// Identifier tokens; variable or function names such as `x` or `max`.
    #[regex(r"[A-Za-z_$\u{0370}-\u{03FF}][A-Za-z0-9_$\u{0370}-\u{03FF}]*",
            |lex| lex.slice().to_string())]
    Identifier(String),
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `&&`
    #[token("&&")]
    AmpAmp,
    /// `||`
    #[token("||")]
    PipePipe,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `!`
    #[token("!")]
    Bang,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `√` (U+221A)
    #[token("√")]
    Sqrt,
    /// `,`
    #[token(",")]
    Comma,
}

/// An operator of the expression grammar.
///
/// Each operator knows its left binding power; the evaluation behavior
/// lives in the Pratt loop's `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `^` — exponentiation, right-associative.
    Pow,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `+`, both binary and prefix.
    Plus,
    /// `-`, both binary and prefix.
    Minus,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `==`
    Eq,
    /// `!=`
    Neq,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `√` — prefix square root.
    Sqrt,
    /// `!` — prefix logical not.
    Not,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
}

impl Op {
    /// The operator's left binding power; zero for tokens that never act
    /// as infix operators.
    #[must_use]
    pub const fn lbp(self) -> u32 {
        match self {
            Self::Pow => 80,
            Self::Mul | Self::Div | Self::Mod => 60,
            Self::Plus | Self::Minus => 50,
            Self::Gt | Self::Gte | Self::Lt | Self::Lte => 40,
            Self::Eq | Self::Neq => 30,
            Self::And => 20,
            Self::Or => 10,
            _ => 0,
        }
    }

    /// The operator's source text.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Pow => "^",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Eq => "==",
            Self::Neq => "!=",
            Self::And => "&&",
            Self::Or => "||",
            Self::Sqrt => "√",
            Self::Not => "!",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Comma => ",",
        }
    }
}

/// A compiled expression token, ready for the Pratt loop.
///
/// Identifiers are resolved against the scope when the token list is
/// built, so evaluation only ever sees bound names. Tokens are never
/// mutated after creation; re-binding changes the scope, not the list.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprToken {
    /// A literal decimal value.
    Number(Decimal),
    /// An identifier bound to a value.
    Variable(String),
    /// An identifier bound to a host function.
    Function(String),
    /// An operator or delimiter.
    Operator(Op),
    /// The sentinel after the last real token.
    End,
}

impl ExprToken {
    /// The token's left binding power.
    #[must_use]
    pub const fn lbp(&self) -> u32 {
        match self {
            Self::Operator(op) => op.lbp(),
            _ => 0,
        }
    }

    /// The token's text, for error messages.
    #[must_use]
    pub fn symbol(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Variable(name) | Self::Function(name) => name.clone(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::End => "end of expression".to_string(),
        }
    }
}

/// Tokenizes an expression against a scope.
///
/// The literal `**` is rewritten to `^` first. Identifiers resolve to
/// variable or function tokens through the scope; a name the scope lacks is
/// a lexical error. A synthetic `*` is inserted wherever a number, a
/// variable or a closing parenthesis directly meets an identifier, `(`,
/// `√` or a unary `!`.
///
/// # Parameters
/// - `source`: The expression text.
/// - `scope`: The bindings identifiers resolve against.
///
/// # Returns
/// The compiled token list (terminated by [`ExprToken::End`]) and the
/// parsed expression text, token lexemes plus any inserted `*`.
///
/// # Errors
/// - `UnknownSymbol` for a character no lexeme can start with.
/// - `UnboundIdentifier` for a name the scope does not bind.
pub fn tokenize(source: &str, scope: &Scope) -> Result<(Vec<ExprToken>, String), ParseError> {
    let source = source.replace("**", "^");

    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut lexer = RawToken::lexer(&source);

    while let Some(item) = lexer.next() {
        let raw = item.map_err(|()| {
                          ParseError::UnknownSymbol { symbol: lexer.slice().to_string() }
                      })?;

        if multiplies_into(tokens.last()) && begins_factor(&raw) {
            text.push('*');
            tokens.push(ExprToken::Operator(Op::Mul));
        }
        text.push_str(lexer.slice());
        tokens.push(compile(raw, scope)?);
    }

    tokens.push(ExprToken::End);
    Ok((tokens, text))
}

/// Implicit multiplication continues after a number, a variable or `)`.
fn multiplies_into(previous: Option<&ExprToken>) -> bool {
    matches!(previous,
             Some(ExprToken::Number(_)
                  | ExprToken::Variable(_)
                  | ExprToken::Operator(Op::RParen)))
}

/// Implicit multiplication applies before anything that starts a factor.
const fn begins_factor(raw: &RawToken) -> bool {
    matches!(raw,
             RawToken::Identifier(_) | RawToken::LParen | RawToken::Sqrt | RawToken::Bang)
}

/// Resolves one raw token into an expression token.
fn compile(raw: RawToken, scope: &Scope) -> Result<ExprToken, ParseError> {
    Ok(match raw {
        RawToken::Number(text) => {
            let value = text.parse::<Decimal>()
                            .map_err(|_| ParseError::UnknownSymbol { symbol: text })?;
            ExprToken::Number(value)
        },
        RawToken::Identifier(name) => match scope.get(&name) {
            Some(Binding::Value(_)) => ExprToken::Variable(name),
            Some(Binding::Function(_)) => ExprToken::Function(name),
            None => return Err(ParseError::UnboundIdentifier { name }),
        },
        RawToken::Caret => ExprToken::Operator(Op::Pow),
        RawToken::Star => ExprToken::Operator(Op::Mul),
        RawToken::Slash => ExprToken::Operator(Op::Div),
        RawToken::Percent => ExprToken::Operator(Op::Mod),
        RawToken::Plus => ExprToken::Operator(Op::Plus),
        RawToken::Minus => ExprToken::Operator(Op::Minus),
        RawToken::Greater => ExprToken::Operator(Op::Gt),
        RawToken::GreaterEqual => ExprToken::Operator(Op::Gte),
        RawToken::Less => ExprToken::Operator(Op::Lt),
        RawToken::LessEqual => ExprToken::Operator(Op::Lte),
        RawToken::EqualEqual => ExprToken::Operator(Op::Eq),
        RawToken::BangEqual => ExprToken::Operator(Op::Neq),
        RawToken::AmpAmp => ExprToken::Operator(Op::And),
        RawToken::PipePipe => ExprToken::Operator(Op::Or),
        RawToken::Sqrt => ExprToken::Operator(Op::Sqrt),
        RawToken::Bang => ExprToken::Operator(Op::Not),
        RawToken::LParen => ExprToken::Operator(Op::LParen),
        RawToken::RParen => ExprToken::Operator(Op::RParen),
        RawToken::Comma => ExprToken::Operator(Op::Comma),
    })
}
