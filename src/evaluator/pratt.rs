use crate::{
    decimal::value::{Decimal, Sign},
    error::ParseError,
    evaluator::{
        lexer::{ExprToken, Op},
        scope::{Binding, Scope},
    },
};

const END: ExprToken = ExprToken::End;

/// Result type used by the Pratt loop.
pub type EvalResult<T> = Result<T, ParseError>;

/// A cursor over a compiled token list, evaluating as it parses.
///
/// There is no syntax tree: each prefix or infix handler computes its
/// decimal result directly, so one pass over the tokens yields the value.
pub struct Cursor<'a> {
    tokens: &'a [ExprToken],
    scope:  &'a Scope,
    pos:    usize,
}

impl<'a> Cursor<'a> {
    /// Evaluates a full token list against a scope.
    ///
    /// After the top-level expression, the next token must be the end
    /// sentinel; anything else is a syntax error.
    ///
    /// # Parameters
    /// - `tokens`: The compiled token list, terminated by the end sentinel.
    /// - `scope`: The bindings identifiers resolve against.
    ///
    /// # Returns
    /// The decimal the expression evaluates to.
    ///
    /// # Errors
    /// `UnexpectedSymbol`, `ExpectedClosingParen` or `ExpectedOpeningParen`
    /// when the token list is not a single well-formed expression.
    pub fn run(tokens: &'a [ExprToken], scope: &'a Scope) -> EvalResult<Decimal> {
        let mut cursor = Self { tokens, scope, pos: 0 };
        let value = cursor.evaluate(0)?;
        match cursor.current() {
            ExprToken::End => Ok(value),
            other => Err(ParseError::UnexpectedSymbol { symbol: other.symbol() }),
        }
    }

    /// The core Pratt loop.
    ///
    /// Takes the current token as a prefix, then folds in infix operators
    /// for as long as their left binding power exceeds `rbp`.
    fn evaluate(&mut self, rbp: u32) -> EvalResult<Decimal> {
        let token = self.current().clone();
        self.advance();
        let mut left = self.prefix(&token)?;

        while rbp < self.current().lbp() {
            let token = self.current().clone();
            self.advance();
            left = self.infix(&token, left)?;
        }
        Ok(left)
    }

    /// Evaluates a token in prefix position.
    fn prefix(&mut self, token: &ExprToken) -> EvalResult<Decimal> {
        match token {
            ExprToken::Number(value) => Ok(value.clone()),

            ExprToken::Variable(name) => match self.scope.get(name) {
                Some(Binding::Value(value)) => Ok(value.clone()),
                _ => Err(ParseError::UnboundIdentifier { name: name.clone() }),
            },

            ExprToken::Function(name) => self.call(name),

            ExprToken::Operator(Op::Plus) => self.evaluate(70),

            ExprToken::Operator(Op::Minus) => Ok(self.evaluate(70)?.neg()),

            ExprToken::Operator(Op::Not) => {
                let value = self.evaluate(70)?;
                Ok(if value.is_zero() {
                       Decimal::one()
                   } else {
                       Decimal::zero(Sign::Positive)
                   })
            },

            ExprToken::Operator(Op::Sqrt) => Ok(self.evaluate(79)?.sqrt()),

            ExprToken::Operator(Op::LParen) => {
                let value = self.evaluate(0)?;
                self.expect_closing()?;
                Ok(value)
            },

            other => Err(ParseError::UnexpectedSymbol { symbol: other.symbol() }),
        }
    }

    /// Combines an infix operator with its left operand.
    ///
    /// `&&` and `||` evaluate both sides and then select one operand; they
    /// do not short-circuit.
    fn infix(&mut self, token: &ExprToken, left: Decimal) -> EvalResult<Decimal> {
        let ExprToken::Operator(op) = token else {
            return Err(ParseError::UnexpectedSymbol { symbol: token.symbol() });
        };

        match op {
            Op::Pow => {
                let right = self.evaluate(79)?;
                Ok(left.pow(&right))
            },
            Op::Mul => Ok(left.times(&self.evaluate(60)?)),
            Op::Div => Ok(left.div(&self.evaluate(60)?)),
            Op::Mod => Ok(left.modulo(&self.evaluate(60)?)),
            Op::Plus => Ok(left.plus(&self.evaluate(50)?)),
            Op::Minus => Ok(left.minus(&self.evaluate(50)?)),
            Op::Gt => Ok(truth(left.gt(&self.evaluate(40)?))),
            Op::Gte => Ok(truth(left.gte(&self.evaluate(40)?))),
            Op::Lt => Ok(truth(left.lt(&self.evaluate(40)?))),
            Op::Lte => Ok(truth(left.lte(&self.evaluate(40)?))),
            Op::Eq => Ok(truth(left.eq(&self.evaluate(30)?))),
            Op::Neq => Ok(truth(!left.eq(&self.evaluate(30)?))),
            Op::And => {
                let right = self.evaluate(20)?;
                Ok(if left.is_zero() { left } else { right })
            },
            Op::Or => {
                let right = self.evaluate(10)?;
                Ok(if left.is_zero() { right } else { left })
            },
            _ => Err(ParseError::UnexpectedSymbol { symbol: op.symbol().to_string() }),
        }
    }

    /// Evaluates a function call: `name ( arg , arg , ... )`.
    fn call(&mut self, name: &str) -> EvalResult<Decimal> {
        match self.current() {
            ExprToken::Operator(Op::LParen) => self.advance(),
            _ => return Err(ParseError::ExpectedOpeningParen { name: name.to_string() }),
        }

        let mut args = Vec::new();
        if !matches!(self.current(), ExprToken::Operator(Op::RParen)) {
            loop {
                args.push(self.evaluate(0)?);
                match self.current() {
                    ExprToken::Operator(Op::Comma) => self.advance(),
                    _ => break,
                }
            }
        }
        self.expect_closing()?;

        match self.scope.get(name) {
            Some(Binding::Function(function)) => Ok(function(&args)),
            _ => Err(ParseError::UnboundIdentifier { name: name.to_string() }),
        }
    }

    fn expect_closing(&mut self) -> EvalResult<()> {
        match self.current() {
            ExprToken::Operator(Op::RParen) => {
                self.advance();
                Ok(())
            },
            _ => Err(ParseError::ExpectedClosingParen),
        }
    }

    fn current(&self) -> &ExprToken {
        self.tokens.get(self.pos).unwrap_or(&END)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }
}

/// Maps a comparison outcome onto the decimals one and zero.
fn truth(value: bool) -> Decimal {
    if value {
        Decimal::one()
    } else {
        Decimal::zero(Sign::Positive)
    }
}
