use decima::{
    decimal::value::Decimal,
    error::{EvalError, ParseError, ScopeError},
    evaluator::{core::Evaluator, scope::Binding},
};

fn dec(text: &str) -> Decimal {
    text.parse()
        .unwrap_or_else(|e| panic!("Failed to parse '{text}': {e}"))
}

fn eval(source: &str) -> Decimal {
    decima::evaluate(source).unwrap_or_else(|e| panic!("'{source}' failed: {e}"))
}

fn assert_evals(source: &str, expected: &str) {
    assert_eq!(eval(source), dec(expected), "'{source}' != {expected}");
}

#[test]
fn basic_arithmetic() {
    assert_evals("1 + 2", "3");
    assert_evals("0.1 + 0.2", "0.3");
    assert_evals("8 - 5", "3");
    assert_evals("1.5 * 2", "3");
    assert_evals("10 / 4", "2.5");
    assert_evals("7 % 3", "1");
}

#[test]
fn precedence_and_grouping() {
    assert_evals("2 + 3 * 4", "14");
    assert_evals("(2 + 3) * 4", "20");
    assert_evals("20 - 3 - 2", "15");
    assert_evals("24 / 4 / 2", "3");
    assert_evals("2 + 12 % 5", "4");
}

#[test]
fn exponentiation_is_right_associative() {
    assert_evals("2^10", "1024");
    assert_evals("2^3^2", "512");
    assert_evals("2**3", "8");
    assert_evals("-2^2", "-4");
    assert_evals("2^-3", "0.125");
}

#[test]
fn prefix_operators() {
    assert_evals("-5 + 3", "-2");
    assert_evals("+5", "5");
    assert_evals("2 * -3", "-6");
    assert_evals("!0", "1");
    assert_evals("!5", "0");
    assert_evals("!0 + 1", "2");
    assert_evals("√16", "4");
    assert_evals("√(2 + 2)", "2");
    assert_evals("√4^2", "4");
}

#[test]
fn comparisons_yield_one_or_zero() {
    assert_evals("2 > 3", "0");
    assert_evals("2 < 3", "1");
    assert_evals("2 <= 2", "1");
    assert_evals("3 >= 4", "0");
    assert_evals("2 == 2", "1");
    assert_evals("2 != 2", "0");
    assert_evals("1 < 2 == 1", "1");
}

#[test]
fn selection_operators_pick_an_operand() {
    assert_evals("2 && 3", "3");
    assert_evals("0 && 5", "0");
    assert_evals("0 || 4", "4");
    assert_evals("7 || 4", "7");
    assert_evals("1 && 2 || 3", "2");
}

#[test]
fn division_edge_cases() {
    assert!(eval("0 / 0").is_nan());
    assert_eq!(eval("1 / 0").to_string(), "Infinity");
    assert_eq!(eval("-1 / 0").to_string(), "-Infinity");
}

#[test]
fn implicit_multiplication_matches_explicit() {
    let scope = [("x".to_string(), Binding::from(3))];
    let mut engine = Evaluator::new();

    let juxtaposed = engine.evaluate_with("2x", scope.clone()).unwrap();
    assert_eq!(engine.expression(), "2*x");

    let explicit = engine.evaluate("2*x").unwrap();
    let grouped = engine.evaluate("(2)(x)").unwrap();
    assert_eq!(juxtaposed, explicit);
    assert_eq!(juxtaposed, grouped);
    assert_eq!(juxtaposed, dec("6"));
}

#[test]
fn implicit_multiplication_binds_like_explicit() {
    let scope = [("x".to_string(), Binding::from(3))];
    let mut engine = Evaluator::new();

    let value = engine.evaluate_with("1/2x", scope).unwrap();
    assert_eq!(value, dec("1.5"));
    assert_eq!(engine.expression(), "1/2*x");
}

#[test]
fn implicit_multiplication_before_sqrt_and_not() {
    assert_evals("2√4", "4");
    assert_evals("(1+1)√9", "6");
    assert_evals("3!0", "3");
}

#[test]
fn greek_identifiers_work() {
    let scope = [("π".to_string(), Binding::Value(dec("3.14159265358979323846")))];
    let mut engine = Evaluator::new();

    let value = engine.evaluate_with("2π", scope).unwrap();
    assert_eq!(value, dec("6.2831853071795864769"));
    assert_eq!(engine.expression(), "2*π");
}

#[test]
fn parsed_expression_drops_whitespace() {
    let mut engine = Evaluator::new();
    engine.evaluate(" 2 +  2 ").unwrap();
    assert_eq!(engine.expression(), "2+2");

    engine.evaluate("2**3").unwrap();
    assert_eq!(engine.expression(), "2^3");
}

#[test]
fn host_functions_are_callable() {
    let scope = [("max".to_string(),
                  Binding::function(|args: &[Decimal]| {
                      args.iter()
                          .fold(dec("-Infinity"), |best, x| if x.gt(&best) { x.clone() } else { best })
                  })),
                 ("three".to_string(), Binding::function(|_: &[Decimal]| dec("3")))];
    let mut engine = Evaluator::new();

    assert_eq!(engine.evaluate_with("max(2, 5, 3)", scope.clone()).unwrap(), dec("5"));
    assert_eq!(engine.evaluate("three()").unwrap(), dec("3"));
    assert_eq!(engine.evaluate("2max(1, 2)").unwrap(), dec("4"));
    assert_eq!(engine.expression(), "2*max(1,2)");
}

#[test]
fn rebinding_reevaluates_the_stored_expression() {
    let scope = [("x".to_string(), Binding::from(2)),
                 ("y".to_string(), Binding::from(3))];
    let mut engine = Evaluator::new();

    assert_eq!(engine.evaluate_with("x^y", scope).unwrap(), dec("8"));

    let value = engine.rebind([("y".to_string(), Binding::from(-3))]).unwrap();
    assert_eq!(value, dec("0.125"));

    let value = engine.rebind([("x".to_string(), Binding::from(4))]).unwrap();
    assert_eq!(value, dec("0.015625"));
}

#[test]
fn rebinding_a_new_name_fails() {
    let scope = [("x".to_string(), Binding::from(2))];
    let mut engine = Evaluator::new();
    engine.evaluate_with("x + 1", scope).unwrap();

    let error = engine.rebind([("z".to_string(), Binding::from(5))]).unwrap_err();
    assert_eq!(error,
               EvalError::Scope(ScopeError::NotInScope { name: "z".to_string() }));
}

#[test]
fn rebinding_cannot_change_kinds() {
    let scope = [("x".to_string(), Binding::from(2))];
    let mut engine = Evaluator::new();
    engine.evaluate_with("x + 1", scope).unwrap();

    let error = engine.rebind([("x".to_string(), Binding::function(|_: &[Decimal]| dec("1")))])
                      .unwrap_err();
    assert_eq!(error,
               EvalError::Scope(ScopeError::KindMismatch { name: "x".to_string() }));
}

#[test]
fn rebinding_before_any_expression_fails() {
    let mut engine = Evaluator::new();
    let error = engine.rebind([("x".to_string(), Binding::from(1))]).unwrap_err();
    assert_eq!(error, EvalError::Scope(ScopeError::NothingToEvaluate));
}

#[test]
fn invalid_scope_keys_are_rejected() {
    let scope = [("2x".to_string(), Binding::from(1))];
    let mut engine = Evaluator::new();

    let error = engine.evaluate_with("1", scope).unwrap_err();
    assert_eq!(error,
               EvalError::Scope(ScopeError::InvalidIdentifier { name: "2x".to_string() }));
}

#[test]
fn lexical_errors_carry_the_symbol() {
    let error = decima::evaluate("2 + #").unwrap_err();
    assert_eq!(error,
               EvalError::Parse(ParseError::UnknownSymbol { symbol: "#".to_string() }));

    let error = decima::evaluate("y + 1").unwrap_err();
    assert_eq!(error,
               EvalError::Parse(ParseError::UnboundIdentifier { name: "y".to_string() }));
}

#[test]
fn syntax_errors_are_reported() {
    assert!(matches!(decima::evaluate("(2 + 3").unwrap_err(),
                     EvalError::Parse(ParseError::ExpectedClosingParen)));
    assert!(matches!(decima::evaluate("2 +").unwrap_err(),
                     EvalError::Parse(ParseError::UnexpectedSymbol { .. })));
    assert!(matches!(decima::evaluate(") + 2").unwrap_err(),
                     EvalError::Parse(ParseError::UnexpectedSymbol { .. })));
    assert!(matches!(decima::evaluate("2 3").unwrap_err(),
                     EvalError::Parse(ParseError::UnexpectedSymbol { .. })));
    assert!(matches!(decima::evaluate("").unwrap_err(),
                     EvalError::Parse(ParseError::UnexpectedSymbol { .. })));
}

#[test]
fn calling_a_function_without_parens_fails() {
    let scope = [("f".to_string(), Binding::function(|_: &[Decimal]| dec("1")))];
    let mut engine = Evaluator::new();

    let error = engine.evaluate_with("f + 1", scope).unwrap_err();
    assert_eq!(error,
               EvalError::Parse(ParseError::ExpectedOpeningParen { name: "f".to_string() }));
}

#[test]
fn errors_leave_prior_state_untouched() {
    let mut engine = Evaluator::new();
    engine.evaluate("1 + 2").unwrap();
    assert_eq!(engine.expression(), "1+2");

    assert!(engine.evaluate("2 + #").is_err());
    assert_eq!(engine.expression(), "1+2");

    // The stored expression still re-evaluates.
    assert!(engine.evaluate("1 + 2").is_ok());
}

#[test]
fn scope_survives_later_plain_evaluations() {
    let scope = [("x".to_string(), Binding::from(7))];
    let mut engine = Evaluator::new();

    engine.evaluate_with("x", scope).unwrap();
    assert_eq!(engine.evaluate("x * 2").unwrap(), dec("14"));
}
