use calc::{
    ast::{BinaryOperator, Expr},
    evaluate,
    interpreter::evaluator::core::{Environment, LAST},
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn eval(line: &str) -> f64 {
    evaluate(line, &mut Environment::new()).unwrap()
}

#[rstest]
#[case("2+3*4", 14.0)]
#[case("(2+3)*4", 20.0)]
#[case("10-4-3", 3.0)]
#[case("64/4/2", 8.0)]
#[case("-2*3", -6.0)]
#[case("-(2+3)", -5.0)]
#[case("2*-3", -6.0)]
#[case("25e-1*2", 5.0)]
#[case("0.5+0.25", 0.75)]
fn evaluates_arithmetic(#[case] line: &str, #[case] expected: f64) {
    assert_eq!(eval(line), expected);
}

#[test]
fn fresh_environment_only_knows_last() {
    let env = Environment::new();
    assert_eq!(env.len(), 1);
    assert!(env.contains(LAST));
    assert_eq!(env.get(LAST), 0.0);
}

#[test]
fn unbound_variable_is_zero() {
    let mut env = Environment::new();
    assert_eq!(evaluate("y + 1", &mut env).unwrap(), 1.0);
    assert!(!env.contains("y"));
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_eq!(eval("1/0"), f64::INFINITY);
    assert_eq!(eval("-1/0"), f64::NEG_INFINITY);
    assert!(eval("0/0").is_nan());
}

#[test]
fn assignment_stores_and_returns_value() {
    let mut env = Environment::new();
    assert_eq!(evaluate("x = 5", &mut env).unwrap(), 5.0);
    assert_eq!(env.get("x"), 5.0);
    assert_eq!(evaluate("x + 1", &mut env).unwrap(), 6.0);

    assert_eq!(evaluate("x = x * 2", &mut env).unwrap(), 10.0);
    assert_eq!(env.get("x"), 10.0);
}

#[test]
fn failed_line_leaves_bindings_untouched() {
    let mut env = Environment::new();
    evaluate("x = 5", &mut env).unwrap();
    let before = env.clone();

    assert!(evaluate("x = 1 +", &mut env).is_err());
    assert_eq!(env, before);
}

#[test]
fn read_only_expression_is_repeatable() {
    let mut env = Environment::new();
    evaluate("a = 3", &mut env).unwrap();
    evaluate("b = 7", &mut env).unwrap();

    let first = evaluate("a * b - a / b", &mut env).unwrap();
    let second = evaluate("a * b - a / b", &mut env).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn evaluates_hand_built_tree() {
    let mut env = Environment::new();
    env.set("r", 2.0);

    let area = Expr::binary(BinaryOperator::Mul,
                            Expr::Number(3.0),
                            Expr::binary(BinaryOperator::Mul,
                                         Expr::Variable("r".to_string()),
                                         Expr::Variable("r".to_string())));
    let expr = Expr::Assignment { name:  "area".to_string(),
                                  value: Box::new(Expr::UnaryMinus(Box::new(area))), };

    assert_eq!(env.eval(&expr), -12.0);
    assert_eq!(env.get("area"), -12.0);
    assert_eq!(env.iter().count(), 3);
}

#[test]
fn evaluates_million_term_chains() {
    let mut env = Environment::new();

    let sum = format!("{}1", "1+".repeat(1_000_000));
    assert_eq!(evaluate(&sum, &mut env).unwrap(), 1_000_001.0);

    let product = format!("x = {}1", "1*".repeat(1_000_000));
    assert_eq!(evaluate(&product, &mut env).unwrap(), 1.0);
    assert_eq!(env.get("x"), 1.0);

    let mixed = format!("{}2", "-2/".repeat(500_000));
    assert!(evaluate(&mixed, &mut env).unwrap().is_finite());
}

#[test]
fn evaluates_deep_right_nesting() {
    let mut env = Environment::new();
    let line = format!("{}1{}", "-(1+".repeat(500), ")".repeat(500));
    assert_eq!(evaluate(&line, &mut env).unwrap(), 1.0);
}

#[test]
fn operator_helpers_match_eval() {
    let mut env = Environment::new();
    env.set("a", 6.0);
    let a = Expr::Variable("a".to_string());

    assert_eq!(env.eval_unary_minus(&a), -6.0);
    assert_eq!(env.eval_binary_op(BinaryOperator::Div, &a, &Expr::Number(4.0)), 1.5);
    assert_eq!(env.eval_binary_op(BinaryOperator::Sub, &Expr::Number(0.0), &a),
               env.eval(&Expr::UnaryMinus(Box::new(a.clone()))));
}
