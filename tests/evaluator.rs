use pretty_assertions::assert_eq;
use reckon::{
    ast::{BinaryOperator, Expr},
    error::{Error, EvalError},
    evaluate_expression,
    evaluate_expression_with,
    interpreter::{
        evaluator::{binary::eval_binary, core::evaluate},
        limits::Limits,
        value::number::Number,
        variables::Variables,
    },
};

fn int(n: i64) -> Number {
    Number::Integer(n)
}

fn float(r: f64) -> Number {
    Number::Float(r)
}

#[test]
fn integer_operations_stay_integral() {
    assert_eq!(eval_binary(BinaryOperator::Add, int(2), int(3), 0), Ok(int(5)));
    assert_eq!(eval_binary(BinaryOperator::Sub, int(2), int(3), 0), Ok(int(-1)));
    assert_eq!(eval_binary(BinaryOperator::Mul, int(-4), int(3), 0), Ok(int(-12)));
    assert_eq!(eval_binary(BinaryOperator::Div, int(-7), int(2), 0), Ok(int(-3)));
    assert_eq!(eval_binary(BinaryOperator::Mod, int(-7), int(2), 0), Ok(int(-1)));
    assert_eq!(eval_binary(BinaryOperator::Mod, int(7), int(-2), 0), Ok(int(1)));
}

#[test]
fn float_on_either_side_promotes() {
    assert_eq!(eval_binary(BinaryOperator::Mul, int(3), float(0.5), 0), Ok(float(1.5)));
    assert_eq!(eval_binary(BinaryOperator::Mul, float(0.5), int(3), 0), Ok(float(1.5)));
    assert_eq!(eval_binary(BinaryOperator::Div, int(1), float(4.0), 0), Ok(float(0.25)));
    assert_eq!(eval_binary(BinaryOperator::Sub, float(2.0), int(2), 0), Ok(float(0.0)));
}

#[test]
fn zero_divisors_are_reported() {
    assert_eq!(eval_binary(BinaryOperator::Div, int(1), int(0), 7),
               Err(EvalError::DivisionByZero { offset: 7 }));
    assert_eq!(eval_binary(BinaryOperator::Div, float(1.0), int(0), 7),
               Err(EvalError::DivisionByZero { offset: 7 }));
    assert_eq!(eval_binary(BinaryOperator::Div, int(1), float(-0.0), 7),
               Err(EvalError::DivisionByZero { offset: 7 }));
    assert_eq!(eval_binary(BinaryOperator::Mod, int(1), int(0), 7),
               Err(EvalError::ModuloByZero { offset: 7 }));
}

#[test]
fn modulo_rejects_floats_before_checking_the_divisor() {
    assert_eq!(eval_binary(BinaryOperator::Mod, float(1.0), int(0), 3),
               Err(EvalError::ModuloOnFloat { left:   float(1.0),
                                              right:  int(0),
                                              offset: 3, }));
}

#[test]
fn modulo_of_two_floats_is_rejected() {
    assert_eq!(eval_binary(BinaryOperator::Mod, float(7.5), float(2.0), 2),
               Err(EvalError::ModuloOnFloat { left:   float(7.5),
                                              right:  float(2.0),
                                              offset: 2, }));
}

#[test]
fn integer_overflow_is_reported() {
    for op in [BinaryOperator::Add, BinaryOperator::Mul] {
        assert_eq!(eval_binary(op, int(i64::MAX), int(2), 1),
                   Err(EvalError::Overflow { op, offset: 1 }));
    }
    assert_eq!(eval_binary(BinaryOperator::Sub, int(i64::MIN), int(1), 1),
               Err(EvalError::Overflow { op:     BinaryOperator::Sub,
                                         offset: 1, }));
    assert_eq!(eval_binary(BinaryOperator::Div, int(i64::MIN), int(-1), 1),
               Err(EvalError::Overflow { op:     BinaryOperator::Div,
                                         offset: 1, }));
}

#[test]
fn remainder_of_min_by_minus_one_is_zero() {
    assert_eq!(eval_binary(BinaryOperator::Mod, int(i64::MIN), int(-1), 0), Ok(int(0)));
}

#[test]
fn infinite_float_results_are_overflow() {
    assert_eq!(eval_binary(BinaryOperator::Mul, float(f64::MAX), int(2), 5),
               Err(EvalError::Overflow { op:     BinaryOperator::Mul,
                                         offset: 5, }));
    assert_eq!(eval_binary(BinaryOperator::Add, float(f64::MAX), float(f64::MAX), 5),
               Err(EvalError::Overflow { op:     BinaryOperator::Add,
                                         offset: 5, }));
}

#[test]
fn evaluate_walks_a_hand_built_tree() {
    // (6 - 2) * 2.5
    let expr = Expr::binary(Expr::binary(Expr::literal(int(6), 1),
                                         BinaryOperator::Sub,
                                         Expr::literal(int(2), 5),
                                         3),
                            BinaryOperator::Mul,
                            Expr::literal(float(2.5), 10),
                            8);

    assert_eq!(evaluate(&expr), Ok(float(10.0)));
    // The tree is only borrowed, so it can be evaluated again.
    assert_eq!(evaluate(&expr), Ok(float(10.0)));
}

#[test]
fn errors_deep_in_the_tree_carry_their_operator_offset() {
    let mut variables = Variables::new();
    variables.insert("big", i64::MAX);

    match evaluate_expression("1 + (big * 2)", &variables) {
        Err(Error::Eval(e)) => assert_eq!(e,
                                          EvalError::Overflow { op:     BinaryOperator::Mul,
                                                                offset: 9, }),
        other => panic!("Expected overflow, got {other:?}"),
    }
}

#[test]
fn error_messages_name_the_offset() {
    let err = evaluate_expression("4 % 2.0", &Variables::new()).unwrap_err();
    assert_eq!(err.to_string(),
               "Error at offset 2: Modulo is only defined for integers, found 4 % 2.0.");
}

#[test]
fn chains_far_past_the_default_input_length_evaluate() {
    let src = format!("{}1", "1+".repeat(50_000));
    let limits = Limits::new(src.len(), 64);

    assert_eq!(evaluate_expression_with(&src, &Variables::new(), &limits), Ok(int(50_001)));
}

#[test]
fn failures_at_the_end_of_a_long_chain_keep_their_offset() {
    let src = format!("{}1/0", "1+".repeat(20_000));
    let limits = Limits::new(src.len(), 64);

    assert_eq!(evaluate_expression_with(&src, &Variables::new(), &limits),
               Err(Error::Eval(EvalError::DivisionByZero { offset: 40_001 })));
}

#[test]
fn right_leaning_trees_are_walked_without_recursion() {
    let mut expr = Expr::literal(int(1), 0);
    for _ in 0..100_000 {
        expr = Expr::binary(Expr::literal(int(1), 0), BinaryOperator::Add, expr, 0);
    }

    assert_eq!(evaluate(&expr), Ok(int(100_001)));
    assert_eq!(expr.node_count(), 200_001);
    assert_eq!(expr.depth(), 100_001);

    let rendered = expr.to_string();
    assert!(rendered.starts_with("(1 + (1 + "));
    assert!(rendered.ends_with(&format!("1 + 1{}", ")".repeat(100_000))));
    assert_eq!(expr.dump_tree().lines().count(), 200_001);
}
