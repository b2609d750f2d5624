use pretty_assertions::assert_eq;
use reckon::{
    ast::{BinaryOperator, Expr},
    error::{Error, ParseError},
    interpreter::{
        lexer::{Token, TokenKind, scan},
        limits::Limits,
        parser::{core::parse, stream::TokenStream},
        value::number::Number,
        variables::Variables,
    },
    parse_source,
};

fn tree(src: &str) -> Expr {
    parse_source(src, &Variables::new(), &Limits::default()).unwrap_or_else(|e| panic!("Parse failed: {src}\n{e}"))
}

fn tree_with(src: &str, limits: &Limits) -> Expr {
    parse_source(src, &Variables::new(), limits).unwrap()
}

fn parse_error(src: &str, limits: &Limits) -> ParseError {
    match parse_source(src, &Variables::new(), limits) {
        Err(Error::Parse(e)) => e,
        other => panic!("Expected a parse error for {src}, got {other:?}"),
    }
}

#[test]
fn precedence_shapes_the_tree() {
    assert_eq!(tree("2 + 3 * 4").to_string(), "(2 + (3 * 4))");
    assert_eq!(tree("2 * 3 + 4").to_string(), "((2 * 3) + 4)");
    assert_eq!(tree("1 - 6 / 2 % 4").to_string(), "(1 - ((6 / 2) % 4))");
}

#[test]
fn chains_fold_to_the_left() {
    assert_eq!(tree("10 - 3 - 2").to_string(), "((10 - 3) - 2)");
    assert_eq!(tree("1 + 2 - 3 + 4").to_string(), "(((1 + 2) - 3) + 4)");
    assert_eq!(tree("8 / 4 * 2").to_string(), "((8 / 4) * 2)");
}

#[test]
fn groups_add_no_nodes() {
    let grouped = tree("((7))");
    assert_eq!(grouped, Expr::literal(Number::Integer(7), 2));
    assert_eq!(tree("2 * (3 + 4)").to_string(), "(2 * (3 + 4))");
}

#[test]
fn nodes_carry_operator_offsets() {
    let expected = Expr::binary(Expr::literal(Number::Integer(1), 0),
                                BinaryOperator::Add,
                                Expr::binary(Expr::literal(Number::Integer(2), 4),
                                             BinaryOperator::Mul,
                                             Expr::literal(Number::Float(0.5), 8),
                                             6),
                                2);

    assert_eq!(tree("1 + 2 * 0.5"), expected);
}

#[test]
fn tree_metrics() {
    let expr = tree("(1 + 2) * (3 - 4) / 5");
    assert_eq!(expr.node_count(), 9);
    assert_eq!(expr.depth(), 4);

    let leaf = tree("42");
    assert_eq!(leaf.node_count(), 1);
    assert_eq!(leaf.depth(), 1);
}

#[test]
fn dump_tree_indents_children() {
    let dump = tree("1 + 2 * 3").dump_tree();
    assert_eq!(dump,
               "op: '+'\n  left: 1\n  right: op: '*'\n    left: 2\n    right: 3\n");
}

#[test]
fn variables_become_literals() {
    let mut variables = Variables::new();
    variables.insert("width", Number::Integer(4));

    let expr = parse_source("width * 2", &variables, &Limits::default()).unwrap();
    assert_eq!(expr.to_string(), "(4 * 2)");
}

#[test]
fn missing_operands() {
    let limits = Limits::default();

    assert_eq!(parse_error("", &limits),
               ParseError::MissingOperand { found:  "end of input".to_string(),
                                            offset: 0, });
    assert_eq!(parse_error("3 *", &limits),
               ParseError::MissingOperand { found:  "end of input".to_string(),
                                            offset: 3, });
    assert_eq!(parse_error("3 * / 2", &limits),
               ParseError::MissingOperand { found:  "'/'".to_string(),
                                            offset: 4, });
    assert_eq!(parse_error("-1", &limits),
               ParseError::MissingOperand { found:  "'-'".to_string(),
                                            offset: 0, });
    assert_eq!(parse_error(")", &limits),
               ParseError::MissingOperand { found:  "')'".to_string(),
                                            offset: 0, });
}

#[test]
fn unmatched_bracket_points_at_the_opening_paren() {
    assert_eq!(parse_error("1 + ((2)", &Limits::default()),
               ParseError::UnmatchedBracket { found:  "end of input".to_string(),
                                              offset: 4, });
    assert_eq!(parse_error("(1 2)", &Limits::default()),
               ParseError::UnmatchedBracket { found:  "2".to_string(),
                                              offset: 0, });
}

#[test]
fn trailing_input_is_rejected() {
    assert_eq!(parse_error("1 + 2 3", &Limits::default()),
               ParseError::TrailingInput { token:  "3".to_string(),
                                           offset: 6, });
    assert_eq!(parse_error("(1))", &Limits::default()),
               ParseError::TrailingInput { token:  "')'".to_string(),
                                           offset: 3, });
}

#[test]
fn nesting_limit_is_enforced() {
    let limits = Limits::new(4096, 3);

    assert_eq!(tree_with("(((1)))", &limits).to_string(), "1");
    assert_eq!(parse_error("((((1))))", &limits),
               ParseError::NestingTooDeep { max: 3, offset: 3 });
}

#[test]
fn default_nesting_limit_stops_runaway_input() {
    let deep = format!("{}1{}", "(".repeat(1000), ")".repeat(1000));
    let err = parse_error(&deep, &Limits::default());

    assert_eq!(err, ParseError::NestingTooDeep { max: 64, offset: 64 });
}

#[test]
fn stream_yields_end_of_input_forever() {
    let source = "1 +";
    let tokens = scan(source, &Variables::new()).unwrap();
    let mut stream = TokenStream::new(tokens, source.len());

    assert_eq!(stream.peek(), TokenKind::Number);
    assert_eq!(stream.next(), Token::Number(Number::Integer(1)));
    assert_eq!(stream.offset(), 2);
    assert_eq!(stream.peek(), TokenKind::Operator);
    stream.next();

    assert!(stream.is_at_end());
    for _ in 0..3 {
        assert_eq!(stream.peek(), TokenKind::EndOfInput);
        assert_eq!(stream.next_spanned(), (Token::EndOfInput, 3));
    }
    assert!(stream.is_at_end());
}

#[test]
fn parse_leaves_no_tokens_behind() {
    let source = "(1 + 2) * 3";
    let tokens = scan(source, &Variables::new()).unwrap();
    let mut stream = TokenStream::new(tokens, source.len());

    let expr = parse(&mut stream, &Limits::default()).unwrap();

    assert_eq!(expr.to_string(), "((1 + 2) * 3)");
    assert!(stream.is_at_end());
}

#[test]
fn long_chains_fold_without_nesting() {
    let source = format!("{}1", "1 - ".repeat(3000));
    let expr = parse_source(&source, &Variables::new(), &Limits::new(source.len(), 1)).unwrap();

    assert_eq!(expr.node_count(), 6001);
    assert_eq!(expr.depth(), 3001);
    assert!(expr.to_string().starts_with(&format!("{}1 - 1)", "(".repeat(3000))));
    assert!(expr.dump_tree().ends_with("  right: 1\n"));
}
