// tests/parser_tests.rs

use ruleval::ast::{Expr, Operator};
use ruleval::lexer::Lexer;
use ruleval::parser::{Parser, build_tree};
use ruleval::{ErrorKind, Value};

fn parse(input: &str) -> Expr {
    let tokens = Lexer::new(input).tokenize().unwrap();
    Parser::new(tokens).parse().unwrap()
}

fn postfix(input: &str) -> String {
    let tokens = Lexer::new(input).tokenize().unwrap();
    Parser::new(tokens)
        .to_postfix()
        .unwrap()
        .iter()
        .map(Value::to_literal)
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_err(input: &str) -> ErrorKind {
    let tokens = Lexer::new(input).tokenize().unwrap();
    Parser::new(tokens).parse().unwrap_err().kind()
}

fn num(n: i64) -> Expr {
    Expr::Literal(Value::Number(n.into()))
}

// ============================================================================
// Precedence and associativity
// ============================================================================

#[test]
fn test_single_literal() {
    assert_eq!(parse("42"), num(42));
    assert_eq!(postfix("42"), "42");
}

#[test]
fn test_multiplication_binds_tighter() {
    assert_eq!(
        parse("1 + 2 * 3"),
        Expr::binary(Operator::Add, num(1), Expr::binary(Operator::Multiply, num(2), num(3)))
    );
    assert_eq!(postfix("1 + 2 * 3"), "1 2 3 * +");
}

#[test]
fn test_parentheses() {
    let expr = parse("(1 + 2) * 3");

    // Should be: Multiply(Add(1, 2), 3)
    match expr {
        Expr::Binary {
            op: Operator::Multiply,
            left,
            right,
        } => {
            assert!(matches!(*left, Expr::Binary { op: Operator::Add, .. }));
            assert_eq!(*right, num(3));
        }
        _ => panic!("Expected multiplication"),
    }
}

#[test]
fn test_left_associative_subtraction() {
    assert_eq!(
        parse("8 - 3 - 2"),
        Expr::binary(
            Operator::Subtract,
            Expr::binary(Operator::Subtract, num(8), num(3)),
            num(2)
        )
    );
    assert_eq!(postfix("8-3-2"), "8 3 - 2 -");
}

#[test]
fn test_left_associative_division() {
    assert_eq!(postfix("8 / 4 / 2"), "8 4 / 2 /");
}

#[test]
fn test_comparison_below_arithmetic() {
    assert_eq!(postfix("1 + 2 > 2 * 1"), "1 2 + 2 1 * >");
}

#[test]
fn test_logical_connectors_lowest() {
    assert_eq!(postfix("1 == 1 && 1 < 2"), "1 1 == 1 2 < &&");
    assert_eq!(
        postfix("true || false && false"),
        "True False || False &&"
    );
}

#[test]
fn test_contains_with_arrays() {
    assert_eq!(
        postfix(r#"["a","b"] ## "a" == true"#),
        r#"["a","b"] "a" ## True =="#
    );
}

#[test]
fn test_nested_parentheses() {
    assert_eq!(postfix("((1 + 2) * (3 - 4))"), "1 2 + 3 4 - *");
}

#[test]
fn test_display_is_fully_parenthesised() {
    assert_eq!(
        parse(r#"(1 + 2) * 3 == 9 && ["a","b"] ## "a""#).to_string(),
        r#"((((1 + 2) * 3) == 9) && (["a","b"] ## "a"))"#
    );
}

// ============================================================================
// Tree and postfix agree
// ============================================================================

#[test]
fn test_tree_flattens_to_parser_postfix() {
    let inputs = [
        "1 + 2 * 3",
        "(1 + 2) * 3",
        "8 - 3 - 2",
        "-11 >= -5.6",
        r#"["bob","jack"] !# ["jan"] || "a" ## "a""#,
        r#""2022-11-21" > "2019-11-22 23:46:22""#,
    ];

    for input in inputs {
        let tokens = Lexer::new(input).tokenize().unwrap();
        let parser = Parser::new(tokens);
        let tree = parser.parse().unwrap();
        assert_eq!(tree.to_postfix(), parser.to_postfix().unwrap(), "Failed for input: {}", input);
    }
}

#[test]
fn test_build_tree_from_postfix() {
    let tree = build_tree(parse("(1 + 2) * 3").to_postfix()).unwrap();
    assert_eq!(tree, parse("(1 + 2) * 3"));
    assert_eq!(tree.operator_count(), 2);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_empty_parentheses() {
    assert_eq!(parse_err("()"), ErrorKind::MalformedExpression);
    assert_eq!(parse_err("1 + ()"), ErrorKind::MalformedExpression);
}

#[test]
fn test_missing_operand() {
    assert_eq!(parse_err("1 +"), ErrorKind::MalformedExpression);
    assert_eq!(parse_err("* 2"), ErrorKind::MalformedExpression);
}

#[test]
fn test_missing_operator() {
    assert_eq!(parse_err("1 2"), ErrorKind::MalformedExpression);
}

#[test]
fn test_no_operands() {
    assert_eq!(parse_err("hello"), ErrorKind::MalformedExpression);
}

#[test]
fn test_unbalanced_tokens_bypassing_lexer() {
    let open = vec![
        Value::Operator(Operator::LeftParen),
        Value::Number(1.into()),
    ];
    assert_eq!(
        Parser::new(open).to_postfix().unwrap_err().kind(),
        ErrorKind::MismatchedParentheses
    );

    let close = vec![
        Value::Number(1.into()),
        Value::Operator(Operator::RightParen),
    ];
    assert_eq!(
        Parser::new(close).to_postfix().unwrap_err().kind(),
        ErrorKind::MismatchedParentheses
    );
}

#[test]
fn test_unknown_tokens_skipped() {
    let tokens = vec![
        Value::Number(1.into()),
        Value::Unknown("junk".to_string()),
        Value::Operator(Operator::Add),
        Value::Number(2.into()),
    ];
    assert_eq!(
        Parser::new(tokens).parse().unwrap(),
        Expr::binary(Operator::Add, num(1), num(2))
    );
}
