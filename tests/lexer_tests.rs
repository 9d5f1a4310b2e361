// tests/lexer_tests.rs

use ruleval::lexer::Lexer;
use ruleval::{Error, ErrorKind, Kind, Operator, Value};

fn kinds(input: &str) -> Vec<Kind> {
    Lexer::new(input)
        .tokenize()
        .unwrap()
        .iter()
        .map(Value::kind)
        .collect()
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_single_char_operators() {
    let test_cases = vec![
        ("+", Operator::Add),
        ("-", Operator::Subtract),
        ("*", Operator::Multiply),
        ("/", Operator::Divide),
        (">", Operator::GreaterThan),
        ("<", Operator::LessThan),
    ];

    for (input, expected) in test_cases {
        let tokens = Lexer::new(input).tokenize().unwrap();
        assert_eq!(tokens, vec![Value::Operator(expected)], "Failed for input: {}", input);
    }
}

#[test]
fn test_two_char_operators() {
    let test_cases = vec![
        ("==", Operator::Equal),
        ("!=", Operator::NotEqual),
        (">=", Operator::GreaterEqual),
        ("<=", Operator::LessEqual),
        ("##", Operator::Contains),
        ("!#", Operator::NotContains),
        ("&&", Operator::And),
        ("||", Operator::Or),
    ];

    for (input, expected) in test_cases {
        let tokens = Lexer::new(input).tokenize().unwrap();
        assert_eq!(tokens, vec![Value::Operator(expected)], "Failed for input: {}", input);
    }
}

#[test]
fn test_two_char_operator_wins_over_single() {
    let tokens = Lexer::new("1>=2").tokenize().unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1], Value::Operator(Operator::GreaterEqual));
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_literal_kinds() {
    assert_eq!(
        kinds(r#"1 2.5 "bob" true False "2022-11-21" ["a","b"]"#),
        vec![
            Kind::Number,
            Kind::Number,
            Kind::String,
            Kind::Boolean,
            Kind::Boolean,
            Kind::Datetime,
            Kind::StringArray,
        ]
    );
}

#[test]
fn test_string_strips_quotes() {
    let tokens = Lexer::new(r#""hello world""#).tokenize().unwrap();
    assert_eq!(tokens, vec![Value::String("hello world".to_string())]);
}

#[test]
fn test_string_keeps_operator_characters() {
    let tokens = Lexer::new(r#""(a) + b""#).tokenize().unwrap();
    assert_eq!(tokens, vec![Value::String("(a) + b".to_string())]);
}

#[test]
fn test_datetime_with_time() {
    let tokens = Lexer::new(r#""2019-11-22 23:46:22""#).tokenize().unwrap();
    match &tokens[0] {
        Value::Datetime { text, .. } => assert_eq!(text, "2019-11-22 23:46:22"),
        other => panic!("Expected datetime, got {:?}", other),
    }
}

#[test]
fn test_string_array_with_spaces() {
    let tokens = Lexer::new(r#"[ "bob" , "jack" ]"#).tokenize().unwrap();
    assert_eq!(
        tokens,
        vec![Value::StringArray(r#"[ "bob" , "jack" ]"#.to_string())]
    );
}

#[test]
fn test_unknown_fragments_are_dropped() {
    assert_eq!(kinds("1 + abc 2"), vec![Kind::Number, Kind::Operator, Kind::Number]);
    assert_eq!(kinds("1. + 2"), vec![Kind::Operator, Kind::Number]);
}

#[test]
fn test_only_unknown_fragments_gives_empty_stream() {
    let tokens = Lexer::new("hello world").tokenize().unwrap();
    assert!(tokens.is_empty());
}

// ============================================================================
// Negative numbers
// ============================================================================

#[test]
fn test_leading_negative_number() {
    let tokens = Lexer::new("-11").tokenize().unwrap();
    assert_eq!(tokens, vec![Value::Number((-11).into())]);
}

#[test]
fn test_negative_after_operator() {
    let tokens = Lexer::new("2*-3").tokenize().unwrap();
    assert_eq!(
        tokens,
        vec![
            Value::Number(2.into()),
            Value::Operator(Operator::Multiply),
            Value::Number((-3).into()),
        ]
    );
}

#[test]
fn test_negative_after_open_paren() {
    let tokens = Lexer::new("(-3)").tokenize().unwrap();
    assert_eq!(tokens[1], Value::Number((-3).into()));
}

#[test]
fn test_subtraction_without_spaces() {
    let tokens = Lexer::new("1-2-3").tokenize().unwrap();
    assert_eq!(
        tokens,
        vec![
            Value::Number(1.into()),
            Value::Operator(Operator::Subtract),
            Value::Number(2.into()),
            Value::Operator(Operator::Subtract),
            Value::Number(3.into()),
        ]
    );
}

#[test]
fn test_subtraction_after_string_operand() {
    let tokens = Lexer::new(r#""a"-1"#).tokenize().unwrap();
    assert_eq!(tokens[1], Value::Operator(Operator::Subtract));
    assert_eq!(tokens[2], Value::Number(1.into()));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_empty_input() {
    assert_eq!(Lexer::new("").tokenize(), Err(Error::EmptyExpression));
    assert_eq!(Lexer::new(" \t\n ").tokenize(), Err(Error::EmptyExpression));
}

#[test]
fn test_unclosed_paren() {
    let err = Lexer::new("(1+2").tokenize().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MismatchedParentheses);
}

#[test]
fn test_close_before_open() {
    let err = Lexer::new(")1+2(").tokenize().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MismatchedParentheses);
}

#[test]
fn test_out_of_range_number() {
    let err = Lexer::new("1 + 99999999999999999999999999999")
        .tokenize()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedExpression);
}

#[test]
fn test_paren_inside_string_not_counted() {
    assert!(Lexer::new(r#""(" == "(""#).tokenize().is_ok());
}
