use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

use crate::{
    ast::Operator,
    error::Error,
    value::{Value, is_numeral},
};

/// One pattern, alternatives tried in order at each position: numbers,
/// quoted strings (date-times included), booleans, two-character operators,
/// single-character operators, string arrays.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"-?[0-9]+\.?[0-9]*|"[^"]*"|True|False|true|false|==|!=|>=|<=|##|!#|&&|\|\||[-+*/><()]|\[[^\[\]]*\]"#,
    )
    .expect("token pattern is valid")
});

pub struct Lexer<'a> {
    input: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { input }
    }

    /// Split the input into classified tokens.
    ///
    /// Unrecognised fragments are dropped. A leading `-` on a number is only
    /// kept as a sign when the number opens the expression or follows an
    /// operator other than `)`; after an operand it is read as subtraction
    /// even when the remainder is not a usable number. A well-formed numeral
    /// outside the decimal range is an error.
    pub fn tokenize(&self) -> Result<Vec<Value>, Error> {
        if self.input.trim().is_empty() {
            return Err(Error::EmptyExpression);
        }

        let mut tokens: Vec<Value> = Vec::new();
        let mut depth: i64 = 0;

        for m in TOKEN.find_iter(self.input) {
            let raw = m.as_str();

            let split = raw.len() > 1 && !Self::accepts_signed(tokens.last());
            let text = match raw.strip_prefix('-') {
                Some(unsigned) if split => {
                    tokens.push(Value::Operator(Operator::Subtract));
                    unsigned
                }
                _ => raw,
            };

            let value = Value::classify(text);
            match value {
                Value::Unknown(ref text) if is_numeral(text) => {
                    return Err(Error::malformed(format!(
                        "number `{}` at offset {} is out of range",
                        text,
                        m.start()
                    )));
                }
                Value::Unknown(ref text) => {
                    warn!("Discarding unrecognised token `{}` at offset {}", text, m.start());
                    continue;
                }
                Value::Operator(Operator::LeftParen) => depth += 1,
                Value::Operator(Operator::RightParen) => {
                    depth -= 1;
                    if depth < 0 {
                        return Err(Error::mismatched(format!(
                            "`)` at offset {} has no matching `(`",
                            m.start()
                        )));
                    }
                }
                _ => {}
            }

            tokens.push(value);
        }

        if depth != 0 {
            return Err(Error::mismatched(format!("{} unclosed `(`", depth)));
        }

        debug!(
            "Tokenized `{}` into [{}]",
            self.input,
            tokens.iter().map(Value::to_literal).collect::<Vec<_>>().join(", ")
        );
        Ok(tokens)
    }

    fn accepts_signed(previous: Option<&Value>) -> bool {
        match previous {
            None => true,
            Some(Value::Operator(op)) => *op != Operator::RightParen,
            Some(_) => false,
        }
    }
}

#[test]
fn test_signed_after_operator() {
    let tokens = Lexer::new("-11>=-5.6").tokenize().unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].to_string(), "-11");
    assert_eq!(tokens[1], Value::Operator(Operator::GreaterEqual));
    assert_eq!(tokens[2].to_string(), "-5.6");
}

#[test]
fn test_minus_after_operand_is_subtraction() {
    let tokens = Lexer::new("5-3").tokenize().unwrap();
    let spaced = Lexer::new("5 - 3").tokenize().unwrap();
    assert_eq!(tokens, spaced);
    assert_eq!(tokens[1], Value::Operator(Operator::Subtract));
}

#[test]
fn test_minus_after_close_paren_is_subtraction() {
    let tokens = Lexer::new("(1+2)-3").tokenize().unwrap();
    assert_eq!(tokens[5], Value::Operator(Operator::Subtract));
    assert_eq!(tokens[6].to_string(), "3");
}

#[test]
fn test_split_minus_survives_unusable_remainder() {
    let tokens = Lexer::new("5-1.").tokenize().unwrap();
    assert_eq!(
        tokens,
        vec![Value::Number(5.into()), Value::Operator(Operator::Subtract)]
    );
}
