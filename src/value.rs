use std::{fmt, str::FromStr, sync::LazyLock};

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use rust_decimal::Decimal;

use crate::ast::Operator;

static DATETIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^"[0-9]{4}[-/][0-9]{2}[-/][0-9]{2}( [0-9]{2}:[0-9]{2}:[0-9]{2})?"$"#)
        .expect("datetime pattern is valid")
});

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("number pattern is valid"));

static STRING_ARRAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\[\s*"([^"\\]*(\\.[^"\\]*)*)"(\s*,\s*"([^"\\]*(\\.[^"\\]*)*)")*\s*\]$"#,
    )
    .expect("string array pattern is valid")
});

/// The semantic type of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Unknown,
    Number,
    Boolean,
    Datetime,
    String,
    Operator,
    StringArray,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Unknown => "Unknown",
            Kind::Number => "Number",
            Kind::Boolean => "Boolean",
            Kind::Datetime => "Datetime",
            Kind::String => "String",
            Kind::Operator => "Operator",
            Kind::StringArray => "StringArray",
        };
        f.write_str(name)
    }
}

/// A classified token or an evaluation result.
///
/// Values are created by [`Value::classify`] while lexing, or by the
/// evaluator as the result of applying an operator. The variant is decided
/// once from the source text and never changes.
///
/// # Examples
///
/// ```
/// use ruleval::{Kind, Value};
///
/// assert_eq!(Value::classify("-5.6").kind(), Kind::Number);
/// assert_eq!(Value::classify("\"bob\""), Value::String("bob".to_string()));
/// assert_eq!(Value::classify("\"2022-11-21\"").kind(), Kind::Datetime);
/// assert_eq!(Value::classify("[\"a\",\"b\"]").kind(), Kind::StringArray);
/// assert_eq!(Value::classify("bob").kind(), Kind::Unknown);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text that is not a recognised literal or operator
    Unknown(String),

    /// Exact base-10 decimal number
    Number(Decimal),

    /// `True`/`true` or `False`/`false`
    Boolean(bool),

    /// Quoted `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`, `-` or `/` separated
    Datetime {
        /// Literal text without quotes
        text: String,
        at: NaiveDateTime,
    },

    /// Double-quoted text, quotes stripped
    String(String),

    /// Operator or parenthesis
    Operator(Operator),

    /// Bracketed list of double-quoted strings, kept as written and decoded
    /// on demand
    StringArray(String),
}

impl Value {
    /// Classify raw token text. The first matching rule wins:
    /// blank, operator, quoted date-time, quoted string, boolean, number,
    /// string array, and finally unknown.
    pub fn classify(text: &str) -> Value {
        if text.trim().is_empty() {
            return Value::Unknown(text.to_string());
        }

        if let Some(op) = Operator::from_symbol(text) {
            return Value::Operator(op);
        }

        if DATETIME.is_match(text) {
            let inner = unquote(text);
            // Calendar-invalid dates fall through to plain strings
            if let Some(at) = parse_datetime(inner) {
                return Value::Datetime {
                    text: inner.to_string(),
                    at,
                };
            }
        }

        if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
            return Value::String(unquote(text).to_string());
        }

        match text {
            "True" | "true" => return Value::Boolean(true),
            "False" | "false" => return Value::Boolean(false),
            _ => {}
        }

        if NUMBER.is_match(text) {
            return match Decimal::from_str(text) {
                Ok(n) => Value::Number(n),
                Err(_) => Value::Unknown(text.to_string()),
            };
        }

        if STRING_ARRAY.is_match(text) {
            return Value::StringArray(text.to_string());
        }

        Value::Unknown(text.to_string())
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Unknown(_) => Kind::Unknown,
            Value::Number(_) => Kind::Number,
            Value::Boolean(_) => Kind::Boolean,
            Value::Datetime { .. } => Kind::Datetime,
            Value::String(_) => Kind::String,
            Value::Operator(_) => Kind::Operator,
            Value::StringArray(_) => Kind::StringArray,
        }
    }

    /// Source notation of the value: strings and date-times are re-quoted so
    /// that classifying the result yields the same kind again.
    pub fn to_literal(&self) -> String {
        match self {
            Value::String(s) => format!("\"{}\"", s),
            Value::Datetime { text, .. } => format!("\"{}\"", text),
            other => other.to_string(),
        }
    }
}

/// Canonical text: `True`/`False` for booleans, plain decimal text for
/// numbers, unquoted text otherwise.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unknown(s) | Value::String(s) | Value::StringArray(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{}", n),
            Value::Boolean(true) => f.write_str("True"),
            Value::Boolean(false) => f.write_str("False"),
            Value::Datetime { text, .. } => f.write_str(text),
            Value::Operator(op) => f.write_str(op.symbol()),
        }
    }
}

/// Whether `text` has the shape of a plain decimal numeral, whatever its range.
pub(crate) fn is_numeral(text: &str) -> bool {
    NUMBER.is_match(text)
}

fn unquote(text: &str) -> &str {
    &text[1..text.len() - 1]
}

fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let normalized = text.replace('/', "-");
    if normalized.len() == 10 {
        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
            .ok()?
            .and_hms_opt(0, 0, 0)
    } else {
        NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%d %H:%M:%S").ok()
    }
}

#[test]
fn test_classification_order() {
    assert_eq!(Value::classify("  "), Value::Unknown("  ".to_string()));
    assert_eq!(Value::classify("##"), Value::Operator(Operator::Contains));
    assert_eq!(Value::classify("\"2019/11/22\"").kind(), Kind::Datetime);
    assert_eq!(Value::classify("\"2019-11-22 23:46:22\"").kind(), Kind::Datetime);
    assert_eq!(Value::classify("\"2019-11-22T23:46:22\"").kind(), Kind::String);
    assert_eq!(Value::classify("\"true\""), Value::String("true".to_string()));
    assert_eq!(Value::classify("False"), Value::Boolean(false));
    assert_eq!(Value::classify("FALSE").kind(), Kind::Unknown);
    assert_eq!(Value::classify("1.").kind(), Kind::Unknown);
    assert_eq!(Value::classify("[]").kind(), Kind::Unknown);
}

#[test]
fn test_impossible_date_is_string() {
    assert_eq!(
        Value::classify("\"2022-13-45\""),
        Value::String("2022-13-45".to_string())
    );
}

#[test]
fn test_boolean_display() {
    assert_eq!(Value::Boolean(true).to_string(), "True");
    assert_eq!(Value::Boolean(false).to_string(), "False");
}
