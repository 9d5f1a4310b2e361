use crate::{ast::Operator, value::Kind};

/// The error type returned when an expression cannot be evaluated.
///
/// Every failure aborts the whole evaluation; there are no partial results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The input was empty or contained only whitespace
    #[error("expression must not be empty or blank")]
    EmptyExpression,

    /// Structurally invalid input: an empty `()` group, a missing operand or
    /// operator, or a string array that cannot be decoded
    #[error("malformed expression: {0}")]
    MalformedExpression(String),

    /// A `)` without a matching `(`, or an unclosed `(`
    #[error("mismatched parentheses: {0}")]
    MismatchedParentheses(String),

    /// The operator does not accept this combination of operand kinds
    #[error(
        "unsupported operation: cannot apply `{operator}` to {left_kind} `{left}` and {right_kind} `{right}`"
    )]
    UnsupportedOperation {
        operator: Operator,
        left_kind: Kind,
        left: String,
        right_kind: Kind,
        right: String,
    },

    /// Division with a zero right operand
    #[error("division by zero")]
    DivideByZero,

    /// Decimal arithmetic result out of range
    #[error("arithmetic overflow evaluating `{left} {operator} {right}`")]
    Overflow {
        operator: Operator,
        left: String,
        right: String,
    },
}

/// Fieldless discriminant of [`Error`], convenient for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyExpression,
    MalformedExpression,
    MismatchedParentheses,
    UnsupportedOperation,
    DivideByZero,
    Overflow,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyExpression => ErrorKind::EmptyExpression,
            Error::MalformedExpression(_) => ErrorKind::MalformedExpression,
            Error::MismatchedParentheses(_) => ErrorKind::MismatchedParentheses,
            Error::UnsupportedOperation { .. } => ErrorKind::UnsupportedOperation,
            Error::DivideByZero => ErrorKind::DivideByZero,
            Error::Overflow { .. } => ErrorKind::Overflow,
        }
    }

    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Error::MalformedExpression(msg.into())
    }

    pub(crate) fn mismatched(msg: impl Into<String>) -> Self {
        Error::MismatchedParentheses(msg.into())
    }
}
