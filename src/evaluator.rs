use log::trace;
use rust_decimal::Decimal;

use crate::{
    ast::{Expr, Operator},
    error::Error,
    value::Value,
};

/// Applies operators to classified values.
///
/// The evaluator holds no state; one instance can be shared freely and
/// reused for any number of expressions.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates an expression tree, children before their parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use ruleval::{Evaluator, Lexer, Parser, Value};
    ///
    /// let tokens = Lexer::new("(1 + 2) * 3").tokenize().unwrap();
    /// let expr = Parser::new(tokens).parse().unwrap();
    ///
    /// let result = Evaluator::new().eval(&expr).unwrap();
    /// assert_eq!(result, Value::Number(9.into()));
    /// ```
    pub fn eval(&self, expr: &Expr) -> Result<Value, Error> {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                self.apply(*op, &left, &right)
            }
        }
    }

    /// Evaluates a postfix sequence with an operand stack. Each operator pops
    /// its right operand first, then its left.
    pub fn eval_postfix(&self, postfix: &[Value]) -> Result<Value, Error> {
        let mut stack: Vec<Value> = Vec::new();

        for value in postfix {
            match value {
                Value::Operator(op) if op.is_parenthesis() => {
                    return Err(Error::malformed("parenthesis in postfix sequence"));
                }
                Value::Operator(op) => {
                    let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                        return Err(Error::malformed(format!(
                            "missing operator or operand near `{}`",
                            op
                        )));
                    };
                    stack.push(self.apply(*op, &left, &right)?);
                }
                operand => stack.push(operand.clone()),
            }
        }

        match stack.len() {
            1 => stack
                .pop()
                .ok_or_else(|| Error::malformed("expression has no operands")),
            0 => Err(Error::malformed("expression has no operands")),
            n => Err(Error::malformed(format!(
                "missing operator or operand: {} values left unreduced",
                n
            ))),
        }
    }

    /// Applies one binary operator to two evaluated operands.
    pub fn apply(&self, op: Operator, left: &Value, right: &Value) -> Result<Value, Error> {
        use Operator::*;
        use Value::{Boolean, Datetime, Number, StringArray};

        let result = match (op, left, right) {
            (Add, Number(a), Number(b)) => Number(checked(op, a, b, a.checked_add(*b))?),
            (Subtract, Number(a), Number(b)) => Number(checked(op, a, b, a.checked_sub(*b))?),
            (Multiply, Number(a), Number(b)) => Number(checked(op, a, b, a.checked_mul(*b))?),
            (Divide, Number(_), Number(b)) if b.is_zero() => return Err(Error::DivideByZero),
            (Divide, Number(a), Number(b)) => Number(checked(op, a, b, a.checked_div(*b))?),

            (Equal | NotEqual, Datetime { at: a, .. }, Datetime { at: b, .. }) => {
                Boolean((a == b) == (op == Equal))
            }
            (Equal | NotEqual, Boolean(a), Boolean(b)) => Boolean((a == b) == (op == Equal)),
            (Equal | NotEqual, Number(a), Number(b)) => Boolean((a == b) == (op == Equal)),
            (Equal | NotEqual, Value::String(a), Value::String(b)) => {
                Boolean((a == b) == (op == Equal))
            }

            (
                GreaterThan | GreaterEqual | LessThan | LessEqual,
                Datetime { at: a, .. },
                Datetime { at: b, .. },
            ) => Boolean(compare(op, a, b)),
            (GreaterThan | GreaterEqual | LessThan | LessEqual, Number(a), Number(b)) => {
                Boolean(compare(op, a, b))
            }

            (Contains | NotContains, StringArray(haystack), Value::String(needle)) => {
                let items = decode_string_array(haystack)?;
                Boolean(items.contains(needle) == (op == Contains))
            }
            (Contains | NotContains, StringArray(haystack), StringArray(needles)) => {
                let items = decode_string_array(haystack)?;
                let wanted = decode_string_array(needles)?;
                let superset = wanted.iter().all(|w| items.contains(w));
                Boolean(superset == (op == Contains))
            }
            (Contains | NotContains, Value::String(haystack), Value::String(needle)) => {
                Boolean(haystack.contains(needle.as_str()) == (op == Contains))
            }

            (And, Boolean(a), Boolean(b)) => Boolean(*a && *b),
            (Or, Boolean(a), Boolean(b)) => Boolean(*a || *b),

            _ => {
                return Err(Error::UnsupportedOperation {
                    operator: op,
                    left_kind: left.kind(),
                    left: left.to_string(),
                    right_kind: right.kind(),
                    right: right.to_string(),
                });
            }
        };

        trace!("{} {} {} => {}", left.to_literal(), op, right.to_literal(), result);
        Ok(result)
    }
}

/// Trailing zeros are dropped so that e.g. `4.1 * 4.1 / 4.1` prints `4.1`.
fn checked(
    op: Operator,
    a: &Decimal,
    b: &Decimal,
    result: Option<Decimal>,
) -> Result<Decimal, Error> {
    result.map(|n| n.normalize()).ok_or_else(|| Error::Overflow {
        operator: op,
        left: a.to_string(),
        right: b.to_string(),
    })
}

fn compare<T: PartialOrd>(op: Operator, a: &T, b: &T) -> bool {
    match op {
        Operator::GreaterThan => a > b,
        Operator::GreaterEqual => a >= b,
        Operator::LessThan => a < b,
        Operator::LessEqual => a <= b,
        _ => false,
    }
}

fn decode_string_array(text: &str) -> Result<Vec<String>, Error> {
    serde_json::from_str(text)
        .map_err(|e| Error::malformed(format!("invalid string array {}: {}", text, e)))
}
