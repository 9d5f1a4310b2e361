use std::fmt;

use crate::{ast::Operator, value::Value};

/// Binary expression tree produced by the parser.
///
/// Leaves hold literal values; every interior node applies an operator to
/// exactly two children. Children are owned by their parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal operand
    ///
    /// # Example
    /// ```text
    /// 42
    /// "bob"
    /// ["a","b"]
    /// ```
    Literal(Value),

    /// Operator applied to two sub-expressions
    ///
    /// # Example
    /// ```text
    /// 1 + 2
    /// ["a","b"] ## "a"
    /// ```
    Binary {
        op: Operator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(op: Operator, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Flatten the tree into postfix (RPN) order.
    pub fn to_postfix(&self) -> Vec<Value> {
        let mut out = Vec::new();
        self.push_postfix(&mut out);
        out
    }

    fn push_postfix(&self, out: &mut Vec<Value>) {
        match self {
            Expr::Literal(value) => out.push(value.clone()),
            Expr::Binary { op, left, right } => {
                left.push_postfix(out);
                right.push_postfix(out);
                out.push(Value::Operator(*op));
            }
        }
    }

    /// Number of operator nodes in the tree.
    pub fn operator_count(&self) -> usize {
        match self {
            Expr::Literal(_) => 0,
            Expr::Binary { left, right, .. } => 1 + left.operator_count() + right.operator_count(),
        }
    }
}

/// Fully parenthesised infix form, literals in source notation.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(value) => f.write_str(&value.to_literal()),
            Expr::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}
