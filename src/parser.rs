use log::debug;

use crate::{
    ast::{Expr, Operator},
    error::Error,
    value::Value,
};

/// Shunting-yard parser over a classified token stream.
///
/// The postfix order is produced first; the tree is assembled from it, so
/// both representations always agree.
pub struct Parser {
    tokens: Vec<Value>,
}

impl Parser {
    pub fn new(tokens: Vec<Value>) -> Self {
        Parser { tokens }
    }

    /// Reorder the tokens into postfix (RPN) order, dropping parentheses.
    pub fn to_postfix(&self) -> Result<Vec<Value>, Error> {
        let mut output: Vec<Value> = Vec::with_capacity(self.tokens.len());
        let mut stack: Vec<Operator> = Vec::new();
        let mut previous: Option<&Value> = None;

        for token in &self.tokens {
            let op = match token {
                Value::Unknown(_) => continue,
                Value::Operator(op) => *op,
                operand => {
                    output.push(operand.clone());
                    previous = Some(token);
                    continue;
                }
            };

            match op {
                Operator::LeftParen => stack.push(op),
                Operator::RightParen => {
                    if matches!(previous, Some(Value::Operator(Operator::LeftParen))) {
                        return Err(Error::malformed("missing expression inside parentheses"));
                    }
                    loop {
                        match stack.pop() {
                            Some(Operator::LeftParen) => break,
                            Some(top) => output.push(Value::Operator(top)),
                            None => {
                                return Err(Error::mismatched("`)` has no matching `(`"));
                            }
                        }
                    }
                }
                _ => {
                    // Ties pop first: operators are left-associative
                    while let Some(&top) = stack.last()
                        && top != Operator::LeftParen
                        && top.precedence() >= op.precedence()
                    {
                        output.push(Value::Operator(top));
                        stack.pop();
                    }
                    stack.push(op);
                }
            }
            previous = Some(token);
        }

        while let Some(top) = stack.pop() {
            if top == Operator::LeftParen {
                return Err(Error::mismatched("`(` is never closed"));
            }
            output.push(Value::Operator(top));
        }

        debug!(
            "Postfix order: {}",
            output.iter().map(Value::to_literal).collect::<Vec<_>>().join(" ")
        );
        Ok(output)
    }

    /// Parse the tokens into a binary expression tree.
    pub fn parse(&self) -> Result<Expr, Error> {
        let postfix = self.to_postfix()?;
        build_tree(postfix)
    }
}

/// Assemble a tree from a postfix sequence: each operator takes the two most
/// recent operands as `(left, right)`.
pub fn build_tree(postfix: Vec<Value>) -> Result<Expr, Error> {
    let mut operands: Vec<Expr> = Vec::new();

    for value in postfix {
        match value {
            Value::Operator(op) if op.is_parenthesis() => {
                return Err(Error::malformed("parenthesis in postfix sequence"));
            }
            Value::Operator(op) => {
                let (Some(right), Some(left)) = (operands.pop(), operands.pop()) else {
                    return Err(Error::malformed(format!(
                        "missing operator or operand near `{}`",
                        op
                    )));
                };
                operands.push(Expr::binary(op, left, right));
            }
            operand => operands.push(Expr::Literal(operand)),
        }
    }

    match (operands.pop(), operands.is_empty()) {
        (Some(root), true) => Ok(root),
        (None, _) => Err(Error::malformed("expression has no operands")),
        (Some(_), false) => Err(Error::malformed("missing operator or operand")),
    }
}
