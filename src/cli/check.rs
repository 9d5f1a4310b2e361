//! Evaluate a batch of expressions

use log::info;
use serde_json::json;

use super::CliError;
use crate::{Engine, Lexer, Parser, Value};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Expressions to evaluate, in order
    pub expressions: Vec<String>,
    /// Which representation drives evaluation
    pub engine: Engine,
    /// Only lex and parse, don't evaluate
    pub syntax_only: bool,
}

/// Result of checking a single expression
#[derive(Debug, Clone, PartialEq)]
pub enum CheckResult {
    /// Expression parsed; carries its postfix and parenthesised forms
    SyntaxValid {
        expression: String,
        postfix: String,
        tree: String,
    },
    /// Expression evaluated to a value
    Success { expression: String, value: Value },
}

impl CheckResult {
    /// One line of plain output
    pub fn to_line(&self) -> String {
        match self {
            CheckResult::SyntaxValid { postfix, .. } => postfix.clone(),
            CheckResult::Success { value, .. } => value.to_string(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            CheckResult::SyntaxValid {
                expression,
                postfix,
                tree,
            } => json!({
                "expression": expression,
                "postfix": postfix,
                "tree": tree,
            }),
            CheckResult::Success { expression, value } => json!({
                "expression": expression,
                "result": value.to_string(),
                "kind": value.kind().to_string(),
            }),
        }
    }
}

/// Execute a check over every expression, stopping at the first failure
pub fn execute_check(options: &CheckOptions) -> Result<Vec<CheckResult>, CliError> {
    if options.expressions.is_empty() {
        return Err(CliError::NoInput);
    }

    options
        .expressions
        .iter()
        .map(|expression| {
            check_one(expression, options).map_err(|source| CliError::Eval {
                expression: expression.clone(),
                source,
            })
        })
        .collect()
}

fn check_one(expression: &str, options: &CheckOptions) -> Result<CheckResult, crate::Error> {
    if options.syntax_only {
        let tokens = Lexer::new(expression).tokenize()?;
        let tree = Parser::new(tokens).parse()?;
        let postfix = tree
            .to_postfix()
            .iter()
            .map(Value::to_literal)
            .collect::<Vec<_>>()
            .join(" ");
        return Ok(CheckResult::SyntaxValid {
            expression: expression.to_string(),
            postfix,
            tree: tree.to_string(),
        });
    }

    let value = crate::evaluate_with(expression, options.engine)?;
    info!("`{}` => {}", expression, value);

    Ok(CheckResult::Success {
        expression: expression.to_string(),
        value,
    })
}
