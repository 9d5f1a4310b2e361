//! # Ruleval
//!
//! Evaluates short rule predicates over typed literals and returns a single
//! scalar result as text.
//!
//! ```
//! assert_eq!(ruleval::evaluate("(1+2)*3 == 9 && [\"a\",\"b\"] ## \"a\"").unwrap(), "True");
//! assert_eq!(ruleval::evaluate("8-3-2").unwrap(), "3");
//! assert_eq!(
//!     ruleval::evaluate("\"2022-11-21\" > \"2019-11-22 23:46:22\"").unwrap(),
//!     "True"
//! );
//! ```
//!
//! Evaluation is `Lexer -> Parser -> Evaluator`; each stage is public for
//! callers that want the intermediate token stream, postfix order or tree.
pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod value;

pub use ast::{Expr, Operator};
pub use error::{Error, ErrorKind};
pub use evaluator::Evaluator;
pub use lexer::Lexer;
pub use parser::Parser;
pub use value::{Kind, Value};

/// Which parse representation drives evaluation. Both produce identical
/// results for every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Engine {
    /// Build a binary tree and evaluate it bottom-up
    #[default]
    Tree,
    /// Evaluate the postfix sequence on an operand stack
    Postfix,
}

/// Evaluates an expression and returns the canonical text of its result.
pub fn evaluate(expression: &str) -> Result<String, Error> {
    evaluate_value(expression).map(|value| value.to_string())
}

/// Evaluates an expression to a [`Value`] using the tree engine.
pub fn evaluate_value(expression: &str) -> Result<Value, Error> {
    evaluate_with(expression, Engine::Tree)
}

/// Evaluates an expression with the chosen engine.
pub fn evaluate_with(expression: &str, engine: Engine) -> Result<Value, Error> {
    let tokens = Lexer::new(expression).tokenize()?;
    let parser = Parser::new(tokens);
    let evaluator = Evaluator::new();

    match engine {
        Engine::Tree => evaluator.eval(&parser.parse()?),
        Engine::Postfix => {
            let postfix = parser.to_postfix()?;
            evaluator.eval_postfix(&postfix)
        }
    }
}
