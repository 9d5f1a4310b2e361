//! # Ruleval - Syntax Tree
//!
//! This module defines the structures the parser hands to the evaluator.
//!
//! - **[operators]** - The operator table: symbols and precedence
//! - **[expressions]** - The binary expression tree
//!
//! ## Quick Start
//!
//! ```text
//! (1 + 2) * 3 == 9 && ["a","b"] ## "a"
//! ```
//!
//! parses into
//!
//! ```text
//! ((((1 + 2) * 3) == 9) && (["a","b"] ## "a"))
//! ```
//!
//! ## Core Concepts
//!
//! ### Precedence
//!
//! Multiplicative operators bind tightest, then additive, ordering,
//! equality/membership, and finally the logical connectors. Operators of equal
//! precedence group left to right, so `8 - 3 - 2` is `(8 - 3) - 2`.
//!
//! ### Two Representations
//!
//! The parser produces a postfix sequence first and builds the tree from it.
//! [`Expr::to_postfix`] goes back the other way, so either form can be fed to
//! the evaluator.
pub mod expressions;
pub mod operators;

pub use expressions::Expr;
pub use operators::Operator;
