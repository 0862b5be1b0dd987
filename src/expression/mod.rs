//! Canonical arithmetic expressions

mod ast;
mod build;
mod display;
mod errors;
mod eval;
mod operator;
mod ordering;

pub use ast::{Expression, Kind, Node, Sign, Term};
pub use errors::ExpressionError;
pub use operator::Operator;
pub use ordering::Complexity;
