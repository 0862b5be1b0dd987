use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Arithmetic overflow")]
    Overflow,
    #[error("Operator must be one of '+', '-', '*', '/': {0:?}")]
    UnknownOperator(String),
}
