use std::fmt;
use std::sync::Arc;

use crate::expression::Expression;

/// One ranked result: the integer an expression evaluates to, and the expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    value: i64,
    expression: Arc<Expression>,
}

impl Solution {
    /// Wrap a retained expression; its value is a positive integer
    pub(crate) fn new(expression: Arc<Expression>) -> Self {
        Self {
            value: expression.value().to_integer(),
            expression,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn distance(&self, target: i64) -> u64 {
        self.value.abs_diff(target)
    }

    /// Text form handed to the result sink
    pub fn rendering(&self) -> String {
        self.expression.to_string()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}", self.value, self.expression)
    }
}
