use log::debug;
use num_rational::Rational64;

use crate::expression::ast::{Expression, Node, Sign, Term};
use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;

impl Expression {
    /// Recompute the value from the canonical structure alone.
    ///
    /// Agrees with [`Expression::value`] for every successfully built
    /// expression, since reordering a chain does not change its value.
    ///
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division by zero
    /// - An intermediate result that does not fit in a `Rational64`
    pub fn evaluate(&self) -> Result<Rational64, ExpressionError> {
        let result = match &self.node {
            Node::Constant(n) => Ok(Rational64::from_integer(*n)),
            Node::Additive(terms) => fold_chain(terms, Operator::Add, Operator::Subtract),
            Node::Multiplicative(terms) => {
                fold_chain(terms, Operator::Multiply, Operator::Divide)
            }
        };

        if let Err(e) = &result {
            debug!("Expression {} failed to evaluate: {}", self, e);
        }

        result
    }
}

fn fold_chain(
    terms: &[Term],
    positive: Operator,
    negative: Operator,
) -> Result<Rational64, ExpressionError> {
    let mut iter = terms.iter();
    let mut acc = match iter.next() {
        Some(first) => first.expr.evaluate()?,
        None => return Ok(Rational64::default()),
    };
    for term in iter {
        let operator = match term.sign {
            Sign::Plus => positive,
            Sign::Minus => negative,
        };
        acc = operator.apply(acc, term.expr.evaluate()?)?;
    }
    Ok(acc)
}
