use std::sync::Arc;

use log::trace;

use crate::expression::ast::{Expression, Kind, Node, Sign, Term};
use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;
use crate::expression::ordering::{Complexity, canonical_order};

impl Expression {
    /// Combine two canonical expressions into a new canonical expression.
    ///
    /// Operands of the same kind as the operator are flattened into the new
    /// chain; the right operand's signs flip for `-` and `/`. The resulting
    /// terms are re-sorted, so `a + b`, `b + a`, `(a + b) + c` and
    /// `a + (b + c)` all converge to one structure.
    ///
    /// # Errors
    ///
    /// Returns an error when the value involves a division by zero or does
    /// not fit in a `Rational64`. Non-integer or non-positive values are
    /// not errors.
    pub fn combine(
        operator: Operator,
        left: &Arc<Expression>,
        right: &Arc<Expression>,
    ) -> Result<Self, ExpressionError> {
        let value = operator.apply(left.value, right.value)?;
        let kind = operator.kind();

        let mut terms = Vec::with_capacity(left.terms().len() + right.terms().len() + 2);
        splice(kind, left, Sign::Plus, &mut terms);
        splice(kind, right, operator.right_sign(), &mut terms);
        terms.sort_by(canonical_order);

        let constants = merge_sorted(&left.constants, &right.constants);
        let depth = terms
            .iter()
            .map(|term| term.expr.depth + 1)
            .max()
            .unwrap_or(0);
        let complexity = match terms.first() {
            Some(first) => Complexity::new(
                constants.len(),
                depth,
                first.expr.depth,
                first.expr.value,
            ),
            None => Complexity::new(constants.len(), depth, 0, value),
        };

        let node = match kind {
            Kind::Multiplicative => Node::Multiplicative(terms),
            _ => Node::Additive(terms),
        };

        let expr = Self {
            node,
            value,
            constants,
            depth,
            complexity,
        };
        trace!("Combined {} {} {} into {}", left, operator, right, expr);
        Ok(expr)
    }
}

/// Append an operand's terms to a chain of the given kind, multiplying
/// their signs by `sign`.
fn splice(kind: Kind, operand: &Arc<Expression>, sign: Sign, terms: &mut Vec<Term>) {
    if operand.kind() == kind {
        terms.extend(
            operand
                .terms()
                .iter()
                .map(|term| Term::new(term.sign * sign, Arc::clone(&term.expr))),
        );
    } else {
        terms.push(Term::new(sign, Arc::clone(operand)));
    }
}

fn merge_sorted(left: &[i64], right: &[i64]) -> Vec<i64> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while let (Some(&a), Some(&b)) = (left.get(i), right.get(j)) {
        if a <= b {
            merged.push(a);
            i += 1;
        } else {
            merged.push(b);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
