use std::cmp::{Ordering, Reverse};

use num_rational::Rational64;

use crate::expression::ast::{Expression, Term};

/// Ranking key preferring simpler expressions.
///
/// Compares mass, then depth, then the depth of the first part, all
/// ascending, and finally the value of the first part descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Complexity {
    pub mass: usize,
    pub depth: usize,
    pub first_part_depth: usize,
    pub first_part_value: Reverse<Rational64>,
}

impl Complexity {
    pub fn new(
        mass: usize,
        depth: usize,
        first_part_depth: usize,
        first_part_value: Rational64,
    ) -> Self {
        Self {
            mass,
            depth,
            first_part_depth,
            first_part_value: Reverse(first_part_value),
        }
    }
}

impl Ord for Expression {
    /// Complexity first; the canonical structure breaks ties so the order is
    /// total and agrees with `Eq`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.complexity
            .cmp(&other.complexity)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for Expression {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Order of the parts inside a chain: positive parts first, larger values
/// first, then the parts' own ordering.
pub fn canonical_order(a: &Term, b: &Term) -> Ordering {
    a.sign
        .cmp(&b.sign)
        .then_with(|| b.expr.value.cmp(&a.expr.value))
        .then_with(|| a.expr.cmp(&b.expr))
}
