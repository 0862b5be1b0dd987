use std::fmt;

use crate::expression::ast::{Expression, Kind, Node};
use crate::expression::operator::Operator;

impl fmt::Display for Expression {
    /// Renders the canonical form, e.g. `(3 + 1) * 2 - 7`.
    ///
    /// Only additive parts of a multiplicative chain need parentheses.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "({})", expr)
            } else {
                write!(f, "{}", expr)
            }
        }

        let terms = match &self.node {
            Node::Constant(n) => return write!(f, "{}", n),
            Node::Additive(terms) | Node::Multiplicative(terms) => terms,
        };

        let kind = self.kind();
        for (idx, term) in terms.iter().enumerate() {
            if idx > 0
                && let Some(operator) = Operator::for_chain(kind, term.sign)
            {
                write!(f, " {} ", operator)?;
            }
            let need_parens = kind == Kind::Multiplicative && term.expr.kind() == Kind::Additive;
            write_with_parens(f, &term.expr, need_parens)?;
        }
        Ok(())
    }
}
