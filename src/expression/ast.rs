use std::ops::Mul;
use std::sync::Arc;

use num_rational::Rational64;

use crate::expression::ordering::Complexity;

/// Sign carried by a part of a chain.
///
/// `Plus` sorts before `Minus`, so canonical chains list their positive
/// parts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Plus,
    Minus,
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        if self == rhs { Sign::Plus } else { Sign::Minus }
    }
}

/// Which variant an expression is, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Constant,
    Additive,
    Multiplicative,
}

/// One signed part of an additive or multiplicative chain
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Term {
    pub sign: Sign,
    pub expr: Arc<Expression>,
}

impl Term {
    pub fn new(sign: Sign, expr: Arc<Expression>) -> Self {
        Self { sign, expr }
    }
}

/// Canonical structure of an expression.
///
/// Chains are flattened (an `Additive` never holds an `Additive` part, and
/// likewise for `Multiplicative`) and their terms are kept in canonical
/// order, so structural equality is equality of canonical forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    Constant(i64),
    Additive(Vec<Term>),
    Multiplicative(Vec<Term>),
}

/// An immutable arithmetic expression over some of the input numbers.
///
/// Every derived attribute is computed once when the expression is built.
/// Equality and hashing look only at the canonical [`Node`].
#[derive(Debug, Clone)]
pub struct Expression {
    pub(crate) node: Node,
    pub(crate) value: Rational64,
    pub(crate) constants: Vec<i64>,
    pub(crate) depth: usize,
    pub(crate) complexity: Complexity,
}

impl Expression {
    /// A single input number used verbatim
    pub fn constant(number: i64) -> Self {
        let value = Rational64::from_integer(number);
        Self {
            node: Node::Constant(number),
            value,
            constants: vec![number],
            depth: 0,
            complexity: Complexity::new(1, 0, 0, value),
        }
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn kind(&self) -> Kind {
        match self.node {
            Node::Constant(_) => Kind::Constant,
            Node::Additive(_) => Kind::Additive,
            Node::Multiplicative(_) => Kind::Multiplicative,
        }
    }

    /// Parts of the chain in canonical order; empty for a constant
    pub fn terms(&self) -> &[Term] {
        match &self.node {
            Node::Constant(_) => &[],
            Node::Additive(terms) | Node::Multiplicative(terms) => terms,
        }
    }

    pub fn value(&self) -> Rational64 {
        self.value
    }

    /// The value as an integer, if it is one
    pub fn integer_value(&self) -> Option<i64> {
        self.value.is_integer().then(|| self.value.to_integer())
    }

    /// Leaf numbers consumed by the expression, sorted ascending
    pub fn constants(&self) -> &[i64] {
        &self.constants
    }

    /// Number of leaf numbers consumed
    pub fn mass(&self) -> usize {
        self.constants.len()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn complexity(&self) -> Complexity {
        self.complexity
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl Eq for Expression {}

impl std::hash::Hash for Expression {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.node.hash(state);
    }
}

impl From<i64> for Expression {
    fn from(number: i64) -> Self {
        Expression::constant(number)
    }
}
