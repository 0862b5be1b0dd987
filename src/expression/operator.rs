use std::fmt;
use std::str::FromStr;

use num_rational::Rational64;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};

use crate::expression::ast::{Kind, Sign};
use crate::expression::errors::ExpressionError;

/// The four arithmetic operators of the numbers game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The operator written between two parts of a chain of the given kind.
    ///
    /// Returns `None` for [`Kind::Constant`], which has no parts.
    pub fn for_chain(kind: Kind, sign: Sign) -> Option<Self> {
        match (kind, sign) {
            (Kind::Additive, Sign::Plus) => Some(Operator::Add),
            (Kind::Additive, Sign::Minus) => Some(Operator::Subtract),
            (Kind::Multiplicative, Sign::Plus) => Some(Operator::Multiply),
            (Kind::Multiplicative, Sign::Minus) => Some(Operator::Divide),
            (Kind::Constant, _) => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Kind of chain this operator builds
    pub fn kind(self) -> Kind {
        match self {
            Operator::Add | Operator::Subtract => Kind::Additive,
            Operator::Multiply | Operator::Divide => Kind::Multiplicative,
        }
    }

    /// Sign given to the parts contributed by the right operand
    pub fn right_sign(self) -> Sign {
        match self {
            Operator::Add | Operator::Multiply => Sign::Plus,
            Operator::Subtract | Operator::Divide => Sign::Minus,
        }
    }

    /// # Errors
    ///
    /// Returns an error when dividing by zero or when the exact result does
    /// not fit in a `Rational64`.
    pub fn apply(self, left: Rational64, right: Rational64) -> Result<Rational64, ExpressionError> {
        let result = match self {
            Operator::Add => left.checked_add(&right),
            Operator::Subtract => left.checked_sub(&right),
            Operator::Multiply => left.checked_mul(&right),
            Operator::Divide => {
                if right.is_zero() {
                    return Err(ExpressionError::DivisionByZero);
                }
                left.checked_div(&right)
            }
        };
        result.ok_or(ExpressionError::Overflow)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = ExpressionError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' | '−' => Ok(Operator::Subtract),
            '*' | '×' => Ok(Operator::Multiply),
            '/' | '÷' => Ok(Operator::Divide),
            other => Err(ExpressionError::UnknownOperator(other.to_string())),
        }
    }
}

impl FromStr for Operator {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Operator::try_from(symbol),
            _ => Err(ExpressionError::UnknownOperator(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operator() {
        assert_eq!("+".parse::<Operator>(), Ok(Operator::Add));
        assert_eq!(" - ".parse::<Operator>(), Ok(Operator::Subtract));
        assert_eq!(Operator::try_from('×'), Ok(Operator::Multiply));
        assert_eq!(Operator::try_from('÷'), Ok(Operator::Divide));
    }

    #[test]
    fn test_parse_unknown_operator() {
        assert_eq!(
            "^".parse::<Operator>(),
            Err(ExpressionError::UnknownOperator("^".to_string()))
        );
        assert!("++".parse::<Operator>().is_err());
        assert!("".parse::<Operator>().is_err());
    }

    #[test]
    fn test_apply_exact() {
        let five = Rational64::from_integer(5);
        let two = Rational64::from_integer(2);
        assert_eq!(Operator::Add.apply(five, two), Ok(Rational64::from_integer(7)));
        assert_eq!(Operator::Subtract.apply(two, five), Ok(Rational64::from_integer(-3)));
        assert_eq!(Operator::Divide.apply(five, two), Ok(Rational64::new(5, 2)));
    }

    #[test]
    fn test_apply_failures() {
        let zero = Rational64::zero();
        let big = Rational64::from_integer(i64::MAX);
        assert_eq!(
            Operator::Divide.apply(big, zero),
            Err(ExpressionError::DivisionByZero)
        );
        assert_eq!(
            Operator::Multiply.apply(big, Rational64::from_integer(2)),
            Err(ExpressionError::Overflow)
        );
    }

    #[test]
    fn test_chain_operator_lookup() {
        assert_eq!(
            Operator::for_chain(Kind::Additive, Sign::Minus),
            Some(Operator::Subtract)
        );
        assert_eq!(
            Operator::for_chain(Kind::Multiplicative, Sign::Plus),
            Some(Operator::Multiply)
        );
        assert_eq!(Operator::for_chain(Kind::Constant, Sign::Plus), None);
        for operator in Operator::ALL {
            assert_eq!(
                Operator::for_chain(operator.kind(), operator.right_sign()),
                Some(operator)
            );
        }
    }
}
