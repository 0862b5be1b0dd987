use num_rational::Rational64;
use num_traits::{One, Zero};

use crate::expression::{Expression, Operator};
use crate::utils::Multiset;

/// Pre-screen a combination before building it.
///
/// - `x + y` with `x < y` is the commuted form of `y + x`
/// - `x - y` with `x <= y` is not positive
/// - `x * y` with `x < y` is the commuted form of `y * x`
/// - `x / y` with `x < y` is not an integer
/// - `x * 1` and `x / 1` are just `x`
pub fn might_be_useful(left: &Expression, right: &Expression, operator: Operator) -> bool {
    let (x, y) = (left.value(), right.value());
    match operator {
        Operator::Add => x >= y,
        Operator::Subtract => x > y,
        Operator::Multiply | Operator::Divide => x >= y && y > Rational64::one(),
    }
}

/// Whether two expressions together use no input number more often than it
/// is available
pub fn is_valid(left: &Expression, right: &Expression, inventory: &Multiset<i64>) -> bool {
    inventory.admits_sorted(left.constants(), right.constants())
}

pub fn is_positive_integer(value: &Rational64) -> bool {
    value.is_integer() && *value > Rational64::zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: i64) -> Expression {
        Expression::constant(n)
    }

    #[test]
    fn test_might_be_useful_addition() {
        assert!(might_be_useful(&num(10), &num(7), Operator::Add));
        assert!(might_be_useful(&num(7), &num(7), Operator::Add));
        assert!(!might_be_useful(&num(7), &num(10), Operator::Add));
    }

    #[test]
    fn test_might_be_useful_subtraction() {
        assert!(might_be_useful(&num(10), &num(7), Operator::Subtract));
        assert!(!might_be_useful(&num(7), &num(7), Operator::Subtract));
        assert!(!might_be_useful(&num(7), &num(10), Operator::Subtract));
    }

    #[test]
    fn test_might_be_useful_multiplicative() {
        for operator in [Operator::Multiply, Operator::Divide] {
            assert!(might_be_useful(&num(10), &num(7), operator));
            assert!(might_be_useful(&num(2), &num(2), operator));
            assert!(!might_be_useful(&num(7), &num(10), operator));
            assert!(!might_be_useful(&num(10), &num(1), operator));
        }
    }

    #[test]
    fn test_is_valid() {
        let inventory: Multiset<i64> = [5, 5, 3].into_iter().collect();
        assert!(is_valid(&num(5), &num(5), &inventory));
        assert!(is_valid(&num(5), &num(3), &inventory));
        assert!(!is_valid(&num(3), &num(3), &inventory));
        assert!(!is_valid(&num(5), &num(4), &inventory));
    }

    #[test]
    fn test_is_positive_integer() {
        assert!(is_positive_integer(&Rational64::from_integer(1)));
        assert!(is_positive_integer(&Rational64::from_integer(1000)));
        assert!(is_positive_integer(&Rational64::new(14, 2)));

        assert!(!is_positive_integer(&Rational64::from_integer(0)));
        assert!(!is_positive_integer(&Rational64::from_integer(-1)));
        assert!(!is_positive_integer(&Rational64::new(2, 3)));
        assert!(!is_positive_integer(&Rational64::new(777, 100)));
    }
}
