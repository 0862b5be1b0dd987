//! Countdown solver - A library for the numbers and letters rounds of Countdown
//!
//! The numbers round searches every distinct arithmetic expression that can be
//! built from a multiset of positive integers and ranks them by how close they
//! come to a target. The letters round finds the longest words that can be
//! spelt from a set of letters.

pub mod expression;
pub mod letters;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator};
pub use letters::{LettersError, WordMatch, find_words};
pub use solver::{ExpressionSolver, Solution, SolverConfig, SolverError};
pub use utils::UtilsError;

/// Find the expressions over `numbers` that come closest to `target`
///
/// This is a convenience function that runs a default solver with the given
/// result limit.
///
/// # Arguments
///
/// * `target` - The positive value to approach
/// * `numbers` - The positive numbers available, each usable at most once
/// * `max_results` - How many solutions to keep
///
/// # Errors
///
/// This function will return an error if:
/// * The target is not positive
/// * The number list is empty or contains a number that is not positive
/// * `max_results` is zero
///
/// # Examples
///
/// ```
/// use countdown_solver::solve;
///
/// match solve(17, &[7, 10], 3) {
///     Ok(solutions) => {
///         for solution in solutions {
///             println!("{}", solution);
///         }
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(
    target: i64,
    numbers: &[i64],
    max_results: usize,
) -> Result<Vec<Solution>, SolverError> {
    let solver = ExpressionSolver::new(SolverConfig {
        max_results,
        ..SolverConfig::default()
    });
    solver.solve(target, numbers)
}
