use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, info, warn};
use num_rational::Rational64;
use rayon::prelude::*;

use crate::expression::{Expression, Operator};
use crate::solver::config::SolverConfig;
use crate::solver::constants::PARALLEL_THRESHOLD;
use crate::solver::errors::SolverError;
use crate::solver::pruning::{is_positive_integer, is_valid, might_be_useful};
use crate::solver::solution::Solution;
use crate::utils::{Multiset, validate_max_results, validate_numbers, validate_target};

/// Distinct expressions, deduplicated by canonical form
pub type ExpressionSet = HashSet<Arc<Expression>>;

/// Main solver for the numbers game
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Search the input numbers and rank the results against the target
    ///
    /// # Errors
    ///
    /// Returns an error if the target is not positive, the number list is
    /// empty or holds a number that is not positive, or the configured
    /// result count is zero. An unreachable target is not an error.
    pub fn solve(&self, target: i64, numbers: &[i64]) -> Result<Vec<Solution>, SolverError> {
        validate_target(target)?;
        validate_numbers(numbers)?;
        validate_max_results(self.config.max_results)?;

        info!(
            "Searching for expressions using {:?} that approach {}",
            numbers, target
        );

        let expressions = self.search(numbers);
        let solutions = rank(expressions, target, self.config.max_results);

        match solutions.first() {
            Some(best) => info!(
                "Closest expression: {} = {} (off by {})",
                best.expression(),
                best.value(),
                best.distance(target)
            ),
            None => warn!("No expressions found"),
        }

        Ok(solutions)
    }

    /// Build every distinct expression over a sub-multiset of `numbers`
    /// whose value is a positive integer.
    ///
    /// Expressions are built bottom-up by mass: level `m` combines every
    /// pair from levels `m1` and `m - m1`. An empty input gives an empty set.
    pub fn search(&self, numbers: &[i64]) -> ExpressionSet {
        let inventory: Multiset<i64> = numbers.iter().copied().collect();

        // by_mass[m] holds the expressions using exactly m input numbers
        let mut by_mass: Vec<Vec<Arc<Expression>>> = Vec::with_capacity(numbers.len() + 1);
        by_mass.push(Vec::new());

        let constants: ExpressionSet = numbers
            .iter()
            .map(|&n| Arc::new(Expression::constant(n)))
            .collect();
        by_mass.push(constants.into_iter().collect());

        for mass in 2..=numbers.len() {
            let level = self.build_level(&by_mass, mass, &inventory);
            debug!("Mass {}: {} distinct expressions", mass, level.len());
            by_mass.push(level.into_iter().collect());
        }

        let all: ExpressionSet = by_mass.into_iter().flatten().collect();
        info!("Generated {} distinct expressions", all.len());
        all
    }

    fn build_level(
        &self,
        by_mass: &[Vec<Arc<Expression>>],
        mass: usize,
        inventory: &Multiset<i64>,
    ) -> ExpressionSet {
        let mut level = ExpressionSet::new();

        for left_mass in 1..mass {
            let (Some(lefts), Some(rights)) = (by_mass.get(left_mass), by_mass.get(mass - left_mass))
            else {
                continue;
            };

            if self.config.parallel && lefts.len() >= PARALLEL_THRESHOLD {
                let found = lefts
                    .par_iter()
                    .fold(ExpressionSet::new, |mut acc, left| {
                        combine_with_all(left, rights, inventory, &mut acc);
                        acc
                    })
                    .reduce(ExpressionSet::new, |mut acc, mut other| {
                        if acc.len() < other.len() {
                            std::mem::swap(&mut acc, &mut other);
                        }
                        acc.extend(other);
                        acc
                    });
                level.extend(found);
            } else {
                for left in lefts {
                    combine_with_all(left, rights, inventory, &mut level);
                }
            }
        }

        level
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

/// Combine `left` with each of `rights` under every operator, keeping the
/// candidates that survive pruning.
fn combine_with_all(
    left: &Arc<Expression>,
    rights: &[Arc<Expression>],
    inventory: &Multiset<i64>,
    out: &mut ExpressionSet,
) {
    for right in rights {
        // availability does not depend on the operator
        let mut available = None;
        for operator in Operator::ALL {
            if !might_be_useful(left, right, operator) {
                continue;
            }
            if !*available.get_or_insert_with(|| is_valid(left, right, inventory)) {
                break;
            }
            if let Some(expr) = try_combine(left, right, operator) {
                out.insert(Arc::new(expr));
            }
        }
    }
}

fn try_combine(
    left: &Arc<Expression>,
    right: &Arc<Expression>,
    operator: Operator,
) -> Option<Expression> {
    let value = operator.apply(left.value(), right.value()).ok()?;
    if !is_positive_integer(&value) {
        return None;
    }
    Expression::combine(operator, left, right).ok()
}

/// Order expressions by distance from `target`, then by complexity, and keep
/// the first `max_results`.
///
/// Expressions are expected to have integer values, as those returned by
/// [`ExpressionSolver::search`] do.
pub fn rank<I>(expressions: I, target: i64, max_results: usize) -> Vec<Solution>
where
    I: IntoIterator<Item = Arc<Expression>>,
{
    let target = Rational64::from_integer(target);
    let mut ranked: Vec<(Rational64, Arc<Expression>)> = expressions
        .into_iter()
        .map(|expr| {
            let value = expr.value();
            let distance = if value > target {
                value - target
            } else {
                target - value
            };
            (distance, expr)
        })
        .collect();

    ranked.sort_unstable_by(|(da, a), (db, b)| da.cmp(db).then_with(|| a.cmp(b)));
    ranked.truncate(max_results);

    ranked
        .into_iter()
        .map(|(_, expr)| Solution::new(expr))
        .collect()
}
