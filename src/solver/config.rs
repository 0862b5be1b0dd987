use crate::solver::constants::MAX_RESULTS_DEFAULT;

/// Configuration for expression search and ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Number of ranked results to keep
    pub max_results: usize,
    /// Combine candidates on the rayon thread pool
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_results: MAX_RESULTS_DEFAULT,
            parallel: true,
        }
    }
}
