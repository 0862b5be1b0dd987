pub mod config;
pub mod constants;
mod core;
mod errors;
pub mod pruning;
mod solution;

pub use config::SolverConfig;
pub use core::{ExpressionSet, ExpressionSolver, rank};
pub use errors::SolverError;
pub use solution::Solution;
