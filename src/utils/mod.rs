//! Input validation and multiset bookkeeping shared by both games

mod errors;
mod multiset;
mod validation;

pub use errors::UtilsError;
pub use multiset::Multiset;
pub use validation::{validate_max_results, validate_numbers, validate_target};

#[cfg(test)]
mod tests;
