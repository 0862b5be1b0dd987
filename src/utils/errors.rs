use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("At least one input number is required")]
    EmptyNumberList,
    #[error("Input numbers must be positive: {0}")]
    NonPositiveNumber(i64),
    #[error("Target must be positive: {0}")]
    NonPositiveTarget(i64),
    #[error("Maximum result count must be positive")]
    ZeroMaxResults,
}
