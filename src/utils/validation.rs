use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the list is empty or contains a number that is not positive.
pub fn validate_numbers(numbers: &[i64]) -> Result<(), UtilsError> {
    debug!("Validating input numbers: {:?}", numbers);

    if numbers.is_empty() {
        warn!("Input number list is empty");
        return Err(UtilsError::EmptyNumberList);
    }

    if let Some(&bad) = numbers.iter().find(|&&n| n <= 0) {
        warn!("Input number is not positive: {}", bad);
        return Err(UtilsError::NonPositiveNumber(bad));
    }

    debug!("Input number validation successful");
    Ok(())
}

/// # Errors
///
/// Returns an error if the target is not positive.
pub fn validate_target(target: i64) -> Result<(), UtilsError> {
    if target <= 0 {
        warn!("Target is not positive: {}", target);
        return Err(UtilsError::NonPositiveTarget(target));
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if no results were requested.
pub fn validate_max_results(max_results: usize) -> Result<(), UtilsError> {
    if max_results == 0 {
        warn!("Maximum result count is zero");
        return Err(UtilsError::ZeroMaxResults);
    }
    Ok(())
}
