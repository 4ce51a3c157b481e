use log::{debug, warn};

use crate::input::errors::InputError;

/// # Errors
///
/// Returns an error if fewer than two source numbers are supplied. The game
/// requires at least one operation, and every operation consumes two numbers,
/// so smaller pools can never produce a solution.
pub fn validate_numbers(numbers: &[i64]) -> Result<(), InputError> {
    debug!("Validating {} source numbers", numbers.len());

    if numbers.len() < 2 {
        warn!("Not enough source numbers: {}", numbers.len());
        return Err(InputError::NotEnoughNumbers(numbers.len()));
    }

    Ok(())
}
