//! Countdown - A library for solving the Countdown numbers game
//!
//! Given a target integer and a pool of source numbers, this library searches
//! for a sequence of binary arithmetic operations (addition, subtraction,
//! multiplication, exact division) that combines the sources into the target,
//! using each source number at most once.

pub mod input;
pub mod ops;
pub mod solver;
pub mod step;

// Re-export the main public API
pub use input::{InputError, validate_numbers};
pub use ops::Operation;
pub use solver::Solver;
pub use step::{Derivation, Step};

/// Find a derivation of the target from the given source numbers
///
/// This is a convenience function that validates the input and runs a default
/// solver.
///
/// # Arguments
///
/// * `target` - The value the derivation must reach exactly
/// * `numbers` - The source numbers, each usable at most once
///
/// # Returns
///
/// * `Ok(Some(Derivation))` - If a derivation reaching the target is found
/// * `Ok(None)` - If no derivation exists within the search space
/// * `Err(InputError)` - If the input is rejected before the search runs
///
/// # Errors
///
/// This function will return an error if fewer than two source numbers are
/// supplied. At least one operation must be performed, so a single number is
/// never a solution, even when it already equals the target.
///
/// # Examples
///
/// ```
/// use countdown::solve;
///
/// // Reach 952 using the classic six-number selection
/// match solve(952, &[25, 50, 75, 100, 3, 6]) {
///     Ok(Some(derivation)) => {
///         for step in &derivation {
///             println!("{}", step);
///         }
///     }
///     Ok(None) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(target: i64, numbers: &[i64]) -> Result<Option<Derivation>, InputError> {
    validate_numbers(numbers)?;

    let solver = Solver::new();
    Ok(solver.solve(target, numbers))
}
