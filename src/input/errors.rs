use thiserror::Error;

/// Errors that reject puzzle input before the search runs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("At least two source numbers are required, got {0}")]
    NotEnoughNumbers(usize),
}
