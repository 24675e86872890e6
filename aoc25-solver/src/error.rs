//! Error types for the solver framework

use thiserror::Error;

/// Error type for turning raw puzzle input into a day's parsed input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number exceeds the day's part count
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The algorithm itself failed on this input
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap any error raised by a day's algorithm
    pub fn failed<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        SolveError::SolveFailed(error.into())
    }
}

/// Error type for registry lookups and solver runs
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the given day
    #[error("No solver registered for day {0}")]
    NotFound(u8),
    /// Day outside the 1..=25 calendar
    #[error("Day {0} is not an Advent of Code day")]
    InvalidDay(u8),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A solver is already registered for this day
    #[error("Duplicate solver registration for day {0}")]
    DuplicateDay(u8),
    /// Day outside the 1..=25 calendar
    #[error("Day {0} is not an Advent of Code day")]
    InvalidDay(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_error_messages() {
        assert_eq!(SolveError::PartOutOfRange(3).to_string(), "Part 3 is out of range");
        assert_eq!(
            SolveError::failed("no circuits").to_string(),
            "Solve failed: no circuits"
        );
        assert_eq!(
            SolverError::from(SolveError::PartOutOfRange(0)).to_string(),
            "Solve error: Part 0 is out of range"
        );
    }
}
