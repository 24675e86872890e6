//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

use crate::logging::LoggingError;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Registration error: {0}")]
    Registration(#[from] aoc25_solver::RegistrationError),

    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    #[error("Executor thread panicked")]
    ExecutorPanicked,

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// Input could not be loaded; reported once per affected part
    #[error("Input unavailable for day {day}: {source}")]
    Input {
        day: u8,
        #[source]
        source: InputError,
    },

    /// Parsing or solving failed
    #[error("{0}")]
    Solver(#[from] aoc25_solver::SolverError),

    #[error("Channel send error")]
    ChannelSend,

    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Combine two errors into one `Multiple`, flattening either side that
    /// already is one and keeping `first`'s errors ahead of `second`'s.
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                v1.iter().chain(v2).cloned().collect()
            }
            (_, ExecutorError::Multiple(v)) => {
                let mut combined = vec![first.clone()];
                combined.extend(v.iter().cloned());
                combined
            }
            (ExecutorError::Multiple(v), _) => {
                let mut combined = v.clone();
                combined.push(second.clone());
                combined
            }
            _ => vec![first, second],
        };
        ExecutorError::Multiple(errors).into()
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}

/// Errors loading a puzzle input from disk
#[derive(Error, Debug)]
pub enum InputError {
    #[error("{} does not exist", .path.display())]
    Missing { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single() -> ArcExecutorError {
        ExecutorError::ChannelSend.into()
    }

    fn count(error: &ArcExecutorError) -> usize {
        match error.inner() {
            ExecutorError::Multiple(v) => v.len(),
            _ => 1,
        }
    }

    #[test]
    fn test_combine_singles() {
        let combined = ArcExecutorError::combine(single(), single());
        assert_eq!(count(&combined), 2);
        assert_eq!(combined.to_string(), "Multiple errors occurred (2 total)");
    }

    #[test]
    fn test_combine_flattens_multiples() {
        let pair = ArcExecutorError::combine(single(), single());
        assert_eq!(count(&ArcExecutorError::combine(pair.clone(), single())), 3);
        assert_eq!(count(&ArcExecutorError::combine(single(), pair.clone())), 3);
        assert_eq!(count(&ArcExecutorError::combine(pair.clone(), pair)), 4);
    }

    #[test]
    fn test_combine_opt() {
        assert_eq!(count(&ArcExecutorError::combine_opt(None, single())), 1);
        assert_eq!(count(&ArcExecutorError::combine_opt(Some(single()), single())), 2);
    }

    #[test]
    fn test_input_error_messages() {
        let error = ExecutorError::Input {
            day: 8,
            source: InputError::Missing {
                path: PathBuf::from("inputs/day08.txt"),
            },
        };
        assert_eq!(
            error.to_string(),
            "Input unavailable for day 8: inputs/day08.txt does not exist"
        );
    }
}
