//! Core parser and solver traits

use crate::error::{ParseError, SolveError};

/// Turns a day's raw puzzle text into the structure its parts work on.
///
/// The parsed input is produced once per run and handed mutably to every
/// part, so a day may stash intermediate results in it for later parts.
///
/// # Example
///
/// ```
/// use aoc25_solver::{DayParser, ParseError};
///
/// struct Depths;
///
/// impl DayParser for Depths {
///     type Input<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// assert_eq!(Depths::parse("1\n2").unwrap(), vec![1, 2]);
/// ```
pub trait DayParser {
    /// Parsed form of the input.
    ///
    /// Owned types are the common case; `&'a str` works for days that only
    /// need to borrow the raw text.
    type Input<'a>: 'a;

    /// Parse the raw puzzle text.
    fn parse<'a>(input: &'a str) -> Result<Self::Input<'a>, ParseError>;
}

/// Solves part `N` of a day.
///
/// Implement one of these per part and derive [`DaySolver`] to get the
/// dispatching `solve_part`.
///
/// # Example
///
/// ```
/// use aoc25_solver::{DayParser, ParseError, PartSolver, SolveError};
///
/// struct Depths;
///
/// impl DayParser for Depths {
///     type Input<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Depths {
///     fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
///         Ok(input.windows(2).filter(|w| w[1] > w[0]).count().to_string())
///     }
/// }
///
/// let mut input = Depths::parse("1\n3\n2\n5").unwrap();
/// assert_eq!(<Depths as PartSolver<1>>::solve(&mut input).unwrap(), "2");
/// ```
pub trait PartSolver<const N: u8>: DayParser {
    /// Produce the answer for part `N`.
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError>;
}

/// A complete day: its part count and a dispatcher over the parts.
///
/// Usually derived with `#[derive(DaySolver)]`, which routes part `n` to
/// `PartSolver<n>`. Hand-written impls are fine too:
///
/// ```
/// use aoc25_solver::{DayParser, DaySolver, ParseError, SolveError};
///
/// struct Sum;
///
/// impl DayParser for Sum {
///     type Input<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
///         input
///             .split(',')
///             .map(|n| n.trim().parse().map_err(|_| ParseError::InvalidFormat(n.into())))
///             .collect()
///     }
/// }
///
/// impl DaySolver for Sum {
///     const PARTS: u8 = 2;
///
///     fn solve_part(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(input.iter().sum::<i64>().to_string()),
///             2 => Ok(input.iter().product::<i64>().to_string()),
///             _ => Err(SolveError::PartOutOfRange(part)),
///         }
///     }
/// }
///
/// let mut input = Sum::parse("2, 3, 4").unwrap();
/// assert_eq!(Sum::solve_part(&mut input, 2).unwrap(), "24");
/// ```
pub trait DaySolver: DayParser {
    /// Number of parts this day implements
    const PARTS: u8;

    /// Solve a specific part (1-based)
    fn solve_part(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked entry point used by [`crate::DayInstance`].
pub trait DaySolverExt: DaySolver {
    fn solve_part_checked(input: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(input, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: DaySolver + ?Sized> DaySolverExt for T {}
