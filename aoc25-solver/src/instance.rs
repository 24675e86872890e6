//! Parsed day instances and their type-erased interface

use crate::error::{ParseError, SolveError};
use crate::solver::{DaySolver, DaySolverExt};
use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

/// Answer to one part, with the wall-clock window it was computed in
#[derive(Debug, Clone)]
pub struct PartAnswer {
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl PartAnswer {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A day whose input has already been parsed.
///
/// Parsing happens exactly once in [`DayInstance::new`]; every later
/// [`DynDay::solve`] call works on the same parsed input.
pub struct DayInstance<'a, S: DaySolver> {
    day: u8,
    input: S::Input<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: DaySolver> DayInstance<'a, S> {
    /// Parse `input` for `day`, recording how long parsing took.
    pub fn new(day: u8, input: &'a str) -> Result<Self, ParseError> {
        let _span = tracing::debug_span!("parse", day).entered();
        let parse_start = Utc::now();
        let input = S::parse(input)?;
        let parse_end = Utc::now();
        debug!(micros = (parse_end - parse_start).num_microseconds(), "input parsed");

        Ok(Self {
            day,
            input,
            parse_start,
            parse_end,
        })
    }
}

/// Object-safe view of a [`DayInstance`], used by the registry and the CLI.
///
/// ```
/// use aoc25_solver::DynDay;
///
/// fn run(mut day: Box<dyn DynDay + '_>) -> Result<(), Box<dyn std::error::Error>> {
///     for part in 1..=day.parts() {
///         let answer = day.solve(part)?;
///         println!("Part {}: {} ({:?})", part, answer.answer, answer.duration());
///     }
///     Ok(())
/// }
/// ```
pub trait DynDay {
    /// Solve `part`, timing the computation
    fn solve(&mut self, part: u8) -> Result<PartAnswer, SolveError>;

    fn parse_start(&self) -> DateTime<Utc>;

    fn parse_end(&self) -> DateTime<Utc>;

    fn day(&self) -> u8;

    /// Number of parts this day supports
    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, S: DaySolverExt> DynDay for DayInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<PartAnswer, SolveError> {
        let _span = tracing::debug_span!("solve", day = self.day, part).entered();
        let solve_start = Utc::now();
        let answer = S::solve_part_checked(&mut self.input, part)?;
        let solve_end = Utc::now();
        debug!(micros = (solve_end - solve_start).num_microseconds(), "part solved");

        Ok(PartAnswer {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
