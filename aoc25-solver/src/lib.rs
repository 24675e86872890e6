//! Advent of Code 2025 solver framework
//!
//! Every day is a type that parses its input once and answers each part
//! from that parsed input. The framework provides:
//! - [`DayParser`], [`PartSolver`] and [`DaySolver`], the traits a day implements
//! - [`DayInstance`] / [`DynDay`], a parsed day behind a uniform, timed interface
//! - [`DayRegistry`], a day-indexed table of solver factories
//! - [`DayPlugin`], link-time registration through `inventory`
//!
//! # Quick Example
//!
//! ```
//! use aoc25_solver::{DayParser, DayRegistryBuilder, DaySolver, ParseError, PartSolver, SolveError};
//!
//! #[derive(DaySolver)]
//! #[day_solver(parts = 2)]
//! struct Calories;
//!
//! impl DayParser for Calories {
//!     type Input<'a> = Vec<u64>;
//!
//!     fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Calories {
//!     fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
//!         Ok(input.iter().max().copied().unwrap_or_default().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Calories {
//!     fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
//!         Ok(input.iter().sum::<u64>().to_string())
//!     }
//! }
//!
//! let registry = DayRegistryBuilder::new()
//!     .register_day::<Calories>(1)
//!     .unwrap()
//!     .build();
//!
//! let mut day = registry.create(1, "3\n9\n4").unwrap();
//! assert_eq!(day.solve(1).unwrap().answer, "9");
//! assert_eq!(day.solve(2).unwrap().answer, "16");
//! ```
//!
//! # Registration
//!
//! Days in the solutions crate register themselves:
//!
//! ```ignore
//! #[derive(DaySolver, AutoRegister)]
//! #[day_solver(parts = 2)]
//! #[aoc(day = 8, tags = ["graph"])]
//! pub struct Solver;
//! ```
//!
//! and the CLI collects them with [`DayRegistryBuilder::register_all_plugins`].

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DayInstance, DynDay, PartAnswer};
pub use registry::{
    DAYS, DayFactory, DayInfo, DayPlugin, DayRegistry, DayRegistryBuilder, RegisterableDay,
};
pub use solver::{DayParser, DaySolver, DaySolverExt, PartSolver};

// Re-exported for the code generated by `AutoRegister`
pub use inventory;

pub use aoc25_solver_macros::{AutoRegister, DaySolver};
