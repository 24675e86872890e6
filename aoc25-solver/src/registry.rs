//! Day registry: flat per-day storage of solver factories

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DayInstance, DynDay};
use crate::solver::DaySolver;

/// Days in an Advent of Code calendar (1-25)
pub const DAYS: usize = 25;

/// Flat index for a day, `None` outside 1..=25
#[inline]
fn day_index(day: u8) -> Option<usize> {
    (1..=DAYS as u8).contains(&day).then(|| (day - 1) as usize)
}

#[inline]
fn day_from_index(index: usize) -> u8 {
    index as u8 + 1
}

/// Thread-safe factory that parses an input and hands back a ready-to-solve day
pub type DayFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynDay + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayInfo {
    pub day: u8,
    /// Number of parts the day supports
    pub parts: u8,
}

struct DayEntry {
    factory: DayFactory,
    parts: u8,
}

/// Builder for an immutable [`DayRegistry`].
///
/// Rejects days outside the calendar and duplicate registrations.
///
/// ```
/// use aoc25_solver::{DayParser, DayRegistryBuilder, DaySolver, ParseError, SolveError};
///
/// struct Echo;
///
/// impl DayParser for Echo {
///     type Input<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl DaySolver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(input: &mut Self::Input<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(input.to_string())
///     }
/// }
///
/// let registry = DayRegistryBuilder::new().register_day::<Echo>(3).unwrap().build();
/// let mut day = registry.create(3, " hi ").unwrap();
/// assert_eq!(day.solve(1).unwrap().answer, "hi");
/// assert!(DayRegistryBuilder::new()
///     .register_day::<Echo>(3)
///     .and_then(|b| b.register_day::<Echo>(3))
///     .is_err());
/// ```
pub struct DayRegistryBuilder {
    entries: Vec<Option<DayEntry>>,
}

impl DayRegistryBuilder {
    pub fn new() -> Self {
        Self {
            entries: (0..DAYS).map(|_| None).collect(),
        }
    }

    /// Register a factory for `day` with an explicit part count
    pub fn register<F>(mut self, day: u8, parts: u8, factory: F) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynDay + 'a>, ParseError> + Send + Sync + 'static,
    {
        let index = day_index(day).ok_or(RegistrationError::InvalidDay(day))?;
        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateDay(day));
        }
        self.entries[index] = Some(DayEntry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register a [`DaySolver`] type for `day`
    pub fn register_day<S>(self, day: u8) -> Result<Self, RegistrationError>
    where
        S: DaySolver + 'static,
    {
        self.register(day, S::PARTS, move |input: &str| {
            Ok(Box::new(DayInstance::<S>::new(day, input)?))
        })
    }

    /// Register every [`DayPlugin`] submitted through `inventory`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins(|_| true)
    }

    /// Register the plugins accepted by `filter`.
    ///
    /// ```no_run
    /// # use aoc25_solver::DayRegistryBuilder;
    /// let registry = DayRegistryBuilder::new()
    ///     .register_plugins(|plugin| plugin.tags.contains(&"graph"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&DayPlugin) -> bool,
    {
        for plugin in inventory::iter::<DayPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.day)?;
            }
        }
        Ok(self)
    }

    pub fn build(self) -> DayRegistry {
        DayRegistry {
            entries: self.entries,
        }
    }
}

impl Default for DayRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup table from day to solver factory
pub struct DayRegistry {
    entries: Vec<Option<DayEntry>>,
}

impl DayRegistry {
    /// Parse `input` with the solver registered for `day`
    pub fn create<'a>(&self, day: u8, input: &'a str) -> Result<Box<dyn DynDay + 'a>, SolverError> {
        let index = day_index(day).ok_or(SolverError::InvalidDay(day))?;
        let entry = self
            .entries
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(SolverError::NotFound(day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Metadata for every registered day, in day order
    pub fn iter_info(&self) -> impl Iterator<Item = DayInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| DayInfo {
                day: day_from_index(i),
                parts: e.parts,
            })
        })
    }

    pub fn get_info(&self, day: u8) -> Option<DayInfo> {
        day_index(day)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .map(|e| DayInfo { day, parts: e.parts })
    }

    pub fn contains(&self, day: u8) -> bool {
        self.get_info(day).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Type-erased registration hook so differently typed days can live in one
/// plugin list.
///
/// Every [`DaySolver`] gets this through the blanket impl below.
pub trait RegisterableDay: Sync {
    fn register_with(
        &self,
        builder: DayRegistryBuilder,
        day: u8,
    ) -> Result<DayRegistryBuilder, RegistrationError>;

    fn parts(&self) -> u8;
}

impl<S> RegisterableDay for S
where
    S: DaySolver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: DayRegistryBuilder,
        day: u8,
    ) -> Result<DayRegistryBuilder, RegistrationError> {
        builder.register_day::<S>(day)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// A day submitted for automatic registration.
///
/// Normally produced by `#[derive(AutoRegister)]`; the hand-written form is:
///
/// ```no_run
/// use aoc25_solver::{DayParser, DayPlugin, DaySolver, ParseError, SolveError};
///
/// struct Day1;
///
/// impl DayParser for Day1 {
///     type Input<'a> = ();
///
///     fn parse(_: &str) -> Result<Self::Input<'_>, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl DaySolver for Day1 {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut Self::Input<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok("done".to_string()),
///             _ => Err(SolveError::PartOutOfRange(part)),
///         }
///     }
/// }
///
/// aoc25_solver::inventory::submit! {
///     DayPlugin { day: 1, solver: &Day1, tags: &["warmup"] }
/// }
/// ```
pub struct DayPlugin {
    pub day: u8,
    pub solver: &'static dyn RegisterableDay,
    /// Free-form labels used by the CLI's `--tags` filter
    pub tags: &'static [&'static str],
}

inventory::collect!(DayPlugin);
