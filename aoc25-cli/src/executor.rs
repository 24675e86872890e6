//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use aoc25_solver::{DayRegistry, DynDay, SolverError};
use chrono::TimeDelta;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use tracing::{debug, warn};

/// Result from a single part
#[derive(Debug)]
pub struct SolverResult {
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// Set on the first result produced from each parsed input
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// A day to run and the parts to run for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

pub struct Executor {
    shared: SharedConfig,
    thread_pool: rayon::ThreadPool,
}

/// Read-only state shared by every worker
struct SharedConfig {
    registry: DayRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: DayRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            shared: SharedConfig {
                registry,
                inputs: InputStore::new(config.input_dir.clone()),
                parallelize_by: config.parallelize_by,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    pub fn inputs(&self) -> &InputStore {
        &self.shared.inputs
    }

    /// Registered days that pass the day and part filters, in day order
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let shared = &self.shared;
        shared
            .registry
            .iter_info()
            .filter(|info| shared.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and the day's part count
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.shared.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Run every work item, sending one result per part to `tx`.
    ///
    /// Failing parts are reported through their results; the returned error
    /// only covers failures of the executor itself.
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        debug!(days = work_items.len(), parallelize_by = ?self.shared.parallelize_by, "executing");

        match self.shared.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in &work_items {
                    if let Err(e) = run_day(work, &tx, &self.shared) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Day | ParallelizeBy::Part => {
                let shared = &self.shared;
                let tx = &tx;
                self.thread_pool.install(|| {
                    work_items
                        .par_iter()
                        .filter_map(|work| run_day(work, tx, shared).err())
                        .reduce_with(ArcExecutorError::combine)
                        .map_or(Ok(()), Err)
                })
            }
        }
    }
}

fn run_day(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    shared: &SharedConfig,
) -> Result<(), ArcExecutorError> {
    let day = work.day;
    let input = match shared.inputs.read(day) {
        Ok(input) => input,
        Err(source) => {
            warn!(day, error = %source, "input unavailable");
            let error = ArcExecutorError::from(ExecutorError::Input { day, source });
            for part in work.parts.clone() {
                send(tx, failed(day, part, error.clone(), None))?;
            }
            return Ok(());
        }
    };

    if matches!(shared.parallelize_by, ParallelizeBy::Part) {
        run_parts_parallel(work, &input, tx, &shared.registry)
    } else {
        run_parts_sequential(work, &input, tx, &shared.registry)
    }
}

/// Parse once, then solve the parts in order on the current thread
fn run_parts_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &DayRegistry,
) -> Result<(), ArcExecutorError> {
    let mut instance = match registry.create(work.day, input) {
        Ok(instance) => instance,
        Err(e) => return send_parse_failure(work, e, tx),
    };

    let mut parse_duration = Some(instance.parse_duration());
    for part in work.parts.clone() {
        send(tx, solve_part(work.day, part, &mut *instance, parse_duration.take()))?;
    }
    Ok(())
}

/// Solve every part on its own parsed copy of the input
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &DayRegistry,
) -> Result<(), ArcExecutorError> {
    let day = work.day;
    let results: Vec<SolverResult> = work
        .parts
        .clone()
        .into_par_iter()
        .map(|part| match registry.create(day, input) {
            Ok(mut instance) => {
                let parse_duration = instance.parse_duration();
                solve_part(day, part, &mut *instance, Some(parse_duration))
            }
            Err(e) => failed(day, part, ExecutorError::Solver(e).into(), None),
        })
        .collect();

    results.into_iter().try_for_each(|result| send(tx, result))
}

fn send_parse_failure(
    work: &WorkItem,
    error: SolverError,
    tx: &Sender<SolverResult>,
) -> Result<(), ArcExecutorError> {
    warn!(day = work.day, %error, "input rejected");
    let error = ArcExecutorError::from(ExecutorError::Solver(error));
    for part in work.parts.clone() {
        send(tx, failed(work.day, part, error.clone(), None))?;
    }
    Ok(())
}

fn solve_part(
    day: u8,
    part: u8,
    instance: &mut dyn DynDay,
    parse_duration: Option<TimeDelta>,
) -> SolverResult {
    match instance.solve(part) {
        Ok(answer) => SolverResult {
            day,
            part,
            solve_duration: answer.duration(),
            answer: Ok(answer.answer),
            parse_duration,
        },
        Err(e) => failed(
            day,
            part,
            ExecutorError::Solver(e.into()).into(),
            parse_duration,
        ),
    }
}

fn failed(
    day: u8,
    part: u8,
    error: ArcExecutorError,
    parse_duration: Option<TimeDelta>,
) -> SolverResult {
    SolverResult {
        day,
        part,
        answer: Err(error),
        parse_duration,
        solve_duration: TimeDelta::zero(),
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))
}
