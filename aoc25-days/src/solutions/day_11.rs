//! Day 11: counting signal paths through the reactor's devices

use std::collections::HashMap;

use anyhow::anyhow;
use aoc25_solver::{AutoRegister, DayParser, DaySolver, ParseError, PartSolver, SolveError};
use tracing::debug;

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
use crate::utils::lines::parse_lines;

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[aoc(day = 11, tags = ["graph", "dp"])]
pub struct Solver;

/// Device graph with names interned to dense ids
#[derive(Debug, Default)]
pub struct DeviceGraph<'a> {
    ids: HashMap<&'a str, usize>,
    outputs: Vec<Vec<usize>>,
}

impl<'a> DeviceGraph<'a> {
    fn intern(&mut self, name: &'a str) -> usize {
        let next = self.ids.len();
        let id = *self.ids.entry(name).or_insert(next);
        if id == self.outputs.len() {
            self.outputs.push(Vec::new());
        }
        id
    }

    pub fn id(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    fn named(&self, name: &str) -> Result<usize, SolveError> {
        self.id(name)
            .ok_or_else(|| SolveError::failed(format!("no device named {name:?}")))
    }

    /// Paths from `from` to `to` that pass through every device in `via`
    pub fn count_paths(&self, from: &str, to: &str, via: &[&str]) -> Result<u64, SolveError> {
        let (from, to) = (self.named(from)?, self.named(to)?);
        let required = via
            .iter()
            .map(|name| self.named(name))
            .collect::<Result<Vec<_>, _>>()?;
        if required.len() > u32::BITS as usize {
            return Err(SolveError::failed("too many required devices"));
        }

        let problem = PathCount {
            graph: self,
            to,
            required,
        };
        let start = (from, problem.mark(from, 0));
        let cache = DpCache::with_problem(HashMapBackend::new(), problem);
        let paths = cache.get(&start).map_err(SolveError::failed)?;
        debug!(paths, "paths counted");
        Ok(paths)
    }
}

/// Paths from a device to `to`, keyed by `(device, required devices seen so far)`
struct PathCount<'g, 'a> {
    graph: &'g DeviceGraph<'a>,
    to: usize,
    required: Vec<usize>,
}

impl PathCount<'_, '_> {
    fn mark(&self, device: usize, seen: u32) -> u32 {
        self.required
            .iter()
            .position(|&r| r == device)
            .map_or(seen, |bit| seen | (1 << bit))
    }

    fn all_seen(&self) -> u32 {
        ((1u64 << self.required.len()) - 1) as u32
    }
}

impl DpProblem<(usize, u32), u64> for PathCount<'_, '_> {
    fn deps(&self, &(device, seen): &(usize, u32)) -> Vec<(usize, u32)> {
        if device == self.to {
            return Vec::new();
        }
        self.graph.outputs[device]
            .iter()
            .map(|&next| (next, self.mark(next, seen)))
            .collect()
    }

    fn compute(&self, &(device, seen): &(usize, u32), deps: Vec<u64>) -> u64 {
        if device == self.to {
            u64::from(seen == self.all_seen())
        } else {
            deps.iter().sum()
        }
    }
}

impl DayParser for Solver {
    type Input<'a> = DeviceGraph<'a>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        let lines = parse_lines(input, |line| {
            let (device, outputs) = line
                .split_once(':')
                .ok_or_else(|| anyhow!("expected `device: outputs...`, got {line:?}"))?;
            let device = device.trim();
            if device.is_empty() {
                return Err(anyhow!("missing device name"));
            }
            Ok((device, outputs.split_whitespace().collect::<Vec<_>>()))
        })?;

        let mut graph = DeviceGraph::default();
        for (device, outputs) in lines {
            let id = graph.intern(device);
            for output in outputs {
                let next = graph.intern(output);
                graph.outputs[id].push(next);
            }
        }
        Ok(graph)
    }
}

impl PartSolver<1> for Solver {
    fn solve(graph: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(graph.count_paths("you", "out", &[])?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(graph: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(graph.count_paths("svr", "out", &["dac", "fft"])?.to_string())
    }
}
