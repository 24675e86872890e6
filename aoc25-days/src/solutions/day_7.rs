//! Day 7: tachyon beams through a manifold of splitters

use std::collections::BTreeMap;

use aoc25_solver::{AutoRegister, DayParser, DaySolver, ParseError, PartSolver, SolveError};

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[aoc(day = 7, tags = ["grid", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifold {
    /// Row and column of the first `S`
    start: (usize, usize),
    width: usize,
    /// `true` where a splitter sits
    splitters: Vec<Vec<bool>>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BeamReport {
    /// Distinct splitters that a beam reached
    splits: u64,
    /// Timelines leaving the bottom of the manifold
    timelines: u64,
}

impl Manifold {
    /// Send the beam down, merging beams that share a column.
    ///
    /// Beams are tracked as `column -> timelines`; a beam split off past the
    /// left or right edge is lost.
    pub fn trace(&self) -> BeamReport {
        let (start_row, start_col) = self.start;
        let mut beams = BTreeMap::from([(start_col, 1u64)]);
        let mut report = BeamReport::default();

        for row in &self.splitters[start_row + 1..] {
            let mut next = BTreeMap::new();
            for (col, timelines) in beams {
                if !row.get(col).copied().unwrap_or(false) {
                    *next.entry(col).or_default() += timelines;
                    continue;
                }
                report.splits += 1;
                for side in [col.checked_sub(1), col.checked_add(1)] {
                    if let Some(side) = side.filter(|&c| c < self.width) {
                        *next.entry(side).or_default() += timelines;
                    }
                }
            }
            beams = next;
        }

        report.timelines = beams.values().sum();
        report
    }
}

impl DayParser for Solver {
    type Input<'a> = Manifold;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        let lines: Vec<&str> = input.trim().lines().collect();
        let start = lines
            .iter()
            .enumerate()
            .find_map(|(r, line)| line.find('S').map(|c| (r, c)))
            .ok_or_else(|| ParseError::MissingData("no beam entry point `S`".into()))?;

        let splitters = lines
            .iter()
            .enumerate()
            .map(|(r, line)| {
                line.chars()
                    .map(|c| match c {
                        '^' => Ok(true),
                        '.' | 'S' => Ok(false),
                        other => Err(ParseError::InvalidFormat(format!(
                            "(line {}) unexpected cell {other:?}",
                            r + 1
                        ))),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        let width = splitters.iter().map(Vec::len).max().unwrap_or(0);

        Ok(Manifold {
            start,
            width,
            splitters,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(manifold: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(manifold.trace().splits.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(manifold: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(manifold.trace().timelines.to_string())
    }
}
