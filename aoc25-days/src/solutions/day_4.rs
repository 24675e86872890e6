//! Day 4: forklift access to paper rolls

use anyhow::anyhow;
use aoc25_solver::{AutoRegister, DayParser, DaySolver, ParseError, PartSolver, SolveError};

use crate::utils::lines::parse_lines;

/// A roll with fewer neighbouring rolls than this can be reached
const CROWDED: usize = 4;

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[aoc(day = 4, tags = ["grid", "simulation"])]
pub struct Solver;

/// Rows of cells, `true` where a roll of paper sits.
///
/// Rows may have different lengths; anything outside a row is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<bool>>,
}

impl Grid {
    fn is_roll(&self, row: isize, col: isize) -> bool {
        usize::try_from(row)
            .ok()
            .zip(usize::try_from(col).ok())
            .and_then(|(r, c)| self.rows.get(r)?.get(c).copied())
            .unwrap_or(false)
    }

    fn neighbour_rolls(&self, row: usize, col: usize) -> usize {
        let (row, col) = (row as isize, col as isize);
        (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| (dr, dc) != (0, 0))
            .filter(|&(dr, dc)| self.is_roll(row + dr, col + dc))
            .count()
    }

    /// Positions of every roll a forklift can currently reach
    pub fn accessible(&self) -> Vec<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &roll)| roll)
                    .map(move |(c, _)| (r, c))
            })
            .filter(|&(r, c)| self.neighbour_rolls(r, c) < CROWDED)
            .collect()
    }

    /// Remove every reachable roll, one simultaneous round at a time, until
    /// nothing more is reachable. Returns how many rolls each round removed.
    pub fn clear_rounds(&mut self) -> Vec<usize> {
        let mut rounds = Vec::new();
        loop {
            let reachable = self.accessible();
            if reachable.is_empty() {
                return rounds;
            }
            for &(r, c) in &reachable {
                self.rows[r][c] = false;
            }
            rounds.push(reachable.len());
        }
    }
}

impl DayParser for Solver {
    type Input<'a> = Grid;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        let rows = parse_lines(input.trim(), |line| {
            line.chars()
                .map(|c| match c {
                    '@' => Ok(true),
                    '.' | 'x' => Ok(false),
                    other => Err(anyhow!("unexpected cell {other:?}")),
                })
                .collect()
        })?;
        Ok(Grid { rows })
    }
}

impl PartSolver<1> for Solver {
    fn solve(grid: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(grid.accessible().len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(grid: &mut Self::Input<'_>) -> Result<String, SolveError> {
        // Work on a copy so part 1 can still run afterwards
        let mut grid = grid.clone();
        Ok(grid.clear_rounds().iter().sum::<usize>().to_string())
    }
}
