//! Day 5: fresh ingredient ranges in the cafeteria

use std::ops::RangeInclusive;

use anyhow::{Context, anyhow};
use aoc25_solver::{AutoRegister, DayParser, DaySolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;

use crate::utils::lines::parse_lines;

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[aoc(day = 5, tags = ["intervals"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    /// Fresh ID ranges, sorted by start
    fresh: Vec<RangeInclusive<u64>>,
    available: Vec<u64>,
}

impl Inventory {
    pub fn is_fresh(&self, id: u64) -> bool {
        self.fresh.iter().any(|range| range.contains(&id))
    }

    /// Fresh ranges with overlapping or adjacent ones combined
    pub fn merged(&self) -> Vec<RangeInclusive<u64>> {
        self.fresh
            .iter()
            .cloned()
            .coalesce(|prev, next| {
                if *next.start() <= prev.end().saturating_add(1) {
                    Ok(*prev.start()..=*prev.end().max(next.end()))
                } else {
                    Err((prev, next))
                }
            })
            .collect()
    }
}

fn parse_range(line: &str) -> anyhow::Result<RangeInclusive<u64>> {
    let (start, end) = line
        .split_once('-')
        .ok_or_else(|| anyhow!("expected `start-end`, got {line:?}"))?;
    let start: u64 = start.parse().context("bad range start")?;
    let end: u64 = end.parse().context("bad range end")?;
    if start > end {
        return Err(anyhow!("range {line:?} ends before it starts"));
    }
    Ok(start..=end)
}

impl DayParser for Solver {
    type Input<'a> = Inventory;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        let input = input.trim().replace("\r\n", "\n");
        let (ranges, ids) = input
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("blank line before ingredient IDs".into()))?;

        let mut fresh = parse_lines(ranges, parse_range)?;
        fresh.sort_by_key(|range| *range.start());
        let available = parse_lines(ids, |line| Ok(line.parse::<u64>()?))?;

        Ok(Inventory { fresh, available })
    }
}

impl PartSolver<1> for Solver {
    fn solve(inventory: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let fresh = inventory
            .available
            .iter()
            .filter(|&&id| inventory.is_fresh(id))
            .count();
        Ok(fresh.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(inventory: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let total: u64 = inventory
            .merged()
            .iter()
            .map(|range| range.end().saturating_sub(*range.start()) + 1)
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "3-5
10-14
16-20
12-18

1
5
8
11
17
32";

    fn inventory(fresh: Vec<RangeInclusive<u64>>) -> Inventory {
        Inventory {
            fresh,
            available: vec![],
        }
    }

    #[test]
    fn test_parse_sorts_ranges() {
        let inventory = Solver::parse(SAMPLE).unwrap();
        assert_eq!(inventory.fresh, vec![3..=5, 10..=14, 12..=18, 16..=20]);
        assert_eq!(inventory.available, vec![1, 5, 8, 11, 17, 32]);
    }

    #[test]
    fn test_parse_requires_blank_line() {
        assert!(matches!(Solver::parse("3-5\n7"), Err(ParseError::MissingData(_))));
    }

    #[test]
    fn test_parse_rejects_reversed_range() {
        let err = Solver::parse("3-5\n5-3\n\n4").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("line 2")));
        assert!(Solver::parse("7-7\n\n7").is_ok());
    }

    #[test]
    fn test_merge_overlapping_and_adjacent() {
        assert_eq!(inventory(vec![1..=3, 4..=6]).merged(), vec![1..=6]);
        assert_eq!(inventory(vec![1..=10, 2..=3]).merged(), vec![1..=10]);
        assert_eq!(inventory(vec![1..=2, 5..=6]).merged(), vec![1..=2, 5..=6]);
        assert!(inventory(vec![]).merged().is_empty());
    }

    #[test]
    fn test_part1() {
        let mut inventory = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut inventory).unwrap(), "3");
    }

    #[test]
    fn test_part2() {
        let mut inventory = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut inventory).unwrap(), "14");
    }

    #[test]
    fn test_part2_without_ranges() {
        let mut empty = inventory(vec![]);
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut empty).unwrap(), "0");
    }
}
