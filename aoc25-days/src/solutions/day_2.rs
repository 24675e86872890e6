//! Day 2: invalid product IDs in the gift shop database

use std::ops::RangeInclusive;

use anyhow::{Context, anyhow};
use aoc25_solver::{AutoRegister, DayParser, DaySolver, ParseError, PartSolver, SolveError};

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[aoc(day = 2, tags = ["brute-force"])]
pub struct Solver;

impl DayParser for Solver {
    type Input<'a> = Vec<RangeInclusive<u64>>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        input
            .trim()
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| -> anyhow::Result<RangeInclusive<u64>> {
                let (start, end) = item
                    .split_once('-')
                    .ok_or_else(|| anyhow!("expected `start-end`, got {item:?}"))?;
                let start: u64 = start.parse().with_context(|| format!("bad start in {item:?}"))?;
                let end: u64 = end.parse().with_context(|| format!("bad end in {item:?}"))?;
                Ok(start..=end)
            })
            .collect::<anyhow::Result<_>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(ranges: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(sum_matching(ranges, |digits| is_repeated(digits, 2)).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(ranges: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let any_repeat = |digits: &[u8]| (2..=digits.len()).any(|times| is_repeated(digits, times));
        Ok(sum_matching(ranges, any_repeat).to_string())
    }
}

/// Whether `digits` is one block written exactly `times` times
fn is_repeated(digits: &[u8], times: usize) -> bool {
    if digits.len() % times != 0 {
        return false;
    }
    let block = digits.len() / times;
    digits.chunks(block).all(|chunk| chunk == &digits[..block])
}

fn sum_matching(ranges: &[RangeInclusive<u64>], invalid: impl Fn(&[u8]) -> bool) -> u64 {
    ranges
        .iter()
        .flat_map(|range| range.clone())
        .filter(|id| invalid(id.to_string().as_bytes()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,
1698522-1698528,446443-446449,38593856-38593862,565653-565659,
824824821-824824827,2121212118-2121212124";

    #[test]
    fn test_parse_tolerates_line_breaks() {
        let ranges = Solver::parse(SAMPLE).unwrap();
        assert_eq!(ranges.len(), 11);
        assert_eq!(ranges[0], 11..=22);
        assert_eq!(ranges[5], 1698522..=1698528);
    }

    #[test]
    fn test_parse_rejects_missing_dash() {
        assert!(Solver::parse("11-22,95").is_err());
        assert!(Solver::parse("a-b").is_err());
    }

    #[test]
    fn test_is_repeated() {
        assert!(is_repeated(b"1212", 2));
        assert!(is_repeated(b"111", 3));
        assert!(!is_repeated(b"111", 2));
        assert!(is_repeated(b"824824824", 3));
        assert!(!is_repeated(b"1213", 2));
    }

    #[test]
    fn test_part1() {
        let mut ranges = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut ranges).unwrap(), "1227775554");
    }

    #[test]
    fn test_part2() {
        let mut ranges = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut ranges).unwrap(), "4174379265");
    }
}
