//! Day 3: joltage from banks of batteries

use anyhow::anyhow;
use aoc25_solver::{AutoRegister, DayParser, DaySolver, ParseError, PartSolver, SolveError};

use crate::utils::lines::parse_lines;

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[aoc(day = 3, tags = ["greedy"])]
pub struct Solver;

impl DayParser for Solver {
    /// One bank per line, one digit per battery
    type Input<'a> = Vec<Vec<u8>>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        parse_lines(input, |line| {
            line.bytes()
                .map(|b| match b {
                    b'0'..=b'9' => Ok(b - b'0'),
                    other => Err(anyhow!("unexpected battery {:?}", other as char)),
                })
                .collect()
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(banks: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(total_joltage(banks, 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(banks: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(total_joltage(banks, 12).to_string())
    }
}

fn total_joltage(banks: &[Vec<u8>], count: usize) -> u64 {
    banks.iter().map(|bank| max_joltage(bank, count)).sum()
}

/// Largest number formed by `count` batteries of `bank`, kept in order.
///
/// Each digit is the leftmost maximum among the positions that still leave
/// room for the remaining digits. Banks shorter than `count` give 0.
fn max_joltage(bank: &[u8], count: usize) -> u64 {
    if bank.len() < count {
        return 0;
    }

    let mut start = 0;
    let mut joltage = 0u64;
    for remaining in (1..=count).rev() {
        let window = &bank[start..=bank.len() - remaining];
        let (offset, digit) = window
            .iter()
            .enumerate()
            .fold((0, 0), |best, (i, &d)| if d > best.1 { (i, d) } else { best });
        joltage = joltage * 10 + u64::from(digit);
        start += offset + 1;
    }
    joltage
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "987654321111111
811111111111119
234234234234278
818181911112111";

    #[test]
    fn test_max_joltage_two() {
        let banks = Solver::parse(SAMPLE).unwrap();
        let values: Vec<u64> = banks.iter().map(|b| max_joltage(b, 2)).collect();
        assert_eq!(values, vec![98, 89, 78, 92]);
    }

    #[test]
    fn test_max_joltage_twelve() {
        let banks = Solver::parse(SAMPLE).unwrap();
        let values: Vec<u64> = banks.iter().map(|b| max_joltage(b, 12)).collect();
        assert_eq!(
            values,
            vec![987654321111, 811111111119, 434234234278, 888911112111]
        );
    }

    #[test]
    fn test_short_bank_contributes_nothing() {
        assert_eq!(max_joltage(&[9], 2), 0);
        assert_eq!(max_joltage(&[], 1), 0);
        assert_eq!(max_joltage(&[4, 7], 2), 47);
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert!(Solver::parse("123\n12a").is_err());
    }

    #[test]
    fn test_part1() {
        let mut banks = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut banks).unwrap(), "357");
    }

    #[test]
    fn test_part2() {
        let mut banks = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut banks).unwrap(), "3121910778619");
    }
}
