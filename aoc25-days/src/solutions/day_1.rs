//! Day 1: the secret entrance dial

use anyhow::anyhow;
use aoc25_solver::{AutoRegister, DayParser, DaySolver, ParseError, PartSolver, SolveError};

use crate::utils::lines::parse_lines;

const DIAL_SIZE: u64 = 100;
const DIAL_START: u64 = 50;

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[aoc(day = 1, tags = ["warmup"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Left(u64),
    Right(u64),
}

#[derive(Debug)]
pub struct DialLog {
    rotations: Vec<Rotation>,
    tally: Option<ZeroTally>,
}

#[derive(Debug, Clone, Copy)]
pub struct ZeroTally {
    /// Rotations that end on 0
    stops_at_zero: u64,
    /// Clicks that land on 0, mid-rotation included
    clicks_at_zero: u64,
}

impl DayParser for Solver {
    type Input<'a> = DialLog;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        let rotations = parse_lines(input, |line| {
            let clicks = |s: &str| {
                s.parse::<u64>()
                    .map_err(|e| anyhow!("invalid click count {s:?}: {e}"))
            };
            match line.split_at_checked(1) {
                Some(("L", rest)) => Ok(Rotation::Left(clicks(rest)?)),
                Some(("R", rest)) => Ok(Rotation::Right(clicks(rest)?)),
                _ => Err(anyhow!("first character need to be 'L' or 'R'")),
            }
        })?;

        Ok(DialLog {
            rotations,
            tally: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(log: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(tally_zeros(log).stops_at_zero.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(log: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(tally_zeros(log).clicks_at_zero.to_string())
    }
}

/// Times a rotation from `dial` lands on 0, counting every click
fn zero_hits(dial: u64, rotation: Rotation) -> u64 {
    match rotation {
        Rotation::Right(n) => (dial + n) / DIAL_SIZE,
        Rotation::Left(n) if dial == 0 => n / DIAL_SIZE,
        Rotation::Left(n) if n >= dial => (n - dial) / DIAL_SIZE + 1,
        Rotation::Left(_) => 0,
    }
}

fn rotate(dial: u64, rotation: Rotation) -> u64 {
    match rotation {
        Rotation::Right(n) => (dial + n % DIAL_SIZE) % DIAL_SIZE,
        Rotation::Left(n) => (dial + DIAL_SIZE - n % DIAL_SIZE) % DIAL_SIZE,
    }
}

fn tally_zeros(log: &mut DialLog) -> ZeroTally {
    *log.tally.get_or_insert_with(|| {
        let (_, stops_at_zero, clicks_at_zero) = log.rotations.iter().fold(
            (DIAL_START, 0u64, 0u64),
            |(dial, stops_at_zero, clicks_at_zero), &rotation| {
                let next = rotate(dial, rotation);
                (
                    next,
                    stops_at_zero + u64::from(next == 0),
                    clicks_at_zero + zero_hits(dial, rotation),
                )
            },
        );

        ZeroTally {
            stops_at_zero,
            clicks_at_zero,
        }
    })
}
