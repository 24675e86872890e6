//! Junction boxes and the candidate connections between them

use std::str::FromStr;

use anyhow::{Context, anyhow};
use itertools::Itertools;

/// A junction box position; two boxes are the same box when all three
/// coordinates match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Exact squared Euclidean distance, for any pair of `i64` coordinates
    pub fn squared_distance(&self, other: &Point) -> SquaredDistance {
        [
            self.x.abs_diff(other.x),
            self.y.abs_diff(other.y),
            self.z.abs_diff(other.z),
        ]
        .into_iter()
        .map(|d| u128::from(d) * u128::from(d))
        .fold(SquaredDistance::default(), SquaredDistance::with_square)
    }
}

/// Sum of three squared `u64` axis gaps.
///
/// One square fits in a `u128` but three may not, so the overflow is kept
/// in `carry`. Field order makes the derived ordering exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SquaredDistance {
    carry: u8,
    low: u128,
}

impl SquaredDistance {
    fn with_square(self, square: u128) -> Self {
        let (low, overflowed) = self.low.overflowing_add(square);
        Self {
            carry: self.carry + u8::from(overflowed),
            low,
        }
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.carry) * 2f64.powi(128) + self.low as f64
    }
}

impl FromStr for Point {
    type Err = anyhow::Error;

    /// `x,y,z`, no whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y, z) = s
            .split(',')
            .collect_tuple()
            .ok_or_else(|| anyhow!("expected `x,y,z`, got {s:?}"))?;
        let coord = |v: &str| {
            v.parse::<i64>()
                .with_context(|| format!("invalid coordinate {v:?}"))
        };
        Ok(Point::new(coord(x)?, coord(y)?, coord(z)?))
    }
}

/// A candidate cable between two junction boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub a: Point,
    pub b: Point,
    /// Straight-line distance between `a` and `b`
    pub distance: f64,
}

/// Every unordered pair of `points`, shortest first.
///
/// Pairs are generated as `(points[i], points[j])` for `i < j` in input
/// order. The sort is stable on the exact squared distance, so equally long
/// connections keep that generation order.
pub fn connections(points: &[Point]) -> Vec<Connection> {
    let mut pairs = points
        .iter()
        .tuple_combinations()
        .map(|(a, b)| (a.squared_distance(b), *a, *b))
        .collect_vec();
    pairs.sort_by_key(|&(squared, _, _)| squared);

    pairs
        .into_iter()
        .map(|(squared, a, b)| Connection {
            a,
            b,
            distance: squared.as_f64().sqrt(),
        })
        .collect()
}
