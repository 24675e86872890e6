//! Day 9: the largest rectangle between red tiles in the movie theater

use std::str::FromStr;

use anyhow::{Context, anyhow};
use aoc25_solver::{AutoRegister, DayParser, DaySolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;
use tracing::debug;

use crate::utils::lines::parse_lines;

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[aoc(day = 9, tags = ["geometry", "prefix-sum"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub x: i64,
    pub y: i64,
}

impl Tile {
    /// Tiles covered by the rectangle with `self` and `other` at opposite corners
    pub fn area(&self, other: &Tile) -> u64 {
        (self.x.abs_diff(other.x) + 1) * (self.y.abs_diff(other.y) + 1)
    }
}

impl FromStr for Tile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("expected `x,y`, got {s:?}"))?;
        Ok(Tile {
            x: x.parse().with_context(|| format!("invalid x {x:?}"))?,
            y: y.parse().with_context(|| format!("invalid y {y:?}"))?,
        })
    }
}

/// One compressed axis.
///
/// Cell `2i` is the line at the i-th distinct coordinate and cell `2i + 1`
/// is the open gap up to the next one.
struct Axis {
    values: Vec<i64>,
}

impl Axis {
    fn new(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            values: values.into_iter().sorted_unstable().dedup().collect(),
        }
    }

    fn cells(&self) -> usize {
        (2 * self.values.len()).saturating_sub(1)
    }

    /// Cell of a coordinate that is one of the axis values
    fn cell(&self, value: i64) -> usize {
        2 * self.values.partition_point(|&v| v < value)
    }

    /// A real coordinate inside `cell`, or `None` for a gap holding no tiles
    fn representative(&self, cell: usize) -> Option<i64> {
        let lo = self.values[cell / 2];
        if cell % 2 == 0 {
            return Some(lo);
        }
        let hi = self.values[cell / 2 + 1];
        (hi - lo > 1).then_some(lo + 1)
    }
}

/// The theater floor compressed around the red tiles, with a 2-D prefix
/// count of cells that fall outside the red/green loop.
struct Floor {
    xs: Axis,
    ys: Axis,
    outside: Vec<Vec<u32>>,
}

impl Floor {
    fn new(tiles: &[Tile]) -> Result<Self, SolveError> {
        let xs = Axis::new(tiles.iter().map(|t| t.x));
        let ys = Axis::new(tiles.iter().map(|t| t.y));
        let (width, height) = (xs.cells(), ys.cells());

        let mut boundary = vec![vec![false; width]; height];
        let mut verticals = Vec::new();
        for (a, b) in tiles.iter().circular_tuple_windows() {
            let (ax, bx) = (xs.cell(a.x), xs.cell(b.x));
            let (ay, by) = (ys.cell(a.y), ys.cell(b.y));
            if a.x == b.x {
                (ay.min(by)..=ay.max(by)).for_each(|cy| boundary[cy][ax] = true);
                if a.y != b.y {
                    verticals.push((a.x, a.y.min(b.y), a.y.max(b.y)));
                }
            } else if a.y == b.y {
                (ax.min(bx)..=ax.max(bx)).for_each(|cx| boundary[ay][cx] = true);
            } else {
                return Err(SolveError::failed(format!(
                    "consecutive red tiles {a:?} and {b:?} share neither row nor column"
                )));
            }
        }

        let mut outside = vec![vec![0u32; width + 1]; height + 1];
        for cy in 0..height {
            // Vertical edges crossed by a ray running right from this row
            let crossings = ys
                .representative(cy)
                .map(|py| {
                    verticals
                        .iter()
                        .filter(|&&(_, lo, hi)| lo <= py && py < hi)
                        .map(|&(x, _, _)| x)
                        .sorted_unstable()
                        .collect_vec()
                })
                .unwrap_or_default();

            for cx in 0..width {
                let is_outside = match (ys.representative(cy), xs.representative(cx)) {
                    _ if boundary[cy][cx] => false,
                    (Some(_), Some(px)) => {
                        let to_the_right =
                            crossings.len() - crossings.partition_point(|&x| x <= px);
                        to_the_right % 2 == 0
                    }
                    _ => false,
                };
                outside[cy + 1][cx + 1] = u32::from(is_outside) + outside[cy][cx + 1]
                    + outside[cy + 1][cx]
                    - outside[cy][cx];
            }
        }
        debug!(width, height, "floor compressed");

        Ok(Self { xs, ys, outside })
    }

    /// Whether every tile of the rectangle spanned by `a` and `b` is red or green
    fn encloses(&self, a: &Tile, b: &Tile) -> bool {
        let (x0, x1) = minmax(self.xs.cell(a.x), self.xs.cell(b.x));
        let (y0, y1) = minmax(self.ys.cell(a.y), self.ys.cell(b.y));
        let o = &self.outside;
        o[y1 + 1][x1 + 1] + o[y0][x0] == o[y0][x1 + 1] + o[y1 + 1][x0]
    }
}

fn minmax(a: usize, b: usize) -> (usize, usize) {
    (a.min(b), a.max(b))
}

impl DayParser for Solver {
    type Input<'a> = Vec<Tile>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        parse_lines(input, str::parse)
    }
}

impl PartSolver<1> for Solver {
    fn solve(tiles: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let largest = tiles
            .iter()
            .tuple_combinations()
            .map(|(a, b)| a.area(b))
            .max()
            .unwrap_or(0);
        Ok(largest.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(tiles: &mut Self::Input<'_>) -> Result<String, SolveError> {
        if tiles.len() < 2 {
            return Ok("0".to_string());
        }
        let floor = Floor::new(tiles)?;
        let largest = tiles
            .iter()
            .tuple_combinations()
            .filter(|(a, b)| floor.encloses(a, b))
            .map(|(a, b)| a.area(b))
            .max()
            .unwrap_or(0);
        Ok(largest.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3";

    fn tile(x: i64, y: i64) -> Tile {
        Tile { x, y }
    }

    #[test]
    fn test_parse() {
        let tiles = Solver::parse(SAMPLE).unwrap();
        assert_eq!(tiles.len(), 8);
        assert_eq!(tiles[7], tile(7, 3));
        assert!(Solver::parse("1;2").is_err());
    }

    #[test]
    fn test_area() {
        assert_eq!(tile(2, 5).area(&tile(9, 7)), 24);
        assert_eq!(tile(7, 1).area(&tile(11, 7)), 35);
        assert_eq!(tile(7, 3).area(&tile(2, 3)), 6);
    }

    #[test]
    fn test_axis_cells() {
        let axis = Axis::new([5, 1, 2, 5]);
        assert_eq!(axis.cells(), 5);
        assert_eq!(axis.cell(2), 2);
        assert_eq!(axis.representative(1), None);
        assert_eq!(axis.representative(3), Some(3));
        assert_eq!(axis.representative(4), Some(5));
    }

    #[test]
    fn test_floor_encloses() {
        let tiles = Solver::parse(SAMPLE).unwrap();
        let floor = Floor::new(&tiles).unwrap();
        assert!(floor.encloses(&tile(9, 5), &tile(2, 3)));
        assert!(floor.encloses(&tile(7, 1), &tile(9, 5)));
        assert!(!floor.encloses(&tile(7, 1), &tile(11, 7)));
        assert!(!floor.encloses(&tile(2, 5), &tile(11, 1)));
        assert!(!floor.encloses(&tile(2, 3), &tile(11, 7)));
    }

    #[test]
    fn test_diagonal_neighbours_are_rejected() {
        let mut tiles = vec![tile(0, 0), tile(3, 3), tile(0, 3)];
        assert!(<Solver as PartSolver<2>>::solve(&mut tiles).is_err());
    }

    #[test]
    fn test_part1() {
        let mut tiles = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut tiles).unwrap(), "50");
    }

    #[test]
    fn test_part2() {
        let mut tiles = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut tiles).unwrap(), "24");
    }

    #[test]
    fn test_part2_square_loop() {
        let mut tiles = vec![tile(0, 0), tile(4, 0), tile(4, 4), tile(0, 4)];
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut tiles).unwrap(), "25");
    }
}
