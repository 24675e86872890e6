//! Day 8: junction boxes wired into circuits by shortest cable first

mod connections;
mod forest;

use aoc25_solver::{AutoRegister, DayParser, DaySolver, ParseError, PartSolver, SolveError};

pub use connections::{Connection, Point, SquaredDistance, connections};
pub use forest::{ForestError, circuits_after, last_unifying_connection};

use crate::utils::lines::parse_lines;

/// Shortest connections wired before measuring circuits in part 1
pub const CONNECTION_BUDGET: usize = 1000;

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[aoc(day = 8, tags = ["graph", "union-find"])]
pub struct Solver;

impl DayParser for Solver {
    type Input<'a> = Vec<Point>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        parse_lines(input, str::parse)
    }
}

impl PartSolver<1> for Solver {
    fn solve(points: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(largest_circuits_product(points, CONNECTION_BUDGET)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(points: &mut Self::Input<'_>) -> Result<String, SolveError> {
        let connection = last_unifying_connection(points).map_err(SolveError::failed)?;
        let product = connection.a.x.checked_mul(connection.b.x).ok_or_else(|| {
            SolveError::failed(format!(
                "x product of {:?} and {:?} overflows",
                connection.a, connection.b
            ))
        })?;
        Ok(product.to_string())
    }
}

/// Product of the sizes of the three largest circuits after `budget` connections
pub fn largest_circuits_product(points: &[Point], budget: usize) -> Result<u64, SolveError> {
    let circuits = circuits_after(points, budget).map_err(SolveError::failed)?;
    let mut sizes: Vec<u64> = circuits.iter().map(|c| c.len() as u64).collect();
    if sizes.len() < 3 {
        return Err(SolveError::failed(format!(
            "need at least 3 circuits, found {}",
            sizes.len()
        )));
    }
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    Ok(sizes[..3].iter().product())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const SAMPLE: &str = "162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

    pub(crate) fn sample_points() -> Vec<Point> {
        Solver::parse(SAMPLE).unwrap()
    }

    #[test]
    fn test_parse_sample() {
        let points = sample_points();
        assert_eq!(points.len(), 20);
        assert_eq!(points[0], Point::new(162, 817, 812));
        assert_eq!(points[19], Point::new(425, 690, 689));
    }

    #[test]
    fn test_parse_names_bad_line() {
        let err = Solver::parse("1,2,3\n4,5\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("line 2")));
    }

    #[test]
    fn test_part1_sample_with_ten_connections() {
        assert_eq!(largest_circuits_product(&sample_points(), 10).unwrap(), 40);
    }

    #[test]
    fn test_part1_needs_three_circuits() {
        let points = vec![Point::new(0, 0, 0), Point::new(1, 0, 0)];
        assert!(largest_circuits_product(&points, 0).is_err());
    }

    #[test]
    fn test_part2_sample() {
        let mut points = sample_points();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut points).unwrap(), "25272");
    }

    #[test]
    fn test_part2_single_box_fails() {
        let mut points = Solver::parse("5,5,5").unwrap();
        assert!(<Solver as PartSolver<2>>::solve(&mut points).is_err());
    }

    #[test]
    fn test_part2_far_apart_boxes() {
        let mut points = Solver::parse("0,0,0\n4000000000,0,0\n4000000001,0,0").unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut points).unwrap(), "0");
    }

    #[test]
    fn test_part2_overflowing_product_fails() {
        let mut points = Solver::parse("4000000000,0,0\n3000000000,0,0").unwrap();
        let err = <Solver as PartSolver<2>>::solve(&mut points).unwrap_err();
        assert!(err.to_string().contains("overflows"));
    }
}
