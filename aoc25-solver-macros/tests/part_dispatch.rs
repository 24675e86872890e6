use aoc25_solver::{DayParser, DaySolver, ParseError, PartSolver, SolveError};

#[derive(DaySolver)]
#[day_solver(parts = 2)]
struct Dial;

impl DayParser for Dial {
    type Input<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for Dial {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(input.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for Dial {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(input.iter().map(|n| n.abs()).max().unwrap_or(0).to_string())
    }
}

#[derive(DaySolver)]
#[day_solver(parts = 1)]
struct OnePart;

impl DayParser for OnePart {
    type Input<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for OnePart {
    fn solve(input: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(input.len().to_string())
    }
}

#[test]
fn test_parts_constant_matches_attribute() {
    assert_eq!(Dial::PARTS, 2);
    assert_eq!(OnePart::PARTS, 1);
}

#[test]
fn test_dispatches_each_part() {
    let mut input = Dial::parse("5\n-8\n2").unwrap();

    assert_eq!(Dial::solve_part(&mut input, 1).unwrap(), "-1");
    assert_eq!(Dial::solve_part(&mut input, 2).unwrap(), "8");
}

#[test]
fn test_part_out_of_range() {
    let mut input = Dial::parse("1").unwrap();

    assert!(matches!(
        Dial::solve_part(&mut input, 3),
        Err(SolveError::PartOutOfRange(3))
    ));
    assert!(matches!(
        Dial::solve_part(&mut input, 0),
        Err(SolveError::PartOutOfRange(0))
    ));
}

#[test]
fn test_borrowed_input_day() {
    let raw = String::from("abcdef");
    let mut input = OnePart::parse(&raw).unwrap();
    assert_eq!(OnePart::solve_part(&mut input, 1).unwrap(), "6");
    assert!(OnePart::solve_part(&mut input, 2).is_err());
}
