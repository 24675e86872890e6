//! Day 6: the cephalopod math worksheet

use aoc25_solver::{AutoRegister, DayParser, DaySolver, ParseError, PartSolver, SolveError};

#[derive(DaySolver, AutoRegister)]
#[day_solver(parts = 2)]
#[aoc(day = 6, tags = ["parsing"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Multiply,
}

impl Operation {
    fn apply(self, numbers: impl IntoIterator<Item = u64>) -> Option<u64> {
        let mut numbers = numbers.into_iter();
        let first = numbers.next()?;
        numbers.try_fold(first, |acc, n| match self {
            Operation::Add => acc.checked_add(n),
            Operation::Multiply => acc.checked_mul(n),
        })
    }
}

/// One problem: the block of worksheet columns between two blank columns.
///
/// `cells` keeps each number row's slice of that block as written, spaces
/// included, since part 2 reads digits by column position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem<'a> {
    cells: Vec<&'a str>,
    width: usize,
    operation: Operation,
}

impl Problem<'_> {
    /// Numbers read left to right along each row.
    ///
    /// A cell holds at most one number. Blank cells are skipped.
    fn row_numbers(&self) -> Result<Vec<u64>, SolveError> {
        self.cells
            .iter()
            .map(|cell| cell.trim())
            .filter(|cell| !cell.is_empty())
            .map(|cell| {
                if cell.contains(' ') {
                    return Err(SolveError::failed(format!(
                        "cell {cell:?} holds more than one number"
                    )));
                }
                cell.parse()
                    .map_err(|e| SolveError::failed(format!("number {cell:?}: {e}")))
            })
            .collect()
    }

    /// Numbers read top to bottom along each column, rightmost column first.
    ///
    /// Columns without digits are skipped.
    fn column_numbers(&self) -> Result<Vec<u64>, SolveError> {
        let mut numbers = Vec::with_capacity(self.width);
        for col in (0..self.width).rev() {
            let digits = self
                .cells
                .iter()
                .filter_map(|cell| cell.as_bytes().get(col))
                .filter(|b| b.is_ascii_digit());
            let mut number = None;
            for &b in digits {
                let value = number
                    .unwrap_or(0u64)
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(u64::from(b - b'0')))
                    .ok_or_else(|| {
                        SolveError::failed(format!("number in column {col} overflows"))
                    })?;
                number = Some(value);
            }
            numbers.extend(number);
        }
        Ok(numbers)
    }
}

fn parse_worksheet(input: &str) -> Result<Vec<Problem<'_>>, ParseError> {
    let mut lines: Vec<&str> = input.lines().collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    let (operators, rows) = lines
        .split_last()
        .ok_or_else(|| ParseError::MissingData("empty worksheet".into()))?;

    if let Some((row, bad)) = rows.iter().enumerate().find_map(|(i, row)| {
        row.chars()
            .find(|c| !c.is_ascii_digit() && *c != ' ')
            .map(|c| (i + 1, c))
    }) {
        return Err(ParseError::InvalidFormat(format!(
            "(line {row}) unexpected character {bad:?} in number row"
        )));
    }
    if let Some(bad) = operators.chars().find(|c| !matches!(c, '+' | '*' | ' ')) {
        return Err(ParseError::InvalidFormat(format!(
            "unexpected character {bad:?} in operator row"
        )));
    }

    let width = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let is_blank = |col: usize| {
        lines
            .iter()
            .all(|line| line.as_bytes().get(col).is_none_or(|&b| b == b' '))
    };

    let mut problems = Vec::new();
    let mut col = 0;
    while col < width {
        if is_blank(col) {
            col += 1;
            continue;
        }
        let start = col;
        while col < width && !is_blank(col) {
            col += 1;
        }
        problems.push(problem(rows, operators, start, col)?);
    }
    Ok(problems)
}

fn slice(line: &str, start: usize, end: usize) -> &str {
    line.get(start.min(line.len())..end.min(line.len()))
        .unwrap_or_default()
}

fn problem<'a>(
    rows: &[&'a str],
    operators: &str,
    start: usize,
    end: usize,
) -> Result<Problem<'a>, ParseError> {
    let operation = match slice(operators, start, end).trim() {
        "+" => Operation::Add,
        "*" => Operation::Multiply,
        "" => {
            return Err(ParseError::MissingData(format!(
                "no operator for the problem in columns {start}..{end}"
            )));
        }
        other => {
            return Err(ParseError::InvalidFormat(format!(
                "expected a single operator in columns {start}..{end}, got {other:?}"
            )));
        }
    };

    Ok(Problem {
        cells: rows.iter().map(|&row| slice(row, start, end)).collect(),
        width: end - start,
        operation,
    })
}

fn grand_total<'a>(
    problems: &[Problem<'a>],
    numbers: impl Fn(&Problem<'a>) -> Result<Vec<u64>, SolveError>,
) -> Result<u64, SolveError> {
    problems.iter().try_fold(0u64, |total, problem| {
        problem
            .operation
            .apply(numbers(problem)?)
            .and_then(|result| total.checked_add(result))
            .ok_or_else(|| SolveError::failed("problem without numbers or arithmetic overflow"))
    })
}

impl DayParser for Solver {
    type Input<'a> = Vec<Problem<'a>>;

    fn parse(input: &str) -> Result<Self::Input<'_>, ParseError> {
        parse_worksheet(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(problems: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(grand_total(problems, Problem::row_numbers)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(problems: &mut Self::Input<'_>) -> Result<String, SolveError> {
        Ok(grand_total(problems, Problem::column_numbers)?.to_string())
    }
}
