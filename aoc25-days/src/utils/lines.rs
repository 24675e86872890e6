//! Line-oriented input parsing with line numbers in the error messages

use aoc25_solver::ParseError;

/// Parse every line of `input` with `parse_line`, ignoring trailing blank lines.
///
/// A failing line becomes `ParseError::InvalidFormat("(line N) <cause>")`,
/// with `N` counted from 1. Parsed values may borrow from `input`.
pub fn parse_lines<'a, T, F>(input: &'a str, parse_line: F) -> Result<Vec<T>, ParseError>
where
    F: Fn(&'a str) -> anyhow::Result<T>,
{
    input
        .trim_end()
        .lines()
        .enumerate()
        .map(|(line_idx, line)| {
            parse_line(line).map_err(|e| anyhow::anyhow!("(line {}) {}", line_idx + 1, e))
        })
        .collect::<anyhow::Result<Vec<T>>>()
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(line: &str) -> anyhow::Result<u32> {
        Ok(line.parse()?)
    }

    #[test]
    fn test_parses_every_line() {
        assert_eq!(parse_lines("1\n2\n3\n\n", number).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_error_names_the_line() {
        let err = parse_lines("1\nfoo\n3", number).unwrap_err();
        match err {
            ParseError::InvalidFormat(msg) => assert!(msg.starts_with("(line 2)"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_lines("", number).unwrap().is_empty());
    }
}
