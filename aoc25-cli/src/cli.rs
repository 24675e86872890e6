//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Parallelization level for solver execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// No parallelization; run every day and part in order
    Sequential,
    /// Parallelize across days; parts of a day share one parsed input (default)
    #[default]
    Day,
    /// Parallelize across every day/part pair; each part parses its own input
    Part,
}

/// Advent of Code 2025 solution runner
#[derive(Parser, Debug)]
#[command(name = "aoc25", about = "Run the Advent of Code 2025 solutions", version)]
pub struct Args {
    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Only run days carrying every one of these tags (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `dayNN.txt` puzzle inputs
    #[arg(long, env = "AOC25_INPUT_DIR", default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, day, or part
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["aoc25"]).unwrap();
        assert_eq!(args.day, None);
        assert_eq!(args.part, None);
        assert!(args.tags.is_empty());
        assert_eq!(args.parallelize_by, ParallelizeBy::Day);
        assert!(!args.quiet);
    }

    #[test]
    fn test_filters() {
        let args = Args::try_parse_from([
            "aoc25",
            "--day",
            "8",
            "-p",
            "2",
            "--tags",
            "graph,union-find",
            "--input-dir",
            "/tmp/aoc",
            "--parallelize-by",
            "part",
            "-q",
        ])
        .unwrap();
        assert_eq!(args.day, Some(8));
        assert_eq!(args.part, Some(2));
        assert_eq!(args.tags, vec!["graph", "union-find"]);
        assert_eq!(args.input_dir, PathBuf::from("/tmp/aoc"));
        assert_eq!(args.parallelize_by, ParallelizeBy::Part);
        assert!(args.quiet);
    }

    #[test]
    fn test_rejects_out_of_calendar_values() {
        assert!(Args::try_parse_from(["aoc25", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc25", "--day", "0"]).is_err());
        assert!(Args::try_parse_from(["aoc25", "--part", "3"]).is_err());
        assert!(Args::try_parse_from(["aoc25", "--parallelize-by", "year"]).is_err());
    }
}
