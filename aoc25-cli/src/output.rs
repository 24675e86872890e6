//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;

/// Puzzle year shown in front of every result
const YEAR: u16 = 2025;

pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Answers go to stdout, failures to stderr
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{}", answer),
            (Ok(_), false) => println!("{}", format_result(result)),
            (Err(e), true) => eprintln!("Error: {}", e),
            (Err(_), false) => eprintln!("{}", format_result(result)),
        }
    }

    /// Print a summary after all results.
    ///
    /// Shows both total compute time (sum of durations) and actual elapsed
    /// wall-clock time.
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let summary = Summary::of(results);
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!(
            "Parts: {} solved, {} failed",
            summary.successes, summary.failures
        );
        println!("Total parse time: {}", format_duration(summary.parse_time));
        println!("Total solve time: {}", format_duration(summary.solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(elapsed_time)
        );
        if !elapsed_time.is_zero() {
            let compute_secs = (summary.parse_time + summary.solve_time)
                .num_microseconds()
                .unwrap_or(0) as f64
                / 1_000_000.0;
            println!(
                "Speedup factor: {:.2}x",
                compute_secs / elapsed_time.as_secs_f64()
            );
        }
    }
}

/// Totals over the results of one run
#[derive(Debug, PartialEq, Eq)]
struct Summary {
    successes: usize,
    failures: usize,
    parse_time: TimeDelta,
    solve_time: TimeDelta,
}

impl Summary {
    fn of(results: &[SolverResult]) -> Self {
        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        Self {
            successes,
            failures: results.len() - successes,
            parse_time: results.iter().filter_map(|r| r.parse_duration).sum(),
            solve_time: results
                .iter()
                .filter(|r| r.answer.is_ok())
                .map(|r| r.solve_duration)
                .sum(),
        }
    }
}

/// `2025/08 Part 1: <answer> (parse: …, solve: …)`, or the error in place
/// of the answer
fn format_result(result: &SolverResult) -> String {
    let prefix = format!("{}/{:02} Part {}", YEAR, result.day, result.part);
    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{}: {} ({}solve: {})",
                prefix,
                answer,
                parse_timing,
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{}: Error - {}", prefix, e),
    }
}

fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
