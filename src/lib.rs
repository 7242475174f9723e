/*
 * Shared plumbing for the day binaries: input loading, answer printing and
 * debug logging. Puzzle logic lives in `src/bin/`, reusable bits in
 * `helpers.rs`.
 */
use std::fs;
use std::path::Path;

pub mod helpers;

pub const ANSI_ITALIC: &str = "\x1b[3m";
pub const ANSI_BOLD: &str = "\x1b[1m";
pub const ANSI_RESET: &str = "\x1b[0m";

/// Runs one part of a puzzle against `input` and prints its answer together
/// with the time it took.
///
/// The solver must return `Result<Option<T>, E>`: `Ok(None)` means the input
/// has no answer, `Err` means the input could not be processed.
#[macro_export]
macro_rules! solve {
    ($part:expr, $solver:ident, $input:expr) => {{
        use std::fmt::Display;
        use std::time::Instant;
        use $crate::{ANSI_BOLD, ANSI_ITALIC, ANSI_RESET};

        fn print_result<T: Display, E: Display>(
            func: impl FnOnce(&str) -> Result<Option<T>, E>,
            input: &str,
        ) {
            let timer = Instant::now();
            let result = func(input);
            let elapsed = timer.elapsed();
            match result {
                Ok(Some(result)) => {
                    println!(
                        "{} {}(elapsed: {:.2?}){}",
                        result, ANSI_ITALIC, elapsed, ANSI_RESET
                    );
                }
                Ok(None) => {
                    println!("not solved.")
                }
                Err(err) => {
                    println!("error: {err}")
                }
            }
        }

        println!("🎄 {}Part {}{} 🎄", ANSI_BOLD, $part, ANSI_RESET);
        print_result($solver, $input);
    }};
}

/// `println!` that only prints in debug builds.
#[macro_export]
macro_rules! debugln {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            println!($($arg)*);
        }
    };
}

/// Reads `src/{folder}/{day:02}.txt`.
///
/// Panics if the file is missing: every day needs its input to do anything.
pub fn read_file(folder: &str, day: u8) -> String {
    let filepath = Path::new("src").join(folder).join(format!("{day:02}.txt"));
    fs::read_to_string(&filepath)
        .unwrap_or_else(|err| panic!("could not open {}: {err}", filepath.display()))
}

fn parse_time(val: &str, postfix: &str) -> Option<f64> {
    val.split(postfix).next()?.trim().parse().ok()
}

/// Sums the `(elapsed: ...)` timings printed by [`solve!`], in milliseconds.
pub fn parse_exec_time(output: &str) -> f64 {
    output
        .lines()
        .filter_map(|line| line.split("(elapsed: ").nth(1))
        .filter_map(|timing| {
            // `contains` rather than `ends_with`: the line may end in ANSI
            // escape sequences.
            if timing.contains("ns)") {
                // below rounding precision
                Some(0_f64)
            } else if timing.contains("µs)") {
                parse_time(timing, "µs").map(|t| t / 1000_f64)
            } else if timing.contains("ms)") {
                parse_time(timing, "ms")
            } else if timing.contains("s)") {
                parse_time(timing, "s").map(|t| t * 1000_f64)
            } else {
                None
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exec_time() {
        assert_eq!(
            parse_exec_time(&format!(
                "🎄 Part 1 🎄\n0 {ANSI_ITALIC}(elapsed: 74.13ns){ANSI_RESET}\n🎄 Part 2 🎄\n0 {ANSI_ITALIC}(elapsed: 50.00ns){ANSI_RESET}"
            )),
            0_f64
        );

        assert_eq!(
            parse_exec_time("🎄 Part 1 🎄\n0 (elapsed: 755µs)\n🎄 Part 2 🎄\n0 (elapsed: 700µs)"),
            1.455_f64
        );

        assert_eq!(
            parse_exec_time("🎄 Part 1 🎄\n0 (elapsed: 70µs)\n🎄 Part 2 🎄\n0 (elapsed: 1.45ms)"),
            1.52_f64
        );

        assert_eq!(
            parse_exec_time(
                "🎄 Part 1 🎄\n0 (elapsed: 10.3s)\n🎄 Part 2 🎄\n0 (elapsed: 100.50ms)"
            ),
            10400.50_f64
        );
    }

    #[test]
    fn test_parse_exec_time_ignores_unsolved_and_errors() {
        assert_eq!(
            parse_exec_time("🎄 Part 1 🎄\nnot solved.\n🎄 Part 2 🎄\nerror: line 3: bad"),
            0_f64
        );
    }
}
