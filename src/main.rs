/*
 * Runs every day's solution (or just `--day N`) in release mode and reports
 * the total time spent solving.
 */
use std::ops::RangeInclusive;
use std::process::{self, Command};

use advent_of_code_2018::{parse_exec_time, ANSI_BOLD, ANSI_ITALIC, ANSI_RESET};

const DAYS: RangeInclusive<u8> = 1..=4;

fn days_to_run() -> Result<RangeInclusive<u8>, String> {
    let mut args = pico_args::Arguments::from_env();

    let day: Option<u8> = args
        .opt_value_from_str("--day")
        .map_err(|err| err.to_string())?;

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(format!("unexpected arguments: {remaining:?}"));
    }

    match day {
        None => Ok(DAYS),
        Some(day) if DAYS.contains(&day) => Ok(day..=day),
        Some(day) => Err(format!("no solution for day {day}")),
    }
}

fn main() {
    let days = days_to_run().unwrap_or_else(|err| {
        eprintln!("error: {err}");
        process::exit(1);
    });

    let total: f64 = days
        .map(|day| {
            let day = format!("{day:02}");

            println!("----------");
            println!("{ANSI_BOLD}| Day {day} |{ANSI_RESET}");
            println!("----------");

            let output = Command::new("cargo")
                .args(["run", "--release", "--bin", &day])
                .output();

            match output {
                Ok(output) => {
                    let stdout = String::from_utf8_lossy(&output.stdout);
                    if stdout.is_empty() {
                        println!("Not solved.");
                    } else {
                        println!("{}", stdout.trim());
                    }
                    parse_exec_time(&stdout)
                }
                Err(err) => {
                    println!("could not run day {day}: {err}");
                    0_f64
                }
            }
        })
        .sum();

    println!("{ANSI_BOLD}Total:{ANSI_RESET} {ANSI_ITALIC}{total:.2}ms{ANSI_RESET}");
}
