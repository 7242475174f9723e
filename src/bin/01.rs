#![doc = include_str!("../puzzles/01.md")]

use std::collections::HashSet;
use std::iter;

use advent_of_code_2018::{
    debugln,
    helpers::parse::{self, LineError},
};
use itertools::Itertools;

/// One signed frequency change, e.g. `+7` or `-3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Change(pub i64);

fn parse_changes(input: &str) -> Result<Vec<Change>, LineError> {
    parse::lines(input, Change::parser)
}

/// Cycles through `changes` starting from frequency 0 and returns the first
/// frequency reached twice.
///
/// Returns `None` if no frequency ever repeats, or if the frequency leaves
/// the range of `i64` first. With a non-zero drift per pass every value only
/// ever moves further away after enough passes, so the search is bounded by
/// the spread of the first pass.
fn first_repeated_frequency(changes: &[Change]) -> Option<i64> {
    if changes.is_empty() {
        return None;
    }

    let mut first_pass = Vec::with_capacity(changes.len());
    let Some(drift) = changes.iter().try_fold(0_i64, |frequency, change| {
        let frequency = frequency.checked_add(change.0)?;
        first_pass.push(frequency);
        Some(frequency)
    }) else {
        debugln!("frequency overflows during the first pass");
        return None;
    };

    let (lowest, highest) = iter::once(0)
        .chain(first_pass)
        .minmax()
        .into_option()?;

    // Widened so the spread of any two `i64`s fits.
    let max_passes = match i128::from(drift) {
        0 => 2,
        drift => (i128::from(highest) - i128::from(lowest)) / drift.abs() + 2,
    };

    let mut seen = HashSet::from([0]);
    let mut frequency = 0_i64;

    for pass in 1..=max_passes {
        for change in changes {
            let Some(next) = frequency.checked_add(change.0) else {
                debugln!("frequency overflows during pass {pass}");
                return None;
            };
            frequency = next;
            if !seen.insert(frequency) {
                debugln!("{frequency} repeated during pass {pass}");
                return Some(frequency);
            }
        }
    }

    debugln!("no repeat after {max_passes} passes (drift {drift})");
    None
}

mod parsing {
    use super::*;

    use combine as c;

    use c::{ParseError, Parser, Stream};

    impl Change {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            let sign = c::choice((c::token('+').map(|_| 1), c::token('-').map(|_| -1)));

            (sign, parse::unsigned_integer::<i64, _>())
                .map(|(sign, magnitude)| Change(sign * magnitude))
        }
    }
}

/// Returns the frequency after applying every change once, or `None` if it
/// does not fit in an `i64`.
pub fn part_one(input: &str) -> Result<Option<i64>, LineError> {
    let changes = parse_changes(input)?;
    Ok(changes
        .iter()
        .try_fold(0_i64, |frequency, change| frequency.checked_add(change.0)))
}

/// Returns the first frequency the device reaches twice.
pub fn part_two(input: &str) -> Result<Option<i64>, LineError> {
    let changes = parse_changes(input)?;
    Ok(first_repeated_frequency(&changes))
}

fn main() {
    let input = &advent_of_code_2018::read_file("inputs", 1);
    advent_of_code_2018::solve!(1, part_one, input);
    advent_of_code_2018::solve!(2, part_two, input);
}
