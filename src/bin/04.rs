#![doc = include_str!("../puzzles/04.md")]

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

use advent_of_code_2018::{
    debugln,
    helpers::parse::{self, LineError},
};
use prettytable::{format, Cell, Row, Table};
use thiserror::Error;

/// The only hour of the night in which guards fall asleep.
const WATCH_HOUR: u8 = 0;
const HOURS_PER_DAY: u8 = 24;
const MINUTES_PER_HOUR: u8 = 60;

pub type Minute = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GuardId(pub u32);

impl fmt::Display for GuardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Field order matters: the derived `Ord` is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: Minute,
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

impl Timestamp {
    pub fn in_watch_hour(&self) -> bool {
        self.hour == WATCH_HOUR
    }

    fn check(&self) -> Result<(), &'static str> {
        if !(1..=12).contains(&self.month) {
            Err("month out of range")
        } else if !(1..=31).contains(&self.day) {
            Err("day out of range")
        } else if self.hour >= HOURS_PER_DAY {
            Err("hour out of range")
        } else if self.minute >= MINUTES_PER_HOUR {
            Err("minute out of range")
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Hands the watch to another guard. Everything up to the next shift
    /// change is attributed to them.
    BeginsShift(GuardId),
    FallsAsleep,
    WakesUp,
}

/// One line of the guard log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub timestamp: Timestamp,
    pub kind: EventKind,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.timestamp)?;
        match self.kind {
            EventKind::BeginsShift(guard) => write!(f, "Guard {guard} begins shift"),
            EventKind::FallsAsleep => write!(f, "falls asleep"),
            EventKind::WakesUp => write!(f, "wakes up"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardLogError {
    #[error(transparent)]
    Parse(#[from] LineError),
    #[error("malformed event \"{event}\": {reason}")]
    MalformedEvent { event: Event, reason: &'static str },
    #[error("malformed sequence at \"{event}\": {reason}")]
    MalformedSequence { event: Event, reason: &'static str },
}

/// Parses the log and puts it in chronological order.
fn parse_events(input: &str) -> Result<Vec<Event>, LineError> {
    let mut events = parse::lines(input, Event::parser)?;
    events.sort_by_key(|event| event.timestamp);
    Ok(events)
}

/// The number of nights a guard was asleep at each minute of the watch hour.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct MinuteCounts(BTreeMap<Minute, u32>);

impl MinuteCounts {
    pub fn get(&self, minute: Minute) -> u32 {
        self.0.get(&minute).copied().unwrap_or(0)
    }

    /// Total minutes asleep over all nights.
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    /// Returns the minute the guard was most often asleep at, and how often.
    /// Ties go to the earliest minute.
    pub fn sleepiest_minute(&self) -> Option<(Minute, u32)> {
        // `max_by_key` keeps the last of equal maxima, so scan backwards.
        self.0
            .iter()
            .rev()
            .max_by_key(|&(_, &count)| count)
            .map(|(&minute, &count)| (minute, count))
    }

    fn add(&mut self, minutes: Range<Minute>) {
        for minute in minutes {
            *self.0.entry(minute).or_default() += 1;
        }
    }
}

/// Coverage table of the whole log: for each guard, how many nights they
/// were asleep at each minute of the watch hour.
///
/// Guards that never slept have no entry.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct SleepTable(BTreeMap<GuardId, MinuteCounts>);

impl SleepTable {
    /// Builds the table from a chronologically ordered log.
    ///
    /// The log must start with a shift change so that every nap has an
    /// owner. The first out of order or out of range event is an error;
    /// nothing is skipped.
    pub fn from_events(events: &[Event]) -> Result<Self, GuardLogError> {
        let mut table = Self::default();

        let Some((first, rest)) = events.split_first() else {
            return Ok(table);
        };

        first
            .timestamp
            .check()
            .map_err(|reason| GuardLogError::MalformedEvent {
                event: *first,
                reason,
            })?;

        let EventKind::BeginsShift(mut guard) = first.kind else {
            return Err(GuardLogError::MalformedSequence {
                event: *first,
                reason: "the log must start with a guard beginning a shift",
            });
        };

        let mut last = first;

        for event in rest {
            event
                .timestamp
                .check()
                .map_err(|reason| GuardLogError::MalformedEvent {
                    event: *event,
                    reason,
                })?;

            if event.timestamp < last.timestamp {
                return Err(GuardLogError::MalformedSequence {
                    event: *event,
                    reason: "event is earlier than the one before it",
                });
            }

            match event.kind {
                EventKind::FallsAsleep => {}
                EventKind::WakesUp => {
                    table.record(guard, watch_minutes(last, event));
                }
                EventKind::BeginsShift(next_guard) => {
                    // The outgoing guard never woke up, or never did anything
                    // at all, before the handover.
                    if last.kind != EventKind::WakesUp {
                        table.record(guard, handover_minutes(last, event));
                    }
                    debugln!("{guard} hands over to {next_guard}");
                    guard = next_guard;
                }
            }

            last = event;
        }

        Ok(table)
    }

    fn record(&mut self, guard: GuardId, minutes: Range<Minute>) {
        if minutes.is_empty() {
            return;
        }
        self.0.entry(guard).or_default().add(minutes);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Strategy 1: the guard with the most minutes asleep overall. Ties go to
    /// the lowest guard ID.
    pub fn sleepiest_guard(&self) -> Option<(GuardId, &MinuteCounts)> {
        self.0
            .iter()
            .rev()
            .max_by_key(|(_, counts)| counts.total())
            .map(|(&guard, counts)| (guard, counts))
    }

    /// Strategy 2: the guard and minute with the most nights asleep. Ties go
    /// to the lowest guard ID, then the earliest minute.
    pub fn most_frequent_minute(&self) -> Option<(GuardId, Minute, u32)> {
        self.0
            .iter()
            .rev()
            .filter_map(|(&guard, counts)| {
                let (minute, count) = counts.sleepiest_minute()?;
                Some((guard, minute, count))
            })
            .max_by_key(|&(_, _, count)| count)
    }

    /// Renders the table with one row per guard and one column per minute.
    pub fn to_grid(&self) -> Table {
        let mut grid = Table::new();
        grid.set_format(*format::consts::FORMAT_CLEAN);

        let mut titles = vec![Cell::new("guard")];
        titles.extend((0..MINUTES_PER_HOUR).map(|minute| Cell::new(&format!("{minute:02}"))));
        titles.push(Cell::new("total"));
        grid.set_titles(Row::new(titles));

        for (guard, counts) in &self.0 {
            let mut cells = vec![Cell::new(&guard.to_string())];
            cells.extend((0..MINUTES_PER_HOUR).map(|minute| match counts.get(minute) {
                0 => Cell::new("."),
                count => Cell::new(&count.to_string()),
            }));
            cells.push(Cell::new(&counts.total().to_string()));
            grid.add_row(Row::new(cells));
        }

        grid
    }
}

impl fmt::Display for SleepTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_grid())
    }
}

/// The minutes of the watch hour between two events.
///
/// Only spans ending inside the watch hour count. A span starting before the
/// watch hour is clipped to its first minute.
fn watch_minutes(from: &Event, until: &Event) -> Range<Minute> {
    if !until.timestamp.in_watch_hour() {
        return 0..0;
    }

    let start = if from.timestamp.in_watch_hour() {
        from.timestamp.minute
    } else {
        0
    };

    start..until.timestamp.minute
}

/// The minutes the outgoing guard is charged with at a shift change that was
/// not preceded by waking up.
///
/// A handover inside the watch hour is clipped like a wake-up. Any other
/// handover runs from the last event's minute to the handover's minute.
fn handover_minutes(last: &Event, handover: &Event) -> Range<Minute> {
    if handover.timestamp.in_watch_hour() {
        watch_minutes(last, handover)
    } else {
        last.timestamp.minute..handover.timestamp.minute
    }
}

fn sleep_table(input: &str) -> Result<SleepTable, GuardLogError> {
    let events = parse_events(input)?;
    SleepTable::from_events(&events)
}

mod parsing {
    use super::*;

    use combine as c;

    use c::{
        parser::char::{spaces, string},
        ParseError, Parser, Stream,
    };

    impl Timestamp {
        // "[1518-11-01 00:05]"
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            let date = (
                parse::unsigned_integer(),
                c::token('-'),
                parse::unsigned_integer(),
                c::token('-'),
                parse::unsigned_integer(),
            )
                .map(|(year, _, month, _, day)| (year, month, day));

            let time = (
                parse::unsigned_integer(),
                c::token(':'),
                parse::unsigned_integer(),
            )
                .map(|(hour, _, minute)| (hour, minute));

            c::between(c::token('['), c::token(']'), (date, spaces(), time)).map(
                |((year, month, day), _, (hour, minute))| Timestamp {
                    year,
                    month,
                    day,
                    hour,
                    minute,
                },
            )
        }
    }

    impl EventKind {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            let begins_shift = (
                string("Guard #"),
                parse::unsigned_integer(),
                string(" begins shift"),
            )
                .map(|(_, id, _)| EventKind::BeginsShift(GuardId(id)));

            let falls_asleep = string("falls asleep").map(|_| EventKind::FallsAsleep);

            let wakes_up = string("wakes up").map(|_| EventKind::WakesUp);

            c::choice((begins_shift, falls_asleep, wakes_up))
        }
    }

    impl Event {
        // "[1518-11-01 00:00] Guard #10 begins shift"
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            (Timestamp::parser(), spaces(), EventKind::parser())
                .map(|(timestamp, _, kind)| Event { timestamp, kind })
        }
    }
}

/// Returns the ID of the guard who slept the most multiplied by the minute
/// they were most often asleep at.
pub fn part_one(input: &str) -> Result<Option<u64>, GuardLogError> {
    let table = sleep_table(input)?;

    let Some((guard, counts)) = table.sleepiest_guard() else {
        return Ok(None);
    };
    let Some((minute, count)) = counts.sleepiest_minute() else {
        return Ok(None);
    };
    debugln!(
        "{guard} slept {} minutes, most often at 00:{minute:02} ({count} times)",
        counts.total()
    );

    Ok(Some(u64::from(guard.0) * u64::from(minute)))
}

/// Returns the ID of the guard most frequently asleep on the same minute
/// multiplied by that minute.
pub fn part_two(input: &str) -> Result<Option<u64>, GuardLogError> {
    let table = sleep_table(input)?;

    let Some((guard, minute, count)) = table.most_frequent_minute() else {
        return Ok(None);
    };
    debugln!("{guard} was asleep at 00:{minute:02} on {count} nights");

    Ok(Some(u64::from(guard.0) * u64::from(minute)))
}

fn main() {
    let mut args = pico_args::Arguments::from_env();
    let show_grid = args.contains("--grid");

    let input = &advent_of_code_2018::read_file("inputs", 4);

    if show_grid {
        match sleep_table(input) {
            Ok(table) if table.is_empty() => println!("nobody slept"),
            Ok(table) => println!("{table}"),
            Err(err) => println!("error: {err}"),
        }
    }

    advent_of_code_2018::solve!(1, part_one, input);
    advent_of_code_2018::solve!(2, part_two, input);
}
