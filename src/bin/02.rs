#![doc = include_str!("../puzzles/02.md")]

use std::convert::Infallible;
use std::fmt;

use advent_of_code_2018::debugln;
use itertools::Itertools;

#[derive(Debug, Clone, PartialEq, Eq)]
struct BoxId(Vec<char>);

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().collect::<String>())
    }
}

/// How many times the letters of one ID repeat, as far as the checksum cares.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Repeats {
    /// Some letter appears exactly twice.
    twice: bool,
    /// Some letter appears exactly three times.
    thrice: bool,
}

impl BoxId {
    pub fn repeats(&self) -> Repeats {
        let counts = self.0.iter().counts();
        Repeats {
            twice: counts.values().any(|&count| count == 2),
            thrice: counts.values().any(|&count| count == 3),
        }
    }

    /// Returns the letters shared by both IDs if they have the same length and
    /// differ in exactly one position.
    pub fn common_letters_if_adjacent(&self, other: &Self) -> Option<String> {
        if self.0.len() != other.0.len() {
            return None;
        }

        let mut differing = self
            .0
            .iter()
            .zip(&other.0)
            .positions(|(a, b)| a != b);

        let index = differing.next()?;
        if differing.next().is_some() {
            return None;
        }

        let common = self
            .0
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, &letter)| letter)
            .collect();
        Some(common)
    }
}

fn parse_box_ids(input: &str) -> Vec<BoxId> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| BoxId(line.chars().collect()))
        .collect()
}

/// Returns the number of IDs with a letter appearing exactly twice multiplied
/// by the number of IDs with a letter appearing exactly three times.
pub fn part_one(input: &str) -> Result<Option<usize>, Infallible> {
    let repeats = parse_box_ids(input)
        .iter()
        .map(BoxId::repeats)
        .collect::<Vec<_>>();

    let twice = repeats.iter().filter(|r| r.twice).count();
    let thrice = repeats.iter().filter(|r| r.thrice).count();
    debugln!("{twice} IDs with a letter twice, {thrice} with a letter three times");

    Ok(Some(twice * thrice))
}

/// Returns the letters common to the two box IDs that differ by exactly one
/// character.
pub fn part_two(input: &str) -> Result<Option<String>, Infallible> {
    let box_ids = parse_box_ids(input);

    let common = box_ids.iter().tuple_combinations().find_map(|(a, b)| {
        let common = a.common_letters_if_adjacent(b)?;
        debugln!("{a} and {b} differ by one letter");
        Some(common)
    });

    Ok(common)
}

fn main() {
    let input = &advent_of_code_2018::read_file("inputs", 2);
    advent_of_code_2018::solve!(1, part_one, input);
    advent_of_code_2018::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeats() {
        #[track_caller]
        fn do_it(id: &str, twice: bool, thrice: bool) {
            let id = BoxId(id.chars().collect());
            assert_eq!(id.repeats(), Repeats { twice, thrice });
        }

        do_it("abcdef", false, false);
        do_it("bababc", true, true);
        do_it("abbcde", true, false);
        do_it("abcccd", false, true);
        do_it("aabcdd", true, false);
        do_it("abcdee", true, false);
        do_it("ababab", false, true);
    }

    #[test]
    fn test_common_letters() {
        let id = |s: &str| BoxId(s.chars().collect());

        assert_eq!(
            id("fghij").common_letters_if_adjacent(&id("fguij")),
            Some("fgij".to_owned())
        );
        assert_eq!(id("abcde").common_letters_if_adjacent(&id("axcye")), None);
        assert_eq!(id("abcde").common_letters_if_adjacent(&id("abcde")), None);
        assert_eq!(id("abcde").common_letters_if_adjacent(&id("abcd")), None);
    }

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2018::read_file("examples", 2);
        assert_eq!(part_one(&input), Ok(Some(12)));
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code_2018::read_file("examples", 2);
        assert_eq!(part_two(&input), Ok(Some("abcde".to_owned())));

        let input = "abcde\nfghij\nklmno\npqrst\nfguij\naxcye\nwvxyz\n";
        assert_eq!(part_two(input), Ok(Some("fgij".to_owned())));
    }

    #[test]
    fn test_no_adjacent_ids() {
        assert_eq!(part_two("abc\nxyz\n"), Ok(None));
        assert_eq!(part_two(""), Ok(None));
    }
}
