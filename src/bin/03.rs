#![doc = include_str!("../puzzles/03.md")]

use std::fmt;

use advent_of_code_2018::{
    debugln,
    helpers::parse::{self, LineError},
};
use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClaimId(pub u32);

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A rectangle of fabric claimed by one elf, in square inches from the top
/// left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Claim {
    pub id: ClaimId,
    pub left: usize,
    pub top: usize,
    pub width: usize,
    pub height: usize,
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {},{}: {}x{}",
            self.id, self.left, self.top, self.width, self.height
        )
    }
}

impl Claim {
    /// Returns `(row, col)` of every square inch inside the claim.
    pub fn squares(&self) -> impl Iterator<Item = (usize, usize)> {
        let rows = self.top..self.top + self.height;
        let cols = self.left..self.left + self.width;
        rows.cartesian_product(cols)
    }

    fn right(&self) -> usize {
        self.left + self.width
    }

    fn bottom(&self) -> usize {
        self.top + self.height
    }
}

/// The whole sheet of fabric, with the number of claims covering each square
/// inch.
struct Fabric(grid::Grid<u16>);

impl Fabric {
    pub fn from_claims(claims: &[Claim]) -> Self {
        // `Grid` does not like being empty.
        let rows = claims.iter().map(Claim::bottom).max().unwrap_or(0).max(1);
        let cols = claims.iter().map(Claim::right).max().unwrap_or(0).max(1);

        let mut grid = grid::Grid::new(rows, cols);
        for claim in claims {
            for (row, col) in claim.squares() {
                grid[row][col] += 1;
            }
        }

        Self(grid)
    }

    /// Returns the number of square inches covered by two or more claims.
    pub fn overlapping_squares(&self) -> usize {
        self.0.iter().filter(|&&count| count > 1).count()
    }

    /// Returns true if no other claim covers any part of `claim`.
    pub fn is_free(&self, claim: &Claim) -> bool {
        claim
            .squares()
            .all(|(row, col)| self.0.get(row, col) == Some(&1))
    }
}

fn parse_claims(input: &str) -> Result<Vec<Claim>, LineError> {
    parse::lines(input, Claim::parser)
}

mod parsing {
    use super::*;

    use combine as c;

    use c::{parser::char::spaces, ParseError, Parser, Stream};

    impl Claim {
        // "#123 @ 3,2: 5x4"
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            let id = (c::token('#'), parse::unsigned_integer()).map(|(_, id)| ClaimId(id));

            let position = (
                parse::unsigned_integer(),
                c::token(','),
                parse::unsigned_integer(),
            )
                .map(|(left, _, top)| (left, top));

            let size = (
                parse::unsigned_integer(),
                c::token('x'),
                parse::unsigned_integer(),
            )
                .map(|(width, _, height)| (width, height));

            (
                id,
                spaces(),
                c::token('@'),
                spaces(),
                position,
                c::token(':'),
                spaces(),
                size,
            )
                .map(|(id, _, _, _, (left, top), _, _, (width, height))| Claim {
                    id,
                    left,
                    top,
                    width,
                    height,
                })
        }
    }
}

/// Returns the number of square inches of fabric within two or more claims.
pub fn part_one(input: &str) -> Result<Option<usize>, LineError> {
    let claims = parse_claims(input)?;
    let fabric = Fabric::from_claims(&claims);
    Ok(Some(fabric.overlapping_squares()))
}

/// Returns the ID of the only claim that doesn't overlap any other claim.
pub fn part_two(input: &str) -> Result<Option<u32>, LineError> {
    let claims = parse_claims(input)?;
    let fabric = Fabric::from_claims(&claims);

    let free = claims
        .iter()
        .filter(|claim| fabric.is_free(claim))
        .inspect(|claim| debugln!("free claim: {claim}"))
        .collect::<Vec<_>>();

    if free.len() > 1 {
        debugln!("{} free claims, taking the first", free.len());
    }

    Ok(free.first().map(|claim| claim.id.0))
}

fn main() {
    let input = &advent_of_code_2018::read_file("inputs", 3);
    advent_of_code_2018::solve!(1, part_one, input);
    advent_of_code_2018::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_claim() {
        let claims = parse_claims("#123 @ 3,2: 5x4\n").unwrap();
        assert_eq!(
            claims,
            vec![Claim {
                id: ClaimId(123),
                left: 3,
                top: 2,
                width: 5,
                height: 4,
            }]
        );
        assert_eq!(claims[0].to_string(), "#123 @ 3,2: 5x4");
    }

    #[test]
    fn test_malformed_claim() {
        let err = parse_claims("#1 @ 1,3: 4x4\n#2 @ 3,1 4x4\n").unwrap_err();
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_squares() {
        let claim = Claim {
            id: ClaimId(1),
            left: 1,
            top: 2,
            width: 2,
            height: 1,
        };
        assert_eq!(claim.squares().collect::<Vec<_>>(), vec![(2, 1), (2, 2)]);
    }

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2018::read_file("examples", 3);
        assert_eq!(part_one(&input), Ok(Some(4)));
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code_2018::read_file("examples", 3);
        assert_eq!(part_two(&input), Ok(Some(3)));
    }

    #[test]
    fn test_no_claims() {
        assert_eq!(part_one(""), Ok(Some(0)));
        assert_eq!(part_two(""), Ok(None));
    }

    #[test]
    fn test_everything_overlaps() {
        let input = "#1 @ 0,0: 2x2\n#2 @ 1,1: 2x2\n";
        assert_eq!(part_one(input), Ok(Some(1)));
        assert_eq!(part_two(input), Ok(None));
    }
}
