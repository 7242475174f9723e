use std::str::FromStr;

use combine::{
    easy,
    error::StreamError,
    parser::char::digit,
    stream::StreamErrorFor,
    EasyParser, ParseError, Parser, Stream,
};
use thiserror::Error;

pub type EzParseError<'a> = easy::ParseError<&'a str>;
pub type Result<'a, T> = std::result::Result<T, EzParseError<'a>>;

/// Parses all of `s` with `parser`. Trailing input is an error.
pub fn from_str<'a, P>(s: &'a str, parser: P) -> Result<'a, P::Output>
where
    P: Parser<easy::Stream<&'a str>>,
{
    (parser, combine::eof())
        .map(|(output, _)| output)
        .easy_parse(s)
        .map(|(output, rest)| {
            debug_assert_eq!(rest, "");
            output
        })
}

/// A line of input that does not have the shape of the expected record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct LineError {
    /// 1-based line number in the input.
    pub line: usize,
    pub message: String,
}

/// Parses every non-blank line of `input` with a fresh parser from
/// `make_parser`, stopping at the first line that does not parse.
pub fn lines<'a, P, F>(
    input: &'a str,
    mut make_parser: F,
) -> std::result::Result<Vec<P::Output>, LineError>
where
    F: FnMut() -> P,
    P: Parser<easy::Stream<&'a str>>,
{
    input
        .lines()
        .enumerate()
        .map(|(index, line)| (index, line.trim_end()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| {
            from_str(line, make_parser()).map_err(|err| {
                let err = err.map_position(|p| p.translate_position(line));
                LineError {
                    line: index + 1,
                    message: err.to_string().trim_end().replace('\n', "; "),
                }
            })
        })
        .collect()
}

/// One or more ASCII digits, converted with [`FromStr`].
pub fn unsigned_integer<T, Input>() -> impl Parser<Input, Output = T>
where
    T: FromStr,
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    combine::many1::<String, _, _>(digit()).and_then(|digits: String| {
        digits
            .parse::<T>()
            .map_err(|_| StreamErrorFor::<Input>::message_static_message("integer out of range"))
    })
}

/// An optionally signed (`+` or `-`) decimal integer.
pub fn decimal_integer<T, Input>() -> impl Parser<Input, Output = T>
where
    T: FromStr,
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    let sign = combine::optional(combine::one_of(['+', '-']));
    let digits = combine::many1::<String, _, _>(digit());

    (sign, digits).and_then(|(sign, digits): (Option<char>, String)| {
        let mut text = String::with_capacity(digits.len() + 1);
        text.extend(sign);
        text.push_str(&digits);
        text.parse::<T>()
            .map_err(|_| StreamErrorFor::<Input>::message_static_message("integer out of range"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use combine::token;

    fn pair<Input>() -> impl Parser<Input, Output = (u32, u32)>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        (unsigned_integer(), token(','), unsigned_integer()).map(|(a, _, b)| (a, b))
    }

    #[test]
    fn integers() {
        #[track_caller]
        fn do_it(input: &str, expected: Option<i32>) {
            assert_eq!(from_str(input, decimal_integer::<i32, _>()).ok(), expected);
        }

        do_it("0", Some(0));
        do_it("42", Some(42));
        do_it("+42", Some(42));
        do_it("-42", Some(-42));
        do_it("", None);
        do_it("-", None);
        do_it("4 2", None);
        do_it("99999999999", None);
    }

    #[test]
    fn unsigned_rejects_sign() {
        assert_eq!(from_str("17", unsigned_integer::<u8, _>()).ok(), Some(17));
        assert!(from_str("+17", unsigned_integer::<u8, _>()).is_err());
        assert!(from_str("256", unsigned_integer::<u8, _>()).is_err());
    }

    #[test]
    fn lines_skips_blanks_and_reports_line_number() {
        let parsed = lines("1,2\n\n3,4  \n", pair).unwrap();
        assert_eq!(parsed, vec![(1, 2), (3, 4)]);

        let err = lines("1,2\n3;4\n", pair).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.to_string().starts_with("line 2: "));
    }
}
