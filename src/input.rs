//! # Puzzle input helpers
//!
//! Puzzle text always arrives as UTF-8 lines. Most days only need
//! [`parse_line_ints`] on top of `str::lines`; the rest is a handful of
//! conveniences for blank-line separated sections and screen rendering.

use std::io::{BufRead, Read};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static INT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?\d+").unwrap());

/// A numeric token in the input could not be represented.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid integer {token:?} on line {line}")]
pub struct ParseError {
    pub line: usize,
    pub token: String,
}

/// Reads every line from `reader`, without line terminators.
pub fn read_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    reader.lines().collect()
}

/// Reads the whole of standard input.
pub fn read_stdin() -> std::io::Result<String> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

/// Extracts every signed integer in `line`, in order.
///
/// Tokens are `-?\d+`, so `"x=-3..5"` yields `[-3, 5]`.
///
/// # Panics
/// Panics on a token that overflows `i64`. Use [`try_parse_line_ints`] to
/// handle that case.
pub fn parse_line_ints(line: &str) -> Vec<i64> {
    try_parse_line_ints(line).unwrap_or_else(|e| panic!("{}", e))
}

/// Fallible version of [`parse_line_ints`].
pub fn try_parse_line_ints(line: &str) -> Result<Vec<i64>, ParseError> {
    INT_RE
        .find_iter(line)
        .map(|m| {
            m.as_str().parse().map_err(|_| ParseError {
                line: 0,
                token: m.as_str().to_string(),
            })
        })
        .collect()
}

/// Counts the whitespace-separated tokens of `input`, checking that each one
/// parses as `T`. proconio's `input!` panics on a token it cannot read, so
/// run this before handing the text to it.
pub fn count_tokens<T: FromStr>(input: &str) -> Result<usize, ParseError> {
    let mut n = 0;
    for (i, line) in input.lines().enumerate() {
        for token in line.split_whitespace() {
            token.parse::<T>().map_err(|_| ParseError {
                line: i + 1,
                token: token.to_string(),
            })?;
            n += 1;
        }
    }
    Ok(n)
}

/// Extracts the integers of every line. Lines without integers produce an
/// empty row.
pub fn parse_ints<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Vec<i64>>, ParseError> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            try_parse_line_ints(line.as_ref()).map_err(|e| ParseError { line: i + 1, ..e })
        })
        .collect()
}

/// Splits the input on blank lines.
pub fn paragraphs(input: &str) -> Vec<&str> {
    let input = input.trim_end_matches(['\n', '\r']);
    let mut ret = vec![];
    let mut start = 0;
    let mut offset = 0;
    for line in input.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']).is_empty() {
            if offset > start {
                ret.push(input[start..offset].trim_end_matches(['\n', '\r']));
            }
            start = offset + line.len();
        }
        offset += line.len();
    }
    if offset > start {
        ret.push(input[start..].trim_end_matches(['\n', '\r']));
    }
    ret
}

/// Renders a monochrome screen, one text row per pixel row.
pub fn render_screen(screen: &[Vec<bool>]) -> String {
    screen
        .iter()
        .map(|row| {
            row.iter()
                .map(|&p| if p { '█' } else { '░' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ints_are_signed_and_ordered() {
        assert_eq!(
            parse_line_ints("target area: x=20..30, y=-10..-5"),
            vec![20, 30, -10, -5]
        );
        assert!(parse_line_ints("no numbers").is_empty());
    }

    #[test]
    fn overflow_reports_line() {
        let err = parse_ints(&["1 2", "99999999999999999999"]).unwrap_err();
        assert_eq!(err.line, 2);
    }

    #[test]
    fn count_tokens_rejects_non_numbers() {
        assert_eq!(count_tokens::<u32>("199\n200 208\n"), Ok(3));
        let err = count_tokens::<u32>("199\n2OO\n").unwrap_err();
        assert_eq!((err.line, err.token.as_str()), (2, "2OO"));
        assert!(count_tokens::<u32>("-1\n").is_err());
    }

    #[test]
    fn read_lines_drops_terminators() {
        let lines = read_lines("a\r\nbb\nccc".as_bytes()).unwrap();
        assert_eq!(lines, vec!["a", "bb", "ccc"]);
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let p = paragraphs("1\n2\n\n3\n\n\n4\n");
        assert_eq!(p, vec!["1\n2", "3", "4"]);
    }

    #[test]
    fn screen_uses_blocks() {
        let s = render_screen(&[vec![true, false], vec![false, true]]);
        assert_eq!(s, "█░\n░█");
    }
}
