use anyhow::Context;

use crate::{Answer, Result};

const WORDS: [&str; 9] = ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];

/// The digit starting at byte `i`, if any. Spelled digits may overlap ("eightwo").
fn digit_at(line: &str, i: usize, spelled: bool) -> Option<u32> {
    let rest = &line.as_bytes()[i..];
    if rest[0].is_ascii_digit() {
        return Some((rest[0] - b'0') as u32);
    }
    if spelled {
        return WORDS
            .iter()
            .position(|w| rest.starts_with(w.as_bytes()))
            .map(|k| k as u32 + 1);
    }
    None
}

fn calibration(input: &str, spelled: bool) -> Result<u32> {
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| {
            let mut digits = (0..l.len()).filter_map(|i| digit_at(l, i, spelled));
            let first = digits.next().with_context(|| format!("no digit in {:?}", l))?;
            let last = digits.last().unwrap_or(first);
            Ok(first * 10 + last)
        })
        .sum()
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(calibration(input, false)?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(calibration(input, true)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
1abc2
pqr3stu8vwx
a1b2c3d4e5f
treb7uchet
";

    const SPELLED: &str = "\
two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 142.into());
        assert_eq!(task2(SPELLED).unwrap(), 281.into());
        assert!(task1(SPELLED).is_err());
    }

    #[test]
    fn overlapping_words() {
        assert_eq!(task2("eightwo").unwrap(), 82.into());
    }
}
