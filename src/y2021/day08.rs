use anyhow::{Context, bail};

use crate::{Answer, Result};

/// Segment sets as bitmasks over `a..=g`.
struct Entry {
    patterns: Vec<u8>,
    outputs: Vec<u8>,
}

fn mask(word: &str) -> Result<u8> {
    word.bytes().try_fold(0u8, |m, b| match b {
        b'a'..=b'g' => Ok(m | 1 << (b - b'a')),
        _ => bail!("bad segment {:?} in {:?}", b as char, word),
    })
}

fn parse(input: &str) -> Result<Vec<Entry>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            let (patterns, outputs) = line.split_once('|').context("missing '|'")?;
            Ok(Entry {
                patterns: patterns.split_whitespace().map(mask).collect::<Result<_>>()?,
                outputs: outputs.split_whitespace().map(mask).collect::<Result<_>>()?,
            })
        })
        .collect()
}

fn decode(entry: &Entry) -> Result<u64> {
    let by_len = |n: u32| {
        entry
            .patterns
            .iter()
            .copied()
            .find(|p| p.count_ones() == n)
            .with_context(|| format!("no pattern with {} segments", n))
    };
    let one = by_len(2)?;
    let four = by_len(4)?;
    let digit = |p: u8| -> Result<u64> {
        let contains = |q: u8| p & q == q;
        Ok(match p.count_ones() {
            2 => 1,
            3 => 7,
            4 => 4,
            7 => 8,
            5 if contains(one) => 3,
            5 if (p & four).count_ones() == 3 => 5,
            5 => 2,
            6 if contains(four) => 9,
            6 if contains(one) => 0,
            6 => 6,
            n => bail!("pattern with {} segments", n),
        })
    };
    entry.outputs.iter().try_fold(0, |acc, &p| Ok(acc * 10 + digit(p)?))
}

pub fn task1(input: &str) -> Result<Answer> {
    let count = parse(input)?
        .iter()
        .flat_map(|e| &e.outputs)
        .filter(|p| matches!(p.count_ones(), 2 | 3 | 4 | 7))
        .count();
    Ok(count.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let mut sum = 0;
    for entry in parse(input)? {
        sum += decode(&entry)?;
    }
    Ok(sum.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str =
        "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf\n";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 0.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 5353.into());
    }

    #[test]
    fn easy_digits_are_counted() {
        let line = "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | ab dab eafb acedgfb\n";
        assert_eq!(task1(line).unwrap(), 4.into());
        assert_eq!(task2(line).unwrap(), 1748.into());
    }
}
