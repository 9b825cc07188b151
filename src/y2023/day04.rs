use anyhow::Context;
use rustc_hash::FxHashSet;

use crate::input::parse_line_ints;
use crate::{Answer, Result};

/// Number of winning numbers held on each card.
fn matches(input: &str) -> Result<Vec<usize>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            let numbers = l.split_once(':').with_context(|| format!("bad card {:?}", l))?.1;
            let (winning, held) = numbers.split_once('|').with_context(|| format!("bad card {:?}", l))?;
            let winning: FxHashSet<i64> = parse_line_ints(winning).into_iter().collect();
            Ok(parse_line_ints(held).iter().filter(|&n| winning.contains(n)).count())
        })
        .collect()
}

pub fn task1(input: &str) -> Result<Answer> {
    let points: u64 = matches(input)?
        .iter()
        .filter(|&&m| m > 0)
        .map(|&m| 1u64 << (m - 1))
        .sum();
    Ok(points.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let matches = matches(input)?;
    let mut copies = vec![1u64; matches.len()];
    for (i, &m) in matches.iter().enumerate() {
        for j in i + 1..(i + 1 + m).min(matches.len()) {
            copies[j] += copies[i];
        }
    }
    Ok(copies.iter().sum::<u64>().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 13.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 30.into());
    }
}
