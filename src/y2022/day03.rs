use anyhow::{Context, bail, ensure};
use itertools::Itertools;

use crate::{Answer, Result};

fn items(s: &str) -> Result<u64> {
    s.bytes().try_fold(0u64, |set, b| {
        let prio = match b {
            b'a'..=b'z' => b - b'a' + 1,
            b'A'..=b'Z' => b - b'A' + 27,
            _ => bail!("bad item {:?}", b as char),
        };
        Ok(set | 1 << prio)
    })
}

fn priority(set: u64) -> Result<u32> {
    ensure!(set.count_ones() == 1, "expected exactly one shared item");
    Ok(set.trailing_zeros())
}

fn sacks(input: &str) -> impl Iterator<Item = &str> {
    input.lines().map(str::trim).filter(|l| !l.is_empty())
}

pub fn task1(input: &str) -> Result<Answer> {
    let mut sum = 0;
    for sack in sacks(input) {
        ensure!(sack.len() % 2 == 0, "odd rucksack {:?}", sack);
        let (a, b) = sack.split_at(sack.len() / 2);
        sum += priority(items(a)? & items(b)?)?;
    }
    Ok(sum.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let mut sum = 0;
    for group in &sacks(input).chunks(3) {
        let common = group.map(items).reduce(|a, b| Ok(a? & b?)).context("empty group")??;
        sum += priority(common)?;
    }
    Ok(sum.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 157.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 70.into());
    }
}
