use rustc_hash::FxHashMap;

use crate::input::parse_line_ints;
use crate::{Answer, Result};

fn blink(stone: u64) -> Vec<u64> {
    if stone == 0 {
        return vec![1];
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        vec![stone / half, stone % half]
    } else {
        vec![stone * 2024]
    }
}

/// Stone order never matters, so only the count of each engraving is tracked.
fn stones_after(input: &str, blinks: usize) -> u64 {
    let mut counts: FxHashMap<u64, u64> = FxHashMap::default();
    for s in parse_line_ints(input) {
        *counts.entry(s as u64).or_default() += 1;
    }
    for _ in 0..blinks {
        let mut next = FxHashMap::default();
        for (&s, &n) in &counts {
            for t in blink(s) {
                *next.entry(t).or_default() += n;
            }
        }
        counts = next;
    }
    counts.values().sum()
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(stones_after(input, 25).into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(stones_after(input, 75).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        assert_eq!(stones_after("125 17", 6), 22);
        assert_eq!(task1("125 17\n").unwrap(), 55312.into());
    }
}
