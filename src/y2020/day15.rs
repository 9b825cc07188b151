use anyhow::Context;

use crate::{Answer, Result};

fn parse(input: &str) -> Result<Vec<usize>> {
    input
        .trim()
        .split(',')
        .map(|s| s.trim().parse().with_context(|| format!("bad number {:?}", s)))
        .collect()
}

/// The `target`-th number spoken (1-based).
fn spoken(start: &[usize], target: usize) -> usize {
    if target <= start.len() {
        return start[target - 1];
    }
    // last[n] = 1-based turn on which n was last spoken, 0 if never.
    let mut last = vec![0u32; target.max(start.iter().max().map_or(0, |&m| m + 1))];
    for (turn, &n) in start[..start.len() - 1].iter().enumerate() {
        last[n] = turn as u32 + 1;
    }
    let mut prev = start[start.len() - 1];
    for turn in start.len()..target {
        let next = match last[prev] {
            0 => 0,
            t => turn - t as usize,
        };
        last[prev] = turn as u32;
        prev = next;
    }
    prev
}

pub fn task1(input: &str) -> Result<Answer> {
    let start = parse(input)?;
    anyhow::ensure!(!start.is_empty(), "no starting numbers");
    Ok(spoken(&start, 2020).into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let start = parse(input)?;
    anyhow::ensure!(!start.is_empty(), "no starting numbers");
    Ok(spoken(&start, 30_000_000).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn examples() {
        assert_eq!(spoken(&[0, 3, 6], 4), 0);
        assert_eq!(spoken(&[0, 3, 6], 10), 0);
        assert_eq!(task1("0,3,6").unwrap(), 436.into());
        assert_eq!(task1("1,3,2").unwrap(), 1.into());
        assert_eq!(task1("3,1,2\n").unwrap(), 1836.into());
    }
}
