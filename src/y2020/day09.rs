use anyhow::Context;
use proconio::input;
use proconio::source::once::OnceSource;

use crate::input::count_tokens;
use crate::{Answer, Result};

const PREAMBLE: usize = 25;

fn parse(input: &str) -> Result<Vec<i64>> {
    let n = count_tokens::<i64>(input)?;
    let mut src = OnceSource::from(input);
    input! { from &mut src, values: [i64; n] }
    Ok(values)
}

fn is_pair_sum(window: &[i64], target: i64) -> bool {
    window
        .iter()
        .enumerate()
        .any(|(i, &a)| window[i + 1..].iter().any(|&b| a != b && a + b == target))
}

fn first_invalid(values: &[i64], preamble: usize) -> Option<i64> {
    (preamble..values.len())
        .find(|&i| !is_pair_sum(&values[i - preamble..i], values[i]))
        .map(|i| values[i])
}

/// Min plus max of the first contiguous run (of at least two numbers) summing to `target`.
fn weakness(values: &[i64], target: i64) -> Option<i64> {
    let (mut lo, mut sum) = (0, 0);
    for hi in 0..values.len() {
        sum += values[hi];
        while sum > target && lo < hi {
            sum -= values[lo];
            lo += 1;
        }
        if sum == target && hi > lo {
            let run = &values[lo..=hi];
            return Some(run.iter().min()? + run.iter().max()?);
        }
    }
    None
}

pub fn task1(input: &str) -> Result<Answer> {
    let values = parse(input)?;
    let v = first_invalid(&values, PREAMBLE).context("every number is a valid sum")?;
    Ok(v.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let values = parse(input)?;
    let target = first_invalid(&values, PREAMBLE).context("every number is a valid sum")?;
    let w = weakness(&values, target).context("no contiguous run sums to the invalid number")?;
    Ok(w.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
35
20
15
25
47
40
62
55
65
95
102
117
150
182
127
219
299
277
309
576
";

    #[test]
    fn example() {
        let values = parse(EXAMPLE).unwrap();
        assert_eq!(first_invalid(&values, 5), Some(127));
        assert_eq!(weakness(&values, 127), Some(62));
    }

    #[test]
    fn non_numeric_token_is_an_error() {
        assert!(task1("35\n20\nfifteen\n").is_err());
    }
}
