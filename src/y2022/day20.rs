use anyhow::{Context, ensure};

use crate::input::parse_line_ints;
use crate::{Answer, Result};

const KEY: i64 = 811_589_153;

fn parse(input: &str) -> Result<Vec<i64>> {
    let v: Vec<i64> = input.lines().flat_map(parse_line_ints).collect();
    ensure!(v.len() >= 2, "need at least two numbers");
    ensure!(v.iter().filter(|&&x| x == 0).count() == 1, "expected exactly one zero");
    Ok(v)
}

fn grove_sum(values: &[i64], rounds: usize) -> Result<i64> {
    let n = values.len();
    // order[k] is the original index of the number now at position k.
    let mut order: Vec<usize> = (0..n).collect();
    for _ in 0..rounds {
        for (i, &v) in values.iter().enumerate() {
            let pos = order.iter().position(|&x| x == i).context("lost a number")?;
            order.remove(pos);
            let to = (pos as i64 + v).rem_euclid(n as i64 - 1) as usize;
            order.insert(to, i);
        }
    }
    let zero = order
        .iter()
        .position(|&x| values[x] == 0)
        .context("no zero")?;
    Ok([1000, 2000, 3000]
        .iter()
        .map(|k| values[order[(zero + k) % n]])
        .sum())
}

pub fn task1(input: &str) -> Result<Answer> {
    let values = parse(input)?;
    Ok(grove_sum(&values, 1)?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let values: Vec<i64> = parse(input)?.iter().map(|v| v * KEY).collect();
    Ok(grove_sum(&values, 10)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "1\n2\n-3\n3\n-2\n0\n4\n";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 3.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 1623178306.into());
    }
}
