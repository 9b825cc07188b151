use crate::input::parse_line_ints;
use crate::{Answer, Result};

/// Cheapest alignment over every candidate position.
fn cheapest(input: &str, cost: impl Fn(i64) -> i64) -> Result<i64> {
    let crabs = parse_line_ints(input);
    let (lo, hi) = match (crabs.iter().min(), crabs.iter().max()) {
        (Some(&lo), Some(&hi)) => (lo, hi),
        _ => anyhow::bail!("no crabs"),
    };
    Ok((lo..=hi)
        .map(|target| crabs.iter().map(|&c| cost((c - target).abs())).sum())
        .min()
        .unwrap_or(0))
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(cheapest(input, |d| d)?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(cheapest(input, |d| d * (d + 1) / 2)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "16,1,2,0,4,2,7,1,2,14";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 37.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 168.into());
    }
}
