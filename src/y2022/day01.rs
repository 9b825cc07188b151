use anyhow::Context;

use crate::input::paragraphs;
use crate::{Answer, Result};

/// Calories carried per elf, largest first.
fn totals(input: &str) -> Result<Vec<u64>> {
    let mut totals = paragraphs(input)
        .iter()
        .map(|block| {
            block
                .lines()
                .map(|l| l.trim().parse::<u64>().with_context(|| format!("bad calories {:?}", l)))
                .sum::<Result<u64>>()
        })
        .collect::<Result<Vec<_>>>()?;
    totals.sort_unstable_by(|a, b| b.cmp(a));
    Ok(totals)
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(totals(input)?.first().copied().unwrap_or(0).into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(totals(input)?.iter().take(3).sum::<u64>().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
1000
2000
3000

4000

5000
6000

7000
8000
9000

10000
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 24000.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 45000.into());
    }
}
