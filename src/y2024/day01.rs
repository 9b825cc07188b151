use itertools::Itertools;
use proconio::input;
use proconio::source::once::OnceSource;

use crate::input::count_tokens;
use crate::{Answer, Result};

fn parse(input: &str) -> Result<(Vec<i64>, Vec<i64>)> {
    let tokens = count_tokens::<i64>(input)?;
    anyhow::ensure!(tokens % 2 == 0, "location lists differ in length");
    let n = tokens / 2;
    let mut src = OnceSource::from(input);
    input! { from &mut src, pairs: [(i64, i64); n] }
    Ok(pairs.into_iter().unzip())
}

pub fn task1(input: &str) -> Result<Answer> {
    let (mut left, mut right) = parse(input)?;
    left.sort_unstable();
    right.sort_unstable();
    let distance: i64 = left.iter().zip(&right).map(|(a, b)| (a - b).abs()).sum();
    Ok(distance.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let (left, right) = parse(input)?;
    let counts = right.iter().counts();
    let score: i64 = left
        .iter()
        .map(|x| x * counts.get(x).copied().unwrap_or(0) as i64)
        .sum();
    Ok(score.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
3   4
4   3
2   5
1   3
3   9
3   3
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 11.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 31.into());
    }

    #[test]
    fn malformed_lists_are_errors() {
        assert!(task1("3   4\n4   x\n").is_err());
        assert!(task1("3   4\n4\n").is_err());
    }
}
