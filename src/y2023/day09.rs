use crate::input::parse_line_ints;
use crate::{Answer, Result};

/// The next value of the sequence by repeated differences.
fn extrapolate(seq: &[i64]) -> i64 {
    if seq.iter().all(|&x| x == 0) {
        return 0;
    }
    let diffs: Vec<i64> = seq.windows(2).map(|w| w[1] - w[0]).collect();
    seq.last().copied().unwrap_or(0) + extrapolate(&diffs)
}

fn sequences(input: &str) -> Vec<Vec<i64>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(parse_line_ints)
        .collect()
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(sequences(input).iter().map(|s| extrapolate(s)).sum::<i64>().into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let sum: i64 = sequences(input)
        .into_iter()
        .map(|mut s| {
            s.reverse();
            extrapolate(&s)
        })
        .sum();
    Ok(sum.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
0 3 6 9 12 15
1 3 6 10 15 21
10 13 16 21 30 45
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 114.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 2.into());
    }
}
