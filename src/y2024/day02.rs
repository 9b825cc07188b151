use crate::input::parse_line_ints;
use crate::{Answer, Result};

fn is_safe(levels: &[i64]) -> bool {
    let rising = levels.windows(2).all(|w| (1..=3).contains(&(w[1] - w[0])));
    let falling = levels.windows(2).all(|w| (1..=3).contains(&(w[0] - w[1])));
    rising || falling
}

fn is_safe_dampened(levels: &[i64]) -> bool {
    is_safe(levels)
        || (0..levels.len()).any(|skip| {
            let rest: Vec<i64> = levels
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &x)| x)
                .collect();
            is_safe(&rest)
        })
}

fn count(input: &str, safe: fn(&[i64]) -> bool) -> usize {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter(|l| safe(&parse_line_ints(l)))
        .count()
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(count(input, is_safe).into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(count(input, is_safe_dampened).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 2.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 4.into());
    }
}
