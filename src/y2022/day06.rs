use anyhow::Context;

use crate::{Answer, Result};

/// Characters processed when the last `n` received are all distinct.
fn marker(input: &str, n: usize) -> Option<usize> {
    input
        .trim()
        .as_bytes()
        .windows(n)
        .position(|w| w.iter().fold(0u128, |set, &b| set | 1 << (b & 127)).count_ones() as usize == n)
        .map(|i| i + n)
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(marker(input, 4).context("no start-of-packet marker")?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(marker(input, 14).context("no start-of-message marker")?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn examples() {
        assert_eq!(marker("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 4), Some(7));
        assert_eq!(marker("bvwbjplbgvbhsrlpgdmjqwftvncz", 4), Some(5));
        assert_eq!(marker("nppdvjthqldpwncqszvftbrmjlhg", 4), Some(6));
        assert_eq!(marker("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 14), Some(19));
        assert_eq!(marker("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 14), Some(26));
        assert_eq!(marker("aaaa", 4), None);
    }
}
