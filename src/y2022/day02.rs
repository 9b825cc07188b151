use anyhow::bail;

use crate::{Answer, Result};

/// Shapes and outcomes are both encoded 0..3: rock, paper, scissors and
/// lose, draw, win.
fn parse(input: &str) -> Result<Vec<(u32, u32)>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| match l.trim().as_bytes() {
            [a @ b'A'..=b'C', b' ', x @ b'X'..=b'Z'] => Ok(((a - b'A') as u32, (x - b'X') as u32)),
            _ => bail!("bad round {:?}", l),
        })
        .collect()
}

fn score(theirs: u32, mine: u32) -> u32 {
    // (mine - theirs + 1) mod 3 gives 0 for a loss, 1 for a draw, 2 for a win.
    let outcome = (mine + 4 - theirs) % 3;
    mine + 1 + outcome * 3
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(parse(input)?.iter().map(|&(t, m)| score(t, m)).sum::<u32>().into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let total: u32 = parse(input)?
        .iter()
        .map(|&(t, outcome)| score(t, (t + outcome + 2) % 3))
        .sum();
    Ok(total.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "A Y\nB X\nC Z\n";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 15.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 12.into());
    }
}
