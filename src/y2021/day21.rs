use anyhow::bail;

use crate::input::parse_line_ints;
use crate::{Answer, Result};

fn parse(input: &str) -> Result<[u64; 2]> {
    let starts: Vec<u64> = input
        .lines()
        .filter_map(|l| parse_line_ints(l).last().copied())
        .map(|p| p as u64)
        .collect();
    match starts[..] {
        [a, b] if (1..=10).contains(&a) && (1..=10).contains(&b) => Ok([a, b]),
        _ => bail!("expected two starting positions in 1..=10"),
    }
}

pub fn task1(input: &str) -> Result<Answer> {
    let mut pos = parse(input)?;
    let mut score = [0u64; 2];
    let mut rolls = 0u64;
    let mut die = (1..=100).cycle();
    let mut player = 0;
    loop {
        let moved: u64 = die.by_ref().take(3).sum();
        rolls += 3;
        pos[player] = (pos[player] + moved - 1) % 10 + 1;
        score[player] += pos[player];
        if score[player] >= 1000 {
            return Ok((score[1 - player] * rolls).into());
        }
        player = 1 - player;
    }
}

/// (sum of three rolls, number of universes producing it)
const SPLITS: [(usize, u64); 7] = [(3, 1), (4, 3), (5, 6), (6, 7), (7, 6), (8, 3), (9, 1)];

const TARGET: usize = 21;

/// Wins of (player to move, other player) for every state, indexed by
/// `[score][other_score][pos - 1][other_pos - 1]`.
fn dirac_wins() -> Vec<Vec<Vec<Vec<[u64; 2]>>>> {
    let mut wins = mat![[0u64; 2]; TARGET; TARGET; 10; 10];
    // A move only raises the total score, so fill from the highest total down.
    for total in (0..=2 * (TARGET - 1)).rev() {
        for score in total.saturating_sub(TARGET - 1)..=total.min(TARGET - 1) {
            let other_score = total - score;
            for pos in 1..=10 {
                for other_pos in 1..=10 {
                    let mut w = [0, 0];
                    for (moved, universes) in SPLITS {
                        let p = (pos + moved - 1) % 10 + 1;
                        let s = score + p;
                        if s >= TARGET {
                            w[0] += universes;
                        } else {
                            let [theirs, mine] = wins[other_score][s][other_pos - 1][p - 1];
                            w[0] += mine * universes;
                            w[1] += theirs * universes;
                        }
                    }
                    wins[score][other_score][pos - 1][other_pos - 1] = w;
                }
            }
        }
    }
    wins
}

pub fn task2(input: &str) -> Result<Answer> {
    let [a, b] = parse(input)?;
    let w = dirac_wins()[0][0][a as usize - 1][b as usize - 1];
    Ok(w[0].max(w[1]).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "Player 1 starting position: 4\nPlayer 2 starting position: 8\n";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 739785.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 444356092776315u64.into());
    }

    #[test]
    fn mover_wins_every_universe_near_the_target() {
        let wins = dirac_wins();
        assert_eq!(wins[20][20][0][0], [27, 0]);
        assert_eq!(wins[20][0][9][9], [27, 0]);
    }
}
