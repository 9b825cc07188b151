use std::collections::VecDeque;

use anyhow::{Context, bail};
use rustc_hash::FxHashSet;

use crate::input::paragraphs;
use crate::{Answer, Result};

type Deck = VecDeque<u8>;

fn parse(input: &str) -> Result<[Deck; 2]> {
    let blocks = paragraphs(input);
    if blocks.len() != 2 {
        bail!("expected two decks, got {}", blocks.len());
    }
    let mut decks = [Deck::new(), Deck::new()];
    for (deck, block) in decks.iter_mut().zip(blocks) {
        for line in block.lines().skip(1) {
            deck.push_back(line.trim().parse().with_context(|| format!("bad card {:?}", line))?);
        }
    }
    Ok(decks)
}

fn score(deck: &Deck) -> usize {
    deck.iter()
        .rev()
        .enumerate()
        .map(|(i, &c)| (i + 1) * c as usize)
        .sum()
}

/// Plays until one deck is empty; returns the winner.
fn combat(decks: &mut [Deck; 2]) -> usize {
    while !decks[0].is_empty() && !decks[1].is_empty() {
        let a = decks[0].pop_front().unwrap();
        let b = decks[1].pop_front().unwrap();
        if a > b {
            decks[0].extend([a, b]);
        } else {
            decks[1].extend([b, a]);
        }
    }
    if decks[0].is_empty() { 1 } else { 0 }
}

fn recursive_combat(decks: &mut [Deck; 2]) -> usize {
    let mut seen = FxHashSet::default();
    while !decks[0].is_empty() && !decks[1].is_empty() {
        if !seen.insert(decks.clone()) {
            return 0;
        }
        let a = decks[0].pop_front().unwrap();
        let b = decks[1].pop_front().unwrap();
        let winner = if a as usize <= decks[0].len() && b as usize <= decks[1].len() {
            let mut sub = [
                decks[0].iter().take(a as usize).copied().collect::<Deck>(),
                decks[1].iter().take(b as usize).copied().collect::<Deck>(),
            ];
            // The holder of the highest card can never lose it, and a repeat also
            // hands the game to player 1.
            let max0 = sub[0].iter().max().copied().unwrap_or(0);
            let max1 = sub[1].iter().max().copied().unwrap_or(0);
            if max0 > max1 { 0 } else { recursive_combat(&mut sub) }
        } else if a > b {
            0
        } else {
            1
        };
        if winner == 0 {
            decks[0].extend([a, b]);
        } else {
            decks[1].extend([b, a]);
        }
    }
    if decks[0].is_empty() { 1 } else { 0 }
}

pub fn task1(input: &str) -> Result<Answer> {
    let mut decks = parse(input)?;
    let winner = combat(&mut decks);
    Ok(score(&decks[winner]).into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let mut decks = parse(input)?;
    let winner = recursive_combat(&mut decks);
    Ok(score(&decks[winner]).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Player 1:
9
2
6
3
1

Player 2:
5
8
4
7
10
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 306.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 291.into());
    }

    #[test]
    fn repeated_rounds_terminate() {
        let input = "Player 1:\n43\n19\n\nPlayer 2:\n2\n29\n14\n";
        assert!(task2(input).is_ok());
    }
}
