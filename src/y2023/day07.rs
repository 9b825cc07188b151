use anyhow::{Context, bail, ensure};
use itertools::Itertools;

use crate::{Answer, Result};

const CARDS: &[u8] = b"23456789TJQKA";

#[derive(Clone, Debug)]
struct Hand {
    cards: [u8; 5],
    bid: u64,
}

fn parse(input: &str) -> Result<Vec<Hand>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            let (cards, bid) = l.trim().split_once(' ').with_context(|| format!("bad hand {:?}", l))?;
            ensure!(cards.len() == 5, "hands have five cards: {:?}", cards);
            let mut hand = [0; 5];
            for (h, b) in hand.iter_mut().zip(cards.bytes()) {
                let Some(v) = CARDS.iter().position(|&c| c == b) else {
                    bail!("unknown card {:?}", b as char);
                };
                *h = v as u8 + 2;
            }
            Ok(Hand {
                cards: hand,
                bid: bid.trim().parse()?,
            })
        })
        .collect()
}

/// 0 for high card up to 6 for five of a kind.
fn hand_type(cards: &[u8; 5], jokers: bool) -> u8 {
    const JACK: u8 = 11;
    let wild = if jokers { cards.iter().filter(|&&c| c == JACK).count() } else { 0 };
    let mut counts: Vec<usize> = cards
        .iter()
        .filter(|&&c| !jokers || c != JACK)
        .counts()
        .into_values()
        .sorted()
        .rev()
        .collect();
    match counts.first_mut() {
        Some(top) => *top += wild,
        None => counts.push(wild),
    }
    match counts[..] {
        [5] => 6,
        [4, ..] => 5,
        [3, 2] => 4,
        [3, ..] => 3,
        [2, 2, ..] => 2,
        [2, ..] => 1,
        _ => 0,
    }
}

fn winnings(input: &str, jokers: bool) -> Result<u64> {
    let hands = parse(input)?;
    let ranked = hands.iter().sorted_by_cached_key(|h| {
        let values = h.cards.map(|c| if jokers && c == 11 { 1 } else { c });
        (hand_type(&h.cards, jokers), values)
    });
    Ok(ranked.enumerate().map(|(i, h)| (i as u64 + 1) * h.bid).sum())
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(winnings(input, false)?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(winnings(input, true)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
32T3K 765
T55J5 684
KK677 28
KTJJT 220
QQQJA 483
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 6440.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 5905.into());
    }

    #[test]
    fn all_jokers() {
        let hand = parse("JJJJJ 1").unwrap();
        assert_eq!(hand_type(&hand[0].cards, true), 6);
        assert_eq!(hand_type(&hand[0].cards, false), 6);
    }
}
