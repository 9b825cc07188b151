use std::cmp::Reverse;
use std::collections::BinaryHeap;

use anyhow::{bail, ensure};
use rustc_hash::FxHashMap;

use crate::{Answer, Result, SetMinMax};

const HALL: usize = 11;
const STOPS: [usize; 7] = [0, 1, 3, 5, 7, 9, 10];
const EMPTY: u8 = b'.';

/// Hallway cells followed by the rooms, top slot first.
type State = [u8; HALL + 4 * 4];

struct Burrow {
    depth: usize,
}

fn step_cost(a: u8) -> u32 {
    10u32.pow((a - b'A') as u32)
}

fn entrance(room: usize) -> usize {
    2 + 2 * room
}

impl Burrow {
    fn slot(&self, room: usize, k: usize) -> usize {
        HALL + room * self.depth + k
    }

    fn room_accepts(&self, s: &State, room: usize) -> bool {
        let want = b'A' + room as u8;
        (0..self.depth).all(|k| {
            let a = s[self.slot(room, k)];
            a == EMPTY || a == want
        })
    }

    fn hall_clear(s: &State, from: usize, to: usize) -> bool {
        let (lo, hi) = if from < to { (from + 1, to) } else { (to, from - 1) };
        (lo..=hi).all(|h| s[h] == EMPTY)
    }

    fn moves(&self, s: &State) -> Vec<(u32, State)> {
        let mut ret = vec![];
        // Hallway to destination room. Such a move is always optimal when available.
        for h in STOPS {
            let a = s[h];
            if a == EMPTY {
                continue;
            }
            let room = (a - b'A') as usize;
            let x = entrance(room);
            if !self.room_accepts(s, room) || !Self::hall_clear(s, h, x) {
                continue;
            }
            let Some(k) = (0..self.depth).rev().find(|&k| s[self.slot(room, k)] == EMPTY) else {
                continue;
            };
            let mut next = *s;
            next[h] = EMPTY;
            next[self.slot(room, k)] = a;
            return vec![((h.abs_diff(x) + k + 1) as u32 * step_cost(a), next)];
        }
        // Top of a room that still holds strangers out to the hallway.
        for room in 0..4 {
            if self.room_accepts(s, room) {
                continue;
            }
            let Some(k) = (0..self.depth).find(|&k| s[self.slot(room, k)] != EMPTY) else {
                continue;
            };
            let a = s[self.slot(room, k)];
            let x = entrance(room);
            for h in STOPS {
                if Self::hall_clear(s, x, h) && s[h] == EMPTY {
                    let mut next = *s;
                    next[self.slot(room, k)] = EMPTY;
                    next[h] = a;
                    ret.push(((h.abs_diff(x) + k + 1) as u32 * step_cost(a), next));
                }
            }
        }
        ret
    }

    fn is_done(&self, s: &State) -> bool {
        (0..4).all(|room| (0..self.depth).all(|k| s[self.slot(room, k)] == b'A' + room as u8))
    }

    fn least_energy(&self, start: State) -> Option<u32> {
        let mut dist: FxHashMap<State, u32> = FxHashMap::default();
        dist.insert(start, 0);
        let mut heap = BinaryHeap::from([Reverse((0, start))]);
        while let Some(Reverse((d, s))) = heap.pop() {
            if self.is_done(&s) {
                log::debug!("explored {} burrow states", dist.len());
                return Some(d);
            }
            if dist.get(&s).is_some_and(|&best| best < d) {
                continue;
            }
            for (cost, next) in self.moves(&s) {
                let nd = d + cost;
                if dist.entry(next).or_insert(u32::MAX).setmin(nd) {
                    heap.push(Reverse((nd, next)));
                }
            }
        }
        None
    }
}

fn parse(input: &str) -> Result<Vec<[u8; 4]>> {
    let mut rows = vec![];
    for line in input.lines() {
        let letters: Vec<u8> = line.bytes().filter(u8::is_ascii_uppercase).collect();
        if letters.is_empty() {
            continue;
        }
        match letters[..] {
            [a, b, c, d] if letters.iter().all(|l| (b'A'..=b'D').contains(l)) => {
                rows.push([a, b, c, d])
            }
            _ => bail!("bad room row {:?}", line),
        }
    }
    ensure!(!rows.is_empty(), "no amphipods");
    Ok(rows)
}

fn solve(rows: &[[u8; 4]]) -> Result<u32> {
    let burrow = Burrow { depth: rows.len() };
    let mut start: State = [0; HALL + 16];
    start[..HALL].fill(EMPTY);
    for (k, row) in rows.iter().enumerate() {
        for room in 0..4 {
            start[burrow.slot(room, k)] = row[room];
        }
    }
    for room in 0..4 {
        let want = b'A' + room as u8;
        let n = rows.iter().flatten().filter(|&&a| a == want).count();
        ensure!(n == rows.len(), "expected {} amphipods of type {}", rows.len(), want as char);
    }
    match burrow.least_energy(start) {
        Some(e) => Ok(e),
        None => bail!("amphipods cannot be organized"),
    }
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(solve(&parse(input)?)?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let mut rows = parse(input)?;
    ensure!(rows.len() == 2, "expected a folded diagram with two rows");
    rows.splice(1..1, [*b"DCBA", *b"DBAC"]);
    Ok(solve(&rows)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
#############
#...........#
###B#C#B#D###
  #A#D#C#A#
  #########
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 12521.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 44169.into());
    }
}
