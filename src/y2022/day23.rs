use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::grid::{Dir, Grid, Pos};
use crate::{Answer, Result};

// Indices into `Pos::neighbors8` that must be empty, and the move made: N, S, W, E.
const RULES: [([usize; 3], Dir); 4] = [
    ([0, 1, 2], Dir::Up),
    ([5, 6, 7], Dir::Down),
    ([0, 3, 5], Dir::Left),
    ([2, 4, 7], Dir::Right),
];

fn parse(input: &str) -> Result<FxHashSet<Pos>> {
    let g = Grid::parse(input)?;
    Ok(g.iter().filter(|&(_, &b)| b == b'#').map(|(p, _)| p).collect())
}

/// Plays one round; returns whether any elf moved.
fn round(elves: &mut FxHashSet<Pos>, first_rule: usize) -> bool {
    let mut proposals: FxHashMap<Pos, Vec<Pos>> = FxHashMap::default();
    for &e in elves.iter() {
        let around = e.neighbors8().map(|q| elves.contains(&q));
        if !around.iter().any(|&x| x) {
            continue;
        }
        let rule = (0..4)
            .map(|k| RULES[(first_rule + k) % 4])
            .find(|(check, _)| check.iter().all(|&i| !around[i]));
        if let Some((_, d)) = rule {
            proposals.entry(e.step(d)).or_default().push(e);
        }
    }
    let mut moved = false;
    for (to, from) in proposals {
        if let [e] = from[..] {
            elves.remove(&e);
            elves.insert(to);
            moved = true;
        }
    }
    moved
}

pub fn task1(input: &str) -> Result<Answer> {
    let mut elves = parse(input)?;
    for i in 0..10 {
        round(&mut elves, i % 4);
    }
    let rows = elves.iter().map(|p| p.r).minmax().into_option();
    let cols = elves.iter().map(|p| p.c).minmax().into_option();
    let empty = match (rows, cols) {
        (Some((r0, r1)), Some((c0, c1))) => (r1 - r0 + 1) * (c1 - c0 + 1) - elves.len() as i64,
        _ => 0,
    };
    Ok(empty.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let mut elves = parse(input)?;
    let mut i = 0;
    while round(&mut elves, i % 4) {
        i += 1;
    }
    Ok((i + 1).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
....#..
..###.#
#...#.#
.#...##
#.###..
##.#.##
.#..#..
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 110.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 20.into());
    }
}
