use std::collections::VecDeque;

use anyhow::Context;

use crate::grid::{Grid, Pos};
use crate::{Answer, Result};

fn height(b: u8) -> u8 {
    match b {
        b'S' => b'a',
        b'E' => b'z',
        b => b,
    }
}

/// Steps needed from every cell to reach `E`, found by walking backwards.
fn distances_to_end(g: &Grid<u8>) -> Result<Grid<Option<usize>>> {
    let end = g.find(&b'E').context("no E on the map")?;
    let mut dist = g.map(|_| None);
    dist[end] = Some(0);
    let mut que = VecDeque::from([end]);
    while let Some(p) = que.pop_front() {
        let d = dist[p].unwrap_or(0);
        for q in p.neighbors4() {
            let Some(&b) = g.get(q) else { continue };
            if dist[q].is_none() && height(g[p]) <= height(b) + 1 {
                dist[q] = Some(d + 1);
                que.push_back(q);
            }
        }
    }
    Ok(dist)
}

pub fn task1(input: &str) -> Result<Answer> {
    let g = Grid::parse(input)?;
    let start: Pos = g.find(&b'S').context("no S on the map")?;
    let dist = distances_to_end(&g)?;
    Ok(dist[start].context("E is unreachable")?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let g = Grid::parse(input)?;
    let dist = distances_to_end(&g)?;
    let best = g
        .iter()
        .filter(|&(_, &b)| height(b) == b'a')
        .filter_map(|(p, _)| dist[p])
        .min()
        .context("E is unreachable from every a")?;
    Ok(best.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 31.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 29.into());
    }
}
