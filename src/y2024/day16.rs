use std::cmp::Reverse;
use std::collections::BinaryHeap;

use anyhow::Context;

use crate::grid::{Dir, Grid, Pos};
use crate::{Answer, Result, SetMinMax};

const TURN: u64 = 1000;

/// Lowest score to every (tile, facing) state; `backwards` walks moves in reverse.
fn scores(g: &Grid<u8>, seeds: &[(Pos, Dir)], backwards: bool) -> Grid<[u64; 4]> {
    let mut dist = g.map(|_| [u64::MAX; 4]);
    let mut que = BinaryHeap::new();
    for &(p, d) in seeds {
        dist[p][d.index()] = 0;
        que.push(Reverse((0, p, d)));
    }
    while let Some(Reverse((s, p, d))) = que.pop() {
        if s > dist[p][d.index()] {
            continue;
        }
        let ahead = p.step(if backwards { d.opposite() } else { d });
        let next = [(ahead, d, 1), (p, d.turn_left(), TURN), (p, d.turn_right(), TURN)];
        for (q, e, cost) in next {
            if g.get(q).is_none_or(|&b| b == b'#') {
                continue;
            }
            if dist[q][e.index()].setmin(s + cost) {
                que.push(Reverse((s + cost, q, e)));
            }
        }
    }
    dist
}

struct Maze {
    g: Grid<u8>,
    start: Pos,
    end: Pos,
}

impl Maze {
    fn parse(input: &str) -> Result<Self> {
        let g = Grid::parse(input)?;
        let start = g.find(&b'S').context("no start tile")?;
        let end = g.find(&b'E').context("no end tile")?;
        Ok(Maze { g, start, end })
    }

    fn from_start(&self) -> Grid<[u64; 4]> {
        scores(&self.g, &[(self.start, Dir::Right)], false)
    }

    fn best(&self, from_start: &Grid<[u64; 4]>) -> Result<u64> {
        from_start[self.end]
            .iter()
            .min()
            .copied()
            .filter(|&s| s != u64::MAX)
            .context("the end is unreachable")
    }
}

pub fn task1(input: &str) -> Result<Answer> {
    let maze = Maze::parse(input)?;
    Ok(maze.best(&maze.from_start())?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let maze = Maze::parse(input)?;
    let fwd = maze.from_start();
    let best = maze.best(&fwd)?;
    let seeds = Dir::ALL.map(|d| (maze.end, d));
    let back = scores(&maze.g, &seeds, true);
    let tiles = maze
        .g
        .positions()
        .filter(|&p| {
            (0..4).any(|k| {
                let (a, b) = (fwd[p][k], back[p][k]);
                a != u64::MAX && b != u64::MAX && a + b == best
            })
        })
        .count();
    Ok(tiles.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

    const SECOND: &str = "\
#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 7036.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 45.into());
        assert_eq!(task1(SECOND).unwrap(), 11048.into());
        assert_eq!(task2(SECOND).unwrap(), 64.into());
    }
}
