use anyhow::Context;
use rayon::prelude::*;

use crate::grid::{Dir, Grid, Pos};
use crate::{Answer, Result};

/// Walks the guard off the map; None if it loops. `extra` is one more obstruction.
fn patrol(g: &Grid<u8>, start: Pos, extra: Option<Pos>) -> Option<Grid<u8>> {
    // Bit per direction the guard has left each cell with.
    let mut seen = g.map(|_| 0u8);
    let (mut p, mut d) = (start, Dir::Up);
    loop {
        let bit = 1 << d.index();
        if seen[p] & bit != 0 {
            return None;
        }
        seen[p] |= bit;
        let q = p.step(d);
        match g.get(q) {
            None => return Some(seen),
            Some(b'#') => d = d.turn_right(),
            Some(_) if Some(q) == extra => d = d.turn_right(),
            Some(_) => p = q,
        }
    }
}

fn parse(input: &str) -> Result<(Grid<u8>, Pos)> {
    let g = Grid::parse(input)?;
    let start = g.find(&b'^').context("no guard on the map")?;
    Ok((g, start))
}

pub fn task1(input: &str) -> Result<Answer> {
    let (g, start) = parse(input)?;
    let seen = patrol(&g, start, None).context("guard never leaves")?;
    Ok(seen.cells().iter().filter(|&&s| s != 0).count().into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let (g, start) = parse(input)?;
    let seen = patrol(&g, start, None).context("guard never leaves")?;
    // Only cells on the original route can change it.
    let candidates: Vec<Pos> = seen
        .iter()
        .filter(|&(p, &s)| s != 0 && p != start)
        .map(|(p, _)| p)
        .collect();
    let loops = candidates
        .par_iter()
        .filter(|&&p| patrol(&g, start, Some(p)).is_none())
        .count();
    Ok(loops.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 41.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 6.into());
    }
}
