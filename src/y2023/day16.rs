use rayon::prelude::*;

use crate::grid::{Dir, Grid, Pos};
use crate::{Answer, Result};

/// Directions a beam heading `d` leaves a tile with.
fn deflect(tile: u8, d: Dir) -> Vec<Dir> {
    match (tile, d) {
        (b'/', Dir::Right) | (b'\\', Dir::Left) => vec![Dir::Up],
        (b'/', Dir::Left) | (b'\\', Dir::Right) => vec![Dir::Down],
        (b'/', Dir::Up) | (b'\\', Dir::Down) => vec![Dir::Right],
        (b'/', Dir::Down) | (b'\\', Dir::Up) => vec![Dir::Left],
        (b'|', Dir::Left | Dir::Right) => vec![Dir::Up, Dir::Down],
        (b'-', Dir::Up | Dir::Down) => vec![Dir::Left, Dir::Right],
        _ => vec![d],
    }
}

fn energized(g: &Grid<u8>, start: Pos, d: Dir) -> usize {
    let mut seen = g.map(|_| [false; 4]);
    let mut stack = vec![(start, d)];
    while let Some((p, d)) = stack.pop() {
        let Some(s) = seen.get_mut(p) else { continue };
        if s[d.index()] {
            continue;
        }
        s[d.index()] = true;
        for e in deflect(g[p], d) {
            stack.push((p.step(e), e));
        }
    }
    seen.cells().iter().filter(|s| s.contains(&true)).count()
}

pub fn task1(input: &str) -> Result<Answer> {
    let g = Grid::parse(input)?;
    Ok(energized(&g, Pos::new(0, 0), Dir::Right).into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let g = Grid::parse(input)?;
    let (w, h) = (g.width as i64, g.height as i64);
    let mut entries = vec![];
    for r in 0..h {
        entries.push((Pos::new(r, 0), Dir::Right));
        entries.push((Pos::new(r, w - 1), Dir::Left));
    }
    for c in 0..w {
        entries.push((Pos::new(0, c), Dir::Down));
        entries.push((Pos::new(h - 1, c), Dir::Up));
    }
    let best = entries
        .par_iter()
        .map(|&(p, d)| energized(&g, p, d))
        .max()
        .unwrap_or(0);
    Ok(best.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = r".|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 46.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 51.into());
    }
}
