use rustc_hash::FxHashMap;

use crate::grid::{Dir, Grid, Pos};
use crate::{Answer, Result};

const CYCLES: usize = 1_000_000_000;

/// Rolls every round rock as far as it goes towards `d`.
fn tilt(g: &mut Grid<u8>, d: Dir) {
    let (w, h) = (g.width as i64, g.height as i64);
    let lanes: Vec<Vec<Pos>> = match d {
        Dir::Up => (0..w).map(|c| (0..h).map(|r| Pos::new(r, c)).collect()).collect(),
        Dir::Down => (0..w).map(|c| (0..h).rev().map(|r| Pos::new(r, c)).collect()).collect(),
        Dir::Left => (0..h).map(|r| (0..w).map(|c| Pos::new(r, c)).collect()).collect(),
        Dir::Right => (0..h).map(|r| (0..w).rev().map(|c| Pos::new(r, c)).collect()).collect(),
    };
    for lane in lanes {
        let mut free = 0;
        for i in 0..lane.len() {
            match g[lane[i]] {
                b'#' => free = i + 1,
                b'O' => {
                    g[lane[i]] = b'.';
                    g[lane[free]] = b'O';
                    free += 1;
                }
                _ => {}
            }
        }
    }
}

fn north_load(g: &Grid<u8>) -> usize {
    g.iter()
        .filter(|&(_, &b)| b == b'O')
        .map(|(p, _)| g.height - p.r as usize)
        .sum()
}

pub fn task1(input: &str) -> Result<Answer> {
    let mut g = Grid::parse(input)?;
    tilt(&mut g, Dir::Up);
    Ok(north_load(&g).into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let mut g = Grid::parse(input)?;
    let mut seen: FxHashMap<Grid<u8>, usize> = FxHashMap::default();
    let mut i = 0;
    while i < CYCLES {
        if let Some(&prev) = seen.get(&g) {
            let period = i - prev;
            i += (CYCLES - i) / period * period;
            seen.clear();
            if i == CYCLES {
                break;
            }
        }
        seen.insert(g.clone(), i);
        for d in [Dir::Up, Dir::Left, Dir::Down, Dir::Right] {
            tilt(&mut g, d);
        }
        i += 1;
    }
    Ok(north_load(&g).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 136.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 64.into());
    }
}
