use std::collections::VecDeque;

use anyhow::{Context, ensure};
use rustc_hash::FxHashMap;

use crate::grid::{Grid, Pos};
use crate::{Answer, Result};

const STEPS: usize = 64;
const FAR_STEPS: usize = 26_501_365;

/// Plots reachable in exactly each of `targets` steps on the infinitely tiled map.
fn reachable(g: &Grid<u8>, targets: &[usize]) -> Result<Vec<usize>> {
    let start = g.find(&b'S').context("no S")?;
    let limit = targets.iter().max().copied().unwrap_or(0);
    let (w, h) = (g.width as i64, g.height as i64);
    let mut dist: FxHashMap<Pos, usize> = FxHashMap::default();
    dist.insert(start, 0);
    let mut que = VecDeque::from([start]);
    while let Some(p) = que.pop_front() {
        let d = dist[&p];
        if d == limit {
            continue;
        }
        for q in p.neighbors4() {
            let tile = g[Pos::new(q.r.rem_euclid(h), q.c.rem_euclid(w))];
            if tile != b'#' && !dist.contains_key(&q) {
                dist.insert(q, d + 1);
                que.push_back(q);
            }
        }
    }
    Ok(targets
        .iter()
        .map(|&t| dist.values().filter(|&&d| d <= t && d % 2 == t % 2).count())
        .collect())
}

/// Plots reachable in exactly `steps` steps, assuming the count grows
/// quadratically in whole map widths; three samples fix the quadratic.
fn extrapolate(g: &Grid<u8>, steps: usize) -> Result<i64> {
    ensure!(g.width == g.height, "the map must be square");
    let size = g.width;
    let start = g.find(&b'S').context("no S")?;
    let mid = (size / 2) as i64;
    ensure!(start == Pos::new(mid, mid), "S must be in the centre of the map");
    let (x, rem) = ((steps / size) as i64, steps % size);
    let f = reachable(g, &[rem, rem + size, rem + 2 * size])?;
    let (a0, a1, a2) = (f[0] as i64, f[1] as i64, f[2] as i64);
    Ok(a0 + x * (a1 - a0) + x * (x - 1) / 2 * (a2 - 2 * a1 + a0))
}

pub fn task1(input: &str) -> Result<Answer> {
    let g = Grid::parse(input)?;
    Ok(reachable(&g, &[STEPS])?[0].into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let g = Grid::parse(input)?;
    Ok(extrapolate(&g, FAR_STEPS)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
...........
.....###.#.
.###.##..#.
..#.#...#..
....#.#....
.##..S####.
.##..#...#.
.......##..
.##.#.####.
.####..##..
...........
";

    #[test]
    fn example() {
        let g = Grid::parse(EXAMPLE).unwrap();
        assert_eq!(reachable(&g, &[6]).unwrap(), vec![16]);
        assert_eq!(reachable(&g, &[6, 10]).unwrap(), vec![16, 50]);
    }

    #[test]
    fn extrapolation_matches_direct_count() {
        let open = ".......\n.......\n.......\n...S...\n.......\n.......\n.......\n";
        let g = Grid::parse(open).unwrap();
        let steps = 3 + 4 * 7;
        let direct = reachable(&g, &[steps]).unwrap()[0] as i64;
        assert_eq!(direct, (steps as i64 + 1).pow(2));
        assert_eq!(extrapolate(&g, steps).unwrap(), direct);
    }

    #[test]
    fn off_centre_start_is_rejected() {
        let g = Grid::parse("S..\n...\n...\n").unwrap();
        assert!(extrapolate(&g, 10).is_err());
    }
}
