use anyhow::{Context, ensure};

use crate::grid::{Dir, Grid, Pos};
use crate::{Answer, Result};

fn connects(b: u8, d: Dir) -> bool {
    use Dir::*;
    matches!(
        (b, d),
        (b'|', Up | Down)
            | (b'-', Left | Right)
            | (b'L', Up | Right)
            | (b'J', Up | Left)
            | (b'7', Down | Left)
            | (b'F', Down | Right)
            | (b'S', _)
    )
}

/// The cells of the main loop in walking order, starting at `S`.
fn main_loop(g: &Grid<u8>) -> Result<Vec<Pos>> {
    let start = g.find(&b'S').context("no S")?;
    let mut d = Dir::ALL
        .into_iter()
        .find(|&d| g.get(start.step(d)).is_some_and(|&b| b != b'S' && connects(b, d.opposite())))
        .context("S is not connected to any pipe")?;
    let mut path = vec![start];
    let mut p = start.step(d);
    while p != start {
        ensure!(path.len() <= g.width * g.height, "pipe does not loop");
        path.push(p);
        let b = g[p];
        d = [d, d.turn_left(), d.turn_right()]
            .into_iter()
            .find(|&e| connects(b, e) && g.get(p.step(e)).is_some_and(|&n| connects(n, e.opposite())))
            .with_context(|| format!("broken pipe at {:?}", p))?;
        p = p.step(d);
    }
    Ok(path)
}

pub fn task1(input: &str) -> Result<Answer> {
    let g = Grid::parse(input)?;
    Ok((main_loop(&g)?.len() / 2).into())
}

/// Shoelace area of the loop, then Pick's theorem for the interior points.
pub fn task2(input: &str) -> Result<Answer> {
    let g = Grid::parse(input)?;
    let path = main_loop(&g)?;
    let twice_area: i64 = path
        .iter()
        .zip(path.iter().cycle().skip(1))
        .map(|(a, b)| a.c * b.r - b.c * a.r)
        .sum();
    let inside = twice_area.abs() / 2 - path.len() as i64 / 2 + 1;
    Ok(inside.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn farthest() {
        let input = "\
..F7.
.FJ|.
SJ.L7
|F--J
LJ...
";
        assert_eq!(task1(input).unwrap(), 8.into());
    }

    #[test]
    fn enclosed() {
        let input = "\
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........
";
        assert_eq!(task2(input).unwrap(), 4.into());
    }
}
