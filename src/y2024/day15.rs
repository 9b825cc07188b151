use anyhow::{Context, bail, ensure};
use rustc_hash::FxHashSet;

use crate::grid::{Dir, Grid, Pos};
use crate::input::paragraphs;
use crate::{Answer, Result};

fn parse(input: &str) -> Result<(Grid<u8>, Vec<Dir>)> {
    let blocks = paragraphs(input);
    ensure!(blocks.len() == 2, "expected a map and a list of moves");
    let g = Grid::parse(blocks[0])?;
    let moves = blocks[1]
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .map(|b| match b {
            b'^' | b'>' | b'v' | b'<' => Dir::from_byte(b).context("bad move"),
            _ => bail!("bad move {:?}", b as char),
        })
        .collect::<Result<_>>()?;
    Ok((g, moves))
}

fn widen(g: &Grid<u8>) -> Grid<u8> {
    let cells = g
        .cells()
        .iter()
        .flat_map(|&b| match b {
            b'#' => *b"##",
            b'O' => *b"[]",
            b'@' => *b"@.",
            _ => *b"..",
        })
        .collect();
    Grid::from_cells(g.width * 2, g.height, cells)
}

/// Pushes the robot and everything in front of it one step, unless a wall is in the way.
fn push(g: &mut Grid<u8>, robot: Pos, d: Dir) -> bool {
    let mut moving = vec![robot];
    let mut seen = FxHashSet::from_iter([robot]);
    let mut i = 0;
    while i < moving.len() {
        let q = moving[i].step(d);
        i += 1;
        let also = match g[q] {
            b'#' => return false,
            b'O' => vec![q],
            b'[' => vec![q, q.step(Dir::Right)],
            b']' => vec![q, q.step(Dir::Left)],
            _ => vec![],
        };
        for p in also {
            if seen.insert(p) {
                moving.push(p);
            }
        }
    }
    // Farthest cells first so every destination is already free.
    let delta = d.delta();
    moving.sort_by_key(|p| -(p.r * delta.r + p.c * delta.c));
    for p in moving {
        g[p.step(d)] = g[p];
        g[p] = b'.';
    }
    true
}

fn gps_sum(mut g: Grid<u8>, moves: &[Dir]) -> Result<i64> {
    let mut robot = g.find(&b'@').context("no robot")?;
    for &d in moves {
        if push(&mut g, robot, d) {
            robot = robot.step(d);
        }
    }
    Ok(g.iter()
        .filter(|&(_, &b)| b == b'O' || b == b'[')
        .map(|(p, _)| 100 * p.r + p.c)
        .sum())
}

pub fn task1(input: &str) -> Result<Answer> {
    let (g, moves) = parse(input)?;
    Ok(gps_sum(g, &moves)?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let (g, moves) = parse(input)?;
    Ok(gps_sum(widen(&g), &moves)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
########
#..O.O.#
##@.O..#
#...O..#
#.#.O..#
#...O..#
#......#
########

<^^>>>vv<v>>v<<
";

    const WIDE: &str = "\
#######
#...#.#
#.....#
#..OO@#
#..O..#
#.....#
#######

<vv<<^^<<^^
";

    #[test]
    fn example() {
        assert_eq!(task1(SMALL).unwrap(), 2028.into());
        assert_eq!(task2(WIDE).unwrap(), 618.into());
    }

    #[test]
    fn widened_map() {
        let (g, _) = parse(WIDE).unwrap();
        let wide = widen(&g);
        assert_eq!(wide.to_text().lines().nth(3), Some("##....[][]@.##"));
    }
}
