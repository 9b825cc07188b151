use anyhow::{bail, ensure};
use rustc_hash::FxHashSet;

use crate::grid::{Dir, Grid, Pos};
use crate::{Answer, Result};

/// The valley without its walls; blizzard positions follow from the time alone.
struct Valley {
    cells: Grid<u8>,
    start: Pos,
    goal: Pos,
}

impl Valley {
    fn parse(input: &str) -> Result<Self> {
        let g = Grid::parse(input)?;
        ensure!(g.width >= 3 && g.height >= 3, "valley too small");
        let (w, h) = (g.width - 2, g.height - 2);
        let mut cells = Grid::new(w, h, b'.');
        for p in cells.positions() {
            cells[p] = g[Pos::new(p.r + 1, p.c + 1)];
        }
        let gap = |r: usize| -> Result<i64> {
            match g.row(r).iter().position(|&b| b == b'.') {
                Some(c) if c >= 1 && c <= w => Ok(c as i64 - 1),
                _ => bail!("no opening in row {}", r),
            }
        };
        Ok(Valley {
            start: Pos::new(-1, gap(0)?),
            goal: Pos::new(h as i64, gap(g.height - 1)?),
            cells,
        })
    }

    fn is_free(&self, p: Pos, t: i64) -> bool {
        if p == self.start || p == self.goal {
            return true;
        }
        if !self.cells.in_bounds(p) {
            return false;
        }
        let (w, h) = (self.cells.width as i64, self.cells.height as i64);
        let at = |r: i64, c: i64| self.cells[Pos::new(r.rem_euclid(h), c.rem_euclid(w))];
        at(p.r, p.c - t) != b'>'
            && at(p.r, p.c + t) != b'<'
            && at(p.r - t, p.c) != b'v'
            && at(p.r + t, p.c) != b'^'
    }

    /// Earliest arrival at `to` when leaving `from` at time `t`.
    fn travel(&self, from: Pos, to: Pos, mut t: i64) -> Result<i64> {
        let mut frontier = FxHashSet::from_iter([from]);
        // Positions repeat with the blizzards, so this bounds a hopeless search.
        let limit = t + (self.cells.width * self.cells.height) as i64 * 4 + 4;
        while !frontier.contains(&to) {
            ensure!(t < limit && !frontier.is_empty(), "no way through the valley");
            t += 1;
            frontier = frontier
                .iter()
                .flat_map(|&p| Dir::ALL.map(|d| p.step(d)).into_iter().chain([p]))
                .filter(|&q| self.is_free(q, t))
                .collect();
        }
        Ok(t)
    }
}

pub fn task1(input: &str) -> Result<Answer> {
    let v = Valley::parse(input)?;
    Ok(v.travel(v.start, v.goal, 0)?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let v = Valley::parse(input)?;
    let t = v.travel(v.start, v.goal, 0)?;
    let t = v.travel(v.goal, v.start, t)?;
    Ok(v.travel(v.start, v.goal, t)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
#.######
#>>.<^<#
#.<..<<#
#>v.><>#
#<^v^^>#
######.#
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 18.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 54.into());
    }
}
