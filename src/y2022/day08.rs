use crate::grid::{Dir, Grid, Pos};
use crate::{Answer, Result};

/// Trees passed looking from `p` towards `d`, and whether the edge was reached.
fn look(g: &Grid<u8>, p: Pos, d: Dir) -> (usize, bool) {
    let h = g[p];
    let mut q = p.step(d);
    let mut seen = 0;
    while let Some(&t) = g.get(q) {
        seen += 1;
        if t >= h {
            return (seen, false);
        }
        q = q.step(d);
    }
    (seen, true)
}

pub fn task1(input: &str) -> Result<Answer> {
    let g = Grid::parse(input)?;
    let visible = g
        .positions()
        .filter(|&p| Dir::ALL.iter().any(|&d| look(&g, p, d).1))
        .count();
    Ok(visible.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let g = Grid::parse(input)?;
    let best = g
        .positions()
        .map(|p| Dir::ALL.iter().map(|&d| look(&g, p, d).0).product::<usize>())
        .max()
        .unwrap_or(0);
    Ok(best.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
30373
25512
65332
33549
35390
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 21.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 8.into());
    }
}
