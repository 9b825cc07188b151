use crate::grid::{Grid, Pos};
use crate::{Answer, Result};

/// Pushes the summit reached by every hiking trail starting at `p`.
fn trails(g: &Grid<u8>, p: Pos, out: &mut Vec<Pos>) {
    if g[p] == b'9' {
        out.push(p);
        return;
    }
    for q in p.neighbors4() {
        if g.get(q) == Some(&(g[p] + 1)) {
            trails(g, q, out);
        }
    }
}

fn summits(input: &str) -> Result<Vec<Vec<Pos>>> {
    let g = Grid::parse(input)?;
    Ok(g.positions()
        .filter(|&p| g[p] == b'0')
        .map(|p| {
            let mut out = vec![];
            trails(&g, p, &mut out);
            out
        })
        .collect())
}

pub fn task1(input: &str) -> Result<Answer> {
    let score: usize = summits(input)?
        .into_iter()
        .map(|mut s| {
            s.sort_unstable();
            s.dedup();
            s.len()
        })
        .sum();
    Ok(score.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let rating: usize = summits(input)?.iter().map(Vec::len).sum();
    Ok(rating.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 36.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 81.into());
    }
}
