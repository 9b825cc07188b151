use crate::grid::{Grid, Pos};
use crate::{Answer, Result};

fn low_points(g: &Grid<u8>) -> Vec<Pos> {
    g.positions()
        .filter(|&p| {
            p.neighbors4()
                .iter()
                .all(|&q| g.get(q).is_none_or(|&h| h > g[p]))
        })
        .collect()
}

fn basin_size(g: &Grid<u8>, low: Pos, seen: &mut Grid<bool>) -> usize {
    let mut stack = vec![low];
    seen[low] = true;
    let mut size = 0;
    while let Some(p) = stack.pop() {
        size += 1;
        for q in p.neighbors4() {
            if g.get(q).is_some_and(|&h| h != b'9') && !seen[q] {
                seen[q] = true;
                stack.push(q);
            }
        }
    }
    size
}

pub fn task1(input: &str) -> Result<Answer> {
    let g = Grid::parse(input)?;
    let risk: u64 = low_points(&g).iter().map(|&p| (g[p] - b'0') as u64 + 1).sum();
    Ok(risk.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let g = Grid::parse(input)?;
    let mut seen = Grid::new(g.width, g.height, false);
    let mut sizes: Vec<usize> = low_points(&g)
        .into_iter()
        .map(|p| basin_size(&g, p, &mut seen))
        .collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    Ok(sizes.iter().take(3).product::<usize>().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
2199943210
3987894921
9856789892
8767896789
9899965678
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 15.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 1134.into());
    }
}
