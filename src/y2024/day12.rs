use crate::grid::{Dir, Grid, Pos};
use crate::{Answer, Result};

/// (area, perimeter, corners) of every region. A polygon has as many sides as corners.
fn regions(g: &Grid<u8>) -> Vec<(usize, usize, usize)> {
    let mut done = g.map(|_| false);
    let mut ret = vec![];
    for start in g.positions() {
        if done[start] {
            continue;
        }
        let plant = g[start];
        let same = |p: Pos| g.get(p) == Some(&plant);
        done[start] = true;
        let mut stack = vec![start];
        let (mut area, mut perimeter, mut corners) = (0, 0, 0);
        while let Some(p) = stack.pop() {
            area += 1;
            for d in Dir::ALL {
                let q = p.step(d);
                if !same(q) {
                    perimeter += 1;
                } else if !done[q] {
                    done[q] = true;
                    stack.push(q);
                }
                let e = d.turn_right();
                let (a, b) = (same(q), same(p.step(e)));
                if (!a && !b) || (a && b && !same(q.step(e))) {
                    corners += 1;
                }
            }
        }
        ret.push((area, perimeter, corners));
    }
    ret
}

pub fn task1(input: &str) -> Result<Answer> {
    let g = Grid::parse(input)?;
    let price: usize = regions(&g).iter().map(|&(a, p, _)| a * p).sum();
    Ok(price.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let g = Grid::parse(input)?;
    let price: usize = regions(&g).iter().map(|&(a, _, c)| a * c).sum();
    Ok(price.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 1930.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 1206.into());
    }

    #[test]
    fn small_maps() {
        assert_eq!(task1("AAAA\nBBCD\nBBCC\nEEEC\n").unwrap(), 140.into());
        assert_eq!(task2("AAAA\nBBCD\nBBCC\nEEEC\n").unwrap(), 80.into());
        assert_eq!(task2("EEEEE\nEXXXX\nEEEEE\nEXXXX\nEEEEE\n").unwrap(), 236.into());
    }
}
