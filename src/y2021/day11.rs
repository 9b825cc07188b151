use crate::grid::Grid;
use crate::{Answer, Result};

fn parse(input: &str) -> Result<Grid<u8>> {
    Ok(Grid::parse(input)?.map(|b| b - b'0'))
}

/// Advances one step and returns the number of flashes.
fn step(g: &mut Grid<u8>) -> usize {
    let mut stack = vec![];
    for p in g.positions() {
        g[p] += 1;
        if g[p] == 10 {
            stack.push(p);
        }
    }
    let mut flashes = 0;
    while let Some(p) = stack.pop() {
        flashes += 1;
        for q in p.neighbors8() {
            if let Some(e) = g.get_mut(q) {
                *e += 1;
                if *e == 10 {
                    stack.push(q);
                }
            }
        }
    }
    for p in g.positions() {
        if g[p] > 9 {
            g[p] = 0;
        }
    }
    flashes
}

pub fn task1(input: &str) -> Result<Answer> {
    let mut g = parse(input)?;
    Ok((0..100).map(|_| step(&mut g)).sum::<usize>().into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let mut g = parse(input)?;
    let all = g.width * g.height;
    let mut n = 1;
    while step(&mut g) != all {
        n += 1;
    }
    Ok(n.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
5483143223
2745854711
5264556173
6141336146
6357385478
4167524645
2176841721
6882881134
4846848554
5283751526
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 1656.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 195.into());
    }
}
