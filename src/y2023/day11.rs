use crate::grid::Grid;
use crate::{Answer, Result};

/// Sum of pairwise distances along one axis after widening empty lines by `factor`.
fn axis_distances(mut coords: Vec<i64>, factor: i64) -> i64 {
    coords.sort_unstable();
    let mut expanded = Vec::with_capacity(coords.len());
    let mut extra = 0;
    for (i, &x) in coords.iter().enumerate() {
        if i > 0 {
            extra += (x - coords[i - 1] - 1).max(0) * (factor - 1);
        }
        expanded.push(x + extra);
    }
    // Each coordinate is subtracted by everything after it and added for everything before.
    expanded
        .iter()
        .enumerate()
        .map(|(i, &x)| x * (2 * i as i64 - expanded.len() as i64 + 1))
        .sum()
}

fn total_distance(input: &str, factor: i64) -> Result<i64> {
    let g = Grid::parse(input)?;
    let galaxies: Vec<_> = g.iter().filter(|&(_, &b)| b == b'#').map(|(p, _)| p).collect();
    let rows = galaxies.iter().map(|p| p.r).collect();
    let cols = galaxies.iter().map(|p| p.c).collect();
    Ok(axis_distances(rows, factor) + axis_distances(cols, factor))
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(total_distance(input, 2)?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(total_distance(input, 1_000_000)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 374.into());
        assert_eq!(total_distance(EXAMPLE, 10).unwrap(), 1030);
        assert_eq!(total_distance(EXAMPLE, 100).unwrap(), 8410);
    }
}
