use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::grid::{Grid, Pos};
use crate::{Answer, Result};

/// Distinct in-map antinodes; `harmonics` extends them along the whole line.
fn antinodes(input: &str, harmonics: bool) -> Result<usize> {
    let g = Grid::parse(input)?;
    let mut antennas: FxHashMap<u8, Vec<Pos>> = FxHashMap::default();
    for (p, &b) in g.iter().filter(|&(_, &b)| b != b'.') {
        antennas.entry(b).or_default().push(p);
    }
    let mut found = FxHashSet::default();
    for group in antennas.values() {
        for (&a, &b) in group.iter().tuple_combinations() {
            for (from, step) in [(a, a - b), (b, b - a)] {
                if harmonics {
                    let mut p = from;
                    while g.in_bounds(p) {
                        found.insert(p);
                        p += step;
                    }
                } else if g.in_bounds(from + step) {
                    found.insert(from + step);
                }
            }
        }
    }
    Ok(found.len())
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(antinodes(input, false)?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(antinodes(input, true)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 14.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 34.into());
    }
}
