use anyhow::ensure;
use rustc_hash::FxHashMap;

use crate::input::parse_line_ints;
use crate::{Answer, Result};

type Line = (i64, i64, i64, i64);

fn parse(input: &str) -> Result<Vec<Line>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            let v = parse_line_ints(line);
            ensure!(v.len() == 4, "bad vent line {:?}", line);
            Ok((v[0], v[1], v[2], v[3]))
        })
        .collect()
}

fn overlaps(lines: &[Line], diagonals: bool) -> usize {
    let mut counts: FxHashMap<(i64, i64), u32> = FxHashMap::default();
    for &(x1, y1, x2, y2) in lines {
        if !diagonals && x1 != x2 && y1 != y2 {
            continue;
        }
        let (dx, dy) = ((x2 - x1).signum(), (y2 - y1).signum());
        let len = (x2 - x1).abs().max((y2 - y1).abs());
        for k in 0..=len {
            *counts.entry((x1 + dx * k, y1 + dy * k)).or_default() += 1;
        }
    }
    counts.values().filter(|&&c| c >= 2).count()
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(overlaps(&parse(input)?, false).into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(overlaps(&parse(input)?, true).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
0,9 -> 5,9
8,0 -> 0,8
9,4 -> 3,4
2,2 -> 2,1
7,0 -> 7,4
6,4 -> 2,0
0,9 -> 2,9
3,4 -> 1,4
0,0 -> 8,8
5,5 -> 8,2
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 5.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 12.into());
    }
}
