use rustc_hash::FxHashMap;

use crate::grid::{Grid, Pos};
use crate::{Answer, Result};

/// Every number on the schematic with the symbols adjacent to it.
fn part_numbers(g: &Grid<u8>) -> Vec<(u32, Vec<Pos>)> {
    let mut ret = vec![];
    for r in 0..g.height {
        let row = g.row(r);
        let mut c = 0;
        while c < g.width {
            if !row[c].is_ascii_digit() {
                c += 1;
                continue;
            }
            let start = c;
            let mut value = 0;
            while c < g.width && row[c].is_ascii_digit() {
                value = value * 10 + (row[c] - b'0') as u32;
                c += 1;
            }
            let mut symbols = vec![];
            for rr in r as i64 - 1..=r as i64 + 1 {
                for cc in start as i64 - 1..=c as i64 {
                    let p = Pos::new(rr, cc);
                    if g.get(p).is_some_and(|&b| b != b'.' && !b.is_ascii_digit()) {
                        symbols.push(p);
                    }
                }
            }
            ret.push((value, symbols));
        }
    }
    ret
}

pub fn task1(input: &str) -> Result<Answer> {
    let g = Grid::parse(input)?;
    let sum: u32 = part_numbers(&g)
        .iter()
        .filter(|(_, symbols)| !symbols.is_empty())
        .map(|(v, _)| v)
        .sum();
    Ok(sum.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let g = Grid::parse(input)?;
    let mut gears: FxHashMap<Pos, Vec<u32>> = FxHashMap::default();
    for (v, symbols) in part_numbers(&g) {
        for p in symbols {
            if g[p] == b'*' {
                gears.entry(p).or_default().push(v);
            }
        }
    }
    let sum: u64 = gears
        .values()
        .filter(|vs| vs.len() == 2)
        .map(|vs| vs[0] as u64 * vs[1] as u64)
        .sum();
    Ok(sum.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 4361.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 467835.into());
    }
}
