use crate::grid::{Grid, Pos};
use crate::{Answer, Result};

pub fn task1(input: &str) -> Result<Answer> {
    let g = Grid::parse(input)?;
    let dirs = Pos::default().neighbors8();
    let count = g
        .positions()
        .flat_map(|p| dirs.iter().map(move |&d| (p, d)))
        .filter(|&(p, d)| {
            b"XMAS"
                .iter()
                .enumerate()
                .all(|(k, &b)| g.get(p + d * k as i64) == Some(&b))
        })
        .count();
    Ok(count.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let g = Grid::parse(input)?;
    let is_mas = |a: Pos, b: Pos| {
        matches!(
            (g.get(a), g.get(b)),
            (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M'))
        )
    };
    let count = g
        .iter()
        .filter(|&(p, &b)| {
            b == b'A'
                && is_mas(p + Pos::new(-1, -1), p + Pos::new(1, 1))
                && is_mas(p + Pos::new(-1, 1), p + Pos::new(1, -1))
        })
        .count();
    Ok(count.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 18.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 9.into());
    }
}
