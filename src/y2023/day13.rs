use crate::grid::Grid;
use crate::input::paragraphs;
use crate::{Answer, Result};

/// Rows above a horizontal mirror whose halves differ in exactly `smudges` cells.
fn mirror_row(rows: &[u64], smudges: u32) -> Option<usize> {
    (1..rows.len()).find(|&k| {
        rows[..k]
            .iter()
            .rev()
            .zip(&rows[k..])
            .map(|(a, b)| (a ^ b).count_ones())
            .sum::<u32>()
            == smudges
    })
}

fn bits(cells: impl Iterator<Item = bool>) -> u64 {
    cells.fold(0, |acc, b| acc << 1 | b as u64)
}

fn summarize(input: &str, smudges: u32) -> Result<usize> {
    let mut total = 0;
    for block in paragraphs(input) {
        let g = Grid::parse(block)?;
        let rows: Vec<u64> = (0..g.height)
            .map(|r| bits(g.row(r).iter().map(|&b| b == b'#')))
            .collect();
        let cols: Vec<u64> = (0..g.width)
            .map(|c| bits((0..g.height).map(|r| g.row(r)[c] == b'#')))
            .collect();
        total += match mirror_row(&rows, smudges) {
            Some(k) => 100 * k,
            None => mirror_row(&cols, smudges).unwrap_or(0),
        };
    }
    Ok(total)
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(summarize(input, 0)?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(summarize(input, 1)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
#.##..##.
..#.##.#.
##......#
##......#
..#.##.#.
..##..##.
#.#.##.#.

#...##..#
#....#..#
..##..###
#####.##.
#####.##.
..##..###
#....#..#
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 405.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 400.into());
    }
}
