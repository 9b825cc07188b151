use anyhow::{Context, ensure};

use crate::input::{paragraphs, parse_line_ints};
use crate::{Answer, Result};

struct Board {
    cells: Vec<i64>,
    marked: Vec<bool>,
    won: bool,
}

impl Board {
    fn mark(&mut self, n: i64) -> bool {
        if let Some(i) = self.cells.iter().position(|&c| c == n) {
            self.marked[i] = true;
            let (r, c) = (i / 5, i % 5);
            self.won |= (0..5).all(|k| self.marked[r * 5 + k]) || (0..5).all(|k| self.marked[k * 5 + c]);
        }
        self.won
    }

    fn unmarked_sum(&self) -> i64 {
        self.cells
            .iter()
            .zip(&self.marked)
            .filter(|&(_, &m)| !m)
            .map(|(&c, _)| c)
            .sum()
    }
}

fn parse(input: &str) -> Result<(Vec<i64>, Vec<Board>)> {
    let blocks = paragraphs(input);
    let (draws, boards) = blocks.split_first().context("empty input")?;
    let boards = boards
        .iter()
        .map(|b| {
            let cells = parse_line_ints(b);
            ensure!(cells.len() == 25, "board has {} numbers", cells.len());
            Ok(Board {
                marked: vec![false; 25],
                cells,
                won: false,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((parse_line_ints(draws), boards))
}

/// Scores of the boards in the order they win.
fn winning_scores(input: &str) -> Result<Vec<i64>> {
    let (draws, mut boards) = parse(input)?;
    let mut scores = vec![];
    for n in draws {
        for board in boards.iter_mut().filter(|b| !b.won) {
            if board.mark(n) {
                scores.push(board.unmarked_sum() * n);
            }
        }
    }
    Ok(scores)
}

pub fn task1(input: &str) -> Result<Answer> {
    let scores = winning_scores(input)?;
    Ok(scores.first().copied().context("no board wins")?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let scores = winning_scores(input)?;
    Ok(scores.last().copied().context("no board wins")?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 4512.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 1924.into());
    }
}
