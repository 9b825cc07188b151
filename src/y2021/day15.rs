use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::grid::{Grid, Pos};
use crate::{Answer, Result, SetMinMax};

fn lowest_risk(g: &Grid<u32>) -> u32 {
    let mut dist = Grid::new(g.width, g.height, u32::MAX);
    let start = Pos::new(0, 0);
    let goal = Pos::new(g.height as i64 - 1, g.width as i64 - 1);
    dist[start] = 0;
    let mut heap = BinaryHeap::from([Reverse((0, start))]);
    while let Some(Reverse((d, p))) = heap.pop() {
        if p == goal {
            return d;
        }
        if d > dist[p] {
            continue;
        }
        for q in p.neighbors4() {
            if let Some(&risk) = g.get(q) {
                let nd = d + risk;
                if dist[q].setmin(nd) {
                    heap.push(Reverse((nd, q)));
                }
            }
        }
    }
    dist[goal]
}

fn parse(input: &str) -> Result<Grid<u32>> {
    Ok(Grid::parse(input)?.map(|&b| (b - b'0') as u32))
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(lowest_risk(&parse(input)?).into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let tile = parse(input)?;
    let (w, h) = (tile.width, tile.height);
    let mut big = Grid::new(w * 5, h * 5, 0);
    for p in big.positions() {
        let (r, c) = (p.r as usize, p.c as usize);
        let base = tile[Pos::new((r % h) as i64, (c % w) as i64)];
        big[p] = (base - 1 + (r / h + c / w) as u32) % 9 + 1;
    }
    Ok(lowest_risk(&big).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 40.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 315.into());
    }
}
