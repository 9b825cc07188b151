use std::cmp::Reverse;
use std::collections::BinaryHeap;

use anyhow::{Context, ensure};

use crate::grid::{Dir, Grid, Pos};
use crate::{Answer, Result, SetMinMax};

/// Least heat loss when the crucible moves `min..=max` blocks between turns.
fn least_heat_loss(input: &str, min: i64, max: i64) -> Result<u32> {
    let g = Grid::parse(input)?;
    ensure!(g.cells().iter().all(u8::is_ascii_digit), "heat loss map must be digits");
    let g = g.map(|&b| (b - b'0') as u32);
    let goal = Pos::new(g.height as i64 - 1, g.width as i64 - 1);
    // Indexed by the axis of the last move: 0 vertical, 1 horizontal.
    let mut dist = g.map(|_| [u32::MAX; 2]);
    let mut que = BinaryHeap::new();
    for axis in 0..2 {
        dist[Pos::new(0, 0)][axis] = 0;
        que.push(Reverse((0, Pos::new(0, 0), axis)));
    }
    while let Some(Reverse((d, p, axis))) = que.pop() {
        if p == goal {
            return Ok(d);
        }
        if d > dist[p][axis] {
            continue;
        }
        // Turn onto the other axis.
        let turns = if axis == 0 { [Dir::Left, Dir::Right] } else { [Dir::Up, Dir::Down] };
        for dir in turns {
            let mut cost = d;
            for k in 1..=max {
                let q = p + dir.delta() * k;
                let Some(&loss) = g.get(q) else { break };
                cost += loss;
                let next = 1 - axis;
                if k >= min && dist[q][next].setmin(cost) {
                    que.push(Reverse((cost, q, next)));
                }
            }
        }
    }
    None.context("the factory is unreachable")
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(least_heat_loss(input, 1, 3)?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(least_heat_loss(input, 4, 10)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 102.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 94.into());
    }

    #[test]
    fn ultra_crucible_needs_room_to_stop() {
        let input = "\
111111111111
999999999991
999999999991
999999999991
999999999991
";
        assert_eq!(task2(input).unwrap(), 71.into());
    }
}
