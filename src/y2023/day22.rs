use anyhow::ensure;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::input::parse_line_ints;
use crate::{Answer, Result};

#[derive(Clone, Copy, Debug)]
struct Brick {
    lo: [i64; 3],
    hi: [i64; 3],
}

/// For each settled brick, the bricks directly below it that hold it up.
fn settle(input: &str) -> Result<Vec<Vec<usize>>> {
    let mut bricks = input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            let v = parse_line_ints(l);
            ensure!(v.len() == 6, "bad brick {:?}", l);
            Ok(Brick {
                lo: [v[0].min(v[3]), v[1].min(v[4]), v[2].min(v[5])],
                hi: [v[0].max(v[3]), v[1].max(v[4]), v[2].max(v[5])],
            })
        })
        .collect::<Result<Vec<_>>>()?;
    bricks.sort_by_key(|b| b.lo[2]);
    // Top surface: (x, y) -> (height, brick).
    let mut top: FxHashMap<(i64, i64), (i64, usize)> = FxHashMap::default();
    let mut supports = vec![];
    for (i, b) in bricks.iter().enumerate() {
        let cells: Vec<(i64, i64)> = (b.lo[0]..=b.hi[0])
            .flat_map(|x| (b.lo[1]..=b.hi[1]).map(move |y| (x, y)))
            .collect();
        let rest = cells
            .iter()
            .filter_map(|c| top.get(c).map(|t| t.0))
            .max()
            .unwrap_or(0);
        let below: FxHashSet<usize> = cells
            .iter()
            .filter_map(|c| top.get(c))
            .filter(|t| t.0 == rest)
            .map(|t| t.1)
            .collect();
        let height = rest + b.hi[2] - b.lo[2] + 1;
        for c in cells {
            top.insert(c, (height, i));
        }
        supports.push(below.into_iter().collect());
    }
    Ok(supports)
}

pub fn task1(input: &str) -> Result<Answer> {
    let supports = settle(input)?;
    let sole: FxHashSet<usize> = supports.iter().filter(|s| s.len() == 1).map(|s| s[0]).collect();
    Ok((supports.len() - sole.len()).into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let supports = settle(input)?;
    let n = supports.len();
    let mut total = 0;
    for removed in 0..n {
        let mut falling = vec![false; n];
        falling[removed] = true;
        // Supports always come earlier in settle order.
        for i in removed + 1..n {
            if !supports[i].is_empty() && supports[i].iter().all(|&s| falling[s]) {
                falling[i] = true;
                total += 1;
            }
        }
    }
    Ok(total.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
1,0,1~1,2,1
0,0,2~2,0,2
0,2,3~2,2,3
0,0,4~0,2,4
2,0,5~2,2,5
0,1,6~2,1,6
1,1,8~1,1,9
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 5.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 7.into());
    }
}
