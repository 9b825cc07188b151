use anyhow::ensure;
use rustc_hash::FxHashSet;

use crate::input::parse_line_ints;
use crate::{Answer, Result};

type Cube = [i64; 3];

fn parse(input: &str) -> Result<FxHashSet<Cube>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            let v = parse_line_ints(l);
            ensure!(v.len() == 3, "bad cube {:?}", l);
            Ok([v[0], v[1], v[2]])
        })
        .collect()
}

fn faces(c: Cube) -> impl Iterator<Item = Cube> {
    (0..3).flat_map(move |axis| {
        [-1, 1].into_iter().map(move |d| {
            let mut n = c;
            n[axis] += d;
            n
        })
    })
}

pub fn task1(input: &str) -> Result<Answer> {
    let cubes = parse(input)?;
    let area = cubes
        .iter()
        .flat_map(|&c| faces(c))
        .filter(|n| !cubes.contains(n))
        .count();
    Ok(area.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let cubes = parse(input)?;
    if cubes.is_empty() {
        return Ok(0.into());
    }
    let lo = (0..3).map(|a| cubes.iter().map(|c| c[a]).min().unwrap_or(0) - 1).collect::<Vec<_>>();
    let hi = (0..3).map(|a| cubes.iter().map(|c| c[a]).max().unwrap_or(0) + 1).collect::<Vec<_>>();
    let inside = |c: &Cube| (0..3).all(|a| lo[a] <= c[a] && c[a] <= hi[a]);
    // Flood the steam from a corner of the padded bounding box.
    let start = [lo[0], lo[1], lo[2]];
    let mut steam = FxHashSet::from_iter([start]);
    let mut stack = vec![start];
    let mut area = 0;
    while let Some(c) = stack.pop() {
        for n in faces(c) {
            if cubes.contains(&n) {
                area += 1;
            } else if inside(&n) && steam.insert(n) {
                stack.push(n);
            }
        }
    }
    Ok(area.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
2,2,2
1,2,2
3,2,2
2,1,2
2,3,2
2,2,1
2,2,3
2,2,4
2,2,6
1,2,5
3,2,5
2,1,5
2,3,5
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 64.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 58.into());
    }

    #[test]
    fn two_adjacent_cubes() {
        assert_eq!(task1("1,1,1\n2,1,1\n").unwrap(), 10.into());
        assert_eq!(task2("1,1,1\n2,1,1\n").unwrap(), 10.into());
    }
}
