use anyhow::{Context, bail};
use rustc_hash::FxHashSet;

use crate::grid::{Dir, Pos};
use crate::{Answer, Result};

fn parse(input: &str) -> Result<Vec<(Dir, usize)>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            let (d, n) = l.trim().split_once(' ').with_context(|| format!("bad move {:?}", l))?;
            let d = match d.as_bytes() {
                &[b] => Dir::from_byte(b),
                _ => None,
            };
            let Some(d) = d else {
                bail!("bad direction in {:?}", l);
            };
            Ok((d, n.parse()?))
        })
        .collect()
}

fn simulate(input: &str, knots: usize) -> Result<usize> {
    let mut rope = vec![Pos::default(); knots];
    let mut visited = FxHashSet::default();
    visited.insert(Pos::default());
    for (d, n) in parse(input)? {
        for _ in 0..n {
            rope[0] = rope[0].step(d);
            for i in 1..knots {
                let diff = rope[i - 1] - rope[i];
                if diff.r.abs() <= 1 && diff.c.abs() <= 1 {
                    break;
                }
                rope[i] += Pos::new(diff.r.signum(), diff.c.signum());
            }
            visited.insert(rope[knots - 1]);
        }
    }
    Ok(visited.len())
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(simulate(input, 2)?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(simulate(input, 10)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
R 4
U 4
L 3
D 1
R 4
D 1
L 5
R 2
";

    const LARGER: &str = "\
R 5
U 8
L 8
D 3
R 17
D 10
L 25
U 20
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 13.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 1.into());
        assert_eq!(task2(LARGER).unwrap(), 36.into());
    }
}
