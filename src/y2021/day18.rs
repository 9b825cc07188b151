use anyhow::{bail, ensure};

use crate::{Answer, Result};

/// A snailfish number as its regular numbers in order, each with its nesting
/// depth.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Number(Vec<(u32, u32)>);

impl Number {
    fn parse(s: &str) -> Result<Self> {
        let mut depth = 0u32;
        let mut v = vec![];
        for c in s.trim().chars() {
            match c {
                '[' => depth += 1,
                ']' => {
                    ensure!(depth > 0, "unbalanced brackets in {:?}", s);
                    depth -= 1;
                }
                ',' => {}
                _ => match c.to_digit(10) {
                    Some(d) => v.push((d, depth)),
                    None => bail!("unexpected {:?} in {:?}", c, s),
                },
            }
        }
        ensure!(depth == 0 && !v.is_empty(), "malformed number {:?}", s);
        Ok(Number(v))
    }

    fn explode(&mut self) -> bool {
        let v = &mut self.0;
        let Some(i) = (0..v.len().saturating_sub(1)).find(|&i| v[i].1 > 4 && v[i].1 == v[i + 1].1)
        else {
            return false;
        };
        let (l, r, d) = (v[i].0, v[i + 1].0, v[i].1);
        if i > 0 {
            v[i - 1].0 += l;
        }
        if i + 2 < v.len() {
            v[i + 2].0 += r;
        }
        v[i] = (0, d - 1);
        v.remove(i + 1);
        true
    }

    fn split(&mut self) -> bool {
        let v = &mut self.0;
        let Some(i) = v.iter().position(|&(n, _)| n >= 10) else {
            return false;
        };
        let (n, d) = v[i];
        v[i] = (n / 2, d + 1);
        v.insert(i + 1, (n.div_ceil(2), d + 1));
        true
    }

    fn add(&self, other: &Number) -> Number {
        let mut sum = Number(
            self.0
                .iter()
                .chain(&other.0)
                .map(|&(n, d)| (n, d + 1))
                .collect(),
        );
        while sum.explode() || sum.split() {}
        sum
    }

    fn magnitude(&self) -> u64 {
        let mut v: Vec<(u64, u32)> = self.0.iter().map(|&(n, d)| (n as u64, d)).collect();
        while v.len() > 1 {
            let deepest = v.iter().map(|e| e.1).max().unwrap_or(0);
            let i = v.iter().position(|e| e.1 == deepest).unwrap_or(0);
            v[i] = (3 * v[i].0 + 2 * v[i + 1].0, deepest - 1);
            v.remove(i + 1);
        }
        v[0].0
    }
}

fn parse(input: &str) -> Result<Vec<Number>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(Number::parse)
        .collect()
}

pub fn task1(input: &str) -> Result<Answer> {
    let nums = parse(input)?;
    let Some((first, rest)) = nums.split_first() else {
        bail!("no numbers");
    };
    let sum = rest.iter().fold(first.clone(), |acc, n| acc.add(n));
    Ok(sum.magnitude().into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let nums = parse(input)?;
    let mut best = 0;
    for (i, a) in nums.iter().enumerate() {
        for (j, b) in nums.iter().enumerate() {
            if i != j {
                best = best.max(a.add(b).magnitude());
            }
        }
    }
    Ok(best.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn magnitude(s: &str) -> u64 {
        Number::parse(s).unwrap().magnitude()
    }

    #[test]
    fn magnitudes() {
        assert_eq!(magnitude("[[1,2],[[3,4],5]]"), 143);
        assert_eq!(magnitude("[[[[0,7],4],[[7,8],[6,0]]],[8,1]]"), 1384);
        assert_eq!(magnitude("[[[[1,1],[2,2]],[3,3]],[4,4]]"), 445);
    }

    #[test]
    fn reduction() {
        let a = Number::parse("[[[[4,3],4],4],[7,[[8,4],9]]]").unwrap();
        let b = Number::parse("[1,1]").unwrap();
        let expected = Number::parse("[[[[0,7],4],[[7,8],[6,0]]],[8,1]]").unwrap();
        assert_eq!(a.add(&b), expected);
    }

    #[test]
    fn sums() {
        assert_eq!(task1("[1,1]\n[2,2]\n[3,3]\n[4,4]\n").unwrap(), 445.into());
        // [[2,2],[1,1]] beats [[1,1],[2,2]].
        assert_eq!(task2("[1,1]\n[2,2]\n").unwrap(), 40.into());
    }
}
