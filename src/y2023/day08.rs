use anyhow::{Context, bail, ensure};
use rustc_hash::FxHashMap;

use crate::{Answer, Result};

struct Network<'a> {
    turns: Vec<bool>,
    nodes: FxHashMap<&'a str, (&'a str, &'a str)>,
}

fn parse(input: &str) -> Result<Network<'_>> {
    let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty());
    let turns = lines
        .next()
        .context("missing instructions")?
        .bytes()
        .map(|b| match b {
            b'L' => Ok(false),
            b'R' => Ok(true),
            _ => bail!("bad turn {:?}", b as char),
        })
        .collect::<Result<Vec<_>>>()?;
    ensure!(!turns.is_empty(), "no instructions");
    let nodes = lines
        .map(|l| {
            let parts: Vec<&str> = l
                .split(|c: char| !c.is_ascii_alphanumeric())
                .filter(|s| !s.is_empty())
                .collect();
            match parts[..] {
                [from, left, right] => Ok((from, (left, right))),
                _ => bail!("bad node {:?}", l),
            }
        })
        .collect::<Result<_>>()?;
    Ok(Network { turns, nodes })
}

impl Network<'_> {
    fn steps(&self, start: &str, done: impl Fn(&str) -> bool) -> Result<u64> {
        let mut at = start;
        for (i, &right) in self.turns.iter().cycle().enumerate() {
            if done(at) {
                return Ok(i as u64);
            }
            let &(l, r) = self.nodes.get(at).with_context(|| format!("unknown node {}", at))?;
            at = if right { r } else { l };
            // A node revisited at the same instruction means a loop with no exit.
            if i > self.turns.len() * (self.nodes.len() + 1) {
                bail!("no exit reachable from {}", start);
            }
        }
        unreachable!()
    }
}

pub fn task1(input: &str) -> Result<Answer> {
    let net = parse(input)?;
    Ok(net.steps("AAA", |n| n == "ZZZ")?.into())
}

/// Each ghost's path cycles back onto its exit with a period equal to its first arrival.
pub fn task2(input: &str) -> Result<Answer> {
    let net = parse(input)?;
    let total = net
        .nodes
        .keys()
        .filter(|n| n.ends_with('A'))
        .map(|n| net.steps(n, |m| m.ends_with('Z')))
        .try_fold(1u64, |acc, s| Ok::<_, anyhow::Error>(num::integer::lcm(acc, s?)))?;
    Ok(total.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        let input = "\
RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)
";
        assert_eq!(task1(input).unwrap(), 2.into());
        let input = "\
LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)
";
        assert_eq!(task1(input).unwrap(), 6.into());
    }

    #[test]
    fn ghosts() {
        let input = "\
LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)
";
        assert_eq!(task2(input).unwrap(), 6.into());
    }
}
