use std::cmp::Ordering;

use anyhow::{Context, bail};
use serde_json::Value;

use crate::{Answer, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Packet {
    Int(u64),
    List(Vec<Packet>),
}

impl Packet {
    fn from_json(v: &Value) -> Result<Packet> {
        Ok(match v {
            Value::Number(n) => Packet::Int(n.as_u64().context("negative packet value")?),
            Value::Array(a) => Packet::List(a.iter().map(Packet::from_json).collect::<Result<_>>()?),
            _ => bail!("unexpected packet element {}", v),
        })
    }
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Int(a), Packet::Int(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => a.cmp(b),
            (Packet::Int(a), Packet::List(b)) => [Packet::Int(*a)][..].cmp(&b[..]),
            (Packet::List(a), Packet::Int(b)) => a[..].cmp(&[Packet::Int(*b)][..]),
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn parse(input: &str) -> Result<Vec<Packet>> {
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| {
            let v: Value = serde_json::from_str(l).with_context(|| format!("bad packet {:?}", l))?;
            Packet::from_json(&v)
        })
        .collect()
}

pub fn task1(input: &str) -> Result<Answer> {
    let packets = parse(input)?;
    let sum: usize = packets
        .chunks(2)
        .enumerate()
        .filter(|(_, pair)| pair.len() == 2 && pair[0] < pair[1])
        .map(|(i, _)| i + 1)
        .sum();
    Ok(sum.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let packets = parse(input)?;
    let dividers = parse("[[2]]\n[[6]]")?;
    let key: usize = dividers
        .iter()
        .enumerate()
        .map(|(i, d)| packets.iter().filter(|p| *p < d).count() + i + 1)
        .product();
    Ok(key.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
[1,1,3,1,1]
[1,1,5,1,1]

[[1],[2,3,4]]
[[1],4]

[9]
[[8,7,6]]

[[4,4],4,4]
[[4,4],4,4,4]

[7,7,7,7]
[7,7,7]

[]
[3]

[[[]]]
[[]]

[1,[2,[3,[4,[5,6,7]]]],8,9]
[1,[2,[3,[4,[5,6,0]]]],8,9]
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 13.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 140.into());
    }
}
