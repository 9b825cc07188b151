use anyhow::{Context, bail};
use rustc_hash::FxHashMap;

use crate::{Answer, Result};

fn parse(input: &str) -> Result<(Vec<u8>, FxHashMap<(u8, u8), u8>)> {
    let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty());
    let template = lines.next().context("missing template")?.as_bytes().to_vec();
    let rules = lines
        .map(|l| match l.as_bytes() {
            [a, b, b' ', b'-', b'>', b' ', c] => Ok(((*a, *b), *c)),
            _ => bail!("bad rule {:?}", l),
        })
        .collect::<Result<_>>()?;
    Ok((template, rules))
}

/// Most common minus least common element after `steps` insertions.
fn spread(input: &str, steps: usize) -> Result<u64> {
    let (template, rules) = parse(input)?;
    let mut pairs: FxHashMap<(u8, u8), u64> = FxHashMap::default();
    for w in template.windows(2) {
        *pairs.entry((w[0], w[1])).or_default() += 1;
    }
    for _ in 0..steps {
        let mut next = FxHashMap::default();
        for (&(a, b), &n) in &pairs {
            match rules.get(&(a, b)) {
                Some(&c) => {
                    *next.entry((a, c)).or_default() += n;
                    *next.entry((c, b)).or_default() += n;
                }
                None => *next.entry((a, b)).or_default() += n,
            }
        }
        pairs = next;
    }
    // Count first elements of pairs; the last template element never starts a pair.
    let mut counts: FxHashMap<u8, u64> = FxHashMap::default();
    for (&(a, _), &n) in &pairs {
        *counts.entry(a).or_default() += n;
    }
    if let Some(&last) = template.last() {
        *counts.entry(last).or_default() += 1;
    }
    let max = counts.values().max().copied().unwrap_or(0);
    let min = counts.values().min().copied().unwrap_or(0);
    Ok(max - min)
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(spread(input, 10)?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(spread(input, 40)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
NNCB

CH -> B
HH -> N
CB -> H
NH -> C
HB -> C
HC -> B
HN -> C
NN -> C
BH -> H
NC -> B
NB -> B
BN -> B
BB -> N
BC -> B
CC -> N
CN -> C
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 1588.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 2188189693529u64.into());
    }
}
