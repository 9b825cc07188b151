use anyhow::{Context, ensure};
use rustc_hash::FxHashMap;

use crate::{Answer, Result};

struct Caves {
    adj: Vec<Vec<usize>>,
    small: Vec<bool>,
    start: usize,
    end: usize,
}

fn intern<'a>(
    ids: &mut FxHashMap<&'a str, usize>,
    adj: &mut Vec<Vec<usize>>,
    small: &mut Vec<bool>,
    name: &'a str,
) -> usize {
    *ids.entry(name).or_insert_with(|| {
        adj.push(vec![]);
        small.push(name.chars().all(|c| c.is_ascii_lowercase()));
        adj.len() - 1
    })
}

fn parse(input: &str) -> Result<Caves> {
    let mut ids = FxHashMap::default();
    let mut adj: Vec<Vec<usize>> = vec![];
    let mut small = vec![];
    for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let (a, b) = line.split_once('-').with_context(|| format!("bad edge {:?}", line))?;
        let a = intern(&mut ids, &mut adj, &mut small, a);
        let b = intern(&mut ids, &mut adj, &mut small, b);
        adj[a].push(b);
        adj[b].push(a);
    }
    let start = *ids.get("start").context("no start cave")?;
    let end = *ids.get("end").context("no end cave")?;
    ensure!(start != end, "start and end coincide");
    Ok(Caves {
        adj,
        small,
        start,
        end,
    })
}

fn count_paths(caves: &Caves, u: usize, visits: &mut Vec<u8>, twice_left: bool) -> usize {
    if u == caves.end {
        return 1;
    }
    let mut total = 0;
    for &v in &caves.adj[u] {
        if v == caves.start {
            continue;
        }
        if caves.small[v] && visits[v] > 0 {
            if twice_left && v != caves.end {
                visits[v] += 1;
                total += count_paths(caves, v, visits, false);
                visits[v] -= 1;
            }
            continue;
        }
        visits[v] += 1;
        total += count_paths(caves, v, visits, twice_left);
        visits[v] -= 1;
    }
    total
}

fn solve(input: &str, twice: bool) -> Result<usize> {
    let caves = parse(input)?;
    let mut visits = vec![0; caves.adj.len()];
    visits[caves.start] = 1;
    Ok(count_paths(&caves, caves.start, &mut visits, twice))
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(solve(input, false)?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(solve(input, true)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
start-A
start-b
A-c
A-b
b-d
A-end
b-end
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 10.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 36.into());
    }
}
