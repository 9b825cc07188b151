use std::collections::VecDeque;

use anyhow::{Context, ensure};
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;

use crate::{Answer, Result, SetMinMax};

static VALVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Valve (\w+) has flow rate=(\d+); tunnels? leads? to valves? (.+)").unwrap()
});

/// The start valve and the valves with positive flow, with travel times between them.
struct Network {
    rates: Vec<u32>,
    // dist[i][j] over the useful valves; index `rates.len()` is AA.
    dist: Vec<Vec<u32>>,
}

fn parse(input: &str) -> Result<Network> {
    let mut names = FxHashMap::default();
    let mut rows = vec![];
    for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let caps = VALVE_RE
            .captures(line)
            .with_context(|| format!("bad valve line {:?}", line))?;
        let name = caps.get(1).map_or("", |m| m.as_str());
        names.insert(name, rows.len());
        let rate: u32 = caps[2].parse()?;
        let next: Vec<&str> = caps
            .get(3)
            .map_or("", |m| m.as_str())
            .split(", ")
            .collect();
        rows.push((name, rate, next));
    }
    let adj = rows
        .iter()
        .map(|(_, _, next)| {
            next.iter()
                .map(|n| names.get(n).copied().with_context(|| format!("unknown valve {}", n)))
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    let start = *names.get("AA").context("no valve AA")?;
    let mut useful: Vec<usize> = (0..rows.len()).filter(|&i| rows[i].1 > 0).collect();
    ensure!(useful.len() <= 20, "too many working valves: {}", useful.len());
    useful.push(start);
    let dist = useful
        .iter()
        .map(|&from| {
            let mut d = vec![u32::MAX; rows.len()];
            d[from] = 0;
            let mut que = VecDeque::from([from]);
            while let Some(v) = que.pop_front() {
                for &w in &adj[v] {
                    if d[w] == u32::MAX {
                        d[w] = d[v] + 1;
                        que.push_back(w);
                    }
                }
            }
            useful.iter().map(|&to| d[to]).collect()
        })
        .collect();
    let rates = useful[..useful.len() - 1].iter().map(|&i| rows[i].1).collect();
    Ok(Network { rates, dist })
}

/// Records in `best[mask]` the most pressure released by opening exactly `mask`.
fn explore(net: &Network, at: usize, time: u32, mask: usize, released: u32, best: &mut [u32]) {
    best[mask].setmax(released);
    for (v, &rate) in net.rates.iter().enumerate() {
        let d = net.dist[at][v];
        if mask >> v & 1 == 1 || d == u32::MAX || d + 1 >= time {
            continue;
        }
        let left = time - d - 1;
        explore(net, v, left, mask | 1 << v, released + rate * left, best);
    }
}

fn best_by_mask(net: &Network, time: u32) -> Vec<u32> {
    let mut best = vec![0; 1 << net.rates.len()];
    explore(net, net.rates.len(), time, 0, 0, &mut best);
    best
}

pub fn task1(input: &str) -> Result<Answer> {
    let net = parse(input)?;
    let best = best_by_mask(&net, 30);
    Ok(best.iter().max().copied().unwrap_or(0).into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let net = parse(input)?;
    let mut best = best_by_mask(&net, 26);
    let n = net.rates.len();
    // Widen to "best using any subset of mask".
    for bit in 0..n {
        for mask in 0..best.len() {
            if mask >> bit & 1 == 1 {
                let without = best[mask ^ 1 << bit];
                best[mask].setmax(without);
            }
        }
    }
    let all = (1 << n) - 1;
    let total = (0..best.len())
        .map(|mask| best[mask] + best[all ^ mask])
        .max()
        .unwrap_or(0);
    Ok(total.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
Valve BB has flow rate=13; tunnels lead to valves CC, AA
Valve CC has flow rate=2; tunnels lead to valves DD, BB
Valve DD has flow rate=20; tunnels lead to valves CC, AA, EE
Valve EE has flow rate=3; tunnels lead to valves FF, DD
Valve FF has flow rate=0; tunnels lead to valves EE, GG
Valve GG has flow rate=0; tunnels lead to valves FF, HH
Valve HH has flow rate=22; tunnel leads to valve GG
Valve II has flow rate=0; tunnels lead to valves AA, JJ
Valve JJ has flow rate=21; tunnel leads to valve II
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 1651.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 1707.into());
    }
}
