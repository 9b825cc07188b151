use std::collections::VecDeque;

use anyhow::{Context, ensure};
use rustc_hash::FxHashMap;

use crate::{Answer, Result};

/// Undirected graph with arcs stored in pairs: arc `a` and `a ^ 1` are reverses.
struct Graph {
    adj: Vec<Vec<usize>>,
    head: Vec<usize>,
}

fn parse(input: &str) -> Result<Graph> {
    let mut ids: FxHashMap<&str, usize> = FxHashMap::default();
    let mut g = Graph { adj: vec![], head: vec![] };
    let mut id = |g: &mut Graph, name| {
        *ids.entry(name).or_insert_with(|| {
            g.adj.push(vec![]);
            g.adj.len() - 1
        })
    };
    for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let (from, rest) = line.split_once(':').with_context(|| format!("bad line {:?}", line))?;
        let u = id(&mut g, from.trim());
        for to in rest.split_whitespace() {
            let v = id(&mut g, to);
            g.adj[u].push(g.head.len());
            g.head.push(v);
            g.adj[v].push(g.head.len());
            g.head.push(u);
        }
    }
    Ok(g)
}

/// Max flow from `s` to `t`, stopping once it exceeds `cap`, and the side of `s` in the final residual graph.
fn cut(g: &Graph, s: usize, t: usize, cap: usize) -> (usize, usize) {
    let mut residual = vec![1i8; g.head.len()];
    let mut flow = 0;
    loop {
        let mut prev = vec![usize::MAX; g.adj.len()];
        let mut reached = vec![false; g.adj.len()];
        reached[s] = true;
        let mut que = VecDeque::from([s]);
        let mut seen = 1;
        while let Some(u) = que.pop_front() {
            for &a in &g.adj[u] {
                let v = g.head[a];
                if residual[a] > 0 && !reached[v] {
                    reached[v] = true;
                    prev[v] = a;
                    seen += 1;
                    que.push_back(v);
                }
            }
        }
        if !reached[t] || flow > cap {
            return (flow, seen);
        }
        let mut v = t;
        while v != s {
            let a = prev[v];
            residual[a] -= 1;
            residual[a ^ 1] += 1;
            v = g.head[a ^ 1];
        }
        flow += 1;
    }
}

pub fn task1(input: &str) -> Result<Answer> {
    let g = parse(input)?;
    let n = g.adj.len();
    ensure!(n >= 2, "graph too small");
    for t in 1..n {
        let (flow, side) = cut(&g, 0, t, 3);
        if flow == 3 {
            return Ok((side * (n - side)).into());
        }
    }
    None.context("no three-wire cut")
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
jqt: rhn xhk nvd
rsh: frs pzl lsr
xhk: hfx
cmg: qnr nvd lhk bvb
rhn: xhk bvb hfx
bvb: xhk hfx
pzl: lsr hfx nvd
qnr: nvd
ntq: jqt hfx bvb xhk
nvd: lhk
lsr: lhk
rzs: qnr cmg lsr rsh
frs: qnr lhk lsr
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 54.into());
    }
}
