use anyhow::{Context, ensure};
use rustc_hash::FxHashMap;

use crate::grid::{Dir, Grid, Pos};
use crate::{Answer, Result};

/// Whether a step from `from` towards `d` is allowed on this map.
fn can_step(g: &Grid<u8>, from: Pos, d: Dir, slopes: bool) -> bool {
    let Some(&to) = g.get(from.step(d)) else { return false };
    if to == b'#' {
        return false;
    }
    if !slopes {
        return true;
    }
    [g[from], to]
        .iter()
        .all(|&b| Dir::from_byte(b).is_none_or(|s| s == d))
}

/// Junctions plus entry and exit, with the longest corridor between each pair.
struct Graph {
    edges: Vec<Vec<(usize, u32)>>,
    start: usize,
    goal: usize,
    // The only junction leading to the exit, if there is just one.
    gate: Option<usize>,
}

fn compress(g: &Grid<u8>, slopes: bool) -> Result<Graph> {
    let start = Pos::new(0, g.row(0).iter().position(|&b| b == b'.').context("no entrance")? as i64);
    let last = g.height - 1;
    let goal = Pos::new(last as i64, g.row(last).iter().position(|&b| b == b'.').context("no exit")? as i64);
    let mut ids: FxHashMap<Pos, usize> = FxHashMap::default();
    ids.insert(start, 0);
    ids.insert(goal, 1);
    for (p, &b) in g.iter() {
        let open = p.neighbors4().iter().filter(|&&q| g.get(q).is_some_and(|&n| n != b'#')).count();
        if b != b'#' && open >= 3 {
            let id = ids.len();
            ids.insert(p, id);
        }
    }
    ensure!(ids.len() <= 64, "too many junctions: {}", ids.len());
    let mut edges = vec![vec![]; ids.len()];
    for (&node, &id) in &ids {
        for d in Dir::ALL {
            if !can_step(g, node, d, slopes) {
                continue;
            }
            let (mut p, mut dir, mut len) = (node.step(d), d, 1);
            let reached = loop {
                if let Some(&to) = ids.get(&p) {
                    break Some(to);
                }
                let next = [dir, dir.turn_left(), dir.turn_right()]
                    .into_iter()
                    .find(|&e| can_step(g, p, e, slopes));
                match next {
                    Some(e) => {
                        p = p.step(e);
                        dir = e;
                        len += 1;
                    }
                    None => break None,
                }
            };
            if let Some(to) = reached {
                edges[id].push((to, len));
            }
        }
    }
    let into_goal: Vec<usize> = (0..edges.len())
        .filter(|&v| edges[v].iter().any(|e| e.0 == 1))
        .collect();
    let gate = match into_goal[..] {
        [v] => Some(v),
        _ => None,
    };
    Ok(Graph {
        edges,
        start: 0,
        goal: 1,
        gate,
    })
}

fn longest(graph: &Graph, at: usize, visited: u64, len: u32, best: &mut Option<u32>) {
    if at == graph.goal {
        *best = (*best).max(Some(len));
        return;
    }
    for &(to, l) in &graph.edges[at] {
        // Leaving the gate any other way can never reach the exit.
        if graph.gate == Some(at) && to != graph.goal {
            continue;
        }
        if visited >> to & 1 == 0 {
            longest(graph, to, visited | 1 << to, len + l, best);
        }
    }
}

fn longest_hike(input: &str, slopes: bool) -> Result<u32> {
    let g = Grid::parse(input)?;
    let graph = compress(&g, slopes)?;
    let mut best = None;
    longest(&graph, graph.start, 1 << graph.start, 0, &mut best);
    best.context("no path to the exit")
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(longest_hike(input, true)?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(longest_hike(input, false)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
#.#####################
#.......#########...###
#######.#########.#.###
###.....#.>.>.###.#.###
###v#####.#v#.###.#.###
###.>...#.#.#.....#...#
###v###.#.#.#########.#
###...#.#.#.......#...#
#####.#.#.#######.#.###
#.....#.#.#.......#...#
#.#####.#.#.#########v#
#.#...#...#...###...>.#
#.#.#v#######v###.###v#
#...#.>.#...>.>.#.###.#
#####v#.#.###v#.#.###.#
#.....#...#...#.#.#...#
#.#########.###.#.#.###
#...###...#...#...#.###
###.###.#.###v#####v###
#...#...#.#.>.>.#.>.###
#.###.###.#.###.#.#v###
#.....###...###...#...#
#####################.#
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 94.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 154.into());
    }
}
