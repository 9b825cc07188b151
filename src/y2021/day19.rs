use std::collections::VecDeque;

use anyhow::{bail, ensure};
use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::input::{paragraphs, parse_line_ints};
use crate::{Answer, Result};

type V3 = [i64; 3];

const OVERLAP: usize = 12;

fn parse(input: &str) -> Result<Vec<Vec<V3>>> {
    paragraphs(input)
        .into_iter()
        .map(|block| {
            block
                .lines()
                .skip(1)
                .map(|l| match parse_line_ints(l)[..] {
                    [x, y, z] => Ok([x, y, z]),
                    _ => bail!("bad beacon {:?}", l),
                })
                .collect()
        })
        .collect()
}

/// The 24 proper rotations as (axis permutation, signs).
fn rotations() -> Vec<([usize; 3], [i64; 3])> {
    let mut ret = vec![];
    for perm in (0..3).permutations(3) {
        let perm = [perm[0], perm[1], perm[2]];
        let parity = if perm[0] < perm[1] { 1 } else { -1 }
            * if perm[1] < perm[2] { 1 } else { -1 }
            * if perm[0] < perm[2] { 1 } else { -1 };
        for mask in 0..8 {
            let signs = [0, 1, 2].map(|i| if mask >> i & 1 == 1 { -1 } else { 1 });
            if parity * signs[0] * signs[1] * signs[2] == 1 {
                ret.push((perm, signs));
            }
        }
    }
    ret
}

fn rotate(v: V3, (perm, signs): ([usize; 3], [i64; 3])) -> V3 {
    [0, 1, 2].map(|i| v[perm[i]] * signs[i])
}

/// Tries to place `scan` relative to already absolute beacons `known`.
/// Returns the scanner position and its beacons in absolute coordinates.
fn align(
    known: &[V3],
    scan: &[V3],
    rots: &[([usize; 3], [i64; 3])],
) -> Option<(V3, Vec<V3>)> {
    for &rot in rots {
        let rotated: Vec<V3> = scan.iter().map(|&v| rotate(v, rot)).collect();
        let mut votes: FxHashMap<V3, usize> = FxHashMap::default();
        for a in known {
            for b in &rotated {
                let d = [a[0] - b[0], a[1] - b[1], a[2] - b[2]];
                let n = votes.entry(d).or_default();
                *n += 1;
                if *n >= OVERLAP {
                    let moved = rotated
                        .iter()
                        .map(|b| [b[0] + d[0], b[1] + d[1], b[2] + d[2]])
                        .collect();
                    return Some((d, moved));
                }
            }
        }
    }
    None
}

/// Absolute scanner positions and beacon lists, scanner 0 at the origin.
fn locate(scanners: &[Vec<V3>]) -> Result<Vec<(V3, Vec<V3>)>> {
    ensure!(!scanners.is_empty(), "no scanners");
    let rots = rotations();
    let mut placed: Vec<Option<(V3, Vec<V3>)>> = vec![None; scanners.len()];
    placed[0] = Some(([0; 3], scanners[0].clone()));
    let mut queue = VecDeque::from([0]);
    while let Some(i) = queue.pop_front() {
        let known = placed[i].as_ref().map(|p| p.1.clone()).unwrap_or_default();
        for j in 0..scanners.len() {
            if placed[j].is_none() {
                if let Some(found) = align(&known, &scanners[j], &rots) {
                    log::debug!("scanner {} at {:?} via {}", j, found.0, i);
                    placed[j] = Some(found);
                    queue.push_back(j);
                }
            }
        }
    }
    placed
        .into_iter()
        .enumerate()
        .map(|(i, p)| match p {
            Some(p) => Ok(p),
            None => bail!("scanner {} does not overlap any other", i),
        })
        .collect()
}

pub fn task1(input: &str) -> Result<Answer> {
    let placed = locate(&parse(input)?)?;
    let beacons: FxHashSet<V3> = placed.into_iter().flat_map(|p| p.1).collect();
    Ok(beacons.len().into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let placed = locate(&parse(input)?)?;
    let best = placed
        .iter()
        .tuple_combinations()
        .map(|(a, b)| (0..3).map(|i| (a.0[i] - b.0[i]).abs()).sum::<i64>())
        .max()
        .unwrap_or(0);
    Ok(best.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotations_are_distinct() {
        let rots = rotations();
        assert_eq!(rots.len(), 24);
        let images: FxHashSet<V3> = rots.iter().map(|&r| rotate([1, 2, 3], r)).collect();
        assert_eq!(images.len(), 24);
    }

    #[test]
    fn two_overlapping_scanners() {
        let shared: Vec<V3> = (0..12).map(|i| [i * 7 - 30, i * i - 20, 50 - i * 3]).collect();
        let origin = [68, -1246, -43];
        let mut s0 = shared.clone();
        s0.push([-600, 400, 300]);
        // Scanner 1 looks at the world turned a quarter around z: (x, y, z) -> (-y, x, z).
        let mut s1: Vec<V3> = shared
            .iter()
            .map(|a| {
                let r = [a[0] - origin[0], a[1] - origin[1], a[2] - origin[2]];
                [-r[1], r[0], r[2]]
            })
            .collect();
        s1.push([900, 900, 900]);
        s1.push([-900, 800, -700]);
        let fmt = |s: &[V3]| s.iter().map(|v| format!("{},{},{}", v[0], v[1], v[2])).join("\n");
        let input = format!("--- scanner 0 ---\n{}\n\n--- scanner 1 ---\n{}\n", fmt(&s0), fmt(&s1));
        assert_eq!(task1(&input).unwrap(), 15.into());
        assert_eq!(task2(&input).unwrap(), (68 + 1246 + 43).into());
    }
}
