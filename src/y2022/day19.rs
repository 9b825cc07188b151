use anyhow::ensure;

use crate::input::parse_line_ints;
use crate::{Answer, Result, SetMinMax};

/// costs[robot][resource] for ore, clay, obsidian, geode robots.
#[derive(Clone, Debug)]
struct Blueprint {
    id: i32,
    costs: [[i32; 3]; 4],
}

fn parse(input: &str) -> Result<Vec<Blueprint>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            let v: Vec<i32> = parse_line_ints(l).into_iter().map(|x| x as i32).collect();
            ensure!(v.len() == 7, "bad blueprint {:?}", l);
            Ok(Blueprint {
                id: v[0],
                costs: [[v[1], 0, 0], [v[2], 0, 0], [v[3], v[4], 0], [v[5], 0, v[6]]],
            })
        })
        .collect()
}

struct Search<'a> {
    bp: &'a Blueprint,
    max_spend: [i32; 3],
    best: i32,
}

impl Search<'_> {
    fn dfs(&mut self, time: i32, robots: [i32; 4], stock: [i32; 4]) {
        let idle = stock[3] + robots[3] * time;
        self.best.setmax(idle);
        // Even one new geode robot every remaining minute cannot win.
        if idle + time * (time - 1) / 2 <= self.best {
            return;
        }
        for kind in (0..4).rev() {
            if kind < 3 && robots[kind] >= self.max_spend[kind] {
                continue;
            }
            let cost = self.bp.costs[kind];
            let mut wait = 0;
            let mut possible = true;
            for res in 0..3 {
                let lack = cost[res] - stock[res];
                if lack > 0 {
                    if robots[res] == 0 {
                        possible = false;
                        break;
                    }
                    wait = wait.max((lack + robots[res] - 1) / robots[res]);
                }
            }
            let spent = wait + 1;
            if !possible || spent >= time {
                continue;
            }
            let mut next_stock = stock;
            for res in 0..4 {
                next_stock[res] += robots[res] * spent - if res < 3 { cost[res] } else { 0 };
            }
            let mut next_robots = robots;
            next_robots[kind] += 1;
            self.dfs(time - spent, next_robots, next_stock);
        }
    }
}

fn max_geodes(bp: &Blueprint, time: i32) -> i32 {
    let max_spend = [0, 1, 2].map(|res| bp.costs.iter().map(|c| c[res]).max().unwrap_or(0));
    let mut search = Search { bp, max_spend, best: 0 };
    search.dfs(time, [1, 0, 0, 0], [0; 4]);
    log::debug!("blueprint {}: {} geodes in {} minutes", bp.id, search.best, time);
    search.best
}

pub fn task1(input: &str) -> Result<Answer> {
    let quality: i32 = parse(input)?.iter().map(|bp| bp.id * max_geodes(bp, 24)).sum();
    Ok(quality.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let product: i64 = parse(input)?
        .iter()
        .take(3)
        .map(|bp| max_geodes(bp, 32) as i64)
        .product();
    Ok(product.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Blueprint 1: Each ore robot costs 4 ore. Each clay robot costs 2 ore. Each obsidian robot costs 3 ore and 14 clay. Each geode robot costs 2 ore and 7 obsidian.
Blueprint 2: Each ore robot costs 2 ore. Each clay robot costs 3 ore. Each obsidian robot costs 3 ore and 8 clay. Each geode robot costs 3 ore and 12 obsidian.
";

    #[test]
    fn example() {
        let bps = parse(EXAMPLE).unwrap();
        assert_eq!(max_geodes(&bps[0], 24), 9);
        assert_eq!(max_geodes(&bps[1], 24), 12);
        assert_eq!(task1(EXAMPLE).unwrap(), 33.into());
    }

    #[test]
    fn longer_run() {
        let bps = parse(EXAMPLE).unwrap();
        assert_eq!(max_geodes(&bps[0], 32), 56);
    }
}
