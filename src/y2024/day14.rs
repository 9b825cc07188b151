use anyhow::{Context, ensure};
use rustc_hash::FxHashSet;

use crate::grid::Pos;
use crate::input::{parse_line_ints, render_screen};
use crate::{Answer, Result};

const WIDTH: i64 = 101;
const HEIGHT: i64 = 103;
const MAX_SECONDS: i64 = 10_000;

#[derive(Clone, Copy, Debug)]
struct Robot {
    p: Pos,
    v: Pos,
}

fn parse(input: &str) -> Result<Vec<Robot>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            let v = parse_line_ints(l);
            ensure!(v.len() == 4, "bad robot {:?}", l);
            // Input is x,y; positions are stored as (row, column).
            Ok(Robot {
                p: Pos::new(v[1], v[0]),
                v: Pos::new(v[3], v[2]),
            })
        })
        .collect()
}

fn positions(robots: &[Robot], (w, h): (i64, i64), t: i64) -> Vec<Pos> {
    robots
        .iter()
        .map(|r| {
            let p = r.p + r.v * t;
            Pos::new(p.r.rem_euclid(h), p.c.rem_euclid(w))
        })
        .collect()
}

fn safety_factor(robots: &[Robot], (w, h): (i64, i64), t: i64) -> usize {
    let mut quadrants = [0; 4];
    for p in positions(robots, (w, h), t) {
        if p.r == h / 2 || p.c == w / 2 {
            continue;
        }
        quadrants[(p.r > h / 2) as usize * 2 + (p.c > w / 2) as usize] += 1;
    }
    quadrants.iter().product()
}

/// First second after the start at which at least two thirds (rounded down) of the
/// robots stand next to another robot.
fn clustered_second(robots: &[Robot], size: (i64, i64)) -> Option<(i64, Vec<Pos>)> {
    (1..=MAX_SECONDS).find_map(|t| {
        let now = positions(robots, size, t);
        let occupied: FxHashSet<Pos> = now.iter().copied().collect();
        let social = now
            .iter()
            .filter(|p| p.neighbors8().iter().any(|q| occupied.contains(q)))
            .count();
        (social >= robots.len() * 2 / 3).then_some((t, now))
    })
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(safety_factor(&parse(input)?, (WIDTH, HEIGHT), 100).into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let robots = parse(input)?;
    ensure!(!robots.is_empty(), "no robots");
    let (t, now) = clustered_second(&robots, (WIDTH, HEIGHT))
        .with_context(|| format!("no picture within {} seconds", MAX_SECONDS))?;
    if log::log_enabled!(log::Level::Debug) {
        let mut screen = mat![false; HEIGHT as usize; WIDTH as usize];
        for p in now {
            screen[p.r as usize][p.c as usize] = true;
        }
        log::debug!("picture after {} seconds:\n{}", t, render_screen(&screen));
    }
    Ok(t.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
p=0,4 v=3,-3
p=6,3 v=-1,-3
p=10,3 v=-1,2
p=2,0 v=2,-1
p=0,0 v=1,3
p=3,0 v=-2,-2
p=7,6 v=-1,-3
p=3,0 v=-1,-2
p=9,3 v=2,3
p=7,3 v=-1,2
p=2,4 v=2,-3
p=9,5 v=-3,-3
";

    #[test]
    fn example() {
        let robots = parse(EXAMPLE).unwrap();
        assert_eq!(safety_factor(&robots, (11, 7), 100), 12);
    }

    #[test]
    fn cluster_forms() {
        // Three robots converge on adjacent cells after two seconds.
        let robots = parse("p=0,0 v=1,1\np=4,0 v=-1,1\np=2,5 v=0,-1\n").unwrap();
        let (t, _) = clustered_second(&robots, (11, 7)).unwrap();
        assert_eq!(t, 2);
    }

    #[test]
    fn cluster_threshold_rounds_down() {
        // Standing still: two neighbours and two loners meet the bar of 4 * 2 / 3 = 2,
        // and the starting layout itself is never reported.
        let robots = parse("p=0,0 v=0,0\np=1,0 v=0,0\np=5,3 v=0,0\np=9,6 v=0,0\n").unwrap();
        let (t, _) = clustered_second(&robots, (11, 7)).unwrap();
        assert_eq!(t, 1);
    }
}
