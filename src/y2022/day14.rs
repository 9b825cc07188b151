use anyhow::ensure;

use crate::input::parse_line_ints;
use crate::{Answer, Result};

const SOURCE: (usize, usize) = (500, 0);

struct Cave {
    blocked: Vec<Vec<bool>>,
    floor: usize,
}

fn parse(input: &str) -> Result<Cave> {
    let paths: Vec<Vec<(usize, usize)>> = input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            let v = parse_line_ints(l);
            ensure!(v.len() % 2 == 0 && v.iter().all(|&x| x >= 0), "bad path {:?}", l);
            Ok(v.chunks(2).map(|p| (p[0] as usize, p[1] as usize)).collect())
        })
        .collect::<Result<_>>()?;
    let max_y = paths.iter().flatten().map(|p| p.1).max().unwrap_or(0);
    let floor = max_y + 2;
    ensure!(floor < SOURCE.0, "cave is too deep");
    // Sand piles at most `floor` cells to either side of the source.
    let max_x = paths.iter().flatten().map(|p| p.0).max().unwrap_or(0);
    let width = (SOURCE.0 + floor + 2).max(max_x + 1);
    let mut blocked = mat![false; floor + 1; width];
    for path in &paths {
        for w in path.windows(2) {
            let ((x0, y0), (x1, y1)) = (w[0], w[1]);
            for y in y0.min(y1)..=y0.max(y1) {
                for x in x0.min(x1)..=x0.max(x1) {
                    blocked[y][x] = true;
                }
            }
        }
        if let [(x, y)] = path[..] {
            blocked[y][x] = true;
        }
    }
    Ok(Cave { blocked, floor })
}

/// Drops sand until it falls past the rocks (no floor) or the source is covered.
fn pour(cave: &mut Cave, has_floor: bool) -> usize {
    let mut count = 0;
    // Falling path kept as a stack so each grain resumes where the last one settled.
    let mut trail = vec![SOURCE];
    while let Some(&(x, y)) = trail.last() {
        if y + 1 == cave.floor {
            if !has_floor {
                return count;
            }
            cave.blocked[y][x] = true;
            count += 1;
            trail.pop();
            continue;
        }
        let next = [x, x - 1, x + 1]
            .into_iter()
            .find(|&nx| !cave.blocked[y + 1][nx]);
        match next {
            Some(nx) => trail.push((nx, y + 1)),
            None => {
                cave.blocked[y][x] = true;
                count += 1;
                trail.pop();
            }
        }
    }
    count
}

pub fn task1(input: &str) -> Result<Answer> {
    let mut cave = parse(input)?;
    Ok(pour(&mut cave, false).into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let mut cave = parse(input)?;
    Ok(pour(&mut cave, true).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
498,4 -> 498,6 -> 496,6
503,4 -> 502,4 -> 502,9 -> 494,9
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 24.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 93.into());
    }
}
