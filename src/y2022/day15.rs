use anyhow::{Context, ensure};
use itertools::Itertools;
use rayon::prelude::*;

use crate::input::parse_line_ints;
use crate::{Answer, Result};

const ROW: i64 = 2_000_000;
const LIMIT: i64 = 4_000_000;

#[derive(Clone, Copy, Debug)]
struct Sensor {
    x: i64,
    y: i64,
    bx: i64,
    by: i64,
    radius: i64,
}

fn parse(input: &str) -> Result<Vec<Sensor>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            let v = parse_line_ints(l);
            ensure!(v.len() == 4, "bad sensor line {:?}", l);
            let (x, y, bx, by) = (v[0], v[1], v[2], v[3]);
            Ok(Sensor {
                x,
                y,
                bx,
                by,
                radius: (x - bx).abs() + (y - by).abs(),
            })
        })
        .collect()
}

/// Merged closed intervals of `row` covered by some sensor.
fn coverage(sensors: &[Sensor], row: i64) -> Vec<(i64, i64)> {
    let mut merged: Vec<(i64, i64)> = vec![];
    let spans = sensors
        .iter()
        .filter_map(|s| {
            let w = s.radius - (s.y - row).abs();
            (w >= 0).then_some((s.x - w, s.x + w))
        })
        .sorted();
    for (lo, hi) in spans {
        match merged.last_mut() {
            Some(last) if lo <= last.1 + 1 => last.1 = last.1.max(hi),
            _ => merged.push((lo, hi)),
        }
    }
    merged
}

fn excluded_in_row(sensors: &[Sensor], row: i64) -> i64 {
    let covered: i64 = coverage(sensors, row).iter().map(|(lo, hi)| hi - lo + 1).sum();
    let beacons = sensors
        .iter()
        .filter(|s| s.by == row)
        .map(|s| s.bx)
        .unique()
        .count() as i64;
    covered - beacons
}

fn distress_beacon(sensors: &[Sensor], limit: i64) -> Option<(i64, i64)> {
    (0..=limit).into_par_iter().find_map_any(|row| {
        let mut x = 0;
        for (lo, hi) in coverage(sensors, row) {
            if lo > x {
                break;
            }
            x = x.max(hi + 1);
        }
        (x <= limit).then_some((x, row))
    })
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(excluded_in_row(&parse(input)?, ROW).into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let sensors = parse(input)?;
    let (x, y) = distress_beacon(&sensors, LIMIT).context("no uncovered position")?;
    Ok((x * 4_000_000 + y).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Sensor at x=2, y=18: closest beacon is at x=-2, y=15
Sensor at x=9, y=16: closest beacon is at x=10, y=16
Sensor at x=13, y=2: closest beacon is at x=15, y=3
Sensor at x=12, y=14: closest beacon is at x=10, y=16
Sensor at x=10, y=20: closest beacon is at x=10, y=16
Sensor at x=14, y=17: closest beacon is at x=10, y=16
Sensor at x=8, y=7: closest beacon is at x=2, y=10
Sensor at x=2, y=0: closest beacon is at x=2, y=10
Sensor at x=0, y=11: closest beacon is at x=2, y=10
Sensor at x=20, y=14: closest beacon is at x=25, y=17
Sensor at x=17, y=20: closest beacon is at x=21, y=22
Sensor at x=16, y=7: closest beacon is at x=15, y=3
Sensor at x=14, y=3: closest beacon is at x=15, y=3
Sensor at x=20, y=1: closest beacon is at x=15, y=3
";

    #[test]
    fn example() {
        let sensors = parse(EXAMPLE).unwrap();
        assert_eq!(excluded_in_row(&sensors, 10), 26);
        assert_eq!(distress_beacon(&sensors, 20), Some((14, 11)));
    }
}
