use anyhow::{Context, ensure};

use crate::input::{paragraphs, parse_line_ints};
use crate::{Answer, Result};

/// One `dst src len` line of a map.
#[derive(Clone, Copy, Debug)]
struct Shift {
    start: i64,
    end: i64,
    offset: i64,
}

type Layer = Vec<Shift>;

fn parse(input: &str) -> Result<(Vec<i64>, Vec<Layer>)> {
    let blocks = paragraphs(input);
    let (first, rest) = blocks.split_first().context("empty almanac")?;
    let seeds = parse_line_ints(first);
    let layers = rest
        .iter()
        .map(|block| {
            block
                .lines()
                .skip(1)
                .map(|l| {
                    let v = parse_line_ints(l);
                    ensure!(v.len() == 3, "bad map line {:?}", l);
                    Ok(Shift {
                        start: v[1],
                        end: v[1] + v[2],
                        offset: v[0] - v[1],
                    })
                })
                .collect::<Result<Layer>>()
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((seeds, layers))
}

/// Maps half-open ranges through one layer, splitting them at shift boundaries.
fn map_ranges(layer: &Layer, ranges: Vec<(i64, i64)>) -> Vec<(i64, i64)> {
    let mut out = vec![];
    let mut todo = ranges;
    while let Some((lo, hi)) = todo.pop() {
        let hit = layer.iter().find(|s| s.start < hi && lo < s.end);
        match hit {
            Some(s) => {
                let (a, b) = (lo.max(s.start), hi.min(s.end));
                out.push((a + s.offset, b + s.offset));
                if lo < a {
                    todo.push((lo, a));
                }
                if b < hi {
                    todo.push((b, hi));
                }
            }
            None => out.push((lo, hi)),
        }
    }
    out
}

fn lowest_location(layers: &[Layer], ranges: Vec<(i64, i64)>) -> Result<i64> {
    let ranges = layers.iter().fold(ranges, |r, layer| map_ranges(layer, r));
    ranges.iter().map(|r| r.0).min().context("no seeds")
}

pub fn task1(input: &str) -> Result<Answer> {
    let (seeds, layers) = parse(input)?;
    let ranges = seeds.iter().map(|&s| (s, s + 1)).collect();
    Ok(lowest_location(&layers, ranges)?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let (seeds, layers) = parse(input)?;
    ensure!(seeds.len() % 2 == 0, "seed ranges come in pairs");
    let ranges = seeds
        .chunks(2)
        .filter(|c| c[1] > 0)
        .map(|c| (c[0], c[0] + c[1]))
        .collect();
    Ok(lowest_location(&layers, ranges)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 35.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 46.into());
    }
}
