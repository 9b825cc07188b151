use anyhow::{Context, bail};

use crate::grid::{Dir, Pos};
use crate::{Answer, Result};

/// Plain and colour-encoded instructions of one dig plan line.
fn parse(input: &str) -> Result<Vec<[(Dir, i64); 2]>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            let parts: Vec<&str> = l.split_whitespace().collect();
            let [d, n, color] = parts[..] else {
                bail!("bad dig line {:?}", l);
            };
            let plain = (
                d.bytes().next().and_then(Dir::from_byte).context("bad direction")?,
                n.parse()?,
            );
            let hex = color.trim_start_matches("(#").trim_end_matches(')');
            if hex.len() != 6 {
                bail!("bad colour {:?}", color);
            }
            let dist = i64::from_str_radix(&hex[..5], 16)?;
            let dir = match &hex[5..] {
                "0" => Dir::Right,
                "1" => Dir::Down,
                "2" => Dir::Left,
                "3" => Dir::Up,
                _ => bail!("bad colour direction {:?}", color),
            };
            Ok([plain, (dir, dist)])
        })
        .collect()
}

/// Trench plus interior: shoelace area, then Pick's theorem for the boundary.
fn lagoon(steps: impl Iterator<Item = (Dir, i64)>) -> i64 {
    let mut p = Pos::default();
    let (mut twice_area, mut boundary) = (0, 0);
    for (d, n) in steps {
        let q = p + d.delta() * n;
        twice_area += p.c * q.r - q.c * p.r;
        boundary += n;
        p = q;
    }
    twice_area.abs() / 2 + boundary / 2 + 1
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(lagoon(parse(input)?.iter().map(|s| s[0])).into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(lagoon(parse(input)?.iter().map(|s| s[1])).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
R 6 (#70c710)
D 5 (#0dc571)
L 2 (#5713f0)
D 2 (#d2c081)
R 2 (#59c680)
D 2 (#411b91)
L 5 (#8ceee2)
U 2 (#caa173)
L 1 (#1b58a2)
U 2 (#caa171)
R 2 (#7807d2)
U 3 (#a77fa3)
L 2 (#015232)
U 2 (#7a21e3)
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 62.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 952408144115i64.into());
    }
}
