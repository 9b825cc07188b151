use anyhow::bail;

use crate::input::parse_line_ints;
use crate::{Answer, Result};

struct Target {
    x0: i64,
    x1: i64,
    y0: i64,
    y1: i64,
}

fn parse(input: &str) -> Result<Target> {
    match parse_line_ints(input)[..] {
        [x0, x1, y0, y1] if x0 <= x1 && y0 <= y1 && x0 > 0 && y1 < 0 => Ok(Target { x0, x1, y0, y1 }),
        _ => bail!("expected a target area right of and below the launcher"),
    }
}

fn hits(t: &Target, mut vx: i64, mut vy: i64) -> bool {
    let (mut x, mut y) = (0, 0);
    while x <= t.x1 && y >= t.y0 {
        if x >= t.x0 && y <= t.y1 {
            return true;
        }
        x += vx;
        y += vy;
        vx -= vx.signum();
        vy -= 1;
    }
    false
}

pub fn task1(input: &str) -> Result<Answer> {
    let t = parse(input)?;
    // Going up with vy, the probe returns to y=0 with speed -(vy+1); the
    // fastest that still lands is vy = -y0 - 1.
    let vy = -t.y0 - 1;
    Ok((vy * (vy + 1) / 2).into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let t = parse(input)?;
    let mut count = 0;
    for vx in 1..=t.x1 {
        for vy in t.y0..-t.y0 {
            if hits(&t, vx, vy) {
                count += 1;
            }
        }
    }
    Ok(count.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "target area: x=20..30, y=-10..-5";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 45.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 112.into());
    }
}
