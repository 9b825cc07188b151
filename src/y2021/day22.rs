use anyhow::{Context, bail};

use crate::input::parse_line_ints;
use crate::{Answer, Result};

/// Inclusive bounds per axis.
type Cuboid = [(i64, i64); 3];

fn parse(input: &str) -> Result<Vec<(bool, Cuboid)>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            let (state, rest) = l.trim().split_once(' ').context("missing state")?;
            let on = match state {
                "on" => true,
                "off" => false,
                _ => bail!("bad state {:?}", state),
            };
            match parse_line_ints(rest)[..] {
                [x0, x1, y0, y1, z0, z1] => Ok((on, [(x0, x1), (y0, y1), (z0, z1)])),
                _ => bail!("bad cuboid {:?}", rest),
            }
        })
        .collect()
}

fn intersect(a: &Cuboid, b: &Cuboid) -> Option<Cuboid> {
    let mut ret = [(0, 0); 3];
    for i in 0..3 {
        ret[i] = (a[i].0.max(b[i].0), a[i].1.min(b[i].1));
        if ret[i].0 > ret[i].1 {
            return None;
        }
    }
    Some(ret)
}

fn volume(c: &Cuboid) -> i64 {
    c.iter().map(|&(lo, hi)| hi - lo + 1).product()
}

/// Inclusion-exclusion over signed cuboids.
fn lit(steps: &[(bool, Cuboid)]) -> i64 {
    let mut signed: Vec<(Cuboid, i64)> = vec![];
    for (on, c) in steps {
        let mut add = vec![];
        for (s, sign) in &signed {
            if let Some(i) = intersect(s, c) {
                add.push((i, -sign));
            }
        }
        if *on {
            add.push((*c, 1));
        }
        signed.extend(add);
    }
    signed.iter().map(|(c, sign)| volume(c) * sign).sum()
}

pub fn task1(input: &str) -> Result<Answer> {
    let region = [(-50, 50); 3];
    let steps: Vec<_> = parse(input)?
        .into_iter()
        .filter_map(|(on, c)| intersect(&c, &region).map(|c| (on, c)))
        .collect();
    Ok(lit(&steps).into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(lit(&parse(input)?).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
on x=10..12,y=10..12,z=10..12
on x=11..13,y=11..13,z=11..13
off x=9..11,y=9..11,z=9..11
on x=10..10,y=10..10,z=10..10
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 39.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 39.into());
    }

    #[test]
    fn outside_region_only_counts_in_task2() {
        let input = "on x=100..101,y=0..0,z=0..0\non x=0..0,y=0..0,z=0..0\n";
        assert_eq!(task1(input).unwrap(), 1.into());
        assert_eq!(task2(input).unwrap(), 3.into());
    }
}
