use anyhow::{Context, ensure};
use num::{BigInt, BigRational, One, ToPrimitive, Zero};

use crate::input::parse_line_ints;
use crate::{Answer, Result};

const AREA: (i128, i128) = (200_000_000_000_000, 400_000_000_000_000);

#[derive(Clone, Copy, Debug)]
struct Hail {
    p: [i128; 3],
    v: [i128; 3],
}

fn parse(input: &str) -> Result<Vec<Hail>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            let v = parse_line_ints(l);
            ensure!(v.len() == 6, "bad hailstone {:?}", l);
            let v: Vec<i128> = v.into_iter().map(i128::from).collect();
            Ok(Hail {
                p: [v[0], v[1], v[2]],
                v: [v[3], v[4], v[5]],
            })
        })
        .collect()
}

/// Whether the XY paths of `a` and `b` cross inside `[lo, hi]` in both stones' future.
fn crosses_inside(a: &Hail, b: &Hail, (lo, hi): (i128, i128)) -> bool {
    let den = a.v[0] * b.v[1] - a.v[1] * b.v[0];
    if den == 0 {
        return false;
    }
    let (dx, dy) = (b.p[0] - a.p[0], b.p[1] - a.p[1]);
    // a is at the crossing at time t = ta / den, b at s = tb / den.
    let ta = dx * b.v[1] - dy * b.v[0];
    let tb = dx * a.v[1] - dy * a.v[0];
    let sign = den.signum();
    if ta * sign < 0 || tb * sign < 0 {
        return false;
    }
    // Crossing coordinate times den, compared against the bounds times den.
    (0..2).all(|k| {
        let x = a.p[k] * den + ta * a.v[k];
        let (l, h) = (lo * den, hi * den);
        if sign > 0 { l <= x && x <= h } else { h <= x && x <= l }
    })
}

fn count_crossings(hail: &[Hail], area: (i128, i128)) -> usize {
    (0..hail.len())
        .flat_map(|i| (i + 1..hail.len()).map(move |j| (i, j)))
        .filter(|&(i, j)| crosses_inside(&hail[i], &hail[j], area))
        .count()
}

fn cross(a: [i128; 3], b: [i128; 3]) -> [i128; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Solves `m x = rhs` exactly; None when the system is singular.
fn solve_exact(mut m: Vec<Vec<BigRational>>, mut rhs: Vec<BigRational>) -> Option<Vec<BigRational>> {
    let n = rhs.len();
    for col in 0..n {
        let pivot = (col..n).find(|&r| !m[r][col].is_zero())?;
        m.swap(col, pivot);
        rhs.swap(col, pivot);
        for r in 0..n {
            if r == col || m[r][col].is_zero() {
                continue;
            }
            let f = &m[r][col] / &m[col][col];
            for c in col..n {
                let delta = &f * &m[col][c];
                m[r][c] -= delta;
            }
            let delta = &f * &rhs[col];
            rhs[r] -= delta;
        }
    }
    Some((0..n).map(|i| &rhs[i] / &m[i][i]).collect())
}

/// Rock position and velocity from three stones, via the pairwise cross-product identities.
fn rock_throw(h: &[Hail; 3]) -> Option<[BigRational; 6]> {
    let rat = |x: i128| BigRational::from_integer(BigInt::from(x));
    let mut m = vec![];
    let mut rhs = vec![];
    for j in [1, 2] {
        let w: Vec<i128> = (0..3).map(|k| h[j].v[k] - h[0].v[k]).collect();
        let u: Vec<i128> = (0..3).map(|k| h[j].p[k] - h[0].p[k]).collect();
        let rows = [
            [0, w[2], -w[1], 0, -u[2], u[1]],
            [-w[2], 0, w[0], u[2], 0, -u[0]],
            [w[1], -w[0], 0, -u[1], u[0], 0],
        ];
        let (cj, c0) = (cross(h[j].p, h[j].v), cross(h[0].p, h[0].v));
        for k in 0..3 {
            m.push(rows[k].iter().map(|&x| rat(x)).collect());
            rhs.push(rat(cj[k] - c0[k]));
        }
    }
    let x = solve_exact(m, rhs)?;
    x.try_into().ok()
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(count_crossings(&parse(input)?, AREA).into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let hail = parse(input)?;
    ensure!(hail.len() >= 3, "need at least three hailstones");
    let solution = (1..hail.len())
        .flat_map(|j| (j + 1..hail.len()).map(move |k| (j, k)))
        .find_map(|(j, k)| rock_throw(&[hail[0], hail[j], hail[k]]))
        .context("hailstones give no unique throw")?;
    let sum = solution[..3].iter().fold(BigRational::zero(), |acc, x| acc + x);
    ensure!(sum.denom().is_one(), "throw position is not integral");
    let total = sum.to_integer().to_i64().context("answer does not fit in i64")?;
    Ok(total.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
19, 13, 30 @ -2,  1, -2
18, 19, 22 @ -1, -1, -2
20, 25, 34 @ -2, -2, -4
12, 31, 28 @ -1, -2, -1
20, 19, 15 @  1, -5, -3
";

    #[test]
    fn example() {
        let hail = parse(EXAMPLE).unwrap();
        assert_eq!(count_crossings(&hail, (7, 27)), 2);
        assert_eq!(task2(EXAMPLE).unwrap(), 47.into());
    }
}
