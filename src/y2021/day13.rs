use anyhow::{Context, bail};
use itertools::Itertools;
use rustc_hash::FxHashSet;

use crate::input::{paragraphs, parse_line_ints, render_screen};
use crate::{Answer, Result};

enum Fold {
    X(i64),
    Y(i64),
}

fn parse(input: &str) -> Result<(FxHashSet<(i64, i64)>, Vec<Fold>)> {
    let blocks = paragraphs(input);
    let [dots, folds] = blocks[..] else {
        bail!("expected dots and folds sections");
    };
    let dots = dots
        .lines()
        .map(|l| match parse_line_ints(l)[..] {
            [x, y] => Ok((x, y)),
            _ => bail!("bad dot {:?}", l),
        })
        .collect::<Result<_>>()?;
    let folds = folds
        .lines()
        .map(|l| {
            let (axis, v) = l
                .trim()
                .strip_prefix("fold along ")
                .and_then(|s| s.split_once('='))
                .with_context(|| format!("bad fold {:?}", l))?;
            let v = v.parse()?;
            Ok(match axis {
                "x" => Fold::X(v),
                "y" => Fold::Y(v),
                _ => bail!("bad axis {:?}", axis),
            })
        })
        .collect::<Result<_>>()?;
    Ok((dots, folds))
}

fn fold(dots: &FxHashSet<(i64, i64)>, f: &Fold) -> FxHashSet<(i64, i64)> {
    let mirror = |v: i64, at: i64| if v > at { 2 * at - v } else { v };
    dots.iter()
        .map(|&(x, y)| match *f {
            Fold::X(at) => (mirror(x, at), y),
            Fold::Y(at) => (x, mirror(y, at)),
        })
        .collect()
}

pub fn task1(input: &str) -> Result<Answer> {
    let (dots, folds) = parse(input)?;
    let first = folds.first().context("no folds")?;
    Ok(fold(&dots, first).len().into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let (mut dots, folds) = parse(input)?;
    for f in &folds {
        dots = fold(&dots, f);
    }
    let (w, h) = match (
        dots.iter().map(|d| d.0).minmax().into_option(),
        dots.iter().map(|d| d.1).minmax().into_option(),
    ) {
        (Some((_, x)), Some((_, y))) => (x as usize + 1, y as usize + 1),
        _ => bail!("no dots left"),
    };
    let mut screen = mat![false; h; w];
    for &(x, y) in &dots {
        screen[y as usize][x as usize] = true;
    }
    Ok(render_screen(&screen).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
6,10
0,14
9,10
0,3
10,4
4,11
6,0
6,12
4,1
0,13
10,12
3,4
3,0
8,4
1,10
2,14
8,10
9,0

fold along y=7
fold along x=5
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 17.into());
        let square = "\
█████
█░░░█
█░░░█
█░░░█
█████";
        assert_eq!(task2(EXAMPLE).unwrap(), square.into());
    }
}
