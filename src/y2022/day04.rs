use anyhow::bail;

use crate::input::parse_line_ints;
use crate::{Answer, Result};

type Pair = ((i64, i64), (i64, i64));

fn parse(input: &str) -> Result<Vec<Pair>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        // Section ids are non-negative, so the dashes are separators.
        .map(|l| match parse_line_ints(&l.replace('-', " "))[..] {
            [a, b, c, d] => Ok(((a, b), (c, d))),
            _ => bail!("bad assignment pair {:?}", l),
        })
        .collect()
}

pub fn task1(input: &str) -> Result<Answer> {
    let n = parse(input)?
        .iter()
        .filter(|((a, b), (c, d))| (a <= c && d <= b) || (c <= a && b <= d))
        .count();
    Ok(n.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let n = parse(input)?
        .iter()
        .filter(|((a, b), (c, d))| a <= d && c <= b)
        .count();
    Ok(n.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
2-4,6-8
2-3,4-5
5-7,7-9
2-8,3-7
6-6,4-6
2-6,4-8
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 2.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 4.into());
    }
}
