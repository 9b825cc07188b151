use anyhow::bail;

use crate::{Answer, Result};

fn from_snafu(s: &str) -> Result<i64> {
    s.bytes().try_fold(0i64, |acc, b| {
        let digit = match b {
            b'2' => 2,
            b'1' => 1,
            b'0' => 0,
            b'-' => -1,
            b'=' => -2,
            _ => bail!("bad SNAFU digit {:?}", b as char),
        };
        Ok(acc * 5 + digit)
    })
}

fn to_snafu(mut n: i64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = vec![];
    while n != 0 {
        let d = (n + 2).rem_euclid(5) - 2;
        digits.push(b"=-012"[(d + 2) as usize] as char);
        n = (n - d) / 5;
    }
    digits.iter().rev().collect()
}

pub fn task1(input: &str) -> Result<Answer> {
    let total = input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(from_snafu)
        .sum::<Result<i64>>()?;
    Ok(to_snafu(total).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
1=-0-2
12111
2=0=
21
2=01
111
20012
112
1=-1=
1-12
12
1=
122
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), "2=-1=0".into());
    }

    #[test]
    fn conversions() {
        for (n, s) in [(1, "1"), (3, "1="), (8, "2="), (2022, "1=11-2"), (314159265, "1121-1110-1=0")] {
            assert_eq!(to_snafu(n), s);
            assert_eq!(from_snafu(s).unwrap(), n);
        }
    }
}
