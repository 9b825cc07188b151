use anyhow::{Context, bail};
use itertools::Itertools;

use crate::{Answer, Result};

fn parse(input: &str) -> Result<Vec<(Vec<u8>, Vec<usize>)>> {
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| {
            let (springs, groups) = l.split_once(' ').with_context(|| format!("bad row {:?}", l))?;
            if let Some(b) = springs.bytes().find(|b| !b".#?".contains(b)) {
                bail!("bad spring {:?}", b as char);
            }
            let groups = groups
                .split(',')
                .map(|g| g.parse().with_context(|| format!("bad group size {:?}", g)))
                .collect::<Result<Vec<usize>>>()?;
            Ok((springs.as_bytes().to_vec(), groups))
        })
        .collect()
}

/// Number of ways to fill the `?`s so the damaged runs are exactly `groups`.
fn arrangements(springs: &[u8], groups: &[usize]) -> u64 {
    let (n, m) = (springs.len(), groups.len());
    // ways[i][j]: arrangements of springs[i..] matching groups[j..].
    let mut ways = mat![0u64; n + 2; m + 1];
    ways[n][m] = 1;
    ways[n + 1][m] = 1;
    for i in (0..n).rev() {
        for j in 0..=m {
            let mut w = 0;
            if springs[i] != b'#' {
                w += ways[i + 1][j];
            }
            if springs[i] != b'.' && j < m {
                let end = i + groups[j];
                if end <= n && !springs[i..end].contains(&b'.') && springs.get(end) != Some(&b'#') {
                    w += ways[end + 1][j + 1];
                }
            }
            ways[i][j] = w;
        }
    }
    ways[0][0]
}

pub fn task1(input: &str) -> Result<Answer> {
    let total: u64 = parse(input)?.iter().map(|(s, g)| arrangements(s, g)).sum();
    Ok(total.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let total: u64 = parse(input)?
        .iter()
        .map(|(s, g)| {
            let springs = std::iter::repeat_n(s.as_slice(), 5).collect_vec().join(&b'?');
            arrangements(&springs, &g.repeat(5))
        })
        .sum();
    Ok(total.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 21.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 525152.into());
    }

    #[test]
    fn single_rows() {
        assert_eq!(arrangements(b"?###????????", &[3, 2, 1]), 10);
        assert_eq!(arrangements(b"???.###", &[1, 1, 3]), 1);
        assert_eq!(arrangements(b"#", &[2]), 0);
    }

    #[test]
    fn bad_group_is_an_error() {
        assert!(task1("???.### 1,x,3\n").is_err());
        assert!(task1("???.### 1,1,3\n").is_ok());
    }
}
