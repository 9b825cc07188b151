use anyhow::{Context, bail};
use rustc_hash::FxHashMap;

use crate::{Answer, Result};

const DISK: u64 = 70_000_000;
const NEEDED: u64 = 30_000_000;

/// Total size of every directory, keyed by absolute path.
fn dir_sizes(input: &str) -> Result<FxHashMap<Vec<String>, u64>> {
    let mut cwd: Vec<String> = vec![];
    let mut sizes: FxHashMap<Vec<String>, u64> = FxHashMap::default();
    sizes.insert(vec![], 0);
    for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts[..] {
            ["$", "cd", "/"] => cwd.clear(),
            ["$", "cd", ".."] => {
                cwd.pop().context("cd .. from the root")?;
            }
            ["$", "cd", dir] => {
                cwd.push(dir.to_string());
                sizes.entry(cwd.clone()).or_insert(0);
            }
            ["$", "ls"] | ["dir", _] => {}
            [size, _] => {
                let size: u64 = size.parse().with_context(|| format!("bad listing {:?}", line))?;
                for depth in 0..=cwd.len() {
                    *sizes.entry(cwd[..depth].to_vec()).or_insert(0) += size;
                }
            }
            _ => bail!("unexpected line {:?}", line),
        }
    }
    Ok(sizes)
}

pub fn task1(input: &str) -> Result<Answer> {
    let total: u64 = dir_sizes(input)?.values().filter(|&&s| s <= 100_000).sum();
    Ok(total.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let sizes = dir_sizes(input)?;
    let used = sizes[&Vec::<String>::new()];
    let need = (used + NEEDED).saturating_sub(DISK);
    let best = sizes
        .values()
        .filter(|&&s| s >= need)
        .min()
        .context("no directory is large enough")?;
    Ok((*best).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 95437.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 24933642.into());
    }
}
