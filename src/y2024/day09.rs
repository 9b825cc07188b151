use anyhow::ensure;

use crate::{Answer, Result};

fn parse(input: &str) -> Result<Vec<u32>> {
    let map = input.trim();
    ensure!(map.bytes().all(|b| b.is_ascii_digit()), "disk map must be digits");
    Ok(map.bytes().map(|b| (b - b'0') as u32).collect())
}

/// Block layout: file id per block, None for free space.
fn blocks(map: &[u32]) -> Vec<Option<usize>> {
    map.iter()
        .enumerate()
        .flat_map(|(i, &len)| std::iter::repeat_n((i % 2 == 0).then_some(i / 2), len as usize))
        .collect()
}

fn checksum(disk: &[Option<usize>]) -> usize {
    disk.iter()
        .enumerate()
        .filter_map(|(i, f)| f.map(|id| i * id))
        .sum()
}

pub fn task1(input: &str) -> Result<Answer> {
    let mut disk = blocks(&parse(input)?);
    let (mut lo, mut hi) = (0, disk.len());
    loop {
        while lo < hi && disk[lo].is_some() {
            lo += 1;
        }
        while hi > lo && disk[hi - 1].is_none() {
            hi -= 1;
        }
        if lo + 1 >= hi {
            break;
        }
        disk.swap(lo, hi - 1);
    }
    Ok(checksum(&disk).into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let map = parse(input)?;
    // (start, len) of each file and each gap.
    let mut files = vec![];
    let mut gaps = vec![];
    let mut pos = 0;
    for (i, &len) in map.iter().enumerate() {
        if i % 2 == 0 {
            files.push((pos, len as usize));
        } else {
            gaps.push((pos, len as usize));
        }
        pos += len as usize;
    }
    for file in files.iter_mut().rev() {
        let gap = gaps
            .iter_mut()
            .take_while(|g| g.0 < file.0)
            .find(|g| g.1 >= file.1);
        if let Some(g) = gap {
            file.0 = g.0;
            g.0 += file.1;
            g.1 -= file.1;
        }
    }
    let sum: usize = files
        .iter()
        .enumerate()
        .map(|(id, &(start, len))| (start..start + len).sum::<usize>() * id)
        .sum();
    Ok(sum.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "2333133121414131402\n";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 1928.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 2858.into());
    }
}
