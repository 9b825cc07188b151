use anyhow::{bail, ensure};

use crate::{Answer, Result};

fn parse(input: &str) -> Result<(Vec<u32>, usize)> {
    let lines: Vec<&str> = input.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    ensure!(!lines.is_empty(), "empty report");
    let width = lines[0].len();
    let mut nums = Vec::with_capacity(lines.len());
    for line in lines {
        if line.len() != width {
            bail!("inconsistent width in {:?}", line);
        }
        nums.push(u32::from_str_radix(line, 2)?);
    }
    Ok((nums, width))
}

fn ones_at(nums: &[u32], bit: usize) -> usize {
    nums.iter().filter(|&&n| n >> bit & 1 == 1).count()
}

/// Filters by the bit criteria until one number is left.
fn rating(mut nums: Vec<u32>, width: usize, keep_common: bool) -> u32 {
    for bit in (0..width).rev() {
        if nums.len() == 1 {
            break;
        }
        let ones = ones_at(&nums, bit);
        let common = (2 * ones >= nums.len()) as u32;
        let want = if keep_common { common } else { 1 - common };
        nums.retain(|&n| n >> bit & 1 == want);
    }
    nums[0]
}

pub fn task1(input: &str) -> Result<Answer> {
    let (nums, width) = parse(input)?;
    let gamma = (0..width)
        .filter(|&bit| 2 * ones_at(&nums, bit) > nums.len())
        .fold(0u64, |acc, bit| acc | 1 << bit);
    let epsilon = !gamma & ((1 << width) - 1);
    Ok((gamma * epsilon).into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let (nums, width) = parse(input)?;
    let oxygen = rating(nums.clone(), width, true);
    let co2 = rating(nums, width, false);
    Ok((oxygen as u64 * co2 as u64).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
00100
11110
10110
10111
10101
01111
00111
11100
10000
11001
00010
01010
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 198.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 230.into());
    }
}
