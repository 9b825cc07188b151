use anyhow::{Context, ensure};

use crate::input::parse_line_ints;
use crate::{Answer, Result};

fn parse(input: &str) -> Result<Vec<(i64, Vec<i64>)>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            let (target, rest) = l.split_once(':').with_context(|| format!("bad equation {:?}", l))?;
            let nums = parse_line_ints(rest);
            ensure!(!nums.is_empty() && nums.iter().all(|&n| n >= 0), "bad operands in {:?}", l);
            Ok((target.trim().parse()?, nums))
        })
        .collect()
}

/// Works backwards from the target, undoing the last operator each step.
fn solvable(target: i64, nums: &[i64], concat: bool) -> bool {
    let Some((&last, rest)) = nums.split_last() else {
        return false;
    };
    if rest.is_empty() {
        return target == last;
    }
    if target >= last && solvable(target - last, rest, concat) {
        return true;
    }
    if last != 0 && target % last == 0 && solvable(target / last, rest, concat) {
        return true;
    }
    if concat {
        let shift = 10i64.pow(if last == 0 { 1 } else { last.ilog10() + 1 });
        if target > last && (target - last) % shift == 0 && solvable(target / shift, rest, concat) {
            return true;
        }
    }
    false
}

fn calibration(input: &str, concat: bool) -> Result<i64> {
    Ok(parse(input)?
        .iter()
        .filter(|(t, nums)| solvable(*t, nums, concat))
        .map(|(t, _)| t)
        .sum())
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(calibration(input, false)?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(calibration(input, true)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 3749.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 11387.into());
    }
}
