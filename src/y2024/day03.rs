use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Answer, Result};

static INSTR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)").unwrap());

/// Sum of the enabled `mul` results; `conditional` honours `do()` and `don't()`.
fn run(input: &str, conditional: bool) -> Result<i64> {
    let mut enabled = true;
    let mut sum = 0;
    for caps in INSTR_RE.captures_iter(input) {
        match &caps[0] {
            "do()" => enabled = true,
            "don't()" => enabled = !conditional,
            _ if enabled => sum += caps[1].parse::<i64>()? * caps[2].parse::<i64>()?,
            _ => {}
        }
    }
    Ok(sum)
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(run(input, false)?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(run(input, true)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        let input = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
        assert_eq!(task1(input).unwrap(), 161.into());
        let input = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
        assert_eq!(task2(input).unwrap(), 48.into());
    }
}
