use anyhow::bail;

use crate::{Answer, Result};

enum Status {
    Corrupted(u8),
    Incomplete(Vec<u8>),
}

fn closer(open: u8) -> Option<u8> {
    match open {
        b'(' => Some(b')'),
        b'[' => Some(b']'),
        b'{' => Some(b'}'),
        b'<' => Some(b'>'),
        _ => None,
    }
}

fn check(line: &str) -> Result<Status> {
    let mut stack = vec![];
    for b in line.bytes() {
        if let Some(c) = closer(b) {
            stack.push(c);
        } else if matches!(b, b')' | b']' | b'}' | b'>') {
            if stack.pop() != Some(b) {
                return Ok(Status::Corrupted(b));
            }
        } else {
            bail!("unexpected character {:?}", b as char);
        }
    }
    stack.reverse();
    Ok(Status::Incomplete(stack))
}

pub fn task1(input: &str) -> Result<Answer> {
    let mut score = 0u64;
    for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Status::Corrupted(b) = check(line)? {
            score += match b {
                b')' => 3,
                b']' => 57,
                b'}' => 1197,
                _ => 25137,
            };
        }
    }
    Ok(score.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let mut scores = vec![];
    for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Status::Incomplete(rest) = check(line)? {
            if rest.is_empty() {
                continue;
            }
            let score = rest.iter().fold(0u64, |acc, &b| {
                acc * 5
                    + match b {
                        b')' => 1,
                        b']' => 2,
                        b'}' => 3,
                        _ => 4,
                    }
            });
            scores.push(score);
        }
    }
    if scores.is_empty() {
        bail!("no incomplete lines");
    }
    scores.sort_unstable();
    Ok(scores[scores.len() / 2].into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
[({(<(())[]>[[{[]{<()<>>
[(()[<>])]({[<{<<[]>>(
{([(<{}[<>[]}>{[]{[(<()>
(((({<>}<{<{<>}{[]{[]{}
[[<[([]))<([[{}[[()]]]
[{[{({}]{}}([{[{{{}}([]
{<[[]]>}<{[{[{[]{()[[[]
[<(<(<(<{}))><([]([]()
<{([([[(<>()){}]>(<<{{
<{([{{}}[<[[[<>{}]]]>[]]
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 26397.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 288957.into());
    }
}
