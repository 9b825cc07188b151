use anyhow::{Context, bail, ensure};

use crate::input::parse_line_ints;
use crate::{Answer, Result};

type Stacks = Vec<Vec<u8>>;

fn parse(input: &str) -> Result<(Stacks, Vec<(usize, usize, usize)>)> {
    let (drawing, moves) = input
        .split_once("\n\n")
        .or_else(|| input.split_once("\r\n\r\n"))
        .context("missing blank line between drawing and moves")?;
    let mut rows: Vec<&str> = drawing.lines().collect();
    let labels = rows.pop().context("missing stack labels")?;
    let n = labels.split_whitespace().count();
    let mut stacks = vec![vec![]; n];
    for row in rows.iter().rev() {
        for (i, stack) in stacks.iter_mut().enumerate() {
            match row.as_bytes().get(1 + 4 * i) {
                Some(&c) if c.is_ascii_uppercase() => stack.push(c),
                Some(b' ') | None => {}
                Some(&c) => bail!("bad crate {:?}", c as char),
            }
        }
    }
    let moves = moves
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| match parse_line_ints(l)[..] {
            [count, from, to] if (1..=n as i64).contains(&from) && (1..=n as i64).contains(&to) => {
                Ok((count as usize, from as usize - 1, to as usize - 1))
            }
            _ => bail!("bad move {:?}", l),
        })
        .collect::<Result<_>>()?;
    Ok((stacks, moves))
}

fn rearrange(input: &str, keep_order: bool) -> Result<String> {
    let (mut stacks, moves) = parse(input)?;
    for (count, from, to) in moves {
        let len = stacks[from].len();
        ensure!(count <= len, "moving {} crates from a stack of {}", count, len);
        let mut lifted = stacks[from].split_off(len - count);
        if !keep_order {
            lifted.reverse();
        }
        stacks[to].extend(lifted);
    }
    Ok(stacks
        .iter()
        .filter_map(|s| s.last().map(|&c| c as char))
        .collect())
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(rearrange(input, false)?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(rearrange(input, true)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "    [D]    
[N] [C]    
[Z] [M] [P]
 1   2   3 

move 1 from 2 to 1
move 3 from 1 to 3
move 2 from 2 to 1
move 1 from 1 to 2
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), "CMZ".into());
        assert_eq!(task2(EXAMPLE).unwrap(), "MCD".into());
    }
}
