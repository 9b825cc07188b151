use anyhow::{Context, bail};

use crate::{Answer, Result};

enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

fn parse(input: &str) -> Result<Vec<Command>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            let (cmd, n) = line
                .split_once(' ')
                .with_context(|| format!("bad command {:?}", line))?;
            let n = n.trim().parse()?;
            Ok(match cmd {
                "forward" => Command::Forward(n),
                "down" => Command::Down(n),
                "up" => Command::Up(n),
                _ => bail!("unknown command {:?}", cmd),
            })
        })
        .collect()
}

pub fn task1(input: &str) -> Result<Answer> {
    let (mut x, mut depth) = (0, 0);
    for cmd in parse(input)? {
        match cmd {
            Command::Forward(n) => x += n,
            Command::Down(n) => depth += n,
            Command::Up(n) => depth -= n,
        }
    }
    Ok((x * depth).into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let (mut x, mut depth, mut aim) = (0, 0, 0);
    for cmd in parse(input)? {
        match cmd {
            Command::Forward(n) => {
                x += n;
                depth += aim * n;
            }
            Command::Down(n) => aim += n,
            Command::Up(n) => aim -= n,
        }
    }
    Ok((x * depth).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
forward 5
down 5
forward 8
up 3
down 8
forward 2
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 150.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 900.into());
    }

    #[test]
    fn unknown_command() {
        assert!(task1("sideways 3").is_err());
    }
}
