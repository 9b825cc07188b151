use anyhow::{Context, bail};

use crate::{Answer, Result};

/// Largest red, green and blue counts shown in each game.
fn parse(input: &str) -> Result<Vec<(u32, [u32; 3])>> {
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| {
            let (head, draws) = l.split_once(':').with_context(|| format!("bad game {:?}", l))?;
            let id = head.trim_start_matches("Game").trim().parse()?;
            let mut most = [0; 3];
            for cubes in draws.split([';', ',']) {
                let (n, color) = cubes.trim().split_once(' ').with_context(|| format!("bad draw {:?}", cubes))?;
                let k = match color {
                    "red" => 0,
                    "green" => 1,
                    "blue" => 2,
                    _ => bail!("unknown colour {:?}", color),
                };
                most[k] = most[k].max(n.parse()?);
            }
            Ok((id, most))
        })
        .collect()
}

pub fn task1(input: &str) -> Result<Answer> {
    let sum: u32 = parse(input)?
        .iter()
        .filter(|(_, most)| most[0] <= 12 && most[1] <= 13 && most[2] <= 14)
        .map(|(id, _)| id)
        .sum();
    Ok(sum.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let sum: u32 = parse(input)?
        .iter()
        .map(|(_, most)| most.iter().product::<u32>())
        .sum();
    Ok(sum.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 8.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 2286.into());
    }
}
