use anyhow::bail;

use crate::input::render_screen;
use crate::{Answer, Result};

/// The X register during each cycle, starting with cycle 1.
fn register_trace(input: &str) -> Result<Vec<i64>> {
    let mut x = 1;
    let mut trace = vec![];
    for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match line.split_whitespace().collect::<Vec<_>>()[..] {
            ["noop"] => trace.push(x),
            ["addx", v] => {
                trace.extend([x, x]);
                x += v.parse::<i64>()?;
            }
            _ => bail!("unknown instruction {:?}", line),
        }
    }
    trace.push(x);
    Ok(trace)
}

pub fn task1(input: &str) -> Result<Answer> {
    let trace = register_trace(input)?;
    let strength: i64 = (20..=220)
        .step_by(40)
        .filter_map(|cycle| trace.get(cycle - 1).map(|x| x * cycle as i64))
        .sum();
    Ok(strength.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let trace = register_trace(input)?;
    let mut screen = mat![false; 6; 40];
    for (i, x) in trace.iter().take(240).enumerate() {
        let col = (i % 40) as i64;
        screen[i / 40][i % 40] = (col - x).abs() <= 1;
    }
    Ok(render_screen(&screen).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_program() {
        let trace = register_trace("noop\naddx 3\naddx -5\n").unwrap();
        assert_eq!(trace, vec![1, 1, 1, 4, 4, -1]);
    }

    #[test]
    fn idle_sprite() {
        let input = "noop\n".repeat(240);
        assert_eq!(task1(&input).unwrap(), 720.into());
        let row = format!("███{}", "░".repeat(37));
        let expected = vec![row; 6].join("\n");
        assert_eq!(task2(&input).unwrap(), expected.into());
    }
}
