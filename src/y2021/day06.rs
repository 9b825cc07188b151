use crate::input::parse_line_ints;
use crate::{Answer, Result};

fn population(input: &str, days: usize) -> Result<u64> {
    let mut timers = [0u64; 9];
    for t in parse_line_ints(input) {
        anyhow::ensure!((0..9).contains(&t), "timer {} out of range", t);
        timers[t as usize] += 1;
    }
    for _ in 0..days {
        timers.rotate_left(1);
        timers[6] += timers[8];
    }
    Ok(timers.iter().sum())
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(population(input, 80)?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(population(input, 256)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        assert_eq!(population("3,4,3,1,2", 18).unwrap(), 26);
        assert_eq!(task1("3,4,3,1,2").unwrap(), 5934.into());
        assert_eq!(task2("3,4,3,1,2").unwrap(), 26984457539u64.into());
    }
}
