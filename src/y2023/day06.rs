use anyhow::ensure;

use crate::input::parse_line_ints;
use crate::{Answer, Result};

/// Hold times in `0..=time` whose distance beats `record`.
fn ways(time: i64, record: i64) -> i64 {
    let beats = |hold: i64| hold * (time - hold) > record;
    // Distance peaks at time / 2; walk the float estimate onto the exact edge.
    let disc = (time * time - 4 * record) as f64;
    if disc < 0.0 {
        return 0;
    }
    let mut lo = ((time as f64 - disc.sqrt()) / 2.0).floor() as i64;
    while lo <= time / 2 && !beats(lo) {
        lo += 1;
    }
    while lo > 0 && beats(lo - 1) {
        lo -= 1;
    }
    if lo > time / 2 {
        return 0;
    }
    // Symmetric around time / 2.
    time - 2 * lo + 1
}

fn races(input: &str) -> Result<(Vec<i64>, Vec<i64>)> {
    let mut lines = input.lines().filter(|l| !l.trim().is_empty());
    let times = parse_line_ints(lines.next().unwrap_or(""));
    let records = parse_line_ints(lines.next().unwrap_or(""));
    ensure!(!times.is_empty() && times.len() == records.len(), "times and records do not line up");
    Ok((times, records))
}

pub fn task1(input: &str) -> Result<Answer> {
    let (times, records) = races(input)?;
    let product: i64 = times.iter().zip(&records).map(|(&t, &r)| ways(t, r)).product();
    Ok(product.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let joined = input.replace(' ', "");
    let (times, records) = races(&joined)?;
    Ok(ways(times[0], records[0]).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Time:      7  15   30
Distance:  9  40  200
";

    #[test]
    fn example() {
        assert_eq!(ways(7, 9), 4);
        assert_eq!(ways(30, 200), 9);
        assert_eq!(task1(EXAMPLE).unwrap(), 288.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 71503.into());
    }
}
