use proconio::input;
use proconio::source::once::OnceSource;

use crate::input::count_tokens;
use crate::{Answer, Result};

fn parse(input: &str) -> Result<Vec<u32>> {
    let n = count_tokens::<u32>(input)?;
    let mut src = OnceSource::from(input);
    input! { from &mut src, depths: [u32; n] }
    Ok(depths)
}

/// Number of depths larger than the one `gap` readings earlier.
///
/// Comparing sliding windows of width `gap` reduces to this since the shared
/// middle terms cancel.
fn increases(depths: &[u32], gap: usize) -> usize {
    depths.windows(gap + 1).filter(|w| w[gap] > w[0]).count()
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(increases(&parse(input)?, 1).into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(increases(&parse(input)?, 3).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 7.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 5.into());
    }

    #[test]
    fn bad_depth_is_an_error() {
        assert!(task1("199\n-200\n").is_err());
        assert!(task2("199\n2O0\n208\n").is_err());
    }
}
