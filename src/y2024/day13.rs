use anyhow::ensure;

use crate::input::{paragraphs, parse_line_ints};
use crate::{Answer, Result};

const OFFSET: i64 = 10_000_000_000_000;

#[derive(Clone, Copy, Debug)]
struct Machine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

fn parse(input: &str) -> Result<Vec<Machine>> {
    paragraphs(input)
        .into_iter()
        .map(|block| {
            let v = parse_line_ints(block);
            ensure!(v.len() == 6, "bad claw machine {:?}", block);
            Ok(Machine {
                a: (v[0], v[1]),
                b: (v[2], v[3]),
                prize: (v[4], v[5]),
            })
        })
        .collect()
}

/// Cheapest token cost to win, solving the two button equations exactly.
fn tokens(m: &Machine, offset: i64) -> Option<i64> {
    let (px, py) = (m.prize.0 + offset, m.prize.1 + offset);
    let det = m.a.0 * m.b.1 - m.a.1 * m.b.0;
    if det == 0 {
        return collinear_tokens(m, px, py);
    }
    let na = px * m.b.1 - py * m.b.0;
    let nb = m.a.0 * py - m.a.1 * px;
    if na % det != 0 || nb % det != 0 {
        return None;
    }
    let (na, nb) = (na / det, nb / det);
    (na >= 0 && nb >= 0).then_some(3 * na + nb)
}

/// Both buttons move along the same line. Cost is linear along the family of
/// solutions, so the cheapest one uses either the fewest A or the fewest B presses.
fn collinear_tokens(m: &Machine, px: i64, py: i64) -> Option<i64> {
    let (ax, bx) = (m.a.0, m.b.0);
    if ax <= 0 || bx <= 0 {
        return None;
    }
    let fewest_a = (0..bx)
        .map(|na| (na, px - na * ax))
        .find(|&(_, rest)| rest >= 0 && rest % bx == 0)
        .map(|(na, rest)| (na, rest / bx));
    let fewest_b = (0..ax)
        .map(|nb| (nb, px - nb * bx))
        .find(|&(_, rest)| rest >= 0 && rest % ax == 0)
        .map(|(nb, rest)| (rest / ax, nb));
    [fewest_a, fewest_b]
        .into_iter()
        .flatten()
        .filter(|&(na, nb)| na * m.a.1 + nb * m.b.1 == py)
        .map(|(na, nb)| 3 * na + nb)
        .min()
}

fn total_tokens(input: &str, offset: i64) -> Result<i64> {
    Ok(parse(input)?.iter().filter_map(|m| tokens(m, offset)).sum())
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(total_tokens(input, 0)?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(total_tokens(input, OFFSET)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Button A: X+94, Y+34
Button B: X+22, Y+67
Prize: X=8400, Y=5400

Button A: X+26, Y+66
Button B: X+67, Y+21
Prize: X=12748, Y=12176

Button A: X+17, Y+86
Button B: X+84, Y+37
Prize: X=7870, Y=6450

Button A: X+69, Y+23
Button B: X+27, Y+71
Prize: X=18641, Y=10279
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 480.into());
        let machines = parse(EXAMPLE).unwrap();
        assert_eq!(tokens(&machines[0], 0), Some(280));
        let winnable: Vec<bool> = machines.iter().map(|m| tokens(m, OFFSET).is_some()).collect();
        assert_eq!(winnable, vec![false, true, false, true]);
    }

    #[test]
    fn collinear_buttons() {
        let m = Machine {
            a: (3, 3),
            b: (1, 1),
            prize: (9, 9),
        };
        // Nine B presses cost 9, three A presses cost 9 as well.
        assert_eq!(tokens(&m, 0), Some(9));
        let m = Machine {
            a: (4, 4),
            b: (1, 1),
            prize: (8, 8),
        };
        assert_eq!(tokens(&m, 0), Some(6));
    }
}
