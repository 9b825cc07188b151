use anyhow::{Context, bail, ensure};
use itertools::Itertools;

use crate::input::{paragraphs, parse_line_ints};
use crate::{Answer, Result};

#[derive(Clone, Copy, Debug)]
enum Op {
    Add(u64),
    Mul(u64),
    Square,
}

#[derive(Clone, Debug)]
struct Monkey {
    items: Vec<u64>,
    op: Op,
    divisor: u64,
    if_true: usize,
    if_false: usize,
}

fn last_int(line: Option<&str>) -> Result<i64> {
    let line = line.context("truncated monkey")?;
    parse_line_ints(line)
        .last()
        .copied()
        .with_context(|| format!("no number in {:?}", line))
}

fn parse(input: &str) -> Result<Vec<Monkey>> {
    let monkeys = paragraphs(input)
        .into_iter()
        .map(|block| {
            let mut lines = block.lines().skip(1);
            let items = parse_line_ints(lines.next().context("missing items")?)
                .into_iter()
                .map(|v| v as u64)
                .collect();
            let op_line = lines.next().context("missing operation")?;
            let expr = op_line.split_once('=').context("bad operation")?.1;
            let op = match expr.split_whitespace().collect::<Vec<_>>()[..] {
                ["old", "*", "old"] => Op::Square,
                ["old", "*", v] => Op::Mul(v.parse()?),
                ["old", "+", v] => Op::Add(v.parse()?),
                _ => bail!("unsupported operation {:?}", op_line),
            };
            let divisor = last_int(lines.next())? as u64;
            ensure!(divisor > 0, "division by zero");
            Ok(Monkey {
                items,
                op,
                divisor,
                if_true: last_int(lines.next())? as usize,
                if_false: last_int(lines.next())? as usize,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    for m in &monkeys {
        ensure!(
            m.if_true < monkeys.len() && m.if_false < monkeys.len(),
            "throw target out of range"
        );
    }
    Ok(monkeys)
}

fn monkey_business(mut monkeys: Vec<Monkey>, rounds: usize, relief: bool) -> u64 {
    let modulus: u64 = monkeys.iter().map(|m| m.divisor).product();
    let mut inspected = vec![0u64; monkeys.len()];
    for _ in 0..rounds {
        for i in 0..monkeys.len() {
            let items = std::mem::take(&mut monkeys[i].items);
            inspected[i] += items.len() as u64;
            let m = monkeys[i].clone();
            for old in items {
                let mut new = match m.op {
                    Op::Add(v) => old + v,
                    Op::Mul(v) => old * v,
                    Op::Square => old * old,
                };
                if relief {
                    // floor(x / 3) mod m only depends on x mod 3m.
                    new = new % (3 * modulus) / 3;
                } else {
                    new %= modulus;
                }
                let to = if new % m.divisor == 0 { m.if_true } else { m.if_false };
                monkeys[to].items.push(new);
            }
        }
    }
    inspected.iter().sorted().rev().take(2).product()
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(monkey_business(parse(input)?, 20, true).into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(monkey_business(parse(input)?, 10000, false).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Monkey 0:
  Starting items: 79, 98
  Operation: new = old * 19
  Test: divisible by 23
    If true: throw to monkey 2
    If false: throw to monkey 3

Monkey 1:
  Starting items: 54, 65, 75, 74
  Operation: new = old + 6
  Test: divisible by 19
    If true: throw to monkey 2
    If false: throw to monkey 0

Monkey 2:
  Starting items: 79, 60, 97
  Operation: new = old * old
  Test: divisible by 13
    If true: throw to monkey 1
    If false: throw to monkey 3

Monkey 3:
  Starting items: 74
  Operation: new = old + 3
  Test: divisible by 17
    If true: throw to monkey 0
    If false: throw to monkey 1
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 10605.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 2713310158u64.into());
    }
}
