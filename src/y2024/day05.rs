use std::cmp::Ordering;

use anyhow::{Context, ensure};
use rustc_hash::FxHashSet;

use crate::input::{paragraphs, parse_line_ints};
use crate::{Answer, Result};

struct Queue {
    // (a, b): a must come before b.
    rules: FxHashSet<(i64, i64)>,
    updates: Vec<Vec<i64>>,
}

fn parse(input: &str) -> Result<Queue> {
    let blocks = paragraphs(input);
    ensure!(blocks.len() == 2, "expected rules and updates");
    let mut rules = FxHashSet::default();
    for line in blocks[0].lines() {
        let v = parse_line_ints(line);
        ensure!(v.len() == 2, "bad rule {:?}", line);
        rules.insert((v[0], v[1]));
    }
    let updates = blocks[1].lines().map(parse_line_ints).collect();
    Ok(Queue { rules, updates })
}

impl Queue {
    fn order(&self, a: i64, b: i64) -> Ordering {
        if self.rules.contains(&(a, b)) {
            Ordering::Less
        } else if self.rules.contains(&(b, a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn is_ordered(&self, update: &[i64]) -> bool {
        update.is_sorted_by(|&a, &b| self.order(a, b) != Ordering::Greater)
    }
}

fn middle(update: &[i64]) -> Result<i64> {
    update.get(update.len() / 2).copied().context("empty update")
}

pub fn task1(input: &str) -> Result<Answer> {
    let q = parse(input)?;
    let mut sum = 0;
    for u in q.updates.iter().filter(|u| q.is_ordered(u)) {
        sum += middle(u)?;
    }
    Ok(sum.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let q = parse(input)?;
    let mut sum = 0;
    for u in q.updates.iter().filter(|u| !q.is_ordered(u)) {
        let mut fixed = u.clone();
        fixed.sort_by(|&a, &b| q.order(a, b));
        sum += middle(&fixed)?;
    }
    Ok(sum.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 143.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 123.into());
    }
}
