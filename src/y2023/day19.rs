use anyhow::{Context, bail, ensure};
use rustc_hash::FxHashMap;

use crate::input::{paragraphs, parse_line_ints};
use crate::{Answer, Result};

#[derive(Clone, Copy, Debug)]
struct Rule<'a> {
    // (category, less-than, threshold); None for the fallback.
    test: Option<(usize, bool, u64)>,
    target: &'a str,
}

type Workflows<'a> = FxHashMap<&'a str, Vec<Rule<'a>>>;

fn category(b: u8) -> Result<usize> {
    match b {
        b'x' => Ok(0),
        b'm' => Ok(1),
        b'a' => Ok(2),
        b's' => Ok(3),
        _ => bail!("unknown category {:?}", b as char),
    }
}

fn parse(input: &str) -> Result<(Workflows<'_>, Vec<[u64; 4]>)> {
    let blocks = paragraphs(input);
    ensure!(blocks.len() == 2, "expected workflows and parts");
    let mut flows = FxHashMap::default();
    for line in blocks[0].lines() {
        let (name, body) = line
            .trim()
            .trim_end_matches('}')
            .split_once('{')
            .with_context(|| format!("bad workflow {:?}", line))?;
        let rules = body
            .split(',')
            .map(|r| {
                Ok(match r.split_once(':') {
                    None => Rule { test: None, target: r },
                    Some((cond, target)) => {
                        let b = cond.as_bytes();
                        ensure!(b.len() >= 3 && matches!(b[1], b'<' | b'>'), "bad rule {:?}", r);
                        Rule {
                            test: Some((category(b[0])?, b[1] == b'<', cond[2..].parse()?)),
                            target,
                        }
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;
        flows.insert(name, rules);
    }
    let parts = blocks[1]
        .lines()
        .map(|l| match parse_line_ints(l)[..] {
            [x, m, a, s] => Ok([x, m, a, s].map(|v| v as u64)),
            _ => bail!("bad part {:?}", l),
        })
        .collect::<Result<_>>()?;
    Ok((flows, parts))
}

/// Number of rating combinations inside the half-open ranges that end up accepted.
fn accepted(flows: &Workflows, name: &str, mut ranges: [(u64, u64); 4]) -> Result<u64> {
    match name {
        "A" => return Ok(ranges.iter().map(|(lo, hi)| hi - lo).product()),
        "R" => return Ok(0),
        _ => {}
    }
    let rules = flows.get(name).with_context(|| format!("unknown workflow {}", name))?;
    let mut total = 0;
    for rule in rules {
        let Some((cat, less, v)) = rule.test else {
            return Ok(total + accepted(flows, rule.target, ranges)?);
        };
        let (lo, hi) = ranges[cat];
        let (pass, fail) = if less {
            ((lo, hi.min(v)), (lo.max(v), hi))
        } else {
            ((lo.max(v + 1), hi), (lo, hi.min(v + 1)))
        };
        if pass.0 < pass.1 {
            let mut sub = ranges;
            sub[cat] = pass;
            total += accepted(flows, rule.target, sub)?;
        }
        if fail.0 >= fail.1 {
            return Ok(total);
        }
        ranges[cat] = fail;
    }
    bail!("workflow {} has no fallback rule", name)
}

pub fn task1(input: &str) -> Result<Answer> {
    let (flows, parts) = parse(input)?;
    let mut sum = 0;
    for part in parts {
        let ranges = part.map(|v| (v, v + 1));
        if accepted(&flows, "in", ranges)? == 1 {
            sum += part.iter().sum::<u64>();
        }
    }
    Ok(sum.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let (flows, _) = parse(input)?;
    Ok(accepted(&flows, "in", [(1, 4001); 4])?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
px{a<2006:qkq,m>2090:A,rfg}
pv{a>1716:R,A}
lnx{m>1548:A,A}
rfg{s<537:gd,x>2440:R,A}
qs{s>3448:A,lnx}
qkq{x<1416:A,crn}
crn{x>2662:A,R}
in{s<1351:px,qqz}
qqz{s>2770:qs,m<1801:hdj,R}
gd{a>3333:R,R}
hdj{m>838:A,pv}

{x=787,m=2655,a=1222,s=2876}
{x=1679,m=44,a=2067,s=496}
{x=2036,m=264,a=79,s=2244}
{x=2461,m=1339,a=466,s=291}
{x=2127,m=1623,a=2188,s=1013}
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 19114.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 167409079868000u64.into());
    }
}
