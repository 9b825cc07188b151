use anyhow::{Context, bail, ensure};
use rustc_hash::FxHashMap;

use crate::{Answer, Result};

enum Job<'a> {
    Number(i64),
    Op(&'a str, u8, &'a str),
}

type Jobs<'a> = FxHashMap<&'a str, Job<'a>>;

fn parse(input: &str) -> Result<Jobs<'_>> {
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| {
            let (name, job) = l.split_once(": ").with_context(|| format!("bad line {:?}", l))?;
            let job = match job.split_whitespace().collect::<Vec<_>>()[..] {
                [n] => Job::Number(n.parse()?),
                [a, op, b] if matches!(op, "+" | "-" | "*" | "/") => Job::Op(a, op.as_bytes()[0], b),
                _ => bail!("bad job {:?}", l),
            };
            Ok((name, job))
        })
        .collect()
}

fn apply(a: i64, op: u8, b: i64) -> Result<i64> {
    Ok(match op {
        b'+' => a + b,
        b'-' => a - b,
        b'*' => a * b,
        _ => {
            ensure!(b != 0, "division by zero");
            a / b
        }
    })
}

fn eval(jobs: &Jobs, name: &str) -> Result<i64> {
    match jobs.get(name).with_context(|| format!("unknown monkey {}", name))? {
        &Job::Number(n) => Ok(n),
        &Job::Op(a, op, b) => apply(eval(jobs, a)?, op, eval(jobs, b)?),
    }
}

fn depends_on_human(jobs: &Jobs, name: &str) -> bool {
    name == "humn"
        || matches!(jobs.get(name), Some(&Job::Op(a, _, b)) if depends_on_human(jobs, a) || depends_on_human(jobs, b))
}

/// The value `humn` must yell so that `name` evaluates to `target`.
fn solve_for_human(jobs: &Jobs, name: &str, target: i64) -> Result<i64> {
    if name == "humn" {
        return Ok(target);
    }
    let Some(&Job::Op(a, op, b)) = jobs.get(name) else {
        bail!("{} does not depend on humn", name);
    };
    if depends_on_human(jobs, a) {
        let known = eval(jobs, b)?;
        let want = match op {
            b'+' => target - known,
            b'-' => target + known,
            b'*' => {
                ensure!(known != 0 && target % known == 0, "no integer solution at {}", name);
                target / known
            }
            _ => target * known,
        };
        solve_for_human(jobs, a, want)
    } else {
        let known = eval(jobs, a)?;
        let want = match op {
            b'+' => target - known,
            b'-' => known - target,
            b'*' => {
                ensure!(known != 0 && target % known == 0, "no integer solution at {}", name);
                target / known
            }
            _ => {
                ensure!(target != 0 && known % target == 0, "no integer solution at {}", name);
                known / target
            }
        };
        solve_for_human(jobs, b, want)
    }
}

pub fn task1(input: &str) -> Result<Answer> {
    let jobs = parse(input)?;
    Ok(eval(&jobs, "root")?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let jobs = parse(input)?;
    let Some(&Job::Op(a, _, b)) = jobs.get("root") else {
        bail!("root must combine two monkeys");
    };
    let (unknown, known) = if depends_on_human(&jobs, a) { (a, b) } else { (b, a) };
    let target = eval(&jobs, known)?;
    Ok(solve_for_human(&jobs, unknown, target)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
root: pppw + sjmn
dbpl: 5
cczh: sllz + lgvd
zczc: 2
ptdq: humn - dvpt
dvpt: 3
lfqf: 4
humn: 5
ljgn: 2
sjmn: drzm * dbpl
sllz: 4
pppw: cczh / lfqf
lgvd: ljgn * ptdq
drzm: hmdt - zczc
hmdt: 32
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 152.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 301.into());
    }
}
