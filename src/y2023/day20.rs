use std::collections::VecDeque;

use anyhow::{Context, bail, ensure};
use rustc_hash::FxHashMap;

use crate::{Answer, Result};

#[derive(Clone, Debug)]
enum Kind {
    Broadcaster,
    FlipFlop(bool),
    // Last pulse remembered from each input module.
    Conjunction(FxHashMap<usize, bool>),
    Sink,
}

struct Machine<'a> {
    names: Vec<&'a str>,
    kinds: Vec<Kind>,
    outputs: Vec<Vec<usize>>,
    broadcaster: usize,
}

impl<'a> Machine<'a> {
    fn parse(input: &'a str) -> Result<Self> {
        let mut m = Machine {
            names: vec![],
            kinds: vec![],
            outputs: vec![],
            broadcaster: usize::MAX,
        };
        let mut ids: FxHashMap<&str, usize> = FxHashMap::default();
        let mut id = |m: &mut Machine<'a>, name: &'a str| {
            *ids.entry(name).or_insert_with(|| {
                m.names.push(name);
                m.kinds.push(Kind::Sink);
                m.outputs.push(vec![]);
                m.names.len() - 1
            })
        };
        for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let (module, targets) = line.split_once(" -> ").with_context(|| format!("bad module {:?}", line))?;
            let (kind, name) = match module.as_bytes().first() {
                Some(b'%') => (Kind::FlipFlop(false), &module[1..]),
                Some(b'&') => (Kind::Conjunction(FxHashMap::default()), &module[1..]),
                _ if module == "broadcaster" => (Kind::Broadcaster, module),
                _ => bail!("bad module {:?}", module),
            };
            let v = id(&mut m, name);
            if matches!(kind, Kind::Broadcaster) {
                m.broadcaster = v;
            }
            m.kinds[v] = kind;
            let outs = targets.split(',').map(|t| id(&mut m, t.trim())).collect();
            m.outputs[v] = outs;
        }
        ensure!(m.broadcaster != usize::MAX, "no broadcaster");
        for v in 0..m.kinds.len() {
            for i in 0..m.outputs[v].len() {
                let w = m.outputs[v][i];
                if let Kind::Conjunction(mem) = &mut m.kinds[w] {
                    mem.insert(v, false);
                }
            }
        }
        Ok(m)
    }

    fn id(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|&n| n == name)
    }

    /// Presses the button once; `watch` sees every (from, to, high) pulse.
    fn press(&mut self, mut watch: impl FnMut(usize, usize, bool)) {
        let mut que = VecDeque::from([(usize::MAX, self.broadcaster, false)]);
        while let Some((from, to, high)) = que.pop_front() {
            watch(from, to, high);
            let out = match &mut self.kinds[to] {
                Kind::Broadcaster => Some(high),
                Kind::FlipFlop(_) if high => None,
                Kind::FlipFlop(on) => {
                    *on = !*on;
                    Some(*on)
                }
                Kind::Conjunction(mem) => {
                    mem.insert(from, high);
                    Some(!mem.values().all(|&h| h))
                }
                Kind::Sink => None,
            };
            if let Some(pulse) = out {
                for &w in &self.outputs[to] {
                    que.push_back((to, w, pulse));
                }
            }
        }
    }
}

pub fn task1(input: &str) -> Result<Answer> {
    let mut m = Machine::parse(input)?;
    let mut counts = [0u64; 2];
    for _ in 0..1000 {
        m.press(|_, _, high| counts[high as usize] += 1);
    }
    Ok((counts[0] * counts[1]).into())
}

/// `rx` sits behind one conjunction whose inputs each fire on a fixed period.
pub fn task2(input: &str) -> Result<Answer> {
    let mut m = Machine::parse(input)?;
    let rx = m.id("rx").context("no rx module")?;
    let feeders: Vec<usize> = (0..m.kinds.len()).filter(|&v| m.outputs[v].contains(&rx)).collect();
    let [hub] = feeders[..] else {
        bail!("rx must have exactly one input");
    };
    ensure!(matches!(m.kinds[hub], Kind::Conjunction(_)), "rx must be fed by a conjunction");
    let inputs: Vec<usize> = (0..m.kinds.len()).filter(|&v| m.outputs[v].contains(&hub)).collect();
    let mut first_high: Vec<Option<u64>> = vec![None; inputs.len()];
    let mut presses = 0u64;
    while first_high.iter().any(Option::is_none) {
        ensure!(presses < 1_000_000, "inputs of rx never fire");
        presses += 1;
        m.press(|from, to, high| {
            if to == hub && high {
                if let Some(k) = inputs.iter().position(|&v| v == from) {
                    first_high[k].get_or_insert(presses);
                }
            }
        });
    }
    let total = first_high
        .iter()
        .flatten()
        .fold(1, |acc, &p| num::integer::lcm(acc, p));
    Ok(total.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        let input = "\
broadcaster -> a, b, c
%a -> b
%b -> c
%c -> inv
&inv -> a
";
        assert_eq!(task1(input).unwrap(), 32000000.into());
        let input = "\
broadcaster -> a
%a -> inv, con
&inv -> b
%b -> con
&con -> output
";
        assert_eq!(task1(input).unwrap(), 11687500.into());
    }

    #[test]
    fn single_counter_feeding_rx() {
        let input = "\
broadcaster -> a
%a -> hub
&hub -> rx
";
        assert_eq!(task2(input).unwrap(), 1.into());
        assert!(task2("broadcaster -> a\n%a -> b\n").is_err());
    }
}
