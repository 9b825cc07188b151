use anyhow::{Context, bail, ensure};
use rustc_hash::FxHashSet;

use crate::{Answer, Result};

#[derive(Clone, Copy, Debug)]
enum Operand {
    Reg(usize),
    Imm(i64),
}

#[derive(Clone, Copy, Debug)]
enum Op {
    Inp,
    Add,
    Mul,
    Div,
    Mod,
    Eql,
}

#[derive(Clone, Copy, Debug)]
struct Instr {
    op: Op,
    a: usize,
    b: Operand,
}

type Regs = [i64; 4];

fn reg(s: &str) -> Result<usize> {
    Ok(match s {
        "w" => 0,
        "x" => 1,
        "y" => 2,
        "z" => 3,
        _ => bail!("invalid variable {:?}", s),
    })
}

fn parse_instr(line: &str) -> Result<Instr> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let op = match parts[0] {
        "inp" => Op::Inp,
        "add" => Op::Add,
        "mul" => Op::Mul,
        "div" => Op::Div,
        "mod" => Op::Mod,
        "eql" => Op::Eql,
        other => bail!("invalid ALU instruction {:?}", other),
    };
    let a = reg(parts.get(1).context("missing operand")?)?;
    let b = match (op, parts.get(2)) {
        (Op::Inp, None) => Operand::Imm(0),
        (Op::Inp, Some(_)) => bail!("inp takes one operand"),
        (_, Some(s)) => match s.parse() {
            Ok(v) => Operand::Imm(v),
            Err(_) => Operand::Reg(reg(s)?),
        },
        (_, None) => bail!("missing second operand in {:?}", line),
    };
    Ok(Instr { op, a, b })
}

/// A program slice starting at an `inp`, up to the next one.
struct Block {
    instrs: Vec<Instr>,
    /// Registers whose value on entry can influence the outcome.
    live_in: [bool; 4],
}

impl Block {
    /// Runs the block with `digit` as input; `None` on a division by zero or
    /// an invalid modulus.
    fn run(&self, mut regs: Regs, digit: i64) -> Option<Regs> {
        for ins in &self.instrs {
            let b = match ins.b {
                Operand::Reg(r) => regs[r],
                Operand::Imm(v) => v,
            };
            let a = &mut regs[ins.a];
            match ins.op {
                Op::Inp => *a = digit,
                Op::Add => *a += b,
                Op::Mul => *a *= b,
                Op::Div if b == 0 => return None,
                Op::Div => *a /= b,
                Op::Mod if *a < 0 || b <= 0 => return None,
                Op::Mod => *a %= b,
                Op::Eql => *a = (*a == b) as i64,
            }
        }
        Some(regs)
    }

    fn key(&self, regs: &Regs) -> Regs {
        let mut k = *regs;
        for (v, &live) in k.iter_mut().zip(&self.live_in) {
            if !live {
                *v = 0;
            }
        }
        k
    }
}

fn parse(input: &str) -> Result<Vec<Block>> {
    let mut blocks: Vec<Vec<Instr>> = vec![];
    for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let ins = parse_instr(line)?;
        if let Op::Inp = ins.op {
            blocks.push(vec![]);
        }
        blocks.last_mut().context("program must start with inp")?.push(ins);
    }
    ensure!(!blocks.is_empty(), "empty program");

    // Backwards liveness; only z matters once the program ends.
    let mut live = [false, false, false, true];
    let mut ret: Vec<Block> = vec![];
    for instrs in blocks.into_iter().rev() {
        let mut read_first = [false; 4];
        let mut written = [false; 4];
        for ins in &instrs {
            let clears = matches!((ins.op, ins.b), (Op::Inp, _) | (Op::Mul, Operand::Imm(0)));
            if !clears {
                if !written[ins.a] {
                    read_first[ins.a] = true;
                }
                if let Operand::Reg(r) = ins.b {
                    if !written[r] {
                        read_first[r] = true;
                    }
                }
            }
            written[ins.a] = true;
        }
        for r in 0..4 {
            live[r] = read_first[r] || (live[r] && !written[r]);
        }
        ret.push(Block {
            instrs,
            live_in: live,
        });
    }
    ret.reverse();
    Ok(ret)
}

struct Search<'a> {
    blocks: &'a [Block],
    digits: Vec<i64>,
    dead: Vec<FxHashSet<Regs>>,
}

impl Search<'_> {
    fn find(&mut self, step: usize, regs: Regs, out: &mut Vec<i64>) -> bool {
        if step == self.blocks.len() {
            return regs[3] == 0;
        }
        let key = self.blocks[step].key(&regs);
        if self.dead[step].contains(&key) {
            return false;
        }
        for i in 0..self.digits.len() {
            let d = self.digits[i];
            if let Some(next) = self.blocks[step].run(regs, d) {
                out.push(d);
                if self.find(step + 1, next, out) {
                    return true;
                }
                out.pop();
            }
        }
        self.dead[step].insert(key);
        false
    }
}

fn model_number(input: &str, digits: impl Iterator<Item = i64>) -> Result<String> {
    let blocks = parse(input)?;
    let mut search = Search {
        blocks: &blocks,
        digits: digits.collect(),
        dead: (0..blocks.len()).map(|_| FxHashSet::default()).collect(),
    };
    let mut out = vec![];
    if !search.find(0, [0; 4], &mut out) {
        bail!("no model number is accepted");
    }
    log::debug!(
        "memoised dead states per block: {:?}",
        search.dead.iter().map(|d| d.len()).collect::<Vec<_>>()
    );
    Ok(out.iter().map(|d| d.to_string()).collect())
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(model_number(input, (1..=9).rev())?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(model_number(input, 1..=9)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    // z = d2 - d1 + 3
    const PROGRAM: &str = "\
inp w
add z w
inp x
mul z -1
add z x
add z 3
";

    #[test]
    fn largest_and_smallest() {
        assert_eq!(task1(PROGRAM).unwrap(), "96".into());
        assert_eq!(task2(PROGRAM).unwrap(), "41".into());
    }

    #[test]
    fn liveness_ignores_overwritten_registers() {
        let blocks = parse(PROGRAM).unwrap();
        assert_eq!(blocks[1].live_in, [false, false, false, true]);
    }

    #[test]
    fn division_by_zero_is_rejected() {
        assert!(task1("inp w\ndiv z 0\n").is_err());
    }
}
