use anyhow::{Context, bail};

use crate::{Answer, Result};

fn hash(s: &str) -> usize {
    s.bytes().fold(0, |h, b| (h + b as usize) * 17 % 256)
}

fn steps(input: &str) -> impl Iterator<Item = &str> {
    input.trim().split(',').map(str::trim).filter(|s| !s.is_empty())
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(steps(input).map(hash).sum::<usize>().into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let mut boxes: Vec<Vec<(&str, usize)>> = vec![vec![]; 256];
    for step in steps(input) {
        if let Some(label) = step.strip_suffix('-') {
            boxes[hash(label)].retain(|&(l, _)| l != label);
        } else {
            let (label, focal) = step.split_once('=').with_context(|| format!("bad step {:?}", step))?;
            let Ok(focal) = focal.parse() else {
                bail!("bad focal length in {:?}", step);
            };
            let lenses = &mut boxes[hash(label)];
            match lenses.iter_mut().find(|(l, _)| *l == label) {
                Some(lens) => lens.1 = focal,
                None => lenses.push((label, focal)),
            }
        }
    }
    let power: usize = boxes
        .iter()
        .enumerate()
        .flat_map(|(b, lenses)| {
            lenses
                .iter()
                .enumerate()
                .map(move |(slot, &(_, focal))| (b + 1) * (slot + 1) * focal)
        })
        .sum();
    Ok(power.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7\n";

    #[test]
    fn example() {
        assert_eq!(hash("HASH"), 52);
        assert_eq!(task1(EXAMPLE).unwrap(), 1320.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 145.into());
    }
}
