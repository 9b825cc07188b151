use anyhow::{bail, ensure};
use rustc_hash::FxHashMap;

use crate::{Answer, Result};

// Rows bottom-up; bit 6 is the leftmost column. Spawned two columns from the left wall.
const ROCKS: [&[u8]; 5] = [
    &[0b0011110],
    &[0b0001000, 0b0011100, 0b0001000],
    &[0b0011100, 0b0000100, 0b0000100],
    &[0b0010000, 0b0010000, 0b0010000, 0b0010000],
    &[0b0011000, 0b0011000],
];

// Rows compared when looking for a repeated surface.
const PROFILE: usize = 32;

struct Chamber {
    rows: Vec<u8>,
    jets: Vec<bool>,
    jet: usize,
    dropped: usize,
}

impl Chamber {
    fn new(input: &str) -> Result<Self> {
        let jets = input
            .trim()
            .bytes()
            .map(|b| match b {
                b'<' => Ok(true),
                b'>' => Ok(false),
                _ => bail!("bad jet {:?}", b as char),
            })
            .collect::<Result<Vec<_>>>()?;
        ensure!(!jets.is_empty(), "no jets");
        Ok(Chamber {
            rows: vec![],
            jets,
            jet: 0,
            dropped: 0,
        })
    }

    fn hits(&self, rock: &[u8], y: usize) -> bool {
        rock.iter()
            .enumerate()
            .any(|(i, &r)| self.rows.get(y + i).is_some_and(|&row| row & r != 0))
    }

    fn drop_rock(&mut self) {
        let mut rock = ROCKS[self.dropped % ROCKS.len()].to_vec();
        let mut y = self.rows.len() + 3;
        loop {
            let left = self.jets[self.jet];
            self.jet = (self.jet + 1) % self.jets.len();
            let pushed: Option<Vec<u8>> = if left {
                rock.iter().all(|&r| r & 0b1000000 == 0).then(|| rock.iter().map(|&r| r << 1).collect())
            } else {
                rock.iter().all(|&r| r & 1 == 0).then(|| rock.iter().map(|&r| r >> 1).collect())
            };
            if let Some(p) = pushed {
                if !self.hits(&p, y) {
                    rock = p;
                }
            }
            if y == 0 || self.hits(&rock, y - 1) {
                break;
            }
            y -= 1;
        }
        for (i, &r) in rock.iter().enumerate() {
            if y + i == self.rows.len() {
                self.rows.push(0);
            }
            self.rows[y + i] |= r;
        }
        self.dropped += 1;
    }

    fn height(&self) -> usize {
        self.rows.len()
    }
}

fn tower_height(input: &str, count: usize) -> Result<usize> {
    let mut ch = Chamber::new(input)?;
    let mut seen: FxHashMap<(usize, usize, Vec<u8>), (usize, usize)> = FxHashMap::default();
    let mut skipped = 0;
    while ch.dropped < count {
        ch.drop_rock();
        if skipped == 0 && ch.height() >= PROFILE {
            let key = (
                ch.dropped % ROCKS.len(),
                ch.jet,
                ch.rows[ch.height() - PROFILE..].to_vec(),
            );
            if let Some(&(prev_dropped, prev_height)) = seen.get(&key) {
                let period = ch.dropped - prev_dropped;
                let cycles = (count - ch.dropped) / period;
                skipped = cycles * (ch.height() - prev_height);
                ch.dropped += cycles * period;
            } else {
                seen.insert(key, (ch.dropped, ch.height()));
            }
        }
    }
    Ok(ch.height() + skipped)
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(tower_height(input, 2022)?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(tower_height(input, 1_000_000_000_000)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = ">>><<><>><<<>><>>><<<>>><<<><<<>><>><<>>\n";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 3068.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 1514285714288u64.into());
    }
}
