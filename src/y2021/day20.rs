use anyhow::{Context, ensure};

use crate::{Answer, Result};

struct Image {
    pixels: Vec<Vec<bool>>,
    /// State of every pixel outside `pixels`.
    background: bool,
}

impl Image {
    fn get(&self, r: i64, c: i64) -> bool {
        if r < 0 || c < 0 || r as usize >= self.pixels.len() || c as usize >= self.pixels[0].len() {
            self.background
        } else {
            self.pixels[r as usize][c as usize]
        }
    }

    fn enhance(&self, algo: &[bool]) -> Image {
        let (h, w) = (self.pixels.len() as i64, self.pixels[0].len() as i64);
        let pixels = (-1..h + 1)
            .map(|r| {
                (-1..w + 1)
                    .map(|c| {
                        let mut idx = 0;
                        for dr in -1..=1 {
                            for dc in -1..=1 {
                                idx = idx << 1 | self.get(r + dr, c + dc) as usize;
                            }
                        }
                        algo[idx]
                    })
                    .collect()
            })
            .collect();
        let background = algo[if self.background { 511 } else { 0 }];
        Image { pixels, background }
    }
}

fn lit_after(input: &str, steps: usize) -> Result<usize> {
    let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty());
    let algo: Vec<bool> = lines.next().context("missing algorithm")?.bytes().map(|b| b == b'#').collect();
    ensure!(algo.len() == 512, "algorithm has {} entries", algo.len());
    let pixels: Vec<Vec<bool>> = lines.map(|l| l.bytes().map(|b| b == b'#').collect()).collect();
    ensure!(!pixels.is_empty(), "missing image");
    let mut image = Image {
        pixels,
        background: false,
    };
    for _ in 0..steps {
        image = image.enhance(&algo);
    }
    ensure!(!image.background, "infinitely many pixels are lit");
    Ok(image.pixels.iter().flatten().filter(|&&p| p).count())
}

pub fn task1(input: &str) -> Result<Answer> {
    Ok(lit_after(input, 2)?.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    Ok(lit_after(input, 50)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn algorithm(f: impl Fn(usize) -> bool) -> String {
        (0..512).map(|i| if f(i) { '#' } else { '.' }).collect()
    }

    #[test]
    fn identity_keeps_image() {
        let input = format!("{}\n\n#..#.\n#....\n##..#\n..#..\n..###\n", algorithm(|i| i & 16 != 0));
        assert_eq!(task1(&input).unwrap(), 10.into());
        assert_eq!(task2(&input).unwrap(), 10.into());
    }

    #[test]
    fn flashing_background_settles_on_even_steps() {
        // Lit iff the centre is dark, so the background alternates.
        let input = format!("{}\n\n#.\n..\n", algorithm(|i| i & 16 == 0));
        // After two inversions the original image is back.
        assert_eq!(task1(&input).unwrap(), 1.into());
    }
}
