use crate::grid::Grid;
use crate::{Answer, Result};

/// Moves every member of `herd` that can; returns whether any moved.
fn shift(g: &mut Grid<u8>, herd: u8) -> bool {
    let (dr, dc) = if herd == b'>' { (0, 1) } else { (1, 0) };
    let (h, w) = (g.height as i64, g.width as i64);
    let movers: Vec<_> = g
        .iter()
        .filter(|&(_, &c)| c == herd)
        .map(|(p, _)| p)
        .filter_map(|p| {
            let mut q = p;
            q.r = (p.r + dr) % h;
            q.c = (p.c + dc) % w;
            (g[q] == b'.').then_some((p, q))
        })
        .collect();
    for &(p, q) in &movers {
        g[p] = b'.';
        g[q] = herd;
    }
    !movers.is_empty()
}

pub fn task1(input: &str) -> Result<Answer> {
    let mut g = Grid::parse(input)?;
    let mut steps = 1;
    loop {
        let east = shift(&mut g, b'>');
        let south = shift(&mut g, b'v');
        if !east && !south {
            return Ok(steps.into());
        }
        steps += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
v...>>.vv>
.vv>>.vv..
>>.>v>...v
>>v>>.>.v.
v>v.vv.v..
>.>>..v...
.vv..>.>v.
v.v..>>v.v
....v..v.>
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 58.into());
    }
}
