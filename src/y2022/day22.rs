use std::collections::VecDeque;

use anyhow::{Context, bail, ensure};
use rustc_hash::FxHashMap;

use crate::grid::{Dir, Pos};
use crate::{Answer, Result};

type Vec3 = [i64; 3];

fn neg(v: Vec3) -> Vec3 {
    v.map(|x| -x)
}

fn dot(a: Vec3, b: Vec3) -> i64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[derive(Clone, Copy, Debug)]
enum Step {
    Forward(usize),
    Turn(bool),
}

struct Board {
    rows: Vec<Vec<u8>>,
    steps: Vec<Step>,
}

impl Board {
    fn parse(input: &str) -> Result<Self> {
        let mut lines: Vec<&str> = input.lines().map(|l| l.trim_end_matches('\r')).collect();
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        let path = lines.pop().context("missing path")?.trim();
        let rows: Vec<Vec<u8>> = lines
            .iter()
            .take_while(|l| !l.trim().is_empty())
            .map(|l| l.as_bytes().to_vec())
            .collect();
        ensure!(!rows.is_empty(), "missing map");
        let mut steps = vec![];
        let mut num = None;
        for b in path.bytes() {
            match b {
                b'0'..=b'9' => num = Some(num.unwrap_or(0) * 10 + (b - b'0') as usize),
                b'L' | b'R' => {
                    if let Some(n) = num.take() {
                        steps.push(Step::Forward(n));
                    }
                    steps.push(Step::Turn(b == b'R'));
                }
                _ => bail!("bad path character {:?}", b as char),
            }
        }
        if let Some(n) = num {
            steps.push(Step::Forward(n));
        }
        Ok(Board { rows, steps })
    }

    fn at(&self, p: Pos) -> u8 {
        if p.r < 0 || p.c < 0 {
            return b' ';
        }
        self.rows
            .get(p.r as usize)
            .and_then(|row| row.get(p.c as usize))
            .copied()
            .unwrap_or(b' ')
    }

    fn on_map(&self, p: Pos) -> bool {
        self.at(p) != b' '
    }

    /// Follows the path; `wrap` maps a step off the map to where it lands.
    fn walk(&self, wrap: impl Fn(Pos, Dir) -> (Pos, Dir)) -> Result<i64> {
        let c = self.rows[0]
            .iter()
            .position(|&b| b == b'.')
            .context("no open tile on the top row")?;
        let mut p = Pos::new(0, c as i64);
        let mut d = Dir::Right;
        for &step in &self.steps {
            match step {
                Step::Turn(true) => d = d.turn_right(),
                Step::Turn(false) => d = d.turn_left(),
                Step::Forward(n) => {
                    for _ in 0..n {
                        let (q, e) = match p.step(d) {
                            q if self.on_map(q) => (q, d),
                            _ => wrap(p, d),
                        };
                        if self.at(q) == b'#' {
                            break;
                        }
                        (p, d) = (q, e);
                    }
                }
            }
        }
        let facing = (d.index() + 3) % 4;
        Ok(1000 * (p.r + 1) + 4 * (p.c + 1) + facing as i64)
    }
}

/// Orientation of a folded face: in-face column and row axes plus the outward normal.
#[derive(Clone, Copy, Debug)]
struct Frame {
    right: Vec3,
    down: Vec3,
    normal: Vec3,
}

impl Frame {
    fn axis(&self, d: Dir) -> Vec3 {
        match d {
            Dir::Right => self.right,
            Dir::Down => self.down,
            Dir::Left => neg(self.right),
            Dir::Up => neg(self.down),
        }
    }

    /// The frame of the face reached by folding over the edge towards `d`.
    fn fold(&self, d: Dir) -> Frame {
        let Frame { right, down, normal } = *self;
        match d {
            Dir::Right => Frame { right: neg(normal), down, normal: right },
            Dir::Left => Frame { right: normal, down, normal: neg(right) },
            Dir::Down => Frame { right, down: neg(normal), normal: down },
            Dir::Up => Frame { right, down: normal, normal: neg(down) },
        }
    }
}

struct Cube {
    size: i64,
    faces: FxHashMap<(i64, i64), Frame>,
}

impl Cube {
    fn fold(board: &Board) -> Result<Self> {
        let cells = board.rows.iter().flatten().filter(|&&b| b != b' ').count() as i64;
        let size = (1..=cells).find(|s| 6 * s * s >= cells).unwrap_or(0);
        ensure!(size > 0 && 6 * size * size == cells, "map is not a cube net");
        let start = (0, board.rows[0].iter().position(|&b| b != b' ').unwrap_or(0) as i64 / size);
        let mut faces = FxHashMap::default();
        faces.insert(
            start,
            Frame {
                right: [1, 0, 0],
                down: [0, 1, 0],
                normal: [0, 0, 1],
            },
        );
        let mut que = VecDeque::from([start]);
        while let Some((fr, fc)) = que.pop_front() {
            let frame = faces[&(fr, fc)];
            for d in Dir::ALL {
                let n = Pos::new(fr, fc).step(d);
                if board.on_map(Pos::new(n.r * size, n.c * size)) && !faces.contains_key(&(n.r, n.c)) {
                    faces.insert((n.r, n.c), frame.fold(d));
                    que.push_back((n.r, n.c));
                }
            }
        }
        ensure!(faces.len() == 6, "map is not a cube net");
        Ok(Cube { size, faces })
    }

    fn wrap(&self, p: Pos, d: Dir) -> (Pos, Dir) {
        let n = self.size;
        let key = (p.r.div_euclid(n), p.c.div_euclid(n));
        let from = self.faces[&key];
        let (lr, lc) = (p.r.rem_euclid(n), p.c.rem_euclid(n));
        // Cell centres in doubled coordinates on a cube spanning -n..=n.
        let mut point = [0; 3];
        for i in 0..3 {
            point[i] = (2 * lc - (n - 1)) * from.right[i]
                + (2 * lr - (n - 1)) * from.down[i]
                + n * from.normal[i];
        }
        let heading = from.axis(d);
        let (&(gr, gc), to) = self
            .faces
            .iter()
            .find(|(_, f)| f.normal == heading)
            .unwrap_or_else(|| panic!("cube has no face towards {:?}", heading));
        for i in 0..3 {
            point[i] += heading[i] - from.normal[i];
        }
        let c = (dot(point, to.right) + n - 1) / 2;
        let r = (dot(point, to.down) + n - 1) / 2;
        let back = neg(from.normal);
        let dir = Dir::ALL
            .into_iter()
            .find(|&e| to.axis(e) == back)
            .unwrap_or_else(|| panic!("inconsistent fold"));
        (Pos::new(gr * n + r, gc * n + c), dir)
    }
}

pub fn task1(input: &str) -> Result<Answer> {
    let board = Board::parse(input)?;
    let password = board.walk(|p, d| {
        let back = d.opposite();
        let mut q = p;
        while board.on_map(q.step(back)) {
            q = q.step(back);
        }
        (q, d)
    })?;
    Ok(password.into())
}

pub fn task2(input: &str) -> Result<Answer> {
    let board = Board::parse(input)?;
    let cube = Cube::fold(&board)?;
    Ok(board.walk(|p, d| cube.wrap(p, d))?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "        ...#
        .#..
        #...
        ....
...#.......#
........#...
..#....#....
..........#.
        ...#....
        .....#..
        .#......
        ......#.

10R5L5R10L4R5L5
";

    #[test]
    fn example() {
        assert_eq!(task1(EXAMPLE).unwrap(), 6032.into());
        assert_eq!(task2(EXAMPLE).unwrap(), 5031.into());
    }

    #[test]
    fn cube_wrap_is_reversible() {
        let board = Board::parse(EXAMPLE).unwrap();
        let cube = Cube::fold(&board).unwrap();
        for p in [Pos::new(0, 8), Pos::new(5, 11), Pos::new(11, 12), Pos::new(4, 0)] {
            for d in Dir::ALL {
                if board.on_map(p.step(d)) {
                    continue;
                }
                let (q, e) = cube.wrap(p, d);
                assert!(board.on_map(q));
                assert_eq!(cube.wrap(q, e.opposite()), (p, d.opposite()));
            }
        }
    }
}
