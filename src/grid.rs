//! # Character grids
//!
//! Most puzzles are played out on a rectangular map of ASCII cells. [`Grid`]
//! stores such a map row-major, and [`Pos`] / [`Dir`] give signed coordinates so
//! that stepping off the edge is a lookup miss instead of an underflow.

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Sub};

use anyhow::{Result, bail};

/// A signed (row, column) position. Row 0 is the top line of the input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub r: i64,
    pub c: i64,
}

impl Pos {
    pub const fn new(r: i64, c: i64) -> Self {
        Self { r, c }
    }

    pub fn step(self, d: Dir) -> Self {
        self + d.delta()
    }

    pub fn neighbors4(self) -> [Pos; 4] {
        Dir::ALL.map(|d| self.step(d))
    }

    /// The eight surrounding positions, row by row.
    pub fn neighbors8(self) -> [Pos; 8] {
        let Pos { r, c } = self;
        [
            Pos::new(r - 1, c - 1),
            Pos::new(r - 1, c),
            Pos::new(r - 1, c + 1),
            Pos::new(r, c - 1),
            Pos::new(r, c + 1),
            Pos::new(r + 1, c - 1),
            Pos::new(r + 1, c),
            Pos::new(r + 1, c + 1),
        ]
    }

    pub fn manhattan(self, other: Pos) -> i64 {
        (self.r - other.r).abs() + (self.c - other.c).abs()
    }
}

impl Add for Pos {
    type Output = Pos;
    fn add(self, o: Pos) -> Pos {
        Pos::new(self.r + o.r, self.c + o.c)
    }
}

impl AddAssign for Pos {
    fn add_assign(&mut self, o: Pos) {
        self.r += o.r;
        self.c += o.c;
    }
}

impl Sub for Pos {
    type Output = Pos;
    fn sub(self, o: Pos) -> Pos {
        Pos::new(self.r - o.r, self.c - o.c)
    }
}

impl Mul<i64> for Pos {
    type Output = Pos;
    fn mul(self, k: i64) -> Pos {
        Pos::new(self.r * k, self.c * k)
    }
}

/// Cardinal direction, clockwise from up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

    pub fn delta(self) -> Pos {
        match self {
            Dir::Up => Pos::new(-1, 0),
            Dir::Right => Pos::new(0, 1),
            Dir::Down => Pos::new(1, 0),
            Dir::Left => Pos::new(0, -1),
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Dir {
        Dir::ALL[i % 4]
    }

    pub fn turn_right(self) -> Dir {
        Dir::from_index(self.index() + 1)
    }

    pub fn turn_left(self) -> Dir {
        Dir::from_index(self.index() + 3)
    }

    pub fn opposite(self) -> Dir {
        Dir::from_index(self.index() + 2)
    }

    /// Parses arrows (`^>v<`) and letters (`U R D L`, `N E S W`).
    pub fn from_byte(b: u8) -> Option<Dir> {
        match b {
            b'^' | b'U' | b'N' => Some(Dir::Up),
            b'>' | b'R' | b'E' => Some(Dir::Right),
            b'v' | b'D' | b'S' => Some(Dir::Down),
            b'<' | b'L' | b'W' => Some(Dir::Left),
            _ => None,
        }
    }
}

/// A rectangular row-major grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    pub width: usize,
    pub height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }
}

impl<T> Grid<T> {
    pub fn from_cells(width: usize, height: usize, cells: Vec<T>) -> Self {
        assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn in_bounds(&self, p: Pos) -> bool {
        p.r >= 0 && p.c >= 0 && (p.r as usize) < self.height && (p.c as usize) < self.width
    }

    fn offset(&self, p: Pos) -> Option<usize> {
        self.in_bounds(p)
            .then(|| p.r as usize * self.width + p.c as usize)
    }

    pub fn get(&self, p: Pos) -> Option<&T> {
        self.offset(p).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, p: Pos) -> Option<&mut T> {
        self.offset(p).map(|i| &mut self.cells[i])
    }

    /// Every position in reading order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<T> {
        let (w, h) = (self.width as i64, self.height as i64);
        (0..h).flat_map(move |r| (0..w).map(move |c| Pos::new(r, c)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, &T)> {
        self.positions().zip(self.cells.iter())
    }

    pub fn row(&self, r: usize) -> &[T] {
        &self.cells[r * self.width..(r + 1) * self.width]
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl<T: PartialEq> Grid<T> {
    pub fn find(&self, v: &T) -> Option<Pos> {
        self.iter().find(|&(_, x)| x == v).map(|(p, _)| p)
    }
}

impl Grid<u8> {
    /// Parses a block of equal-length lines. Trailing blank lines are ignored.
    pub fn parse(input: &str) -> Result<Self> {
        let lines = input
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>();
        if lines.is_empty() {
            bail!("empty grid");
        }
        let width = lines[0].len();
        let mut cells = Vec::with_capacity(width * lines.len());
        for (i, line) in lines.iter().enumerate() {
            if line.len() != width {
                bail!(
                    "line {} has width {}, expected {}",
                    i + 1,
                    line.len(),
                    width
                );
            }
            cells.extend_from_slice(line.as_bytes());
        }
        Ok(Self {
            width,
            height: lines.len(),
            cells,
        })
    }

    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|r| String::from_utf8_lossy(self.row(r)).into_owned())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;
    fn index(&self, p: Pos) -> &T {
        self.get(p)
            .unwrap_or_else(|| panic!("{:?} is outside the grid", p))
    }
}

impl<T> IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, p: Pos) -> &mut T {
        self.get_mut(p)
            .unwrap_or_else(|| panic!("{:?} is outside the grid", p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_lookup() {
        let g = Grid::parse("ab\ncd\n").unwrap();
        assert_eq!((g.width, g.height), (2, 2));
        assert_eq!(g[Pos::new(1, 0)], b'c');
        assert_eq!(g.get(Pos::new(-1, 0)), None);
        assert_eq!(g.find(&b'd'), Some(Pos::new(1, 1)));
    }

    #[test]
    fn ragged_grid_is_rejected() {
        assert!(Grid::parse("abc\nde").is_err());
    }

    #[test]
    fn turning() {
        assert_eq!(Dir::Up.turn_right(), Dir::Right);
        assert_eq!(Dir::Up.turn_left(), Dir::Left);
        assert_eq!(Dir::Left.opposite(), Dir::Right);
        assert_eq!(Pos::new(2, 2).step(Dir::Left), Pos::new(2, 1));
    }
}
