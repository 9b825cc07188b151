// # aoc: Advent of Code solutions
//
// Every puzzle is a pure function from the puzzle text to an `Answer`. The
// `puzzles` module keeps the registry the `aoc` binary dispatches through, and
// the small helpers below are shared by all of the day modules.

/// A trait for conveniently updating a value to its minimum or maximum.
pub trait SetMinMax {
    /// If `v` is less than `self`, updates `self` to `v` and returns `true`.
    /// Otherwise, returns `false`.
    fn setmin(&mut self, v: Self) -> bool;
    /// If `v` is greater than `self`, updates `self` to `v` and returns `true`.
    /// Otherwise, returns `false`.
    fn setmax(&mut self, v: Self) -> bool;
}
impl<T> SetMinMax for T
where
    T: PartialOrd,
{
    fn setmin(&mut self, v: T) -> bool {
        *self > v && {
            *self = v;
            true
        }
    }
    fn setmax(&mut self, v: T) -> bool {
        *self < v && {
            *self = v;
            true
        }
    }
}

/// A macro for convenient initialization of vectors, including nested vectors for multi-dimensional arrays.
///
/// # Examples
///
/// ```
/// use aoc::mat;
/// // A simple vector
/// let v1 = mat![1, 2, 3];
///
/// // A 2x3 matrix initialized with zeros
/// let m1 = mat![0; 2; 3];
/// assert_eq!(m1, vec![vec![0, 0, 0], vec![0, 0, 0]]);
/// ```
#[macro_export]
macro_rules! mat {
    ($($e:expr),*) => { vec![$($e),*] };
    ($($e:expr,)*) => { vec![$($e),*] };
    ($e:expr; $d:expr) => { vec![$e; $d] };
    ($e:expr; $d:expr $(; $ds:expr)+) => { vec![mat![$e $(; $ds)*]; $d] };
}

/// Line reading and integer extraction shared by every puzzle.
pub mod input;

/// Rectangular character grids and cardinal directions.
pub mod grid;

/// The value a puzzle prints.
pub mod answer;

/// Registry of every solved puzzle, keyed by year, day and task.
pub mod puzzles;

pub mod y2020;
pub mod y2021;
pub mod y2022;
pub mod y2023;
pub mod y2024;

pub use answer::Answer;

/// Result type returned by every puzzle.
pub type Result<T = Answer> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setmin_setmax_report_updates() {
        let mut x = 5;
        assert!(x.setmin(3));
        assert!(!x.setmin(4));
        assert!(x.setmax(10));
        assert!(!x.setmax(10));
        assert_eq!(x, 10);
    }

    #[test]
    fn mat_builds_nested_vectors() {
        let m = mat![false; 2; 3; 4];
        assert_eq!(m.len(), 2);
        assert_eq!(m[1].len(), 3);
        assert_eq!(m[1][2].len(), 4);
    }
}
