use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::Answer;

/// Signature shared by every puzzle task.
pub type Solver = fn(&str) -> crate::Result<Answer>;

#[derive(Clone, Copy)]
pub struct Puzzle {
    pub year: u16,
    pub day: u8,
    pub task: u8,
    pub solve: Solver,
}

impl std::fmt::Debug for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/day{:02}/task{}", self.year, self.day, self.task)
    }
}

/// The requested puzzle has no registered solution.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no solution for {year} day {day} task {task}")]
pub struct UnknownPuzzle {
    pub year: u16,
    pub day: u8,
    pub task: u8,
}

fn trailing_number(name: &str) -> u8 {
    name.trim_start_matches(|c: char| !c.is_ascii_digit())
        .parse()
        .unwrap_or_else(|_| panic!("bad module name: {}", name))
}

macro_rules! register {
    ($v:ident, $year:literal, $ym:ident { $($dm:ident: $($task:ident)+;)* }) => {
        $($(
            $v.push(Puzzle {
                year: $year,
                day: trailing_number(stringify!($dm)),
                task: trailing_number(stringify!($task)),
                solve: crate::$ym::$dm::$task,
            });
        )+)*
    };
}

static PUZZLES: Lazy<Vec<Puzzle>> = Lazy::new(|| {
    let mut v = vec![];
    register!(v, 2020, y2020 {
        day09: task1 task2;
        day15: task1 task2;
        day22: task1 task2;
    });
    register!(v, 2021, y2021 {
        day01: task1 task2;
        day02: task1 task2;
        day03: task1 task2;
        day04: task1 task2;
        day05: task1 task2;
        day06: task1 task2;
        day07: task1 task2;
        day08: task1 task2;
        day09: task1 task2;
        day10: task1 task2;
        day11: task1 task2;
        day12: task1 task2;
        day13: task1 task2;
        day14: task1 task2;
        day15: task1 task2;
        day16: task1 task2;
        day17: task1 task2;
        day18: task1 task2;
        day19: task1 task2;
        day20: task1 task2;
        day21: task1 task2;
        day22: task1 task2;
        day23: task1 task2;
        day24: task1 task2;
        day25: task1;
    });
    register!(v, 2022, y2022 {
        day01: task1 task2;
        day02: task1 task2;
        day03: task1 task2;
        day04: task1 task2;
        day05: task1 task2;
        day06: task1 task2;
        day07: task1 task2;
        day08: task1 task2;
        day09: task1 task2;
        day10: task1 task2;
        day11: task1 task2;
        day12: task1 task2;
        day13: task1 task2;
        day14: task1 task2;
        day15: task1 task2;
        day16: task1 task2;
        day17: task1 task2;
        day18: task1 task2;
        day19: task1 task2;
        day20: task1 task2;
        day21: task1 task2;
        day22: task1 task2;
        day23: task1 task2;
        day24: task1 task2;
        day25: task1;
    });
    register!(v, 2023, y2023 {
        day01: task1 task2;
        day02: task1 task2;
        day03: task1 task2;
        day04: task1 task2;
        day05: task1 task2;
        day06: task1 task2;
        day07: task1 task2;
        day08: task1 task2;
        day09: task1 task2;
        day10: task1 task2;
        day11: task1 task2;
        day12: task1 task2;
        day13: task1 task2;
        day14: task1 task2;
        day15: task1 task2;
        day16: task1 task2;
        day17: task1 task2;
        day18: task1 task2;
        day19: task1 task2;
        day20: task1 task2;
        day21: task1 task2;
        day22: task1 task2;
        day23: task1 task2;
        day24: task1 task2;
        day25: task1;
    });
    register!(v, 2024, y2024 {
        day01: task1 task2;
        day02: task1 task2;
        day03: task1 task2;
        day04: task1 task2;
        day05: task1 task2;
        day06: task1 task2;
        day07: task1 task2;
        day08: task1 task2;
        day09: task1 task2;
        day10: task1 task2;
        day11: task1 task2;
        day12: task1 task2;
        day13: task1 task2;
        day14: task1 task2;
        day15: task1 task2;
        day16: task1 task2;
    });
    v.sort_by_key(|p| (p.year, p.day, p.task));
    v
});

// Build a (year, day, task) -> index map once for O(1) lookup.
static PUZZLE_MAP: Lazy<FxHashMap<(u16, u8, u8), usize>> = Lazy::new(|| {
    PUZZLES
        .iter()
        .enumerate()
        .map(|(i, p)| ((p.year, p.day, p.task), i))
        .collect()
});

/// Every registered puzzle, ordered by year, day and task.
pub fn all_puzzles() -> &'static [Puzzle] {
    &PUZZLES
}

pub fn get_puzzle(year: u16, day: u8, task: u8) -> Result<&'static Puzzle, UnknownPuzzle> {
    PUZZLE_MAP
        .get(&(year, day, task))
        .map(|&i| &PUZZLES[i])
        .ok_or(UnknownPuzzle { year, day, task })
}

/// Looks up a puzzle and runs it on `input`.
pub fn solve(year: u16, day: u8, task: u8, input: &str) -> crate::Result<Answer> {
    let puzzle = get_puzzle(year, day, task)?;
    log::debug!("solving {:?} ({} bytes of input)", puzzle, input.len());
    (puzzle.solve)(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_sorted_and_unique() {
        let all = all_puzzles();
        for w in all.windows(2) {
            assert!((w[0].year, w[0].day, w[0].task) < (w[1].year, w[1].day, w[1].task));
        }
        assert_eq!(PUZZLE_MAP.len(), all.len());
    }

    #[test]
    fn day25_has_a_single_task() {
        assert!(get_puzzle(2022, 25, 1).is_ok());
        assert_eq!(
            get_puzzle(2022, 25, 2).unwrap_err(),
            UnknownPuzzle {
                year: 2022,
                day: 25,
                task: 2
            }
        );
    }

    #[test]
    fn counts_per_year() {
        let count = |y| all_puzzles().iter().filter(|p| p.year == y).count();
        assert_eq!(count(2020), 6);
        assert_eq!(count(2021), 49);
        assert_eq!(count(2022), 49);
        assert_eq!(count(2023), 49);
        assert_eq!(count(2024), 32);
    }

    #[test]
    fn solve_dispatches() {
        let answer = solve(2022, 1, 1, "1000\n2000\n\n4000\n").unwrap();
        assert_eq!(answer, Answer::Int(4000));
    }
}
