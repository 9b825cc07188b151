//! Advent of Code 2020.

pub mod day09;
pub mod day15;
pub mod day22;
