use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use aoc::puzzles;
use clap::{Parser, Subcommand};
use itertools::Itertools;
use serde::Serialize;

/// Runs Advent of Code solutions on puzzle input.
#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve one task, reading the puzzle input from stdin
    Run {
        year: u16,
        day: u8,
        task: u8,
        /// Read input from file instead of stdin
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,
        /// Print a JSON record instead of the bare answer
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the registered puzzles
    List {
        #[arg(long, short = 'y')]
        year: Option<u16>,
    },
}

#[derive(Serialize)]
struct Report<'a> {
    year: u16,
    day: u8,
    task: u8,
    answer: &'a aoc::Answer,
    elapsed_ms: f64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            year,
            day,
            task,
            input,
            json,
        } => {
            let puzzle = puzzles::get_puzzle(year, day, task)?;
            let text = match &input {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("Cannot read {}", path.display()))?,
                None => aoc::input::read_stdin().context("Failed to read stdin")?,
            };
            let stime = Instant::now();
            let answer = match (puzzle.solve)(&text) {
                Ok(answer) => answer,
                Err(e) => {
                    eprintln!("!log status RE");
                    return Err(e.context(format!("{:?} failed", puzzle)));
                }
            };
            let elapsed = stime.elapsed().as_secs_f64();
            eprintln!("!log time {:.3}", elapsed);
            eprintln!("!log status OK");
            if json {
                let report = Report {
                    year,
                    day,
                    task,
                    answer: &answer,
                    elapsed_ms: elapsed * 1e3,
                };
                println!("{}", serde_json::to_string(&report)?);
            } else {
                println!("{}", answer);
            }
        }
        Command::List { year } => {
            let selected = puzzles::all_puzzles()
                .iter()
                .filter(|p| year.is_none_or(|y| y == p.year));
            for ((y, d), tasks) in &selected.chunk_by(|p| (p.year, p.day)) {
                println!("{} day{:02}: {}", y, d, tasks.map(|p| p.task).join(" "));
            }
        }
    }
    Ok(())
}
