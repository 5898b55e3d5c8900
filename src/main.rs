// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver for the Dortmund Dilemma solver.
//!
//! Reads a case count `t` followed by `t` whitespace-separated
//! `word-length symbol-count` pairs from stdin and prints one answer per
//! line. A malformed or out-of-range case gets a diagnostic on stderr and
//! is skipped; the process keeps going.

use std::io::{self, Read};
use std::process::ExitCode;

use dortmund_dilemma::DilemmaSolver;

fn main() -> ExitCode {
    env_logger::init();

    let mut input = String::new();
    if let Err(error) = io::stdin().read_to_string(&mut input) {
        eprintln!("Failed to read stdin: {}", error);
        return ExitCode::FAILURE;
    }
    let mut tokens = input.split_ascii_whitespace();

    let case_count = match tokens.next().map(str::parse::<usize>) {
        Some(Ok(count)) => count,
        _ => {
            eprintln!("Expected a case count as the first input token");
            return ExitCode::FAILURE;
        }
    };

    let mut solver = DilemmaSolver::new();
    solver.build_table();

    for case in 1..=case_count {
        let pair = (tokens.next(), tokens.next());
        let (word_length, symbol_count) = match pair {
            (Some(n), Some(k)) => match (n.parse::<i64>(), k.parse::<i64>()) {
                (Ok(n), Ok(k)) => (n, k),
                _ => {
                    eprintln!("Case {}: not a pair of integers, skipping", case);
                    continue;
                }
            },
            _ => {
                eprintln!("Expected {} cases but input ended at case {}", case_count, case);
                return ExitCode::FAILURE;
            }
        };

        match solver.solve(word_length, symbol_count) {
            Ok(answer) => println!("{}", answer),
            Err(error) => eprintln!("Case {}: {}", case, error),
        }
    }

    ExitCode::SUCCESS
}
