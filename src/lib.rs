// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rust implementation of a Dortmund Dilemma solver.
//!
//! Counts words of length n (up to 100,000) over exactly k distinct
//! symbols of the 26-letter alphabet (all k must appear) that have a
//! border: a proper non-empty prefix equal to the suffix of the same
//! length. Counts are reported modulo 1,000,000,009.
//!
//! # Architecture
//!
//! The implementation splits into build-once data and read-only queries:
//!
//! ## Build once: the qualifying-word table
//!
//! A dynamic-programming grid over word length × alphabet size holding,
//! per pair, the total word count and its split into bordered and
//! borderless ("qualifying") words. Populated eagerly by
//! [`DilemmaSolver::build_table`], guarded by a once-only completion flag.
//!
//! ## Query: inclusion/exclusion over used symbols
//!
//! A table entry counts words over *at most* its alphabet size.
//! [`DilemmaSolver::solve`] corrects that to *exactly* the requested
//! symbol count with alternating binomial-weighted terms, then multiplies
//! by the ways to choose those symbols from the full alphabet. Binomials
//! are exact (never reduced) and come from a compile-time Pascal table.
//!
//! # Parallelization
//!
//! Per-alphabet-size sub-tables share no state, so table construction
//! could fan out one task per alphabet size and join before queries; the
//! current implementation populates them sequentially. After construction
//! the table is read-only and may be shared across unlimited readers.

pub mod arithmetic;
pub mod combination;
pub mod solver;
pub mod table;

// Re-export commonly used types
pub use arithmetic::{Modular, MODULUS};
pub use combination::{combinations, CombinationError};
pub use solver::{DilemmaSolver, SolverError};
pub use table::QualifyingWordTable;
