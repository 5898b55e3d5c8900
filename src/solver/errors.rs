// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for solution queries.

use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;

use crate::combination::CombinationError;
use crate::table::constants::{MAX_ALPHABET_SIZE, MAX_WORD_LENGTH};

/// Errors that can occur answering a solution query.
///
/// All of these are programming-contract violations, not transient faults:
/// nothing is retried or clamped, the caller is told which contract broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro)]
pub enum SolverError {
    /// A query was issued before the table was populated. Recoverable by
    /// calling `build_table()` first.
    TableNotBuilt,

    /// The requested word length is outside `[0, MAX_WORD_LENGTH]`.
    WordLengthOutOfRange { word_length: i64 },

    /// The requested symbol count is outside `[1, MAX_ALPHABET_SIZE]`.
    SymbolCountOutOfRange { symbol_count: i64 },

    /// An internal combination request left its domain. Solver inputs that
    /// pass validation cannot produce this; seeing it means a bug.
    Combination(CombinationError),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::TableNotBuilt => {
                write!(f, "Qualifying words have not yet been calculated")
            }
            SolverError::WordLengthOutOfRange { word_length } => {
                write!(
                    f,
                    "Word length {} is outside the supported range 0..={}",
                    word_length, MAX_WORD_LENGTH
                )
            }
            SolverError::SymbolCountOutOfRange { symbol_count } => {
                write!(
                    f,
                    "Symbol count {} is outside the supported range 1..={}",
                    symbol_count, MAX_ALPHABET_SIZE
                )
            }
            SolverError::Combination(error) => {
                write!(f, "Internal combination request failed: {}", error)
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolverError::Combination(error) => Some(error),
            _ => None,
        }
    }
}

impl From<CombinationError> for SolverError {
    fn from(error: CombinationError) -> Self {
        SolverError::Combination(error)
    }
}
