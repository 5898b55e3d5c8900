// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The qualifying-word table: the dynamic-programming engine.
//!
//! For every (word length, alphabet size) pair the table holds three
//! modular counts of words built from *at most* that many symbols:
//!
//! - `total`: all words of that length;
//! - `with_border`: words where some proper non-empty prefix equals the
//!   suffix of the same length;
//! - `without_border`: the qualifying words, lacking any such border.
//!
//! # Recurrence
//!
//! For a fixed alphabet size k, with L the word length:
//!
//! - L=0: total = 1 (the empty word), without = 1, with = 0.
//! - L=1: total = k, without = k, with = 0 (a single character cannot have
//!   a proper non-empty prefix).
//! - L≥2: total\[L\] = total\[L-1\] × k, and
//!   without\[L\] = without\[L-1\] × k, minus without\[L/2\] when L is
//!   even. The subtraction corrects for words whose first half equals
//!   their second half: they newly acquire a border at the midpoint and
//!   would otherwise be carried forward as borderless. Odd lengths have no
//!   midpoint split and receive no correction. Finally
//!   with\[L\] = total\[L\] − without\[L\].
//!
//! Sub-tables for different alphabet sizes share no state, so they are
//! populated independently (and could be populated in parallel; the
//! current implementation is sequential).
//!
//! # Memory model
//!
//! The grid is one flat heap buffer with computed indexing, sized from the
//! named constants in [`constants`]. It is populated exactly once, guarded
//! by a completion flag, and read-only afterward.

pub mod constants;

use crate::arithmetic::Modular;
use constants::{MAX_ALPHABET_SIZE, MAX_WORD_LENGTH, TABLE_ENTRIES};

/// Word counts for one (word length, alphabet size) pair.
///
/// Invariant once populated: `total == with_border + without_border`
/// (mod MODULUS). Entries are written exactly once and never mutated
/// afterward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordCounts {
    /// All words of this length over at most this many symbols.
    pub total: Modular,

    /// Words having a border (a proper non-empty prefix equal to the
    /// suffix of the same length).
    pub with_border: Modular,

    /// Qualifying words: those without any border.
    pub without_border: Modular,
}

/// The two-dimensional grid of word counts.
///
/// Indexed by word length (0..=MAX_WORD_LENGTH) and zero-based symbol
/// index (0..MAX_ALPHABET_SIZE, where index i means an alphabet of i + 1
/// symbols).
#[derive(Debug, Clone)]
pub struct QualifyingWordTable {
    counts: Vec<WordCounts>,
    populated: bool,
}

impl QualifyingWordTable {
    /// Create a zero-initialized, unpopulated table.
    pub fn new() -> Self {
        Self {
            counts: vec![WordCounts::default(); TABLE_ENTRIES],
            populated: false,
        }
    }

    /// Whether [`populate`](Self::populate) has completed.
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// Flat index for a (word length, symbol index) pair.
    fn index(word_length: usize, symbol_index: usize) -> usize {
        debug_assert!(word_length <= MAX_WORD_LENGTH);
        debug_assert!(symbol_index < MAX_ALPHABET_SIZE);
        word_length * MAX_ALPHABET_SIZE + symbol_index
    }

    /// Get the counts for one (word length, symbol index) pair.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range. Callers validate query
    /// arguments before reaching the table.
    pub fn get(&self, word_length: usize, symbol_index: usize) -> WordCounts {
        self.counts[Self::index(word_length, symbol_index)]
    }

    /// Populate the whole table, once.
    ///
    /// Runs the recurrence for every alphabet size independently. Calling
    /// this again after completion is a no-op, so repeated calls are safe
    /// and yield identical query results.
    pub fn populate(&mut self) {
        if self.populated {
            return;
        }

        log::debug!(
            "populating qualifying-word table ({} lengths x {} alphabet sizes)",
            constants::WORD_LENGTH_ROWS,
            MAX_ALPHABET_SIZE
        );
        for symbol_index in 0..MAX_ALPHABET_SIZE {
            self.populate_alphabet(symbol_index);
        }
        self.populated = true;
        log::info!(
            "qualifying-word table populated ({} entries)",
            self.counts.len()
        );
    }

    /// Run the recurrence for one alphabet size.
    ///
    /// `symbol_index` is zero-based; the alphabet has `symbol_index + 1`
    /// symbols. Touches only this alphabet's column of the grid.
    fn populate_alphabet(&mut self, symbol_index: usize) {
        let symbol_count = (symbol_index + 1) as u64;

        // Lengths 0 and 1: every word is borderless. total_words runs one
        // step ahead, holding k^L for the length about to be written.
        let mut total_words = Modular::ONE;
        for word_length in 0..2 {
            self.counts[Self::index(word_length, symbol_index)] = WordCounts {
                total: total_words,
                with_border: Modular::ZERO,
                without_border: total_words,
            };
            total_words *= symbol_count;
        }

        for word_length in 2..=MAX_WORD_LENGTH {
            let mut without = self.get(word_length - 1, symbol_index).without_border * symbol_count;
            if word_length % 2 == 0 {
                without -= self.get(word_length / 2, symbol_index).without_border;
            }

            let total = total_words;
            total_words *= symbol_count;
            self.counts[Self::index(word_length, symbol_index)] = WordCounts {
                total,
                with_border: total - without,
                without_border: without,
            };
        }
    }
}

impl Default for QualifyingWordTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_unpopulated() {
        let table = QualifyingWordTable::new();
        assert!(!table.is_populated());
        assert_eq!(table.get(0, 0), WordCounts::default());
    }

    #[test]
    fn test_base_cases_single_symbol() {
        let mut table = QualifyingWordTable::new();
        table.populate();

        // Alphabet {a}: the only word of each length is a^L, which has a
        // border for every L >= 2.
        assert_eq!(table.get(0, 0).total.value(), 1);
        assert_eq!(table.get(0, 0).without_border.value(), 1);
        assert_eq!(table.get(1, 0).total.value(), 1);
        assert_eq!(table.get(1, 0).without_border.value(), 1);
        for word_length in 2..10 {
            let counts = table.get(word_length, 0);
            assert_eq!(counts.total.value(), 1);
            assert_eq!(counts.without_border.value(), 0);
            assert_eq!(counts.with_border.value(), 1);
        }
    }

    #[test]
    fn test_small_two_symbol_counts() {
        let mut table = QualifyingWordTable::new();
        table.populate();

        // Alphabet {a, b}, checked by hand:
        // L=2: ab, ba are borderless; aa, bb are not.
        let counts = table.get(2, 1);
        assert_eq!(counts.total.value(), 4);
        assert_eq!(counts.without_border.value(), 2);
        assert_eq!(counts.with_border.value(), 2);

        // L=3: four borderless words out of eight.
        let counts = table.get(3, 1);
        assert_eq!(counts.total.value(), 8);
        assert_eq!(counts.without_border.value(), 4);

        // L=4: the midpoint correction removes the doubled borderless
        // halves abab and baba: without = 4*2 - without[2] = 6.
        let counts = table.get(4, 1);
        assert_eq!(counts.total.value(), 16);
        assert_eq!(counts.without_border.value(), 6);
        assert_eq!(counts.with_border.value(), 10);
    }

    #[test]
    fn test_totals_are_powers_of_symbol_count() {
        let mut table = QualifyingWordTable::new();
        table.populate();

        let mut expected = Modular::ONE;
        for word_length in 0..=20 {
            assert_eq!(table.get(word_length, 2).total, expected);
            expected *= 3u64;
        }
    }

    #[test]
    fn test_invariant_total_splits_into_with_and_without() {
        let mut table = QualifyingWordTable::new();
        table.populate();

        for symbol_index in 0..MAX_ALPHABET_SIZE {
            for word_length in (0..=MAX_WORD_LENGTH).step_by(997) {
                let counts = table.get(word_length, symbol_index);
                assert_eq!(
                    counts.total,
                    counts.with_border + counts.without_border,
                    "L={} k={}",
                    word_length,
                    symbol_index + 1
                );
            }
        }
    }

    #[test]
    fn test_populate_is_idempotent() {
        let mut table = QualifyingWordTable::new();
        table.populate();
        let before = table.get(1000, 25);
        table.populate();
        assert!(table.is_populated());
        assert_eq!(table.get(1000, 25), before);
    }
}
