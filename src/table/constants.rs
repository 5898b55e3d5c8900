// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants sizing the qualifying-word table.
//!
//! The table dimensions are fixed for the process lifetime: queries may ask
//! about any word length up to [`MAX_WORD_LENGTH`] and any alphabet size up
//! to [`MAX_ALPHABET_SIZE`], and nothing larger. Bounding both dimensions
//! bounds the table memory.

/// Longest word length a query may ask about (inclusive).
pub const MAX_WORD_LENGTH: usize = 100_000;

/// Largest alphabet size a query may ask about: the 26-letter alphabet.
pub const MAX_ALPHABET_SIZE: usize = 26;

/// Number of word-length rows in the table.
///
/// One row per length 0..=MAX_WORD_LENGTH; length zero is a real row (the
/// empty word is the recurrence base case), hence the +1.
pub const WORD_LENGTH_ROWS: usize = MAX_WORD_LENGTH + 1;

/// Total entries in the flat table buffer.
///
/// The table is a single contiguous allocation indexed by
/// `word_length * MAX_ALPHABET_SIZE + symbol_index`. For the full
/// dimensions this is 100,001 × 26 = 2,600,026 entries; at 12 bytes per
/// entry (three u32 residues) the populated table is ≈30 MB, allocated
/// once and then purely read.
pub const TABLE_ENTRIES: usize = WORD_LENGTH_ROWS * MAX_ALPHABET_SIZE;

/// Compile-time assertion that flat indexing cannot overflow usize.
const _: () = assert!(TABLE_ENTRIES / MAX_ALPHABET_SIZE == WORD_LENGTH_ROWS);

/// The inclusion/exclusion step chooses symbols out of the full alphabet,
/// so the combination table must cover the whole alphabet bound.
const _: () = assert!(MAX_ALPHABET_SIZE <= 26);
