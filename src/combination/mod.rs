// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact binomial coefficients for the bounded alphabet.
//!
//! The solver multiplies combination counts into modular space, so they
//! must be computed exactly, not modularly. The pool never exceeds the
//! alphabet bound (26), and C(26, 13) = 10,400,600 fits comfortably in
//! `i64`, so the whole triangle is built at compile time.
//!
//! # Why Pascal's triangle
//!
//! The additive recurrence `C(n, r) = C(n-1, r-1) + C(n-1, r)` stays within
//! `i64` for every intermediate. The multiplicative route through
//! factorials does not: 26! ≈ 4 × 10^26 overflows even `u64`.

use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;

/// Largest pool size the combination table supports.
///
/// Both binomial layers of the solver draw from the 26-letter alphabet:
/// choosing which symbols a word uses, and choosing them out of the full
/// alphabet.
pub const MAX_POOL: usize = 26;

/// Build the full Pascal's triangle up to `MAX_POOL` at compile time.
const fn pascal_triangle() -> [[i64; MAX_POOL + 1]; MAX_POOL + 1] {
    let mut triangle = [[0i64; MAX_POOL + 1]; MAX_POOL + 1];
    let mut n = 0;
    while n <= MAX_POOL {
        triangle[n][0] = 1;
        triangle[n][n] = 1;
        let mut r = 1;
        while r < n {
            triangle[n][r] = triangle[n - 1][r - 1] + triangle[n - 1][r];
            r += 1;
        }
        n += 1;
    }
    triangle
}

/// Combination counts, indexed `[n][r]` for `0 <= r <= n <= MAX_POOL`.
const TRIANGLE: [[i64; MAX_POOL + 1]; MAX_POOL + 1] = pascal_triangle();

/// Domain violations for a combination request.
///
/// These indicate a consistency bug when surfaced from valid solver inputs:
/// every combination the solver requests is constructed to stay in-domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro)]
pub enum CombinationError {
    /// `n` or `r` was negative.
    NegativeOperand { n: i64, r: i64 },

    /// More items were selected than the pool contains (`r > n`).
    SelectionExceedsPool { n: i64, r: i64 },

    /// The pool is larger than the precomputed triangle supports.
    PoolTooLarge { n: i64, max: usize },
}

impl fmt::Display for CombinationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombinationError::NegativeOperand { n, r } => {
                write!(f, "Combination operands must be non-negative: n={}, r={}", n, r)
            }
            CombinationError::SelectionExceedsPool { n, r } => {
                write!(f, "Cannot choose {} items from a pool of {}", r, n)
            }
            CombinationError::PoolTooLarge { n, max } => {
                write!(f, "Pool of {} exceeds the supported maximum of {}", n, max)
            }
        }
    }
}

impl std::error::Error for CombinationError {}

/// Number of ways to choose `r` items from a pool of `n`, computed exactly.
///
/// Valid for `0 <= r <= n <= MAX_POOL`; anything else is a domain error,
/// never clamped.
pub fn combinations(n: i64, r: i64) -> Result<i64, CombinationError> {
    if n < 0 || r < 0 {
        return Err(CombinationError::NegativeOperand { n, r });
    }
    if r > n {
        return Err(CombinationError::SelectionExceedsPool { n, r });
    }
    if n as usize > MAX_POOL {
        return Err(CombinationError::PoolTooLarge { n, max: MAX_POOL });
    }
    Ok(TRIANGLE[n as usize][r as usize])
}
