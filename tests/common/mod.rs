// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use std::sync::OnceLock;

use dortmund_dilemma::DilemmaSolver;

/// A solver with its table built once and shared by every test in the
/// suite. Construction fills 100,001 × 26 entries, so tests reuse it
/// rather than rebuilding per case.
pub fn solver() -> &'static DilemmaSolver {
    static SOLVER: OnceLock<DilemmaSolver> = OnceLock::new();
    SOLVER.get_or_init(|| {
        let mut solver = DilemmaSolver::new();
        solver.build_table();
        solver
    })
}
