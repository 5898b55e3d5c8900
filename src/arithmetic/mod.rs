// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Modular arithmetic over the fixed counting modulus.

pub mod modular;

pub use modular::{Modular, MODULUS};
