//! Mathematical utilities for the generators

/// Seeded random source with weighted and ranged helpers
pub mod random;
