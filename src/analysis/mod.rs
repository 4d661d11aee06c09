//! Post-generation inspection of finished maps

/// Cell counts and connectivity summary
pub mod statistics;
/// Structural checks on digger output
pub mod validation;
