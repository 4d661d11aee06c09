//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - Cell storage with bounds-checked access
//! - Neighbourhood tables for 4-, 6- and 8-connected grids
//! - Packed-key cell sets for region bookkeeping

/// Packed-key sets of grid cells
pub mod cellset;
/// Grid storage and cell value constants
pub mod grid;
/// Topologies and orthogonal directions
pub mod topology;

pub use cellset::CellSet;
pub use grid::{DOOR, EMPTY, GridMap, WALL};
pub use topology::{Direction, Topology};
