//! Procedural map generation for roguelike games
//!
//! Generators report every cell of a rectangular map through a callback as
//! `(x, y, value)` with `0` floor, `1` wall and `2` door. The digger carves
//! rooms and corridors out of solid rock; the cellular generator grows caves
//! with a Life-like automaton and can tunnel its regions together.

#![forbid(unsafe_code)]

/// Map generators: arena, room-and-corridor digger and cellular automaton
pub mod algorithm;
/// Statistics and structural checks over finished maps
pub mod analysis;
/// Rooms and corridors placed by the digger
pub mod features;
/// Command line, progress output, exports and error handling
pub mod io;
/// Seeded random source shared by all generators
pub mod math;
/// Grid storage, neighbourhoods and cell sets
pub mod spatial;

pub use algorithm::MapGenerator;
pub use io::error::{GenerationError, Result};
