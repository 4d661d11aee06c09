//! Dungeon features: shapes that validate and stamp themselves onto a grid
//!
//! Features never touch a grid directly. Validation probes the map through
//! two predicates and stamping reports each cell through a dig callback, so
//! the owning generator decides what "wall" and "diggable" mean.

/// Straight corridors
pub mod corridor;
/// Rectangular rooms with doors
pub mod room;

pub use corridor::Corridor;
pub use room::Room;

/// Inclusive size ranges used when features pick random dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSizes {
    /// Room interior width range
    pub room_width: [i32; 2],
    /// Room interior height range
    pub room_height: [i32; 2],
    /// Corridor length range
    pub corridor_length: [i32; 2],
}

/// A placeable shape
pub trait Feature {
    /// Check placement against the map
    ///
    /// `is_wall` reports solid cells (false outside the map), `can_be_dug`
    /// reports cells that may be carved. Implementations may adjust their own
    /// extent while validating.
    fn is_valid<W, D>(&mut self, is_wall: W, can_be_dug: D) -> bool
    where
        W: Fn(i32, i32) -> bool,
        D: Fn(i32, i32) -> bool;

    /// Report every cell this feature occupies with its new value
    fn create<F>(&self, dig: F)
    where
        F: FnMut(i32, i32, u8);
}
