//! Map generators and the structures that drive them

/// Empty walled room
pub mod arena;
/// Cellular automaton caves with connectivity repair
pub mod cellular;
/// Room-and-corridor digging
pub mod digger;
/// Prioritised set of diggable walls
pub mod frontier;

use crate::spatial::grid::{GridMap, WALL};

/// A configured generator that produces one map per call
pub trait MapGenerator {
    /// Generate a map, reporting every cell as `(x, y, value)`
    fn create<F>(&mut self, callback: F)
    where
        F: FnMut(i32, i32, u8);

    /// Map size as `(width, height)`
    fn dimensions(&self) -> (usize, usize);

    /// Generate a map into a fresh grid
    ///
    /// Cells the generator never reports (off-parity hex cells) read as walls.
    fn create_grid(&mut self) -> GridMap {
        let (width, height) = self.dimensions();
        let mut grid = GridMap::filled(width, height, WALL);
        self.create(|x, y, value| {
            grid.set(x, y, value);
        });
        grid
    }
}
