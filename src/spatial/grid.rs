//! Cell storage shared by every generator
//!
//! Cells are addressed by world coordinates `[x, y]` with the origin in the
//! top-left corner. Every accessor is bounds-checked so generators can probe
//! neighbours past the edge without special casing.

use ndarray::Array2;

/// Open floor
pub const EMPTY: u8 = 0;
/// Solid rock
pub const WALL: u8 = 1;
/// Doorway on a room border
pub const DOOR: u8 = 2;

/// Rectangular grid of cell values
///
/// Storage is column-major (`[x, y]`) so a full scan in emission order walks
/// memory linearly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    cells: Array2<u8>,
    width: usize,
    height: usize,
}

impl GridMap {
    /// Allocate a grid with every cell set to [`EMPTY`]
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, EMPTY)
    }

    /// Allocate a grid with every cell set to `value`
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            cells: Array2::from_elem((width, height), value),
            width,
            height,
        }
    }

    /// Overwrite every cell with `value`
    pub fn fill(&mut self, value: u8) {
        self.cells.fill(value);
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Check whether a coordinate lies inside the grid
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Read a cell, `None` outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        if !self.contains(x, y) {
            return None;
        }
        self.cells.get([x as usize, y as usize]).copied()
    }

    /// Write a cell
    ///
    /// Writes outside the grid are ignored; returns whether the cell exists.
    pub fn set(&mut self, x: i32, y: i32, value: u8) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        self.cells
            .get_mut([x as usize, y as usize])
            .map(|cell| *cell = value)
            .is_some()
    }

    /// Test a cell against a value, false outside the grid
    pub fn is(&self, x: i32, y: i32, value: u8) -> bool {
        self.get(x, y) == Some(value)
    }

    /// Packed key `y * width + x`, `None` outside the grid
    pub const fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if self.contains(x, y) {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }

    /// Inverse of [`GridMap::index_of`]
    pub const fn point_of(&self, index: usize) -> [i32; 2] {
        if self.width == 0 {
            return [0, 0];
        }
        [(index % self.width) as i32, (index / self.width) as i32]
    }

    /// Count cells holding `value`
    pub fn count(&self, value: u8) -> usize {
        self.cells.iter().filter(|&&cell| cell == value).count()
    }

    /// Visit every cell, columns outer and rows inner
    pub fn emit<F>(&self, mut callback: F)
    where
        F: FnMut(i32, i32, u8),
    {
        for x in 0..self.width {
            for y in 0..self.height {
                if let Some(&value) = self.cells.get([x, y]) {
                    callback(x as i32, y as i32, value);
                }
            }
        }
    }
}
