//! Summary statistics over a generated map

use std::collections::VecDeque;
use std::fmt;

use crate::spatial::cellset::CellSet;
use crate::spatial::grid::{DOOR, EMPTY, GridMap, WALL};
use crate::spatial::topology::Topology;

/// Cell counts and connectivity of a finished map
#[derive(Debug, Clone, PartialEq)]
pub struct MapStatistics {
    /// Map width in cells
    pub width: usize,
    /// Map height in cells
    pub height: usize,
    /// Cells holding [`EMPTY`]
    pub floor: usize,
    /// Cells holding [`WALL`]
    pub walls: usize,
    /// Cells holding [`DOOR`]
    pub doors: usize,
    /// Share of the interior (map minus its outer ring) that is not wall
    pub dug_fraction: f64,
    /// Number of connected regions of non-wall cells
    pub components: usize,
}

impl MapStatistics {
    /// Analyse a square-grid map, joining cells through orthogonal steps
    pub fn from_grid(grid: &GridMap) -> Self {
        Self::with_topology(grid, Topology::Four)
    }

    /// Analyse a map, joining cells through `topology`'s flood steps
    pub fn with_topology(grid: &GridMap, topology: Topology) -> Self {
        let width = grid.width();
        let height = grid.height();

        let mut interior_open = 0;
        for y in 1..height.saturating_sub(1) as i32 {
            for x in 1..width.saturating_sub(1) as i32 {
                if !grid.is(x, y, WALL) {
                    interior_open += 1;
                }
            }
        }
        let interior = width.saturating_sub(2) * height.saturating_sub(2);
        let dug_fraction = if interior == 0 {
            0.0
        } else {
            interior_open as f64 / interior as f64
        };

        Self {
            width,
            height,
            floor: grid.count(EMPTY),
            walls: grid.count(WALL),
            doors: grid.count(DOOR),
            dug_fraction,
            components: count_components(grid, topology),
        }
    }

    /// Test whether every non-wall cell is reachable from every other
    pub const fn is_connected(&self) -> bool {
        self.components <= 1
    }
}

impl fmt::Display for MapStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}: {} floor, {} wall, {} door, {:.1}% dug, {} region(s)",
            self.width,
            self.height,
            self.floor,
            self.walls,
            self.doors,
            self.dug_fraction * 100.0,
            self.components
        )
    }
}

fn count_components(grid: &GridMap, topology: Topology) -> usize {
    let mut seen = CellSet::new(grid.area());
    let mut components = 0;

    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let Some(key) = open_key(grid, x, y) else {
                continue;
            };
            if !seen.insert(key) {
                continue;
            }

            components += 1;
            let mut queue = VecDeque::from([[x, y]]);
            while let Some([px, py]) = queue.pop_front() {
                for [dx, dy] in topology.flood_directions() {
                    let (nx, ny) = (px + dx, py + dy);
                    if let Some(next) = open_key(grid, nx, ny)
                        && seen.insert(next)
                    {
                        queue.push_back([nx, ny]);
                    }
                }
            }
        }
    }

    components
}

fn open_key(grid: &GridMap, x: i32, y: i32) -> Option<usize> {
    match grid.get(x, y) {
        Some(value) if value != WALL => grid.index_of(x, y),
        _ => None,
    }
}
