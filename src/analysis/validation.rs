//! Structural checks on room-and-corridor maps

use crate::features::Room;
use crate::spatial::grid::{DOOR, EMPTY, GridMap};

/// Problems found in a finished dungeon
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Doors without floor on two opposite sides
    pub misplaced_doors: Vec<[i32; 2]>,
    /// Indices of rooms whose wall ring holds plain floor
    pub breached_rooms: Vec<usize>,
}

impl ValidationReport {
    /// Test whether no problems were found
    pub const fn is_clean(&self) -> bool {
        self.misplaced_doors.is_empty() && self.breached_rooms.is_empty()
    }
}

/// Check every door cell of the map and every room's wall ring
pub fn validate_dungeon(grid: &GridMap, rooms: &[Room]) -> ValidationReport {
    let mut report = ValidationReport::default();

    grid.emit(|x, y, value| {
        if value == DOOR && !separates_open_cells(grid, [x, y]) {
            report.misplaced_doors.push([x, y]);
        }
    });

    for (index, room) in rooms.iter().enumerate() {
        if ring_has_floor(grid, room) {
            report.breached_rooms.push(index);
        }
    }

    report
}

/// A door must join [`EMPTY`] cells on opposite sides, horizontally or
/// vertically; a neighbouring door does not count
pub fn separates_open_cells(grid: &GridMap, door: [i32; 2]) -> bool {
    let [x, y] = door;
    let open = |x: i32, y: i32| grid.is(x, y, EMPTY);

    (open(x - 1, y) && open(x + 1, y)) || (open(x, y - 1) && open(x, y + 1))
}

/// Whether the ring one cell outside the floor holds [`EMPTY`]
pub fn ring_has_floor(grid: &GridMap, room: &Room) -> bool {
    for x in room.left() - 1..=room.right() + 1 {
        for y in room.top() - 1..=room.bottom() + 1 {
            if room.on_ring(x, y) && grid.is(x, y, EMPTY) {
                return true;
            }
        }
    }
    false
}
