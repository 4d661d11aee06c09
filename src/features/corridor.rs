use crate::features::{Feature, FeatureSizes};
use crate::io::error::Result;
use crate::math::random::RandomSelector;
use crate::spatial::grid::EMPTY;
use crate::spatial::topology::Direction;

/// Straight corridor running from `start` to `end` along one axis
///
/// Both endpoints are part of the corridor. Validation may pull `end` back
/// towards `start` when the full run does not fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corridor {
    start: [i32; 2],
    end: [i32; 2],
    direction: Direction,
    ends_with_wall: bool,
}

impl Corridor {
    /// Corridor of `length` steps from `start` in `direction`
    pub const fn new(start: [i32; 2], direction: Direction, length: i32) -> Self {
        Self {
            start,
            end: direction.offset(start, length),
            direction,
            ends_with_wall: true,
        }
    }

    /// Corridor of random length starting at `[x, y]` heading `(dx, dy)`
    ///
    /// # Errors
    ///
    /// Returns `InvalidDirection` unless `(dx, dy)` is a unit axis vector
    pub fn random_at(
        x: i32,
        y: i32,
        dx: i32,
        dy: i32,
        sizes: &FeatureSizes,
        rng: &mut RandomSelector,
    ) -> Result<Self> {
        let direction = Direction::from_delta(dx, dy)?;
        Ok(Self::random_toward([x, y], direction, sizes, rng))
    }

    /// Corridor of random length starting at `anchor` heading `direction`
    pub fn random_toward(
        anchor: [i32; 2],
        direction: Direction,
        sizes: &FeatureSizes,
        rng: &mut RandomSelector,
    ) -> Self {
        let length = rng
            .uniform_int(sizes.corridor_length[0], sizes.corridor_length[1])
            .max(1);
        Self::new(anchor, direction, length)
    }

    /// First cell
    pub const fn start(&self) -> [i32; 2] {
        self.start
    }

    /// Last cell
    pub const fn end(&self) -> [i32; 2] {
        self.end
    }

    /// Heading from start to end
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of cells covered, endpoints included
    pub const fn cell_count(&self) -> i32 {
        let dx = (self.end[0] - self.start[0]).abs();
        let dy = (self.end[1] - self.start[1]).abs();
        1 + if dx > dy { dx } else { dy }
    }

    /// Whether the cell past the end was solid at validation time
    pub const fn ends_with_wall(&self) -> bool {
        self.ends_with_wall
    }

    /// Flag the walls around an unfinished end for early digging
    ///
    /// Marks the cell straight ahead and both cells beside the end. Does
    /// nothing when the corridor already opens into free space.
    pub fn create_priority_walls<P>(&self, mut priority_wall: P)
    where
        P: FnMut(i32, i32),
    {
        if !self.ends_with_wall {
            return;
        }

        let [x, y] = self.end;
        let [dx, dy] = self.direction.delta();
        let [nx, ny] = self.direction.lateral();

        priority_wall(x + dx, y + dy);
        priority_wall(x + nx, y + ny);
        priority_wall(x - nx, y - ny);
    }
}

impl Feature for Corridor {
    fn is_valid<W, D>(&mut self, is_wall: W, can_be_dug: D) -> bool
    where
        W: Fn(i32, i32) -> bool,
        D: Fn(i32, i32) -> bool,
    {
        let [sx, sy] = self.start;
        let [dx, dy] = self.direction.delta();
        let [nx, ny] = self.direction.lateral();
        let mut length = self.cell_count();

        for i in 0..length {
            let x = sx + i * dx;
            let y = sy + i * dy;

            let ok = can_be_dug(x, y) && is_wall(x + nx, y + ny) && is_wall(x - nx, y - ny);
            if !ok {
                length = i;
                self.end = [x - dx, y - dy];
                break;
            }
        }

        // A lone anchor cell either dead-ends against rock or punches straight
        // into open space; neither makes a corridor
        if length < 2 {
            return false;
        }

        // Digging into the side of a room corner is only allowed when the
        // corridor actually breaks through
        let [ex, ey] = self.end;
        let first_corner_open = !is_wall(ex + dx + nx, ey + dy + ny);
        let second_corner_open = !is_wall(ex + dx - nx, ey + dy - ny);
        self.ends_with_wall = is_wall(ex + dx, ey + dy);

        !((first_corner_open || second_corner_open) && self.ends_with_wall)
    }

    fn create<F>(&self, mut dig: F)
    where
        F: FnMut(i32, i32, u8),
    {
        let [sx, sy] = self.start;
        let [dx, dy] = self.direction.delta();

        for i in 0..self.cell_count() {
            dig(sx + i * dx, sy + i * dy, EMPTY);
        }
    }
}
