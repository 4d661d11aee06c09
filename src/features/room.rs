use std::collections::BTreeSet;

use crate::features::{Feature, FeatureSizes};
use crate::io::error::Result;
use crate::math::random::RandomSelector;
use crate::spatial::grid::{DOOR, EMPTY, WALL};
use crate::spatial::topology::Direction;

/// Axis-aligned rectangular room
///
/// `x1..=x2` by `y1..=y2` is the floor. The ring one cell outside it is the
/// room's wall buffer; doors live on that ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    doors: BTreeSet<[i32; 2]>,
}

impl Room {
    /// Room with explicit floor corners and no doors
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            doors: BTreeSet::new(),
        }
    }

    /// Room of random size attached to a door at `[x, y]`, extending in `(dx, dy)`
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

    /// Room of random size attached to a door at `anchor`, extending in `direction`
    ///
    /// The door sits on the near wall; its position along that wall is random.
    pub fn random_toward(
        anchor: [i32; 2],
        direction: Direction,
        sizes: &FeatureSizes,
        rng: &mut RandomSelector,
    ) -> Self {
        let (width, height) = random_dimensions(sizes, rng);
        let [x, y] = anchor;

        let mut room = match direction {
            Direction::East => {
                let top = y - rng.uniform_int(0, height - 1);
                Self::new(x + 1, top, x + width, top + height - 1)
            }
            Direction::West => {
                let top = y - rng.uniform_int(0, height - 1);
                Self::new(x - width, top, x - 1, top + height - 1)
            }
            Direction::South => {
                let left = x - rng.uniform_int(0, width - 1);
                Self::new(left, y + 1, left + width - 1, y + height)
            }
            Direction::North => {
                let left = x - rng.uniform_int(0, width - 1);
                Self::new(left, y - height, left + width - 1, y - 1)
            }
        };
        room.add_door(x, y);
        room
    }

    /// Room of random size positioned around `[cx, cy]`
    ///
    /// The centre lands at a random cell of the floor rather than its middle.
    pub fn random_center(cx: i32, cy: i32, sizes: &FeatureSizes, rng: &mut RandomSelector) -> Self {
        let (width, height) = random_dimensions(sizes, rng);

        let x1 = cx - rng.uniform_int(0, width - 1);
        let y1 = cy - rng.uniform_int(0, height - 1);

        Self::new(x1, y1, x1 + width - 1, y1 + height - 1)
    }

    /// Room of random size placed inside an `available_width` by
    /// `available_height` area, keeping clear of its outer ring
    pub fn random_within(
        available_width: i32,
        available_height: i32,
        sizes: &FeatureSizes,
        rng: &mut RandomSelector,
    ) -> Self {
        let (width, height) = random_dimensions(sizes, rng);

        let left = (available_width - width - 1).max(1);
        let top = (available_height - height - 1).max(1);

        let x1 = 1 + rng.uniform_int(0, left - 1);
        let y1 = 1 + rng.uniform_int(0, top - 1);

        Self::new(x1, y1, x1 + width - 1, y1 + height - 1)
    }

    /// Record a door
    pub fn add_door(&mut self, x: i32, y: i32) -> &mut Self {
        self.doors.insert([x, y]);
        self
    }

    /// Forget every door
    pub fn clear_doors(&mut self) -> &mut Self {
        self.doors.clear();
        self
    }

    /// Doors in coordinate order
    pub fn doors(&self) -> impl Iterator<Item = [i32; 2]> + '_ {
        self.doors.iter().copied()
    }

    /// Number of doors
    pub fn door_count(&self) -> usize {
        self.doors.len()
    }

    /// Turn every open cell of the wall ring into a door
    pub fn add_doors<W>(&mut self, is_wall: W) -> &mut Self
    where
        W: Fn(i32, i32) -> bool,
    {
        let (left, right, top, bottom) = self.ring();

        for x in left..=right {
            for y in top..=bottom {
                if x != left && x != right && y != top && y != bottom {
                    continue;
                }
                if !is_wall(x, y) {
                    self.doors.insert([x, y]);
                }
            }
        }

        self
    }

    /// Clip the floor to `[min_x, max_x]` by `[min_y, max_y]`
    ///
    /// Returns `None` when nothing of the room remains.
    pub fn clamped(&self, min: [i32; 2], max: [i32; 2]) -> Option<Self> {
        let x1 = self.x1.max(min[0]);
        let y1 = self.y1.max(min[1]);
        let x2 = self.x2.min(max[0]);
        let y2 = self.y2.min(max[1]);

        (x1 <= x2 && y1 <= y2).then(|| Self::new(x1, y1, x2, y2))
    }

    /// Centre cell, rounding halves up
    pub const fn center(&self) -> [i32; 2] {
        [(self.x1 + self.x2 + 1).div_euclid(2), (self.y1 + self.y2 + 1).div_euclid(2)]
    }

    /// Leftmost floor column
    pub const fn left(&self) -> i32 {
        self.x1
    }

    /// Rightmost floor column
    pub const fn right(&self) -> i32 {
        self.x2
    }

    /// Topmost floor row
    pub const fn top(&self) -> i32 {
        self.y1
    }

    /// Bottom floor row
    pub const fn bottom(&self) -> i32 {
        self.y2
    }

    /// Floor width
    pub const fn width(&self) -> i32 {
        self.x2 - self.x1 + 1
    }

    /// Floor height
    pub const fn height(&self) -> i32 {
        self.y2 - self.y1 + 1
    }

    /// Check whether a cell lies on the wall ring
    pub const fn on_ring(&self, x: i32, y: i32) -> bool {
        let (left, right, top, bottom) = self.ring();
        let inside = x >= left && x <= right && y >= top && y <= bottom;
        inside && (x == left || x == right || y == top || y == bottom)
    }

    /// Every cell of the wall ring, columns outer
    pub fn ring_cells(&self) -> impl Iterator<Item = [i32; 2]> {
        let (left, right, top, bottom) = self.ring();
        (left..=right)
            .flat_map(move |x| (top..=bottom).map(move |y| [x, y]))
            .filter(move |&[x, y]| x == left || x == right || y == top || y == bottom)
    }

    /// The four corner cells of the wall ring
    pub const fn ring_corners(&self) -> [[i32; 2]; 4] {
        let (left, right, top, bottom) = self.ring();
        [[left, top], [right, top], [left, bottom], [right, bottom]]
    }

    /// Column and row bounds of the wall ring
    const fn ring(&self) -> (i32, i32, i32, i32) {
        (self.x1 - 1, self.x2 + 1, self.y1 - 1, self.y2 + 1)
    }
}

impl Feature for Room {
    fn is_valid<W, D>(&mut self, is_wall: W, can_be_dug: D) -> bool
    where
        W: Fn(i32, i32) -> bool,
        D: Fn(i32, i32) -> bool,
    {
        let (left, right, top, bottom) = self.ring();

        for x in left..=right {
            for y in top..=bottom {
                let on_ring = x == left || x == right || y == top || y == bottom;
                let ok = if on_ring {
                    is_wall(x, y)
                } else {
                    can_be_dug(x, y)
                };
                if !ok {
                    return false;
                }
            }
        }

        true
    }

    fn create<F>(&self, mut dig: F)
    where
        F: FnMut(i32, i32, u8),
    {
        let (left, right, top, bottom) = self.ring();

        for x in left..=right {
            for y in top..=bottom {
                let value = if self.doors.contains(&[x, y]) {
                    DOOR
                } else if x == left || x == right || y == top || y == bottom {
                    WALL
                } else {
                    EMPTY
                };
                dig(x, y, value);
            }
        }
    }
}

// Ranges are validated by the caller; the floor of one keeps a bad range from
// producing an empty room
fn random_dimensions(sizes: &FeatureSizes, rng: &mut RandomSelector) -> (i32, i32) {
    let width = rng
        .uniform_int(sizes.room_width[0], sizes.room_width[1])
        .max(1);
    let height = rng
        .uniform_int(sizes.room_height[0], sizes.room_height[1])
        .max(1);
    (width, height)
}
