//! Room-and-corridor dungeon digging
//!
//! Generation starts from a single room in the middle of a solid map and
//! repeatedly picks a wall on the dug-out frontier, trying to attach a new
//! room or corridor behind it. Every feature is attached to open space
//! through its anchor wall, so the result is connected without a repair pass.
//!
//! Ring corners of placed rooms are never dug and never serve as anchors, and
//! no corridor runs through two ring cells in a row, so every opening in a
//! room's ring lies between two floor cells.
//!
//! Walls beside an unfinished corridor end are flagged with elevated priority;
//! the dig continues while any of them remain, even once the area target is
//! met, so corridors are not abandoned mid-branch.

use std::time::{Duration, Instant};

use crate::algorithm::MapGenerator;
use crate::algorithm::frontier::{Priority, WallFrontier};
use crate::features::{Corridor, Feature, FeatureSizes, Room};
use crate::io::configuration::{
    DEFAULT_CORRIDOR_LENGTH, DEFAULT_CORRIDOR_WEIGHT, DEFAULT_DUG_PERCENTAGE,
    DEFAULT_FEATURE_ATTEMPTS, DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WEIGHT, DEFAULT_ROOM_WIDTH,
    DEFAULT_TIME_LIMIT_MS,
};
use crate::io::error::{Result, check_fraction, check_range, invalid_parameter};
use crate::math::random::RandomSelector;
use crate::spatial::cellset::CellSet;
use crate::spatial::grid::{DOOR, EMPTY, GridMap, WALL};
use crate::spatial::topology::Direction;

/// Digger parameters
#[derive(Debug, Clone, PartialEq)]
pub struct DiggerOptions {
    /// Inclusive room width range
    pub room_width: [i32; 2],
    /// Inclusive room height range
    pub room_height: [i32; 2],
    /// Inclusive corridor length range
    pub corridor_length: [i32; 2],
    /// Fraction of the interior to dig before stopping
    pub dug_percentage: f64,
    /// Wall-clock carving budget, checked once per carving step
    pub time_limit: Duration,
    /// Feature placements tried on each wall before giving it up
    pub feature_attempts: usize,
    /// Relative weight of rooms when choosing a feature
    pub room_weight: f64,
    /// Relative weight of corridors when choosing a feature
    pub corridor_weight: f64,
}

impl Default for DiggerOptions {
    fn default() -> Self {
        Self {
            room_width: DEFAULT_ROOM_WIDTH,
            room_height: DEFAULT_ROOM_HEIGHT,
            corridor_length: DEFAULT_CORRIDOR_LENGTH,
            dug_percentage: DEFAULT_DUG_PERCENTAGE,
            time_limit: Duration::from_millis(DEFAULT_TIME_LIMIT_MS),
            feature_attempts: DEFAULT_FEATURE_ATTEMPTS,
            room_weight: DEFAULT_ROOM_WEIGHT,
            corridor_weight: DEFAULT_CORRIDOR_WEIGHT,
        }
    }
}

impl DiggerOptions {
    /// Check every range and weight
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for empty or non-positive ranges, a dug
    /// percentage outside `[0, 1]`, negative weights or weights summing to zero
    pub fn validate(&self) -> Result<()> {
        check_range("room_width", self.room_width)?;
        check_range("room_height", self.room_height)?;
        check_range("corridor_length", self.corridor_length)?;
        check_fraction("dug_percentage", self.dug_percentage)?;

        for (parameter, weight) in [
            ("room_weight", self.room_weight),
            ("corridor_weight", self.corridor_weight),
        ] {
            if weight.is_nan() || weight < 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &weight,
                    &"weights must be non-negative",
                ));
            }
        }
        if self.room_weight + self.corridor_weight <= 0.0 {
            return Err(invalid_parameter(
                "room_weight",
                &self.room_weight,
                &"room and corridor weights must not both be zero",
            ));
        }

        Ok(())
    }

    /// Size ranges handed to feature factories
    pub const fn sizes(&self) -> FeatureSizes {
        FeatureSizes {
            room_width: self.room_width,
            room_height: self.room_height,
            corridor_length: self.corridor_length,
        }
    }
}

/// Random dungeon generator using human-like digging patterns
#[derive(Debug)]
pub struct Digger {
    width: usize,
    height: usize,
    options: DiggerOptions,
    rng: RandomSelector,
    rooms: Vec<Room>,
    corridors: Vec<Corridor>,
}

impl Digger {
    /// Create a digger for a `width` by `height` map
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail validation
    pub fn new(width: usize, height: usize, options: DiggerOptions, seed: u64) -> Result<Self> {
        options.validate()?;

        Ok(Self {
            width,
            height,
            options,
            rng: RandomSelector::new(seed),
            rooms: Vec::new(),
            corridors: Vec::new(),
        })
    }

    /// Rooms of the last generated map, with their final doors
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Corridors of the last generated map
    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    /// Active options
    pub const fn options(&self) -> &DiggerOptions {
        &self.options
    }

    fn first_room(&mut self, site: &mut Excavation) {
        let cx = (self.width / 2) as i32;
        let cy = (self.height / 2) as i32;
        let room = Room::random_center(cx, cy, &self.options.sizes(), &mut self.rng);

        // The seed room is never validated, so keep it off the outer ring
        let max = [self.width as i32 - 2, self.height as i32 - 2];
        let Some(room) = room.clamped([1, 1], max) else {
            return;
        };

        site.carve(&room);
        site.enclose(&room);
        self.rooms.push(room);
    }

    /// Tries to attach one feature behind `anchor`
    fn try_feature(&mut self, site: &mut Excavation, anchor: [i32; 2], direction: Direction) -> bool {
        let sizes = self.options.sizes();
        let weights = [self.options.room_weight, self.options.corridor_weight];

        if self.rng.weighted_choice(&weights) == 0 {
            let mut room = Room::random_toward(anchor, direction, &sizes, &mut self.rng);
            if !site.fits(&mut room) {
                return false;
            }
            site.carve(&room);
            site.enclose(&room);
            self.rooms.push(room);
        } else {
            let mut corridor = Corridor::random_toward(anchor, direction, &sizes, &mut self.rng);
            if !site.fits(&mut corridor) || site.joins_rings(&corridor) {
                return false;
            }
            site.carve(&corridor);
            corridor.create_priority_walls(|x, y| site.mark_priority(x, y));
            self.corridors.push(corridor);
        }

        true
    }

    /// Recompute every room's doors from the finished map and stamp them
    fn add_doors(&mut self, map: &mut GridMap) {
        for room in &mut self.rooms {
            room.clear_doors();
            room.add_doors(|x, y| !map.contains(x, y) || map.is(x, y, WALL));
        }

        for room in &self.rooms {
            for [x, y] in room.doors() {
                map.set(x, y, DOOR);
            }
        }
    }
}

impl MapGenerator for Digger {
    fn create<F>(&mut self, callback: F)
    where
        F: FnMut(i32, i32, u8),
    {
        self.rooms.clear();
        self.corridors.clear();

        let mut site = Excavation::new(self.width, self.height);
        let area = self.width.saturating_sub(2) * self.height.saturating_sub(2);

        self.first_room(&mut site);

        let started = Instant::now();
        while started.elapsed() < self.options.time_limit
            && (site.dug_fraction(area) < self.options.dug_percentage
                || site.frontier.has_elevated())
        {
            let Some(wall) = site.frontier.pop(&mut self.rng) else {
                break;
            };
            let Some(direction) = site.digging_direction(wall) else {
                continue;
            };

            for _ in 0..self.options.feature_attempts {
                if self.try_feature(&mut site, wall, direction) {
                    site.remove_surrounding_walls(wall);
                    site.remove_surrounding_walls(direction.opposite().offset(wall, 1));
                    break;
                }
            }
        }

        self.add_doors(&mut site.map);
        site.map.emit(callback);
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}

/// Working state of a single dig, dropped once the map is emitted
#[derive(Debug)]
struct Excavation {
    map: GridMap,
    frontier: WallFrontier,
    rings: CellSet,
    corners: CellSet,
    dug: usize,
}

impl Excavation {
    fn new(width: usize, height: usize) -> Self {
        Self {
            map: GridMap::filled(width, height, WALL),
            frontier: WallFrontier::new(),
            rings: CellSet::new(width * height),
            corners: CellSet::new(width * height),
            dug: 0,
        }
    }

    fn dug_fraction(&self, area: usize) -> f64 {
        if area == 0 {
            return 1.0;
        }
        self.dug as f64 / area as f64
    }

    fn dig(&mut self, x: i32, y: i32, value: u8) {
        if !self.map.contains(x, y) {
            return;
        }

        if value == EMPTY || value == DOOR {
            if self.map.is(x, y, WALL) {
                self.map.set(x, y, EMPTY);
                self.dug += 1;
            }
            self.frontier.remove([x, y]);
        } else {
            self.frontier.insert([x, y], Priority::Normal);
        }
    }

    fn mark_priority(&mut self, x: i32, y: i32) {
        if self.map.contains(x, y) {
            self.frontier.insert([x, y], Priority::Elevated);
        }
    }

    /// Record the wall ring of a placed room
    fn enclose(&mut self, room: &Room) {
        for [x, y] in room.ring_cells() {
            if let Some(key) = self.map.index_of(x, y) {
                self.rings.insert(key);
            }
        }
        for [x, y] in room.ring_corners() {
            if let Some(key) = self.map.index_of(x, y) {
                self.corners.insert(key);
            }
        }
    }

    fn on_ring(&self, x: i32, y: i32) -> bool {
        self.map
            .index_of(x, y)
            .is_some_and(|key| self.rings.contains(key))
    }

    fn is_corner(&self, x: i32, y: i32) -> bool {
        self.map
            .index_of(x, y)
            .is_some_and(|key| self.corners.contains(key))
    }

    /// Whether two consecutive cells of `corridor` lie on room rings
    fn joins_rings(&self, corridor: &Corridor) -> bool {
        let mut previous = false;
        for i in 0..corridor.cell_count() {
            let [x, y] = corridor.direction().offset(corridor.start(), i);
            let current = self.on_ring(x, y);
            if previous && current {
                return true;
            }
            previous = current;
        }
        false
    }

    fn is_wall(&self, x: i32, y: i32) -> bool {
        self.map.is(x, y, WALL)
    }

    // The outer ring and room corners are never dug
    fn can_be_dug(&self, x: i32, y: i32) -> bool {
        let width = self.map.width() as i32;
        let height = self.map.height() as i32;
        x >= 1
            && y >= 1
            && x + 1 < width
            && y + 1 < height
            && self.is_wall(x, y)
            && !self.is_corner(x, y)
    }

    fn fits<T: Feature>(&self, feature: &mut T) -> bool {
        feature.is_valid(|x, y| self.is_wall(x, y), |x, y| self.can_be_dug(x, y))
    }

    fn carve<T: Feature>(&mut self, feature: &T) {
        feature.create(|x, y, value| self.dig(x, y, value));
    }

    /// Direction to dig from `wall`, away from its single open neighbour
    fn digging_direction(&self, wall: [i32; 2]) -> Option<Direction> {
        let [cx, cy] = wall;
        let width = self.map.width() as i32;
        let height = self.map.height() as i32;
        if cx <= 0 || cy <= 0 || cx >= width - 1 || cy >= height - 1 || self.is_corner(cx, cy) {
            return None;
        }

        let mut open = None;
        for direction in Direction::ALL {
            let [x, y] = direction.offset(wall, 1);
            if self.map.is(x, y, EMPTY) {
                if open.is_some() {
                    return None;
                }
                open = Some(direction);
            }
        }

        open.map(Direction::opposite)
    }

    fn remove_surrounding_walls(&mut self, center: [i32; 2]) {
        for direction in Direction::ALL {
            self.frontier.remove(direction.offset(center, 1));
            self.frontier.remove(direction.offset(center, 2));
        }
    }
}
