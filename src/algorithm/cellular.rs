//! Cellular automaton cave generation
//!
//! Live cells are walls. Each call to `create` applies one generation of a
//! Life-like rule; `connect` then tunnels between the free regions the
//! automaton left behind until every free cell is reachable.

use std::collections::VecDeque;

use crate::algorithm::MapGenerator;
use crate::io::configuration::{
    CONNECT_CLOSE_ENOUGH, CONNECT_TRIALS, DEFAULT_BORN, DEFAULT_SURVIVE,
};
use crate::io::error::{Result, check_fraction, invalid_parameter};
use crate::math::random::RandomSelector;
use crate::spatial::cellset::CellSet;
use crate::spatial::grid::{EMPTY, GridMap, WALL};
use crate::spatial::topology::Topology;

/// Automaton rule and neighbourhood
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellularOptions {
    /// Neighbour counts that bring an empty cell to life
    pub born: Vec<u8>,
    /// Neighbour counts that keep a live cell alive
    pub survive: Vec<u8>,
    /// Neighbourhood used for counting and connecting
    pub topology: Topology,
}

impl Default for CellularOptions {
    fn default() -> Self {
        Self {
            born: DEFAULT_BORN.to_vec(),
            survive: DEFAULT_SURVIVE.to_vec(),
            topology: Topology::Eight,
        }
    }
}

impl CellularOptions {
    /// Check neighbour counts against the topology
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a count exceeds the number of neighbours
    pub fn validate(&self) -> Result<()> {
        let limit = self.topology.neighbor_count();
        for (parameter, counts) in [("born", &self.born), ("survive", &self.survive)] {
            if let Some(&count) = counts.iter().find(|&&count| count > limit) {
                return Err(invalid_parameter(
                    parameter,
                    &count,
                    &format!("a cell has at most {limit} neighbours"),
                ));
            }
        }
        Ok(())
    }
}

/// Cellular automaton map generator
#[derive(Debug)]
pub struct Cellular {
    map: GridMap,
    options: CellularOptions,
    rng: RandomSelector,
}

impl Cellular {
    /// Create an all-empty automaton
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail validation
    pub fn new(width: usize, height: usize, options: CellularOptions, seed: u64) -> Result<Self> {
        options.validate()?;

        Ok(Self {
            map: GridMap::new(width, height),
            options,
            rng: RandomSelector::new(seed),
        })
    }

    /// Make each cell live with the given probability
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `probability` lies outside `[0, 1]`
    pub fn randomize(&mut self, probability: f64) -> Result<&mut Self> {
        check_fraction("probability", probability)?;

        for y in 0..self.map.height() as i32 {
            for x in 0..self.map.width() as i32 {
                let value = if self.rng.chance(probability) {
                    WALL
                } else {
                    EMPTY
                };
                self.map.set(x, y, value);
            }
        }

        Ok(self)
    }

    /// Replace the options
    ///
    /// # Errors
    ///
    /// Returns an error if the new options fail validation; the old ones stay
    pub fn set_options(&mut self, options: CellularOptions) -> Result<()> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    /// Active options
    pub const fn options(&self) -> &CellularOptions {
        &self.options
    }

    /// Overwrite a single cell; ignored outside the map
    pub fn set(&mut self, x: i32, y: i32, value: u8) {
        self.map.set(x, y, value);
    }

    /// Read a single cell
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        self.map.get(x, y)
    }

    /// Copy of the current state as the generator reports it
    ///
    /// On hex grids the cells outside the row parity read as walls.
    pub fn snapshot(&self) -> GridMap {
        let mut grid = GridMap::filled(self.map.width(), self.map.height(), WALL);
        self.emit(|x, y, value| {
            grid.set(x, y, value);
        });
        grid
    }

    /// Make every free cell reachable from every other
    ///
    /// Cells equal to `value` are free. Each disconnected region is joined to
    /// the connected space by a tunnel between a close pair of cells;
    /// `connection_callback` receives the endpoints of every tunnel segment.
    /// Tunnels only ever turn cells free.
    ///
    /// A hex grid narrower than two columns has no hex path between rows, so
    /// it is emitted unchanged.
    pub fn connect<F, C>(&mut self, callback: F, value: u8, mut connection_callback: C)
    where
        F: FnMut(i32, i32, u8),
        C: FnMut([i32; 2], [i32; 2]),
    {
        if self.options.topology == Topology::Six && self.map.width() < 2 {
            self.emit(callback);
            return;
        }

        let capacity = self.map.area();
        let mut not_connected = CellSet::new(capacity);

        for y in 0..self.map.height() as i32 {
            let (start, step) = self.options.topology.row_layout(y);
            for x in (start..self.map.width() as i32).step_by(step) {
                if let Some(key) = self.free_key(x, y, value) {
                    not_connected.insert(key);
                }
            }
        }

        if let Some(start) = self.random_member(&not_connected) {
            let mut connected = CellSet::new(capacity);
            self.claim(start, &mut connected, &mut not_connected);
            self.flood(start, value, &mut connected, Some(&mut not_connected));

            while !not_connected.is_empty() {
                let Some((from, to)) = self.closest_pair(&connected, &not_connected) else {
                    break;
                };

                let mut local = CellSet::new(capacity);
                if let Some(key) = self.map.index_of(from[0], from[1]) {
                    local.insert(key);
                }
                self.flood(from, value, &mut local, None);

                match self.options.topology {
                    Topology::Six => self.tunnel_hex(
                        to,
                        from,
                        value,
                        &mut connected,
                        &mut not_connected,
                        &mut connection_callback,
                    ),
                    Topology::Four | Topology::Eight => self.tunnel_orthogonal(
                        to,
                        from,
                        value,
                        &mut connected,
                        &mut not_connected,
                        &mut connection_callback,
                    ),
                }

                for key in local.iter() {
                    let [x, y] = self.map.point_of(key);
                    self.map.set(x, y, value);
                    connected.insert(key);
                    not_connected.remove(key);
                }
            }
        }

        self.emit(callback);
    }

    fn emit<F>(&self, mut callback: F)
    where
        F: FnMut(i32, i32, u8),
    {
        for y in 0..self.map.height() as i32 {
            let (start, step) = self.options.topology.row_layout(y);
            for x in (start..self.map.width() as i32).step_by(step) {
                if let Some(value) = self.map.get(x, y) {
                    callback(x, y, value);
                }
            }
        }
    }

    /// Live neighbours of `[cx, cy]`
    fn neighbors(&self, cx: i32, cy: i32) -> u8 {
        let mut result = 0;
        for [dx, dy] in self.options.topology.directions() {
            if self.map.is(cx + dx, cy + dy, WALL) {
                result += 1;
            }
        }
        result
    }

    fn free_key(&self, x: i32, y: i32, value: u8) -> Option<usize> {
        if self.map.is(x, y, value) {
            self.map.index_of(x, y)
        } else {
            None
        }
    }

    fn random_member(&mut self, set: &CellSet) -> Option<[i32; 2]> {
        let pick = self.rng.pick_index(set.len())?;
        set.nth(pick).map(|key| self.map.point_of(key))
    }

    /// Move a cell into `into`, taking it out of `from`
    fn claim(&self, point: [i32; 2], into: &mut CellSet, from: &mut CellSet) {
        if let Some(key) = self.map.index_of(point[0], point[1]) {
            into.insert(key);
            from.remove(key);
        }
    }

    /// Breadth-first fill of free space from `start` into `region`
    ///
    /// When `exclude` is given, every cell added to `region` is removed from it.
    fn flood(
        &self,
        start: [i32; 2],
        value: u8,
        region: &mut CellSet,
        mut exclude: Option<&mut CellSet>,
    ) {
        let mut queue = VecDeque::from([start]);

        while let Some([px, py]) = queue.pop_front() {
            for [dx, dy] in self.options.topology.flood_directions() {
                let (x, y) = (px + dx, py + dy);
                let Some(key) = self.free_key(x, y, value) else {
                    continue;
                };
                if region.insert(key) {
                    if let Some(exclude) = exclude.as_deref_mut() {
                        exclude.remove(key);
                    }
                    queue.push_back([x, y]);
                }
            }
        }
    }

    /// Pick a not-connected cell and a connected cell that lie close together
    ///
    /// Samples from the smaller set and searches the larger one for the
    /// nearest partner, keeping the best of a few trials.
    fn closest_pair(
        &mut self,
        connected: &CellSet,
        not_connected: &CellSet,
    ) -> Option<([i32; 2], [i32; 2])> {
        let mut best: Option<([i32; 2], [i32; 2], i64)> = None;

        for _ in 0..CONNECT_TRIALS {
            let (from, to) = if connected.len() < not_connected.len() {
                let to = self.random_member(connected)?;
                (self.closest(to, not_connected)?, to)
            } else {
                let from = self.random_member(not_connected)?;
                (from, self.closest(from, connected)?)
            };

            let distance = distance_squared(from, to);
            if best.is_none_or(|(_, _, best_distance)| distance < best_distance) {
                best = Some((from, to, distance));
            }
            if distance < CONNECT_CLOSE_ENOUGH {
                break;
            }
        }

        best.map(|(from, to, _)| (from, to))
    }

    fn closest(&self, point: [i32; 2], space: &CellSet) -> Option<[i32; 2]> {
        let mut best: Option<([i32; 2], i64)> = None;

        for key in space.iter() {
            let candidate = self.map.point_of(key);
            let distance = distance_squared(point, candidate);
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((candidate, distance));
            }
        }

        best.map(|(candidate, _)| candidate)
    }

    fn open_cell(
        &mut self,
        point: [i32; 2],
        value: u8,
        connected: &mut CellSet,
        not_connected: &mut CellSet,
    ) {
        if self.map.set(point[0], point[1], value) {
            self.claim(point, connected, not_connected);
        }
    }

    /// Horizontal run along the left point's row, then vertical to the right point
    fn tunnel_orthogonal<C>(
        &mut self,
        to: [i32; 2],
        from: [i32; 2],
        value: u8,
        connected: &mut CellSet,
        not_connected: &mut CellSet,
        connection_callback: &mut C,
    ) where
        C: FnMut([i32; 2], [i32; 2]),
    {
        let (a, b) = if from[0] < to[0] { (from, to) } else { (to, from) };

        for x in a[0]..=b[0] {
            self.open_cell([x, a[1]], value, connected, not_connected);
        }
        let corner = [b[0], a[1]];
        if a[0] < b[0] {
            connection_callback(a, corner);
        }

        for y in a[1].min(b[1])..=a[1].max(b[1]) {
            self.open_cell([b[0], y], value, connected, not_connected);
        }
        if a[1] != b[1] {
            connection_callback(corner, b);
        }
    }

    /// Diagonal steps until level with the target row, then straight along it
    fn tunnel_hex<C>(
        &mut self,
        to: [i32; 2],
        from: [i32; 2],
        value: u8,
        connected: &mut CellSet,
        not_connected: &mut CellSet,
        connection_callback: &mut C,
    ) where
        C: FnMut([i32; 2], [i32; 2]),
    {
        let (a, b) = if from[0] < to[0] { (from, to) } else { (to, from) };
        let [mut x, mut y] = a;

        // Matching parity guarantees arrival well within this many steps
        let max_steps = self.map.width() + self.map.height();
        let width = self.map.width() as i32;
        for _ in 0..max_steps {
            if [x, y] == b {
                break;
            }

            let mut step = 2;
            if y < b[1] {
                y += 1;
                step = 1;
            } else if y > b[1] {
                y -= 1;
                step = 1;
            }

            if x < b[0] {
                x += step;
            } else if x > b[0] {
                x -= step;
            } else if b[1].rem_euclid(2) == 1 || x + step >= width {
                // Odd rows never start at column 0, so stepping left stays on the map
                x -= step;
            } else {
                x += step;
            }

            self.open_cell([x, y], value, connected, not_connected);
        }

        connection_callback(from, to);
    }
}

impl MapGenerator for Cellular {
    /// Advance the automaton by one generation
    fn create<F>(&mut self, callback: F)
    where
        F: FnMut(i32, i32, u8),
    {
        let mut next = GridMap::new(self.map.width(), self.map.height());

        for y in 0..self.map.height() as i32 {
            let (start, step) = self.options.topology.row_layout(y);
            for x in (start..self.map.width() as i32).step_by(step) {
                let alive = self.map.get(x, y).is_some_and(|cell| cell != EMPTY);
                let count = self.neighbors(x, y);

                let lives = if alive {
                    self.options.survive.contains(&count)
                } else {
                    self.options.born.contains(&count)
                };
                if lives {
                    next.set(x, y, WALL);
                }
            }
        }

        self.map = next;
        self.emit(callback);
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.map.width(), self.map.height())
    }
}

const fn distance_squared(a: [i32; 2], b: [i32; 2]) -> i64 {
    let dx = (a[0] - b[0]) as i64;
    let dy = (a[1] - b[1]) as i64;
    dx * dx + dy * dy
}
