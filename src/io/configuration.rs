//! Generator constants and runtime configuration defaults

// Map dimensions
/// Default map width in cells
pub const DEFAULT_WIDTH: usize = 80;
/// Default map height in cells
pub const DEFAULT_HEIGHT: usize = 25;

// Digger defaults
/// Inclusive room width range
pub const DEFAULT_ROOM_WIDTH: [i32; 2] = [3, 9];
/// Inclusive room height range
pub const DEFAULT_ROOM_HEIGHT: [i32; 2] = [3, 5];
/// Inclusive corridor length range
pub const DEFAULT_CORRIDOR_LENGTH: [i32; 2] = [3, 10];
/// Fraction of the interior to dig before stopping
pub const DEFAULT_DUG_PERCENTAGE: f64 = 0.2;
/// Wall-clock carving budget in milliseconds
pub const DEFAULT_TIME_LIMIT_MS: u64 = 1000;
/// Feature placements tried on each frontier wall
pub const DEFAULT_FEATURE_ATTEMPTS: usize = 20;
/// Relative weight of rooms when choosing a feature
pub const DEFAULT_ROOM_WEIGHT: f64 = 4.0;
/// Relative weight of corridors when choosing a feature
pub const DEFAULT_CORRIDOR_WEIGHT: f64 = 4.0;

// Cellular defaults
/// Neighbour counts that bring an empty cell to life
pub const DEFAULT_BORN: [u8; 4] = [5, 6, 7, 8];
/// Neighbour counts that keep a live cell alive
pub const DEFAULT_SURVIVE: [u8; 5] = [4, 5, 6, 7, 8];
/// Initial live-cell probability used by the CLI
pub const DEFAULT_FILL_PROBABILITY: f64 = 0.5;
/// Generations the CLI runs before connecting
pub const DEFAULT_GENERATIONS: usize = 4;

// Connectivity repair
/// Random trials when searching for a pair of regions to join
pub const CONNECT_TRIALS: usize = 5;
/// Squared distance below which a candidate pair is accepted at once
pub const CONNECT_CLOSE_ENOUGH: i64 = 64;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Maps generated per invocation
pub const DEFAULT_COUNT: usize = 1;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Pixel edge length of one cell in exported images
pub const CELL_PIXELS: u32 = 4;
/// RGBA colours for floor, wall and door
pub const PALETTE: [[u8; 4]; 3] = [
    [200, 190, 160, 255],
    [40, 40, 48, 255],
    [170, 90, 30, 255],
];
/// Colour for cell values outside the palette
pub const UNKNOWN_COLOR: [u8; 4] = [255, 0, 255, 255];
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 250;
/// How many frame delays the final frame is held for
pub const GIF_FINAL_FRAME_HOLD: u32 = 8;
