//! Command-line interface for batch map generation

use crate::algorithm::MapGenerator;
use crate::algorithm::arena::Arena;
use crate::algorithm::cellular::{Cellular, CellularOptions};
use crate::algorithm::digger::{Digger, DiggerOptions};
use crate::analysis::statistics::MapStatistics;
use crate::io::configuration::{
    DEFAULT_BORN, DEFAULT_CORRIDOR_WEIGHT, DEFAULT_COUNT, DEFAULT_DUG_PERCENTAGE,
    DEFAULT_FEATURE_ATTEMPTS, DEFAULT_FILL_PROBABILITY, DEFAULT_GENERATIONS, DEFAULT_HEIGHT,
    DEFAULT_ROOM_WEIGHT, DEFAULT_SEED, DEFAULT_SURVIVE, DEFAULT_TIME_LIMIT_MS, DEFAULT_WIDTH,
    GIF_FRAME_DELAY_MS,
};
use crate::io::error::{Result, file_system};
use crate::io::image::export_grid_as_png;
use crate::io::progress::ProgressManager;
use crate::io::text::export_grid_as_text;
use crate::io::visualization::FrameCapture;
use crate::spatial::grid::{EMPTY, GridMap};
use crate::spatial::topology::Topology;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "cavewright")]
#[command(author, version, about = "Generate roguelike dungeon and cave maps")]
/// Command-line arguments for the map generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Generator to run
    #[command(subcommand)]
    pub generator: GeneratorCommand,

    /// Map width in cells
    #[arg(short = 'W', long, global = true, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Map height in cells
    #[arg(short = 'H', long, global = true, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed for the first map; later maps use the following seeds
    #[arg(short, long, global = true, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of maps to generate
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Directory that receives the output files
    #[arg(short, long, global = true, default_value = ".")]
    pub output: PathBuf,

    /// Also export each map as a PNG image
    #[arg(short, long, global = true)]
    pub png: bool,

    /// Skip the ASCII text export
    #[arg(long, global = true)]
    pub no_text: bool,

    /// Enable visualization output as animated GIF
    #[arg(short, long, global = true)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Available generators
#[derive(Subcommand, Debug, Clone)]
pub enum GeneratorCommand {
    /// Single empty room with a solid border
    Arena,
    /// Rooms joined by corridors, dug out of solid rock
    Digger(DiggerArgs),
    /// Cellular automaton caves
    Cellular(CellularArgs),
}

impl GeneratorCommand {
    /// Short name used in output file names
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Arena => "arena",
            Self::Digger(_) => "digger",
            Self::Cellular(_) => "cellular",
        }
    }
}

/// Digger options
#[derive(Args, Debug, Clone)]
pub struct DiggerArgs {
    /// Room width range as MIN-MAX
    #[arg(long, default_value = "3-9", value_parser = parse_range)]
    pub room_width: [i32; 2],

    /// Room height range as MIN-MAX
    #[arg(long, default_value = "3-5", value_parser = parse_range)]
    pub room_height: [i32; 2],

    /// Corridor length range as MIN-MAX
    #[arg(long, default_value = "3-10", value_parser = parse_range)]
    pub corridor_length: [i32; 2],

    /// Fraction of the interior to dig
    #[arg(short, long, default_value_t = DEFAULT_DUG_PERCENTAGE)]
    pub dug: f64,

    /// Carving time budget in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_TIME_LIMIT_MS)]
    pub time_limit: u64,

    /// Relative weight of rooms when choosing a feature
    #[arg(long, default_value_t = DEFAULT_ROOM_WEIGHT)]
    pub room_weight: f64,

    /// Relative weight of corridors when choosing a feature
    #[arg(long, default_value_t = DEFAULT_CORRIDOR_WEIGHT)]
    pub corridor_weight: f64,
}

impl DiggerArgs {
    /// Convert to generator options
    pub fn options(&self) -> DiggerOptions {
        DiggerOptions {
            room_width: self.room_width,
            room_height: self.room_height,
            corridor_length: self.corridor_length,
            dug_percentage: self.dug,
            time_limit: Duration::from_millis(self.time_limit),
            feature_attempts: DEFAULT_FEATURE_ATTEMPTS,
            room_weight: self.room_weight,
            corridor_weight: self.corridor_weight,
        }
    }
}

/// Cellular automaton options
#[derive(Args, Debug, Clone)]
pub struct CellularArgs {
    /// Neighbour counts that bring a cell to life
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_BORN)]
    pub born: Vec<u8>,

    /// Neighbour counts that keep a cell alive
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SURVIVE)]
    pub survive: Vec<u8>,

    /// Neighbourhood size: 4, 6 or 8
    #[arg(long, default_value = "8", value_parser = parse_topology)]
    pub topology: Topology,

    /// Initial probability of a cell being wall
    #[arg(long, default_value_t = DEFAULT_FILL_PROBABILITY)]
    pub probability: f64,

    /// Generations to run before connecting
    #[arg(short, long, default_value_t = DEFAULT_GENERATIONS)]
    pub generations: usize,

    /// Leave disconnected caves as they are
    #[arg(long)]
    pub no_connect: bool,
}

impl CellularArgs {
    /// Convert to generator options
    pub fn options(&self) -> CellularOptions {
        CellularOptions {
            born: self.born.clone(),
            survive: self.survive.clone(),
            topology: self.topology,
        }
    }
}

/// Parse `MIN-MAX` or a single number into an inclusive range
///
/// # Errors
///
/// Returns a message if either bound is not an integer
pub fn parse_range(value: &str) -> std::result::Result<[i32; 2], String> {
    let parse = |part: &str| {
        part.trim()
            .parse::<i32>()
            .map_err(|e| format!("'{part}' is not a number: {e}"))
    };

    match value.split_once('-') {
        Some((min, max)) => Ok([parse(min)?, parse(max)?]),
        None => {
            let single = parse(value)?;
            Ok([single, single])
        }
    }
}

/// Parse a neighbour count into a topology
///
/// # Errors
///
/// Returns a message unless the value is 4, 6 or 8
pub fn parse_topology(value: &str) -> std::result::Result<Topology, String> {
    let neighbors = value
        .trim()
        .parse::<u8>()
        .map_err(|e| format!("'{value}' is not a number: {e}"))?;
    Topology::try_from(neighbors).map_err(|e| e.to_string())
}

/// A finished map and what is known about it
struct GeneratedMap {
    grid: GridMap,
    statistics: MapStatistics,
    detail: String,
    frames: FrameCapture,
}

/// Orchestrates batch generation with progress tracking
pub struct MapRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MapRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and export every requested map
    ///
    /// # Errors
    ///
    /// Returns an error if generator options are invalid or an export fails
    // Allow print for the per-map summary once progress bars are cleared
    #[allow(clippy::print_stderr)]
    pub fn run(&mut self) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(&self.cli.output)
            .map_err(|e| file_system(&self.cli.output, "create directory", e))?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        let mut written = Vec::new();
        let mut summaries = Vec::new();

        for index in 0..self.cli.count {
            let seed = self.cli.seed.wrapping_add(index as u64);
            let name = format!("{}_{seed}", self.cli.generator.name());

            let map = self.generate(index, &name, seed)?;
            written.extend(self.export(&name, &map)?);
            summaries.push(format!("{name}: {} {}", map.statistics, map.detail));

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_map(index);
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
            for summary in &summaries {
                eprintln!("{}", summary.trim_end());
            }
        }

        Ok(written)
    }

    fn generate(&mut self, index: usize, name: &str, seed: u64) -> Result<GeneratedMap> {
        let (width, height) = (self.cli.width, self.cli.height);
        let mut frames = FrameCapture::new();

        match self.cli.generator.clone() {
            GeneratorCommand::Arena => {
                self.start(index, name, 1);
                let grid = Arena::new(width, height).create_grid();
                frames.record(&grid);

                Ok(GeneratedMap {
                    statistics: MapStatistics::from_grid(&grid),
                    grid,
                    detail: String::new(),
                    frames,
                })
            }
            GeneratorCommand::Digger(args) => {
                self.start(index, name, 1);
                let mut digger = Digger::new(width, height, args.options(), seed)?;
                let grid = digger.create_grid();
                frames.record(&grid);

                Ok(GeneratedMap {
                    statistics: MapStatistics::from_grid(&grid),
                    detail: format!(
                        "({} rooms, {} corridors)",
                        digger.rooms().len(),
                        digger.corridors().len()
                    ),
                    grid,
                    frames,
                })
            }
            GeneratorCommand::Cellular(args) => {
                let steps = args.generations + usize::from(!args.no_connect);
                self.start(index, name, steps);

                let mut cellular = Cellular::new(width, height, args.options(), seed)?;
                cellular.randomize(args.probability)?;
                frames.record(&cellular.snapshot());

                for generation in 1..=args.generations {
                    cellular.create(|_, _, _| {});
                    frames.record(&cellular.snapshot());
                    self.step(index, generation);
                }

                let mut tunnels = 0;
                let mut grid = cellular.snapshot();
                if !args.no_connect {
                    cellular.connect(
                        |x, y, value| {
                            grid.set(x, y, value);
                        },
                        EMPTY,
                        |_, _| tunnels += 1,
                    );
                    frames.record(&grid);
                    self.step(index, steps);
                }

                Ok(GeneratedMap {
                    statistics: MapStatistics::with_topology(&grid, args.topology),
                    detail: format!("({tunnels} tunnel segments)"),
                    grid,
                    frames,
                })
            }
        }
    }

    fn export(&self, name: &str, map: &GeneratedMap) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        if !self.cli.no_text {
            let path = self.cli.output.join(format!("{name}.txt"));
            export_grid_as_text(&map.grid, &path)?;
            written.push(path);
        }

        if self.cli.png {
            let path = self.cli.output.join(format!("{name}.png"));
            export_grid_as_png(&map.grid, &path)?;
            written.push(path);
        }

        if self.cli.visualize {
            let path = self.cli.output.join(format!("{name}.gif"));
            map.frames.export_gif(&path, GIF_FRAME_DELAY_MS)?;
            written.push(path);
        }

        Ok(written)
    }

    fn start(&mut self, index: usize, name: &str, steps: usize) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_map(index, name, steps);
        }
    }

    fn step(&mut self, index: usize, step: usize) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.update_step(index, step);
        }
    }
}
