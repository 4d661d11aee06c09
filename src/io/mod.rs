//! Command line, progress display, map export and error handling

/// Command-line interface and the batch map runner
pub mod cli;
/// Generator defaults and output constants
pub mod configuration;
/// Error types and validation helpers
pub mod error;
/// PNG export of finished maps
pub mod image;
/// Progress bars for batch generation
pub mod progress;
/// ASCII rendering of finished maps
pub mod text;
/// Per-step frame capture and GIF export
pub mod visualization;
