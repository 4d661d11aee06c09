//! Frame capture and GIF generation for step-by-step generation

use std::path::Path;

use image::Frame;

use crate::io::configuration::GIF_FINAL_FRAME_HOLD;
use crate::io::error::{GenerationError, Result, file_system};
use crate::io::image::render_grid;
use crate::spatial::grid::GridMap;

/// Captures a snapshot of the map after each generation step
///
/// Used for cellular runs, where every generation and the final connect
/// pass become one animation frame.
#[derive(Debug, Clone, Default)]
pub struct FrameCapture {
    frames: Vec<GridMap>,
}

impl FrameCapture {
    /// Create an empty capture
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current state of a map
    pub fn record(&mut self, grid: &GridMap) {
        self.frames.push(grid.clone());
    }

    /// Returns all recorded snapshots
    pub fn frames(&self) -> &[GridMap] {
        &self.frames
    }

    /// Returns the number of recorded snapshots
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured snapshots as an animated GIF
    ///
    /// The last frame is held for `GIF_FINAL_FRAME_HOLD` frame delays.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No snapshots were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(GenerationError::NothingToExport {
                reason: "no frames captured for visualization".to_string(),
            });
        }

        let last = self.frames.len() - 1;
        let frames = self.frames.iter().enumerate().map(|(index, grid)| {
            let delay = if index == last {
                frame_delay_ms.saturating_mul(GIF_FINAL_FRAME_HOLD)
            } else {
                frame_delay_ms
            };
            Frame::from_parts(
                render_grid(grid),
                0,
                0,
                image::Delay::from_numer_denom_ms(delay, 1),
            )
        });

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system(parent, "create directory", e))?;
        }

        let file = std::fs::File::create(output_path)
            .map_err(|e| file_system(output_path, "create file", e))?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| GenerationError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })
    }
}
