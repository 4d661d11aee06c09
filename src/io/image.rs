//! PNG export with a fixed cell palette

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::configuration::{CELL_PIXELS, PALETTE, UNKNOWN_COLOR};
use crate::io::error::{GenerationError, Result, file_system};
use crate::spatial::grid::GridMap;

/// Palette colour of a cell value
pub fn cell_color(value: u8) -> Rgba<u8> {
    Rgba(
        PALETTE
            .get(usize::from(value))
            .copied()
            .unwrap_or(UNKNOWN_COLOR),
    )
}

/// Draw the grid with each cell as a `CELL_PIXELS` square
pub fn render_grid(grid: &GridMap) -> RgbaImage {
    let width = grid.width() as u32 * CELL_PIXELS;
    let height = grid.height() as u32 * CELL_PIXELS;

    ImageBuffer::from_fn(width, height, |px, py| {
        let x = (px / CELL_PIXELS) as i32;
        let y = (py / CELL_PIXELS) as i32;
        grid.get(x, y).map_or(Rgba(UNKNOWN_COLOR), cell_color)
    })
}

/// Export the grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The grid has no cells
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &GridMap, output_path: &Path) -> Result<()> {
    if grid.area() == 0 {
        return Err(GenerationError::NothingToExport {
            reason: "map has no cells".to_string(),
        });
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system(parent, "create directory", e))?;
    }

    render_grid(grid)
        .save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
