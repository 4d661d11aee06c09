//! Plain-text map rendering

use std::path::Path;

use crate::io::error::{Result, file_system};
use crate::spatial::grid::{DOOR, EMPTY, GridMap, WALL};

/// Character drawn for a cell value
pub const fn glyph(value: u8) -> char {
    match value {
        EMPTY => '.',
        WALL => '#',
        DOOR => '+',
        _ => '?',
    }
}

/// Render the grid one text line per row
pub fn render_ascii(grid: &GridMap) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());

    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            out.push(grid.get(x, y).map_or(' ', glyph));
        }
        out.push('\n');
    }

    out
}

/// Write the ASCII rendering to `output_path`, creating parent directories
///
/// # Errors
///
/// Returns `FileSystem` if the directory or file cannot be written
pub fn export_grid_as_text(grid: &GridMap, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system(parent, "create directory", e))?;
    }

    std::fs::write(output_path, render_ascii(grid))
        .map_err(|e| file_system(output_path, "write map", e))
}
