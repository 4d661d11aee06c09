//! Tests for ASCII map rendering

#[cfg(test)]
mod tests {
    use cavewright::io::text::{export_grid_as_text, glyph, render_ascii};
    use cavewright::spatial::grid::{DOOR, EMPTY, GridMap, WALL};

    #[test]
    fn test_glyphs() {
        assert_eq!(glyph(EMPTY), '.');
        assert_eq!(glyph(WALL), '#');
        assert_eq!(glyph(DOOR), '+');
        assert_eq!(glyph(7), '?');
    }

    // Tests one line per row with x increasing along the line
    #[test]
    fn test_render_rows() {
        let mut grid = GridMap::filled(4, 3, WALL);
        grid.set(1, 1, EMPTY);
        grid.set(2, 1, DOOR);

        assert_eq!(render_ascii(&grid), "####\n#.+#\n####\n");
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("maps").join("arena.txt");

        export_grid_as_text(&GridMap::filled(2, 1, WALL), &path).expect("export should succeed");

        assert_eq!(std::fs::read_to_string(&path).ok().as_deref(), Some("##\n"));
    }
}
