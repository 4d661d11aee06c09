//! Tests for frame capture and GIF export

#[cfg(test)]
mod tests {
    use cavewright::GenerationError;
    use cavewright::io::visualization::FrameCapture;
    use cavewright::spatial::grid::{EMPTY, GridMap, WALL};

    #[test]
    fn test_record_keeps_snapshots() {
        let mut capture = FrameCapture::new();
        let mut grid = GridMap::filled(3, 3, WALL);

        capture.record(&grid);
        grid.set(1, 1, EMPTY);
        capture.record(&grid);

        assert_eq!(capture.frame_count(), 2);
        assert_eq!(capture.frames().first().map(|g| g.count(EMPTY)), Some(0));
        assert_eq!(capture.frames().get(1).map(|g| g.count(EMPTY)), Some(1));
    }

    #[test]
    fn test_export_without_frames_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = FrameCapture::new().export_gif(&dir.path().join("run.gif"), 100);

        assert!(matches!(result, Err(GenerationError::NothingToExport { .. })));
    }

    // Tests the GIF decodes with one frame per snapshot
    #[test]
    fn test_export_gif() {
        use image::AnimationDecoder;
        use image::codecs::gif::GifDecoder;

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("run.gif");
        let mut capture = FrameCapture::new();
        let mut grid = GridMap::filled(5, 4, WALL);
        capture.record(&grid);
        grid.set(2, 2, EMPTY);
        capture.record(&grid);

        capture.export_gif(&path, 100).expect("export should succeed");

        let file = std::io::BufReader::new(std::fs::File::open(&path).expect("open gif"));
        let frames = GifDecoder::new(file)
            .expect("gif should decode")
            .into_frames()
            .count();
        assert_eq!(frames, 2);
    }
}
