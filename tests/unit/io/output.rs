//! Tests for output file naming and persistence

#[cfg(test)]
mod tests {
    use std::path::Path;
    use tileforge::TileError;
    use tileforge::canvas::{Canvas, Color};
    use tileforge::io::output::OutputTarget;

    // Tests only bare png file names are accepted
    // Verified by accepting any extension
    #[test]
    fn test_file_name_validation() {
        assert!(OutputTarget::new("out", "tile.png").is_ok());
        assert!(matches!(
            OutputTarget::new("out", "tile.gif"),
            Err(TileError::InvalidParameter { .. })
        ));
        assert!(OutputTarget::new("out", "tile").is_err());
        assert!(OutputTarget::new("out", ".png").is_err());
        assert!(OutputTarget::new("out", "nested/tile.png").is_err());
        assert!(OutputTarget::new("out", "").is_err());
    }

    // Tests frame and export paths follow the indexed naming scheme
    // Verified by keeping the extension in the base name
    #[test]
    fn test_indexed_paths() {
        let target = OutputTarget::new("assets", "grass.png").unwrap();
        assert_eq!(target.base_name(), "grass");
        assert_eq!(target.tile_path(), Path::new("assets/grass.png"));
        assert_eq!(target.frame_path(0), Path::new("assets/grass_frame_0.png"));
        assert_eq!(target.frame_path(12), Path::new("assets/grass_frame_12.png"));
        assert_eq!(target.export_path(3), Path::new("assets/grass_export_3.png"));
    }

    // Tests saving creates the directory and writes a decodable PNG
    // Verified by skipping directory creation
    #[test]
    fn test_save_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = OutputTarget::new(dir.path().join("a").join("b"), "tile.png").unwrap();
        let canvas = Canvas::new(4, 4, Color::rgb(1, 2, 3)).unwrap();

        let path = target.save(&canvas).unwrap();
        assert_eq!(path, target.tile_path());
        assert_eq!(
            Canvas::open_png(&path).unwrap().pixel(3, 3),
            Some(Color::rgb(1, 2, 3))
        );

        let frame = target.save_frame(&canvas, 1).unwrap();
        assert!(frame.ends_with("tile_frame_1.png"));
        assert!(frame.exists());
    }

    // Tests delete removes the tile and fails when nothing is there
    // Verified by ignoring missing files
    #[test]
    fn test_delete() {
        let dir = tempfile::tempdir().unwrap();
        let target = OutputTarget::new(dir.path(), "tile.png").unwrap();
        assert!(matches!(
            target.delete(),
            Err(TileError::FileSystem { .. })
        ));

        target
            .save(&Canvas::new(2, 2, Color::rgb(0, 0, 0)).unwrap())
            .unwrap();
        target.delete().unwrap();
        assert!(!target.tile_path().exists());
    }

    // Tests renaming keeps the directory and revalidates
    // Verified by skipping validation on rename
    #[test]
    fn test_with_file_name() {
        let target = OutputTarget::new("assets", "tile.png").unwrap();
        let renamed = target.with_file_name("stone.png").unwrap();
        assert_eq!(renamed.directory(), target.directory());
        assert_eq!(renamed.file_name(), "stone.png");
        assert!(target.with_file_name("stone.jpg").is_err());
    }
}
