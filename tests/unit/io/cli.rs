//! Tests for command-line parsing and the generation runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::path::PathBuf;
    use tileforge::canvas::{Canvas, Color, Point};
    use tileforge::io::cli::{Cli, TileCommand, TileRunner};
    use tileforge::io::configuration::{
        DEFAULT_OUTPUT_DIRECTORY, DEFAULT_REPEAT_SPACING, DEFAULT_TILE_SIZE,
    };

    fn run(dir: &std::path::Path, args: &[&str]) -> tileforge::Result<tileforge::generation::FrameSequence> {
        let output_dir = dir.to_string_lossy().to_string();
        let mut argv = vec!["tileforge"];
        argv.extend_from_slice(args);
        argv.extend_from_slice(&["--output-dir", output_dir.as_str(), "--quiet"]);
        TileRunner::new(Cli::parse_from(argv)).run()
    }

    // Tests grid parsing with only defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_grid_defaults() {
        let cli = Cli::parse_from(["tileforge", "grid"]);
        let TileCommand::Grid(args) = &cli.command else {
            unreachable!("Expected grid command");
        };

        assert_eq!(args.thickness, 1);
        assert_eq!(args.repeat, None);
        assert_eq!(args.start, Point::new(0, 0));
        assert_eq!(args.tile.width, DEFAULT_TILE_SIZE);
        assert_eq!(args.tile.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIRECTORY));
        assert_eq!(args.tile.line, Color::rgb(0, 0, 0));
        assert!(args.tile.frames.is_none());
        assert!(!cli.quiet);
    }

    // Tests custom parsers for colors, points and frame counts
    // Verified by modifying custom parsers to ensure they're invoked
    #[test]
    fn test_cli_parse_custom_values() {
        let cli = Cli::parse_from([
            "tileforge",
            "curve",
            "--from",
            "0,1",
            "--control",
            "4,3",
            "--to",
            "1,0",
            "--line",
            "10,20,30",
            "--frames",
            "3",
            "--closed",
        ]);
        let TileCommand::Curve(args) = &cli.command else {
            unreachable!("Expected curve command");
        };

        assert_eq!(args.control, Point::new(4, 3));
        assert_eq!(args.tile.line, Color::rgb(10, 20, 30));
        assert_eq!(args.tile.frames.map(|f| f.get()), Some(3));
        assert!(args.closed);
        assert_eq!(cli.command.tile().style().line, Color::rgb(10, 20, 30));
    }

    // Tests malformed values are rejected by the parser
    // Verified by falling back to defaults on parse errors
    #[test]
    fn test_cli_rejects_bad_values() {
        assert!(Cli::try_parse_from(["tileforge", "grid", "--frames", "0"]).is_err());
        assert!(Cli::try_parse_from(["tileforge", "grid", "--frames", "abc"]).is_err());
        assert!(Cli::try_parse_from(["tileforge", "grid", "--line", "300,0,0"]).is_err());
        assert!(Cli::try_parse_from(["tileforge", "sticker", "--color", "0,0,0"]).is_err());
    }

    // Tests the shadow color must carry an explicit alpha channel
    // Verified by accepting three-channel shadow colors
    #[test]
    fn test_cli_shadow_requires_alpha() {
        assert!(Cli::try_parse_from(["tileforge", "grid", "--shadow", "0,0,0"]).is_err());

        let cli = Cli::parse_from(["tileforge", "grid", "--shadow", "0,0,0,80"]);
        assert_eq!(cli.command.tile().shadow, Color::rgba(0, 0, 0, 80));

        let defaults = Cli::parse_from(["tileforge", "grid"]);
        assert!(defaults.command.tile().shadow.has_alpha());
    }

    // Tests sticker spacing defaults to the configured repeat spacing
    // Verified by hardcoding a different default
    #[test]
    fn test_cli_sticker_spacing_default() {
        let cli = Cli::parse_from(["tileforge", "sticker", "--coord", "0.5,0.5", "--color", "0,0,0"]);
        let TileCommand::Sticker(args) = cli.command else {
            panic!("expected sticker command");
        };
        assert_eq!(args.spacing, Point::new(DEFAULT_REPEAT_SPACING, DEFAULT_REPEAT_SPACING));
    }

    // Tests log level selection from quiet and verbose flags
    // Verified by inverting quiet flag logic
    #[test]
    fn test_log_level() {
        let quiet = Cli::parse_from(["tileforge", "grid", "--quiet", "-v"]);
        assert_eq!(quiet.log_level(), tracing::Level::WARN);
        assert!(!quiet.should_show_progress());

        let normal = Cli::parse_from(["tileforge", "grid"]);
        assert_eq!(normal.log_level(), tracing::Level::INFO);

        let verbose = Cli::parse_from(["tileforge", "grid", "-vv"]);
        assert_eq!(verbose.log_level(), tracing::Level::TRACE);
    }

    // Tests a static grid run writes one tile
    // Verified by skipping the save step
    #[test]
    fn test_run_static_grid() {
        let dir = tempfile::tempdir().unwrap();
        let sequence = run(dir.path(), &["grid", "--width", "16", "--height", "16"]).unwrap();

        assert_eq!(sequence.len(), 1);
        let canvas = Canvas::open_png(dir.path().join("tile.png")).unwrap();
        assert_eq!(canvas.pixel(0, 0), Some(Color::rgb(0, 0, 0)));
        assert_eq!(canvas.pixel(8, 8), Some(Color::rgb(255, 255, 255)));
    }

    // Tests an animated run writes indexed frames
    // Verified by writing the static tile instead
    #[test]
    fn test_run_animated_curve() {
        let dir = tempfile::tempdir().unwrap();
        let sequence = run(
            dir.path(),
            &[
                "curve", "--from", "0,1", "--control", "4,3", "--to", "1,0", "--frames", "3",
                "-o", "grass.png",
            ],
        )
        .unwrap();

        assert_eq!(sequence.len(), 3);
        for index in 0..3 {
            assert!(dir.path().join(format!("grass_frame_{index}.png")).exists());
        }
        assert!(!dir.path().join("grass.png").exists());
    }

    // Tests invalid arguments fail before anything is written
    // Verified by drawing before validating the sticker
    #[test]
    fn test_run_validates_before_drawing() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            &["sticker", "--coord", "1.5,0.5", "--color", "0,128,0"],
        );
        assert!(result.is_err());
        assert!(!dir.path().join("tile.png").exists());

        let thick = run(dir.path(), &["grid", "--thickness", "0"]);
        assert!(thick.is_err());
        assert!(!dir.path().join("tile.png").exists());
    }

    // Tests stickers, polygons and scatter patterns each produce a tile
    // Verified by returning early for non-grid commands
    #[test]
    fn test_run_other_patterns() {
        let dir = tempfile::tempdir().unwrap();

        run(
            dir.path(),
            &[
                "sticker", "--coord", "0.1,0.1", "--coord", "0.2,0.1", "--color", "0,128,0",
                "-o", "sticker.png",
            ],
        )
        .unwrap();
        let sticker = Canvas::open_png(dir.path().join("sticker.png")).unwrap();
        assert!(sticker.count_color(Color::rgb(0, 128, 0)) > 2);

        run(dir.path(), &["polygon", "--sides", "5", "--fill", "200,0,0", "-o", "poly.png"])
            .unwrap();
        let polygon = Canvas::open_png(dir.path().join("poly.png")).unwrap();
        assert_eq!(polygon.pixel(16, 16), Some(Color::rgb(200, 0, 0)));

        run(dir.path(), &["scatter", "--limit", "4", "-o", "scatter.png"]).unwrap();
        assert!(dir.path().join("scatter.png").exists());
    }

    // Tests a stamped pixel lands on top of the grid
    // Verified by stamping before the grid is drawn
    #[test]
    fn test_run_grid_with_stamp() {
        let dir = tempfile::tempdir().unwrap();
        run(
            dir.path(),
            &["grid", "--stamp", "0,0", "--stamp-color", "255,0,0"],
        )
        .unwrap();
        let canvas = Canvas::open_png(dir.path().join("tile.png")).unwrap();
        assert_eq!(canvas.pixel(0, 0), Some(Color::rgb(255, 0, 0)));
        assert_eq!(canvas.pixel(1, 0), Some(Color::rgb(0, 0, 0)));
    }
}
