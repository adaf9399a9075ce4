//! Tests for shape, curve and palette configuration validation

#[cfg(test)]
mod tests {
    use tileforge::TileError;
    use tileforge::canvas::{Color, Point};
    use tileforge::shapes::config::stride;
    use tileforge::shapes::{CurveConfig, EdgeSet, ShapeConfig, TileStyle};

    // Tests zero thickness and zero repeat are rejected
    // Verified by clamping zero to one
    #[test]
    fn test_shape_config_validation() {
        assert!(matches!(
            ShapeConfig::new(0, EdgeSet::ALL, false, None),
            Err(TileError::InvalidParameter {
                parameter: "thickness",
                ..
            })
        ));
        assert!(matches!(
            ShapeConfig::new(1, EdgeSet::ALL, false, Some(0)),
            Err(TileError::InvalidParameter {
                parameter: "repeat",
                ..
            })
        ));
        assert!(ShapeConfig::new(1, EdgeSet::NONE, true, Some(3)).is_ok());
    }

    // Tests a failed reconfigure leaves the previous values in place
    // Verified by assigning fields before validation
    #[test]
    fn test_reconfigure_is_atomic() {
        let mut config = ShapeConfig::new(2, EdgeSet::ALL, true, Some(4)).unwrap();
        assert!(config.reconfigure(0, EdgeSet::NONE, false, None).is_err());
        assert_eq!(config.thickness(), 2);
        assert_eq!(config.edges(), EdgeSet::ALL);
        assert!(config.pop());
        assert_eq!(config.repeat(), Some(4));

        config.reconfigure(3, EdgeSet::NONE, false, None).unwrap();
        assert_eq!(config.thickness(), 3);
        assert!(config.edges().is_empty());
    }

    // Tests the stride defaults to thickness times the larger dimension
    // Verified by using the smaller dimension
    #[test]
    fn test_stride_defaults() {
        assert_eq!(stride(1, None, 32, 16), 32);
        assert_eq!(stride(2, Some(5), 32, 32), 10);
        assert_eq!(stride(u32::MAX, Some(2), 1, 1), u32::MAX);

        let config = ShapeConfig::with_thickness(3).unwrap();
        assert_eq!(config.stride(20, 40), 120);
    }

    // Tests curve builders keep the points and flags
    // Verified by resetting flags in translated
    #[test]
    fn test_curve_config_builders() {
        assert!(CurveConfig::new(Point::new(0, 0), Point::new(1, 1), Point::new(2, 0), 0).is_err());

        let curve = CurveConfig::new(Point::new(0, 1), Point::new(4, 3), Point::new(1, 0), 2)
            .unwrap()
            .closed(true)
            .popped(true);
        let moved = curve.translated(Point::new(10, 20));

        assert_eq!(moved.start(), Point::new(10, 21));
        assert_eq!(moved.control(), Point::new(14, 23));
        assert_eq!(moved.end(), Point::new(11, 20));
        assert!(moved.is_closed());
        assert!(moved.pop());
        assert_eq!(moved.thickness(), 2);
    }

    // Tests curve reconfigure keeps flags and rejects bad thickness atomically
    // Verified by rebuilding the curve with default flags
    #[test]
    fn test_curve_reconfigure() {
        let mut curve = CurveConfig::new(Point::new(0, 0), Point::new(1, 1), Point::new(2, 0), 1)
            .unwrap()
            .closed(true);

        assert!(
            curve
                .reconfigure(Point::new(5, 5), Point::new(6, 6), Point::new(7, 5), 0)
                .is_err()
        );
        assert_eq!(curve.start(), Point::new(0, 0));

        curve
            .reconfigure(Point::new(5, 5), Point::new(6, 6), Point::new(7, 5), 4)
            .unwrap();
        assert_eq!(curve.start(), Point::new(5, 5));
        assert!(curve.is_closed());
        assert_eq!(curve.thickness(), 4);
    }

    // Tests the default palette and line override
    // Verified by swapping line and background defaults
    #[test]
    fn test_tile_style() {
        let style = TileStyle::default();
        assert_eq!(style.background, Color::rgb(255, 255, 255));
        assert_eq!(style.line, Color::rgb(0, 0, 0));
        assert_eq!(style.shadow.alpha(), 100);

        let red = style.with_line(Color::rgb(255, 0, 0));
        assert_eq!(red.line, Color::rgb(255, 0, 0));
        assert_eq!(red.background, style.background);
        assert_eq!(EdgeSet::default(), EdgeSet::ALL);
    }
}
