//! Tests for color validation, parsing and raster conversion

#[cfg(test)]
mod tests {
    use tileforge::TileError;
    use tileforge::canvas::Color;

    // Tests channel values outside the byte range are rejected
    // Verified by accepting 256 as a saturated channel
    #[test]
    fn test_channel_out_of_range_rejected() {
        let result = Color::from_channels(&[256, 0, 0]);
        assert!(matches!(
            result,
            Err(TileError::InvalidParameter {
                parameter: "color",
                ..
            })
        ));
        assert!(Color::from_channels(&[0, -1, 0]).is_err());
    }

    // Tests only three or four channels form a color
    // Verified by padding short channel lists with zeros
    #[test]
    fn test_channel_arity() {
        assert!(Color::from_channels(&[1, 2]).is_err());
        assert!(Color::from_channels(&[1, 2, 3, 4, 5]).is_err());

        let rgb = Color::from_channels(&[1, 2, 3]).unwrap();
        assert!(!rgb.has_alpha());
        assert_eq!(rgb.alpha(), 255);

        let rgba = Color::from_channels(&[1, 2, 3, 4]).unwrap();
        assert!(rgba.has_alpha());
        assert_eq!(rgba.to_array(), [1, 2, 3, 4]);
    }

    // Tests opaque rgb and rgba with full alpha are the same pixel value
    // Verified by deriving equality over the alpha flag
    #[test]
    fn test_equality_ignores_channel_count() {
        assert_eq!(Color::rgb(10, 20, 30), Color::rgba(10, 20, 30, 255));
        assert_ne!(Color::rgb(10, 20, 30), Color::rgba(10, 20, 30, 254));
    }

    // Tests parsing accepts the display format
    // Verified by not trimming parentheses
    #[test]
    fn test_parse_display_format() {
        let color = Color::rgba(0, 0, 0, 100);
        let parsed: Color = color.to_string().parse().unwrap();
        assert_eq!(parsed, color);
        assert!(parsed.has_alpha());

        let plain: Color = "255, 128,0".parse().unwrap();
        assert_eq!(plain.to_array(), [255, 128, 0, 255]);
    }

    // Tests malformed strings are rejected
    // Verified by skipping non-numeric channels
    #[test]
    fn test_parse_rejects_garbage() {
        assert!("red".parse::<Color>().is_err());
        assert!("1,2,x".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    // Tests conversion to and from raster pixels preserves channels
    // Verified by dropping alpha in the conversion
    #[test]
    fn test_raster_conversion() {
        let color = Color::rgba(9, 8, 7, 6);
        assert_eq!(Color::from_rgba(color.to_rgba()), color);
        assert_eq!(color.red(), 9);
        assert_eq!(color.green(), 8);
        assert_eq!(color.blue(), 7);
    }
}
