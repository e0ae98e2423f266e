//! Tests for font loading and glyph painting with `ab_glyph`

#[cfg(test)]
mod tests {
    use glyphmosaic::MosaicError;
    use glyphmosaic::io::configuration::REFERENCE_GLYPH;
    use glyphmosaic::io::font::FontGlyphs;
    use glyphmosaic::render::{GlyphBox, GlyphPainter};
    use image::{Rgb, RgbImage};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    // Tests that a missing font file is reported with its path
    #[test]
    fn test_missing_font_is_file_system_error() {
        let result = FontGlyphs::load(Path::new("no/such/font.ttf"), 14);

        match result {
            Err(MosaicError::FileSystem { path, operation, .. }) => {
                assert_eq!(path, Path::new("no/such/font.ttf"));
                assert_eq!(operation, "read font");
            }
            _ => unreachable!("Expected FileSystem error"),
        }
    }

    // Tests that a readable file that is not a font is rejected
    #[test]
    fn test_non_font_bytes_are_font_load_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fake.ttf");
        fs::write(&path, b"definitely not a font").unwrap();

        assert!(matches!(
            FontGlyphs::load(&path, 14),
            Err(MosaicError::FontLoad { .. })
        ));
        assert!(FontGlyphs::from_bytes(vec![0; 32], 14).is_err());
    }

    // Tests that a zero size is rejected before the file is read
    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            FontGlyphs::load(Path::new("no/such/font.ttf"), 0),
            Err(MosaicError::InvalidParameter {
                parameter: "font_size",
                ..
            })
        ));
    }

    const FIXTURE_FONT: &[u8] = include_bytes!("../../fixtures/DejaVuSansMono.ttf");

    fn ink_bounds(canvas: &RgbImage, background: Rgb<u8>) -> Option<([u32; 2], [u32; 2])> {
        canvas
            .enumerate_pixels()
            .filter(|(_, _, pixel)| **pixel != background)
            .fold(None, |bounds, (x, y, _)| match bounds {
                None => Some(([x, y], [x, y])),
                Some(([min_x, min_y], [max_x, max_y])) => Some((
                    [min_x.min(x), min_y.min(y)],
                    [max_x.max(x), max_y.max(y)],
                )),
            })
    }

    // Tests the full-block cell box at 14 pixels per em
    // Verified by passing the size to ab_glyph as line height unconverted
    #[test]
    fn test_reference_glyph_cell_box() {
        let font = FontGlyphs::from_bytes(FIXTURE_FONT.to_vec(), 14).unwrap();

        assert_eq!(
            font.glyph_box(REFERENCE_GLYPH),
            Some(GlyphBox {
                width: 10,
                height: 18
            })
        );
        assert!(font.glyph_box(' ').is_none());
    }

    // Tests where a glyph drawn at a cell origin lands on the canvas
    // Verified by anchoring glyphs at the baseline instead of the ascender
    #[test]
    fn test_glyph_ink_anchored_at_cell_origin() {
        let font = FontGlyphs::from_bytes(FIXTURE_FONT.to_vec(), 14).unwrap();
        let background = Rgb([0, 0, 0]);
        let ink = Rgb([255, 255, 255]);
        let mut canvas = RgbImage::from_pixel(40, 60, background);

        font.draw_glyph(&mut canvas, REFERENCE_GLYPH, [10, 18], ink);

        assert_eq!(ink_bounds(&canvas, background), Some(([9, 17], [18, 34])));
        assert_eq!(*canvas.get_pixel(14, 26), ink);
    }

    // Tests that coverage blends the glyph color over what is already drawn
    // Verified by overwriting pixels with the glyph color regardless of coverage
    #[test]
    fn test_glyph_blends_over_existing_pixels() {
        let font = FontGlyphs::from_bytes(FIXTURE_FONT.to_vec(), 14).unwrap();
        let background = Rgb([0, 0, 200]);
        let ink = Rgb([200, 0, 0]);
        let mut canvas = RgbImage::from_pixel(30, 30, background);

        font.draw_glyph(&mut canvas, 'o', [5, 5], ink);

        assert!(canvas.pixels().any(|&Rgb([r, _, _])| r > 0));
        // Antialiased edges mix both colors
        assert!(
            canvas
                .pixels()
                .any(|&Rgb([r, _, b])| r > 0 && b > 0 && r < 200 && b < 200)
        );
    }

    // Tests that glyphs partly off the canvas are clipped instead of panicking
    #[test]
    fn test_glyph_clipped_at_canvas_edge() {
        let font = FontGlyphs::from_bytes(FIXTURE_FONT.to_vec(), 14).unwrap();
        let mut canvas = RgbImage::from_pixel(5, 5, Rgb([0, 0, 0]));

        font.draw_glyph(&mut canvas, REFERENCE_GLYPH, [0, 0], Rgb([9, 9, 9]));
        font.draw_glyph(&mut canvas, REFERENCE_GLYPH, [4, 4], Rgb([9, 9, 9]));

        assert_eq!(*canvas.get_pixel(2, 2), Rgb([9, 9, 9]));
    }

    // Tests loading the same font from disk
    #[test]
    fn test_load_fixture_from_path() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSansMono.ttf");
        let font = FontGlyphs::load(&path, 14).unwrap();

        assert!(font.glyph_box(REFERENCE_GLYPH).is_some());
    }
}
