//! Glyph metrics and drawing seam between the compositor and a font backend

use image::{Rgb, RgbImage};

/// Pixel extent of a glyph as it would be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphBox {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Font capability needed to build and draw a mosaic
///
/// Implementors treat the font as fixed-width: the cell size is taken from a
/// single reference glyph and every glyph is drawn at a cell origin without
/// rotation or scaling.
pub trait GlyphPainter {
    /// Bounding box of `glyph` at the painter's size, `None` if it has no extent
    fn glyph_box(&self, glyph: char) -> Option<GlyphBox>;

    /// Draw `glyph` with its top-left anchor at `origin` (`[x, y]`) in `color`
    ///
    /// Pixels falling outside `canvas` are clipped.
    fn draw_glyph(&self, canvas: &mut RgbImage, glyph: char, origin: [u32; 2], color: Rgb<u8>);
}
