//! TrueType glyph painter backed by `ab_glyph`

use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::render::painter::{GlyphBox, GlyphPainter};
use ab_glyph::{Font, FontVec, Glyph, InvalidFont, PxScale, ScaleFont, point};
use image::{Rgb, RgbImage};
use std::path::Path;

/// A loaded font at a fixed size
///
/// Glyphs are anchored at their left/ascender corner: the baseline sits one
/// ascent below the requested origin, so a cell origin is the top of the
/// line box rather than the baseline.
pub struct FontGlyphs {
    font: FontVec,
    scale: PxScale,
    ascent: f32,
}

impl FontGlyphs {
    /// Read a font file and prepare it at `size` pixels per em
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `InvalidParameter` if `size` is zero
    /// - `FileSystem` if the file cannot be read
    /// - `FontLoad` if the bytes are not a font
    pub fn load(path: &Path, size: u32) -> Result<Self> {
        if size == 0 {
            return Err(invalid_parameter(
                "font_size",
                &size,
                &"font size must be positive",
            ));
        }

        let data = std::fs::read(path).map_err(|e| MosaicError::FileSystem {
            path: path.to_path_buf(),
            operation: "read font",
            source: e,
        })?;

        Self::from_bytes(data, size).map_err(|e| MosaicError::FontLoad {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Parse font bytes and prepare them at `size` pixels per em
    ///
    /// # Errors
    ///
    /// Returns `InvalidFont` if the data cannot be parsed
    pub fn from_bytes(data: Vec<u8>, size: u32) -> std::result::Result<Self, InvalidFont> {
        let font = FontVec::try_from_vec(data)?;
        let scale = em_scale(&font, size);
        let ascent = font.as_scaled(scale).ascent();

        Ok(Self {
            font,
            scale,
            ascent,
        })
    }

    fn positioned(&self, glyph: char, origin: [u32; 2]) -> Glyph {
        let [x, y] = origin;
        self.font
            .glyph_id(glyph)
            .with_scale_and_position(self.scale, point(x as f32, y as f32 + self.ascent))
    }
}

// ab_glyph scales by line height; convert pixels-per-em into that unit
fn em_scale(font: &FontVec, size: u32) -> PxScale {
    let px_per_em = size as f32;
    match font.units_per_em() {
        Some(units_per_em) if units_per_em > 0.0 => {
            PxScale::from(px_per_em * font.height_unscaled() / units_per_em)
        }
        _ => PxScale::from(px_per_em),
    }
}

fn blend(under: Rgb<u8>, over: Rgb<u8>, coverage: f32) -> Rgb<u8> {
    let alpha = coverage.clamp(0.0, 1.0);
    let mix = |u: u8, o: u8| {
        let (u, o) = (f32::from(u), f32::from(o));
        (o - u).mul_add(alpha, u).round().clamp(0.0, 255.0) as u8
    };
    let (Rgb([ur, ug, ub]), Rgb([or, og, ob])) = (under, over);
    Rgb([mix(ur, or), mix(ug, og), mix(ub, ob)])
}

impl GlyphPainter for FontGlyphs {
    fn glyph_box(&self, glyph: char) -> Option<GlyphBox> {
        let outlined = self.font.outline_glyph(self.positioned(glyph, [0, 0]))?;
        let bounds = outlined.px_bounds();
        let width = bounds.width().round() as u32;
        let height = bounds.height().round() as u32;

        (width > 0 && height > 0).then_some(GlyphBox { width, height })
    }

    fn draw_glyph(&self, canvas: &mut RgbImage, glyph: char, origin: [u32; 2], color: Rgb<u8>) {
        let Some(outlined) = self.font.outline_glyph(self.positioned(glyph, origin)) else {
            return;
        };
        let bounds = outlined.px_bounds();
        let (left, top) = (bounds.min.x as i64, bounds.min.y as i64);

        outlined.draw(|x, y, coverage| {
            let (Ok(px), Ok(py)) = (
                u32::try_from(left + i64::from(x)),
                u32::try_from(top + i64::from(y)),
            ) else {
                return;
            };
            if let Some(pixel) = canvas.get_pixel_mut_checked(px, py) {
                *pixel = blend(*pixel, color, coverage);
            }
        });
    }
}
