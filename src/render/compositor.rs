//! Output canvas composition: one tinted glyph per grid cell

use crate::glyphs::GlyphSequencer;
use crate::io::error::{Result, computation_error};
use crate::math::rounding::scale_channel;
use crate::render::painter::GlyphPainter;
use crate::render::pipeline::{PipelineObserver, Stage};
use crate::sampling::SampleTable;
use crate::spatial::Grid;
use image::{Rgb, RgbImage};

/// Scale `font_color` by `brightness / 255`
///
/// Full brightness returns the font color unchanged, zero brightness is black.
pub fn tint(font_color: Rgb<u8>, brightness: u8) -> Rgb<u8> {
    let Rgb([r, g, b]) = font_color;
    Rgb([
        scale_channel(r, brightness),
        scale_channel(g, brightness),
        scale_channel(b, brightness),
    ])
}

/// Draws the mosaic onto a fresh canvas
pub struct Compositor<'a, P: GlyphPainter> {
    painter: &'a P,
    background: Rgb<u8>,
    font_color: Rgb<u8>,
}

impl<'a, P: GlyphPainter> Compositor<'a, P> {
    /// Create a compositor
    ///
    /// `font_color` is only used for brightness tables; color tables are drawn
    /// with their sampled colors.
    pub const fn new(painter: &'a P, background: Rgb<u8>, font_color: Rgb<u8>) -> Self {
        Self {
            painter,
            background,
            font_color,
        }
    }

    /// Color a cell is drawn in, `None` if the cell is outside the table
    pub fn draw_color(&self, samples: &SampleTable, row: usize, col: usize) -> Option<Rgb<u8>> {
        match samples {
            SampleTable::Brightness(_) => samples
                .brightness(row, col)
                .map(|brightness| tint(self.font_color, brightness)),
            SampleTable::Color { .. } => samples.color(row, col),
        }
    }

    /// Render every cell in row-major order
    ///
    /// The canvas has the grid's canvas dimensions and starts filled with the
    /// background color. The glyph sequencer is rewound before the first cell.
    ///
    /// # Errors
    ///
    /// Returns a computation error if the sample table shape differs from the grid
    pub fn render(
        &self,
        grid: &Grid,
        samples: &SampleTable,
        glyphs: &mut GlyphSequencer,
        observer: &mut dyn PipelineObserver,
    ) -> Result<RgbImage> {
        if samples.dimensions() != grid.dimensions() {
            return Err(computation_error(
                "render",
                &format!(
                    "sample table is {:?} but grid is {:?} (rows, cols)",
                    samples.dimensions(),
                    grid.dimensions()
                ),
            ));
        }

        let mut canvas = RgbImage::from_pixel(grid.canvas_width, grid.canvas_height, self.background);
        glyphs.reset();
        observer.stage_started(Stage::Render, grid.rows());

        let last_col = grid.cols().saturating_sub(1);
        for (row, col, origin) in grid.cells() {
            let color = self.draw_color(samples, row, col).ok_or_else(|| {
                computation_error("render", &format!("no sample for cell ({row}, {col})"))
            })?;
            let glyph = glyphs
                .next()
                .ok_or_else(|| computation_error("render", &"glyph sequence exhausted"))?;
            self.painter.draw_glyph(&mut canvas, glyph, origin, color);
            if col == last_col {
                observer.row_completed(Stage::Render, row);
            }
        }

        observer.stage_finished(Stage::Render);
        Ok(canvas)
    }
}
