//! Linear mosaic pipeline: plan the grid, sample the source, render glyphs
//!
//! Loading and saving sit outside the pipeline (see [`crate::io::cli`]); the
//! pipeline itself only turns a decoded canvas into a rendered one.

use crate::glyphs::GlyphSequencer;
use crate::io::configuration::MosaicConfig;
use crate::io::error::Result;
use crate::render::compositor::Compositor;
use crate::render::painter::GlyphPainter;
use crate::sampling::{RegionSampler, SampleMode};
use crate::spatial::{CellGeometry, Grid};
use image::{Rgb, RgbImage};

/// Steps of a mosaic run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Decode the source image and load the font
    Load,
    /// Compute column and row origins
    PlanGrid,
    /// Reduce each cell of the source to a sample
    Sample,
    /// Draw the glyphs onto the output canvas
    Render,
    /// Write the output canvas to disk
    Save,
}

impl Stage {
    /// Human readable description used in progress output
    pub const fn label(self) -> &'static str {
        match self {
            Self::Load => "Loading source",
            Self::PlanGrid => "Generating grid",
            Self::Sample => "Sampling source image",
            Self::Render => "Rendering output image",
            Self::Save => "Saving output",
        }
    }
}

/// Receives progress notifications while the pipeline runs
///
/// Row-based stages report `total` as the number of grid rows and call
/// [`row_completed`](Self::row_completed) once per row. Every method defaults
/// to doing nothing.
pub trait PipelineObserver {
    /// A stage begins with `total` units of work
    fn stage_started(&mut self, _stage: Stage, _total: usize) {}

    /// One grid row of a stage is done
    fn row_completed(&mut self, _stage: Stage, _row: usize) {}

    /// A stage ran to completion
    fn stage_finished(&mut self, _stage: Stage) {}
}

/// Observer that ignores all notifications
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl PipelineObserver for SilentObserver {}

/// Configured mosaic pipeline bound to a glyph painter
pub struct MosaicPipeline<'a, P: GlyphPainter> {
    painter: &'a P,
    geometry: CellGeometry,
    mode: SampleMode,
    font_color: Rgb<u8>,
    background: Rgb<u8>,
    glyphs: GlyphSequencer,
}

impl<'a, P: GlyphPainter> MosaicPipeline<'a, P> {
    /// Validate the configuration and derive the cell geometry from the painter
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an invalid configuration (checked before
    /// anything else) or a font without the reference glyph, and
    /// `InvalidGeometry` if the cell and padding give a non-positive stride
    pub fn new(config: &MosaicConfig, painter: &'a P) -> Result<Self> {
        config.validate()?;
        let glyphs = config.glyph_sequencer()?;
        let geometry = CellGeometry::from_painter(painter, config.padding_x, config.padding_y)?;
        // Fail on a non-positive stride before any canvas is touched
        geometry.stride_x()?;
        geometry.stride_y()?;

        Ok(Self {
            painter,
            geometry,
            mode: config.sample_mode(),
            font_color: config.font_color,
            background: config.background_color,
            glyphs,
        })
    }

    /// Cell geometry derived from the painter and configured padding
    pub const fn geometry(&self) -> CellGeometry {
        self.geometry
    }

    /// Sampling mode selected by the configuration
    pub const fn mode(&self) -> SampleMode {
        self.mode
    }

    /// Plan, sample and render `source` into a new canvas of the same size
    ///
    /// # Errors
    ///
    /// Returns `InvalidGeometry` if the grid cannot be planned, or a
    /// computation error if rendering finds inconsistent samples
    pub fn run(
        &mut self,
        source: &RgbImage,
        observer: &mut dyn PipelineObserver,
    ) -> Result<RgbImage> {
        observer.stage_started(Stage::PlanGrid, 1);
        let grid = Grid::plan(source.width(), source.height(), self.geometry)?;
        observer.stage_finished(Stage::PlanGrid);

        let samples = RegionSampler::new(&grid).sample(source, self.mode, observer);

        Compositor::new(self.painter, self.background, self.font_color).render(
            &grid,
            &samples,
            &mut self.glyphs,
            observer,
        )
    }
}
