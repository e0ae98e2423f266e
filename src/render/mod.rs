//! Mosaic rendering: painter seam, compositor and pipeline runner

/// Canvas composition with tinted glyphs
pub mod compositor;
/// Glyph metrics and drawing capability
pub mod painter;
/// Stage runner and progress observation
pub mod pipeline;

pub use compositor::Compositor;
pub use painter::{GlyphBox, GlyphPainter};
pub use pipeline::{MosaicPipeline, PipelineObserver, SilentObserver, Stage};
