//! Glyph sequencing for mosaic cells

/// Cyclic and random glyph sources over the seed string
pub mod sequencer;

pub use sequencer::GlyphSequencer;
