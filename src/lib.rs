//! Character mosaic rendering for bitmap images
//!
//! The source image is divided into glyph-sized cells. Each cell is reduced to
//! its mean color (or mean brightness), then redrawn as a character from a seed
//! string, tinted to match the region it replaces.

#![forbid(unsafe_code)]

/// Glyph sequencing over the seed string
pub mod glyphs;
/// Input/output operations and error handling
pub mod io;
/// Exact rounding for averages and tints
pub mod math;
/// Canvas composition and the pipeline runner
pub mod render;
/// Per-cell sampling of the source image
pub mod sampling;
/// Grid planning from cell geometry
pub mod spatial;

pub use io::error::{MosaicError, Result};
