//! Mosaic defaults and the immutable run configuration

use crate::glyphs::GlyphSequencer;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::sampling::SampleMode;
use image::Rgb;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Glyph whose bounding box defines the cell size (U+2588 FULL BLOCK)
pub const REFERENCE_GLYPH: char = '█';

// Default values for configurable parameters
/// Output image path
pub const DEFAULT_OUTPUT_PATH: &str = "output.png";
/// Glyphs drawn across the mosaic
pub const DEFAULT_SEED_STRING: &str = "ARCH BTW ";
/// Monospaced TrueType font
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/TTF/DejaVuSansMono.ttf";
/// Font size in pixels per em
pub const DEFAULT_FONT_SIZE: u32 = 14;
/// Extra spacing between columns
pub const DEFAULT_PADDING_X: i32 = 0;
/// Extra spacing between rows
pub const DEFAULT_PADDING_Y: i32 = 0;
/// Glyph color in monocolor mode, as accepted by [`parse_rgb`]
pub const DEFAULT_FONT_COLOR_ARG: &str = "255,255,255";
/// Glyph color in monocolor mode
pub const DEFAULT_FONT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
/// Canvas fill behind the glyphs, as accepted by [`parse_rgb`]
pub const DEFAULT_BACKGROUND_COLOR_ARG: &str = "0,0,0";
/// Canvas fill behind the glyphs
pub const DEFAULT_BACKGROUND_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;

/// Everything a mosaic run needs, fixed before the pipeline starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicConfig {
    /// Image to convert
    pub source_path: PathBuf,
    /// Where the mosaic is written; the format follows the extension
    pub output_path: PathBuf,
    /// Extra horizontal spacing between cells (may be negative)
    pub padding_x: i32,
    /// Extra vertical spacing between cells (may be negative)
    pub padding_y: i32,
    /// Glyphs drawn across the mosaic
    pub seed_string: String,
    /// Draw glyphs in random order instead of cycling
    pub randomize_seed: bool,
    /// Seed for random glyph order; drawn from the OS when absent
    pub rng_seed: Option<u64>,
    /// TrueType/OpenType font file
    pub font_path: PathBuf,
    /// Font size in pixels per em
    pub font_size: u32,
    /// Sample brightness and tint `font_color` instead of copying cell colors
    pub font_monocolor: bool,
    /// Glyph color in monocolor mode
    pub font_color: Rgb<u8>,
    /// Canvas fill behind the glyphs
    pub background_color: Rgb<u8>,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::new(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            padding_x: DEFAULT_PADDING_X,
            padding_y: DEFAULT_PADDING_Y,
            seed_string: DEFAULT_SEED_STRING.to_string(),
            randomize_seed: false,
            rng_seed: None,
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            font_size: DEFAULT_FONT_SIZE,
            font_monocolor: false,
            font_color: DEFAULT_FONT_COLOR,
            background_color: DEFAULT_BACKGROUND_COLOR,
        }
    }
}

impl MosaicConfig {
    /// Check the values that can be rejected without touching any file
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the seed string is empty or the font size is zero
    pub fn validate(&self) -> Result<()> {
        if self.seed_string.is_empty() {
            return Err(invalid_parameter(
                "seed_string",
                &self.seed_string,
                &"seed string must contain at least one glyph",
            ));
        }
        if self.font_size == 0 {
            return Err(invalid_parameter(
                "font_size",
                &self.font_size,
                &"font size must be positive",
            ));
        }
        Ok(())
    }

    /// Sampling mode implied by `font_monocolor`
    pub const fn sample_mode(&self) -> SampleMode {
        if self.font_monocolor {
            SampleMode::Brightness
        } else {
            SampleMode::Color
        }
    }

    /// Build the glyph sequencer for this configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the seed string is empty
    pub fn glyph_sequencer(&self) -> Result<GlyphSequencer> {
        if self.randomize_seed {
            let rng = self
                .rng_seed
                .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
            GlyphSequencer::random(&self.seed_string, rng)
        } else {
            GlyphSequencer::cyclic(&self.seed_string)
        }
    }
}

/// Parse an `R,G,B` color tuple, each channel 0-255
///
/// Surrounding parentheses and whitespace are accepted, so `(255, 128, 0)`
/// parses the same as `255,128,0`.
///
/// # Errors
///
/// Returns `InvalidParameter` unless the value has exactly three channels in range
pub fn parse_rgb(value: &str) -> Result<Rgb<u8>> {
    let malformed = |reason: &str| -> MosaicError { invalid_parameter("color", &value, &reason) };

    let trimmed = value.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed);

    let channels = inner
        .split(',')
        .map(|part| part.trim().parse::<u8>())
        .collect::<std::result::Result<Vec<u8>, _>>()
        .map_err(|e| malformed(&format!("channel is not an integer in 0-255 ({e})")))?;

    match channels.as_slice() {
        &[r, g, b] => Ok(Rgb([r, g, b])),
        _ => Err(malformed("expected three comma-separated channels")),
    }
}
