//! Command-line interface and the end-to-end mosaic run

use crate::io::configuration::{
    DEFAULT_BACKGROUND_COLOR_ARG, DEFAULT_FONT_COLOR_ARG, DEFAULT_FONT_PATH, DEFAULT_FONT_SIZE,
    DEFAULT_OUTPUT_PATH, DEFAULT_PADDING_X, DEFAULT_PADDING_Y, DEFAULT_SEED_STRING, MosaicConfig,
    parse_rgb,
};
use crate::io::error::Result;
use crate::io::font::FontGlyphs;
use crate::io::image::{load_source_canvas, save_canvas};
use crate::io::progress::ProgressManager;
use crate::render::pipeline::{MosaicPipeline, PipelineObserver, SilentObserver, Stage};
use clap::Parser;
use image::Rgb;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "glyphmosaic")]
#[command(
    author,
    version,
    about = "Redraw an image as a grid of tinted characters"
)]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Source image to convert
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Output image path; the format follows the extension
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Extra pixels between columns (negative overlaps cells)
    #[arg(long, default_value_t = DEFAULT_PADDING_X, allow_negative_numbers = true)]
    pub padding_x: i32,

    /// Extra pixels between rows (negative overlaps cells)
    #[arg(long, default_value_t = DEFAULT_PADDING_Y, allow_negative_numbers = true)]
    pub padding_y: i32,

    /// Characters drawn across the mosaic
    #[arg(short = 's', long, default_value = DEFAULT_SEED_STRING)]
    pub seed_string: String,

    /// Pick characters at random instead of cycling through the seed string
    #[arg(short, long)]
    pub randomize: bool,

    /// Random seed for reproducible character order with --randomize
    #[arg(long)]
    pub rng_seed: Option<u64>,

    /// TrueType or OpenType font file, ideally monospaced
    #[arg(short, long, default_value = DEFAULT_FONT_PATH)]
    pub font: PathBuf,

    /// Font size in pixels per em
    #[arg(long, default_value_t = DEFAULT_FONT_SIZE)]
    pub font_size: u32,

    /// Use a single font color scaled by brightness instead of source colors
    #[arg(short, long)]
    pub monocolor: bool,

    /// Font color for --monocolor, as R,G,B
    #[arg(long, value_parser = parse_rgb, default_value = DEFAULT_FONT_COLOR_ARG)]
    pub font_color: Rgb<u8>,

    /// Background color, as R,G,B
    #[arg(short, long, value_parser = parse_rgb, default_value = DEFAULT_BACKGROUND_COLOR_ARG)]
    pub background: Rgb<u8>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the run configuration from the parsed arguments
    pub fn to_config(&self) -> MosaicConfig {
        MosaicConfig {
            source_path: self.source.clone(),
            output_path: self.output.clone(),
            padding_x: self.padding_x,
            padding_y: self.padding_y,
            seed_string: self.seed_string.clone(),
            randomize_seed: self.randomize,
            rng_seed: self.rng_seed,
            font_path: self.font.clone(),
            font_size: self.font_size,
            font_monocolor: self.monocolor,
            font_color: self.font_color,
            background_color: self.background,
        }
    }
}

/// Runs one mosaic conversion from configuration to saved output
///
/// Stages run strictly in order: validate, load, plan, sample, render, save.
/// Nothing is written unless every earlier stage succeeded.
pub struct MosaicProcessor {
    config: MosaicConfig,
    progress_manager: Option<ProgressManager>,
}

impl MosaicProcessor {
    /// Create a processor from CLI arguments
    pub fn new(cli: &Cli) -> Self {
        Self::with_config(cli.to_config(), cli.should_show_progress())
    }

    /// Create a processor from an existing configuration
    pub fn with_config(config: MosaicConfig, show_progress: bool) -> Self {
        Self {
            config,
            progress_manager: show_progress.then(ProgressManager::new),
        }
    }

    /// Configuration this processor runs with
    pub const fn config(&self) -> &MosaicConfig {
        &self.config
    }

    /// Convert the source image and write the mosaic
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the font or source
    /// image cannot be loaded, the geometry is invalid, or the output cannot
    /// be written
    pub fn process(&mut self) -> Result<()> {
        self.config.validate()?;

        let mut silent = SilentObserver;
        let observer: &mut dyn PipelineObserver = match self.progress_manager.as_mut() {
            Some(pm) => pm,
            None => &mut silent,
        };

        observer.stage_started(Stage::Load, 1);
        let painter = FontGlyphs::load(&self.config.font_path, self.config.font_size)?;
        let mut pipeline = MosaicPipeline::new(&self.config, &painter)?;
        let source = load_source_canvas(&self.config.source_path)?;
        observer.stage_finished(Stage::Load);

        let canvas = pipeline.run(&source, observer)?;
        drop(source);

        observer.stage_started(Stage::Save, 1);
        save_canvas(&canvas, &self.config.output_path)?;
        observer.stage_finished(Stage::Save);

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }
}
