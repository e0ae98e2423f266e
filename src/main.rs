//! CLI entry point for the character mosaic renderer

use clap::Parser;
use glyphmosaic::io::cli::{Cli, MosaicProcessor};

fn main() -> glyphmosaic::Result<()> {
    let cli = Cli::parse();
    let mut processor = MosaicProcessor::new(&cli);
    processor.process()
}
