//! Input/output: configuration intake, file formats, fonts and progress

/// Command-line parsing and the end-to-end run
pub mod cli;
/// Defaults and the immutable run configuration
pub mod configuration;
/// Error taxonomy
pub mod error;
/// TrueType glyph painter
pub mod font;
/// Source image loading and mosaic export
pub mod image;
/// Terminal progress reporting
pub mod progress;
