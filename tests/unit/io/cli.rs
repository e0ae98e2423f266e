//! Tests for command-line parsing and the end-to-end processor

#[cfg(test)]
mod tests {
    use clap::Parser;
    use glyphmosaic::MosaicError;
    use glyphmosaic::io::cli::{Cli, MosaicProcessor};
    use glyphmosaic::io::configuration::{
        DEFAULT_FONT_PATH, DEFAULT_FONT_SIZE, DEFAULT_OUTPUT_PATH, DEFAULT_SEED_STRING,
        MosaicConfig, REFERENCE_GLYPH,
    };
    use image::{Rgb, RgbImage};
    use std::path::PathBuf;
    use tempfile::TempDir;

    // Tests CLI parsing with only the required source argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "photo.png"]);

        assert_eq!(cli.source, PathBuf::from("photo.png"));
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(cli.font, PathBuf::from(DEFAULT_FONT_PATH));
        assert_eq!(cli.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(cli.seed_string, DEFAULT_SEED_STRING);
        assert_eq!((cli.padding_x, cli.padding_y), (0, 0));
        assert_eq!(cli.font_color, Rgb([255, 255, 255]));
        assert_eq!(cli.background, Rgb([0, 0, 0]));
        assert!(!cli.randomize && !cli.monocolor && !cli.quiet);
        assert!(cli.should_show_progress());
    }

    // Tests that an argument-free run configures exactly the library defaults
    // Verified by changing the background default string alone
    #[test]
    fn test_cli_defaults_match_config_defaults() {
        let config = Cli::parse_from(["program", "photo.png"]).to_config();

        assert_eq!(
            config,
            MosaicConfig {
                source_path: PathBuf::from("photo.png"),
                ..MosaicConfig::default()
            }
        );
    }

    // Tests CLI parsing with every option set, including negative padding
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "in.jpg",
            "--output",
            "out/mosaic.png",
            "--padding-x",
            "-2",
            "--padding-y",
            "3",
            "--seed-string",
            "01",
            "--randomize",
            "--rng-seed",
            "7",
            "--font",
            "mono.ttf",
            "--font-size",
            "20",
            "--monocolor",
            "--font-color",
            "0,255,0",
            "--background",
            "(10, 10, 10)",
            "--quiet",
        ]);

        let config = cli.to_config();
        assert_eq!(
            config,
            MosaicConfig {
                source_path: PathBuf::from("in.jpg"),
                output_path: PathBuf::from("out/mosaic.png"),
                padding_x: -2,
                padding_y: 3,
                seed_string: "01".to_string(),
                randomize_seed: true,
                rng_seed: Some(7),
                font_path: PathBuf::from("mono.ttf"),
                font_size: 20,
                font_monocolor: true,
                font_color: Rgb([0, 255, 0]),
                background_color: Rgb([10, 10, 10]),
            }
        );
        assert!(!cli.should_show_progress());
    }

    // Tests short flags
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["program", "a.png", "-o", "b.png", "-s", "xy", "-r", "-m", "-q"]);

        assert_eq!(cli.output, PathBuf::from("b.png"));
        assert_eq!(cli.seed_string, "xy");
        assert!(cli.randomize && cli.monocolor && cli.quiet);
    }

    // Tests that malformed colors are rejected at parse time
    #[test]
    fn test_cli_rejects_malformed_color() {
        assert!(Cli::try_parse_from(["program", "a.png", "--font-color", "300,0,0"]).is_err());
        assert!(Cli::try_parse_from(["program", "a.png", "--background", "1,2"]).is_err());
    }

    // Tests that an empty seed aborts before any file is opened or written
    // Verified by validating only after loading the font
    #[test]
    fn test_process_empty_seed_fails_first() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.png");
        let config = MosaicConfig {
            source_path: temp_dir.path().join("missing.png"),
            output_path: output.clone(),
            font_path: temp_dir.path().join("missing.ttf"),
            seed_string: String::new(),
            ..MosaicConfig::default()
        };

        let result = MosaicProcessor::with_config(config, false).process();

        assert!(matches!(
            result,
            Err(MosaicError::InvalidParameter {
                parameter: "seed_string",
                ..
            })
        ));
        assert!(!output.exists());
    }

    // Tests that a missing font is surfaced without writing output
    #[test]
    fn test_process_missing_font() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("in.png");
        RgbImage::from_pixel(8, 8, Rgb([50, 60, 70])).save(&source).unwrap();
        let output = temp_dir.path().join("out.png");

        let cli = Cli::parse_from([
            "program",
            source.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--font",
            temp_dir.path().join("missing.ttf").to_str().unwrap(),
            "--quiet",
        ]);
        let mut processor = MosaicProcessor::new(&cli);
        assert_eq!(processor.config().source_path, source);

        let result = processor.process();
        assert!(matches!(result, Err(MosaicError::FileSystem { .. })));
        assert!(!output.exists());
    }

    // Tests a complete run with a real TrueType font
    // Verified by drawing every glyph at the baseline instead of the ascender
    #[test]
    fn test_process_with_fixture_font() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("in.png");
        RgbImage::from_pixel(64, 64, Rgb([200, 40, 40])).save(&source).unwrap();
        let output = temp_dir.path().join("out.png");

        let config = MosaicConfig {
            source_path: source,
            output_path: output.clone(),
            seed_string: REFERENCE_GLYPH.to_string(),
            font_path: PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("tests/fixtures/DejaVuSansMono.ttf"),
            ..MosaicConfig::default()
        };
        MosaicProcessor::with_config(config, false).process().unwrap();

        let rendered = image::open(&output).unwrap().to_rgb8();
        assert_eq!(rendered.dimensions(), (64, 64));
        // 10x18 cells give 6 columns and 3 rows; the cell at (10, 18) is solid
        assert_eq!(*rendered.get_pixel(14, 26), Rgb([200, 40, 40]));
        // Past the last row and column only the background remains
        assert_eq!(*rendered.get_pixel(63, 63), Rgb([0, 0, 0]));
    }
}
