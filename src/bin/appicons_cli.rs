//! AppIcons CLI - iOS AppIcon set generator
//!
//! Resolves the 1024px master (built-in design, `--input` image, or the
//! existing master) and regenerates every icon plus both manifests.
//! Prints a summary line, or the run report as JSON with `--json`.
//! Returns non-zero on any failure.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use appicons_core::{
    logging, IconsetPipeline, Layout, PipelineOptions, SourceMode, DEFAULT_APPICONSET_DIR,
};

#[derive(Parser)]
#[command(name = "appicons-cli")]
#[command(about = "Generate iOS AppIcon assets from a 1024x1024 source image")]
struct Cli {
    /// Path to a source image. If omitted, the existing master is reused or a
    /// default icon is generated.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Force regeneration from the built-in default icon design
    #[arg(long)]
    use_default: bool,

    /// Project root
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Icon-set directory; a relative path is resolved against the project
    /// root, an absolute path is used as is
    #[arg(long, default_value = DEFAULT_APPICONSET_DIR)]
    appiconset: PathBuf,

    /// Reject an input image that trips any validation rule
    #[arg(long)]
    strict: bool,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging (RUST_LOG, when set, takes precedence)
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let layout = Layout::with_appiconset(&cli.root, &cli.appiconset);
    let options =
        PipelineOptions::new(SourceMode::from_flags(cli.use_default, cli.input)).strict(cli.strict);
    let pipeline = IconsetPipeline::new(layout, options);

    match pipeline.run() {
        Ok(report) if cli.json => match serde_json::to_string_pretty(&report) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
        Ok(report) => {
            println!("Generated iOS app icons in: {}", report.export.output_dir.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_flags_defaults() {
        let cli = Cli::try_parse_from(["appicons-cli"]).unwrap();
        assert_eq!(cli.input, None);
        assert!(!cli.use_default);
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.appiconset, PathBuf::from(DEFAULT_APPICONSET_DIR));
        assert_eq!(
            SourceMode::from_flags(cli.use_default, cli.input),
            SourceMode::ReuseOrDefault
        );
    }

    #[test]
    fn test_input_and_use_default_flags() {
        let cli = Cli::try_parse_from(["appicons-cli", "--input", "icon.png", "--use-default"])
            .unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("icon.png")));
        assert!(cli.use_default);
        assert_eq!(
            SourceMode::from_flags(cli.use_default, cli.input),
            SourceMode::ForceDefault
        );
    }

    #[test]
    fn test_positional_argument_rejected() {
        assert!(Cli::try_parse_from(["appicons-cli", "icon.png"]).is_err());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["appicons-cli", "--force"]).is_err());
    }
}
