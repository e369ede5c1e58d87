//! meshgeo CLI - mesh to Bedrock block-geometry converter
//!
//! Converts a 3D model file (OBJ, STL, PLY) into a `<stem>.geo.json`
//! geometry document approximating the mesh as a union of axis-aligned
//! cubes, one per face.

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use meshgeo_backend::{ConvertOptions, ModelConverter, DEFAULT_TEXTURE_HEIGHT, DEFAULT_TEXTURE_WIDTH};
use std::path::{Path, PathBuf};

/// Convert a 3D model (OBJ, STL, PLY) into a Bedrock geometry document
#[derive(Debug, Parser)]
#[command(
    name = "meshgeo",
    version,
    about = "Convert 3D models (OBJ, STL, PLY) to Bedrock block geometry"
)]
struct Args {
    /// Path to the model file
    model: String,

    /// Texture sheet width written into the geometry
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_TEXTURE_WIDTH)]
    texture_width: u32,

    /// Texture sheet height written into the geometry
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_TEXTURE_HEIGHT)]
    texture_height: u32,

    /// Output path (default: <stem>.geo.json in the current directory)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Suppress the confirmation line
    #[arg(short, long)]
    quiet: bool,

    /// Print conversion statistics
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,
}

/// Default output path: `<stem>.geo.json` in the current working directory,
/// regardless of where the input lives.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    PathBuf::from(format!("{}.geo.json", stem.to_string_lossy()))
}

fn run(args: &Args) -> meshgeo_core::Result<()> {
    // Windows-style separators are accepted on any platform.
    let model_path = PathBuf::from(args.model.replace('\\', "/"));

    let options = ConvertOptions::default()
        .with_texture_size(args.texture_width, args.texture_height);
    let converter = ModelConverter::with_options(options);

    let result = converter.convert(&model_path)?;

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&model_path));
    result.save_json(&output_path)?;

    if args.verbose {
        println!(
            "{} {} cube(s) in {} ms",
            "Converted:".green().bold(),
            result.document.cube_count(),
            result.latency.as_millis()
        );
    }
    if !args.quiet {
        println!("Bedrock model saved to {}", output_path.display());
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // clap's message already names the binary and shows usage.
            let _ = err.print();
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    if let Err(err) = run(&args) {
        eprintln!("{} {err}", "Error:".red().bold());
        std::process::exit(1);
    }
}
