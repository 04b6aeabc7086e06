//! tintype - image filter CLI
//!
//! Loads one image, applies one filter, writes the result.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tintype_core::Filter;

mod commands;
mod config;

use commands::{IoArgs, OverlayOptions};
use config::CliConfig;

#[derive(Parser)]
#[command(name = "tintype")]
#[command(author, version, about = "Apply photo filters to an image")]
#[command(long_about = "
Applies a single filter to an image and writes the result.

Examples:
  tintype grayscale in.png out.png
  tintype bw in.jpg out.png
  tintype rotate in.png out.png --turns 3
  tintype hue 200 in.png out.png
  tintype saturation 0.2 in.png out.jpg -f jpeg
  tintype instagram in.png out.png --resources ./resources --fit
  tintype info in.png
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Average the channels of every pixel
    #[command(visible_alias = "gray")]
    Grayscale(IoArgs),

    /// Invert every channel
    Invert(IoArgs),

    /// Apply a sepia tone
    Sepia(IoArgs),

    /// Pure black/white split at the median luminance
    #[command(name = "bw", visible_alias = "black-white")]
    BlackWhite(IoArgs),

    /// Rotate clockwise by quarter turns
    Rotate(RotateArgs),

    /// Set the hue of every pixel (degrees, 0 to <360)
    Hue(HueArgs),

    /// Set the saturation of every pixel (0 to 1)
    Saturation(UnitArgs),

    /// Set the lightness of every pixel (0 to 1)
    Lightness(UnitArgs),

    /// Warm tint only (more red, less blue)
    Warm(IoArgs),

    /// Warm tint, halo vignette and decorative grain
    #[command(visible_alias = "insta")]
    Instagram(InstagramArgs),

    /// Print image statistics as JSON
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

#[derive(Args)]
struct RotateArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Number of clockwise quarter turns
    #[arg(short, long, default_value = "1")]
    turns: u32,
}

#[derive(Args)]
struct HueArgs {
    /// Hue in degrees
    #[arg(allow_negative_numbers = true)]
    degrees: f64,

    #[command(flatten)]
    io: IoArgs,
}

#[derive(Args)]
struct UnitArgs {
    /// Value between 0 and 1
    #[arg(allow_negative_numbers = true)]
    value: f64,

    #[command(flatten)]
    io: IoArgs,
}

#[derive(Args)]
struct InstagramArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Directory containing halo.png and decorative_grain.png
    /// [env: TINTYPE_RESOURCES, default: resources]
    #[arg(short, long)]
    resources: Option<PathBuf>,

    /// Resize overlays to the input size instead of failing on a mismatch
    #[arg(long)]
    fit: bool,
}

#[derive(Args)]
struct InfoArgs {
    /// Input image
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let resources = match &cli.command {
        Commands::Instagram(args) => args.resources.clone(),
        _ => None,
    };
    let config = CliConfig::resolve(resources, cli.verbose);
    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter())
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Grayscale(io) => commands::run_filter(Filter::Grayscale, &io, None),
        Commands::Invert(io) => commands::run_filter(Filter::Invert, &io, None),
        Commands::Sepia(io) => commands::run_filter(Filter::Sepia, &io, None),
        Commands::BlackWhite(io) => commands::run_filter(Filter::BlackWhite, &io, None),
        Commands::Rotate(args) => commands::run_filter(
            Filter::Rotate {
                quarter_turns: args.turns,
            },
            &args.io,
            None,
        ),
        Commands::Hue(args) => commands::run_filter(
            Filter::Hue {
                degrees: args.degrees,
            },
            &args.io,
            None,
        ),
        Commands::Saturation(args) => {
            commands::run_filter(Filter::Saturation { value: args.value }, &args.io, None)
        }
        Commands::Lightness(args) => {
            commands::run_filter(Filter::Lightness { value: args.value }, &args.io, None)
        }
        Commands::Warm(io) => commands::run_filter(Filter::Warm, &io, None),
        Commands::Instagram(args) => {
            let overlays = OverlayOptions {
                dir: config.resource_dir,
                fit: args.fit,
            };
            commands::run_filter(Filter::Instagram, &args.io, Some(&overlays))
        }
        Commands::Info(args) => commands::run_info(&args.input),
    }
}
