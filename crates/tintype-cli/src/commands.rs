//! CLI command implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tintype_core::{Filter, Overlays, Raster, RasterStats};
use tintype_io::{SaveFormat, fit_overlays, load, load_overlays, save};
use tracing::{debug, info, warn};

/// Input/output paths shared by every filter command.
#[derive(Args, Debug)]
pub struct IoArgs {
    /// Input image
    pub input: PathBuf,

    /// Output image
    pub output: PathBuf,

    /// Output format (png, jpeg, bmp, tiff, tga, pnm). Defaults to the
    /// output extension.
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Where the composite filter finds its overlays.
#[derive(Debug)]
pub struct OverlayOptions {
    pub dir: PathBuf,
    /// Resample overlays to the input size instead of failing on a mismatch.
    pub fit: bool,
}

/// Load image from path
pub fn load_image(path: &Path) -> Result<Raster> {
    load(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(raster: &Raster, format: SaveFormat, path: &Path) -> Result<()> {
    save(raster, format, path).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Load one image, apply `filter`, save the result.
pub fn run_filter(filter: Filter, io: &IoArgs, overlays: Option<&OverlayOptions>) -> Result<()> {
    // Resolve the output format before doing any work.
    let format = match &io.format {
        Some(tag) => tag.parse::<SaveFormat>()?,
        None => SaveFormat::from_path(&io.output)?,
    };

    let input = load_image(&io.input)?;
    let overlays = match overlays {
        Some(opts) if filter.needs_overlays() => Some(prepare_overlays(opts, &input)?),
        _ => None,
    };

    debug!(params = %serde_json::to_string(&filter)?, "Applying filter");
    let output = filter
        .apply(&input, overlays.as_ref())
        .with_context(|| format!("{} failed on {}", filter.name(), io.input.display()))?;

    save_image(&output, format, &io.output)?;
    info!(
        filter = filter.name(),
        width = output.width(),
        height = output.height(),
        output = %io.output.display(),
        "Done"
    );
    Ok(())
}

fn prepare_overlays(opts: &OverlayOptions, target: &Raster) -> Result<Overlays> {
    let overlays = load_overlays(&opts.dir)
        .with_context(|| format!("Failed to load overlays from {}", opts.dir.display()))?;

    let (width, height) = target.dimensions();
    if opts.fit && overlays.check_dimensions(width, height).is_err() {
        warn!(width, height, "Resizing overlays to match input");
        return Ok(fit_overlays(&overlays, width, height)?);
    }
    Ok(overlays)
}

/// Print image statistics as JSON.
pub fn run_info(input: &Path) -> Result<()> {
    let raster = load_image(input)?;
    let stats = RasterStats::compute(&raster);
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
