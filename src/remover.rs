//! Runs a full background removal: load, classify, clear, persist

use std::path::Path;

use image::RgbaImage;
use na::DMatrix;
use tracing::{debug, info};

use crate::{
    error::Result,
    input::{RemovalSettings, image_input::load_rgba},
    mask::{self, Threshold},
    output::{self, RemovalReport},
};

/// Make the light background of an in-memory image transparent.
///
/// Parameters
/// - `image` - The RGBA source image; it is not modified
/// - `threshold` - Pixels with R, G and B all strictly above this are background
///
/// Returns
/// - The processed copy of the image and the mask that produced it
pub fn remove_background_image(
    image: &RgbaImage,
    threshold: Threshold,
) -> Result<(RgbaImage, DMatrix<bool>)> {
    let mask = mask::background_mask(image, threshold);

    let mut output = image.clone();
    let cleared = mask::apply_mask(&mut output, &mask)?;
    debug!("Cleared {} background pixels", cleared);

    Ok((output, mask))
}

/// Load `input_path`, make its light background transparent, and write the
/// result to `output_path` as PNG.
pub fn remove_background(
    input_path: &Path,
    output_path: &Path,
    threshold: Threshold,
) -> Result<RemovalReport> {
    run(&RemovalSettings {
        input_path: input_path.to_path_buf(),
        output_path: output_path.to_path_buf(),
        threshold,
        mask_path: None,
    })
}

/// Carry out one removal described by `settings`, exporting the mask too if
/// a mask path is set.
pub fn run(settings: &RemovalSettings) -> Result<RemovalReport> {
    info!(
        "Removing white background from {}...",
        settings.input_path.display()
    );

    let image = load_rgba(&settings.input_path)?;
    let (width, height) = image.dimensions();
    debug!("Decoded {}x{} image", width, height);

    let (transparent, mask) = remove_background_image(&image, settings.threshold)?;
    let cleared_pixels = mask.iter().filter(|m| **m).count();

    output::write_png(&transparent, &settings.output_path)?;

    if let Some(mask_path) = &settings.mask_path {
        output::export_mask(&mask, mask_path)?;
    }

    Ok(RemovalReport {
        output_path: settings.output_path.clone(),
        width,
        height,
        threshold: settings.threshold,
        cleared_pixels,
    })
}
