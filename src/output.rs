// Persists removal results and reports on them

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use na::DMatrix;
use tracing::{debug, info};

use crate::{
    error::{RemovalError, Result},
    mask::{Threshold, serial_mask::SerialMask},
};

/// What a finished removal run produced
#[derive(Clone, Debug, PartialEq)]
pub struct RemovalReport {
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub threshold: Threshold,
    pub cleared_pixels: usize,
}

impl RemovalReport {
    pub fn log(&self) {
        info!(
            "Successfully created transparent PNG: {}",
            self.output_path.display()
        );
        info!("Original size: {}x{}", self.width, self.height);
        info!("Removed pixels with brightness > {}", self.threshold);
        debug!(
            "{} of {} pixels are now transparent",
            self.cleared_pixels,
            self.width as u64 * self.height as u64
        );
    }
}

/// Encode an RGBA image as PNG, whatever the extension of `path` says.
/// Overwrites an existing file.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|err| RemovalError::Encode(path.to_path_buf(), err))
}

pub fn export_mask(mask: &DMatrix<bool>, path: &Path) -> Result<()> {
    let serial_mask = SerialMask::from_mask(mask);
    serial_mask
        .save(path)
        .map_err(|err| RemovalError::MaskExport(path.to_path_buf(), err))?;

    debug!(
        "Exported mask with {} background pixels to {}",
        serial_mask.background_count(),
        path.display()
    );

    Ok(())
}
