// Background classification over RGBA buffers

use std::fmt;

use image::RgbaImage;
use na::DMatrix;
use serde::{Deserialize, Serialize};

use crate::error::{RemovalError, Result};

pub mod serial_mask;

/// Brightness floor above which a color channel counts as "light".
///
/// Nominally in `[0, 255]`, but never validated: a negative threshold
/// classifies every pixel as background and anything `>= 255` classifies none.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct Threshold(pub i32);

impl Threshold {
    pub const DEFAULT: Threshold = Threshold(240);

    /// Whether a single channel value is strictly above the threshold
    #[inline]
    pub fn is_light(self, channel: u8) -> bool {
        i32::from(channel) > self.0
    }

    /// Whether all three color channels of a pixel are light. Alpha is ignored.
    #[inline]
    pub fn is_background(self, rgba: &[u8; 4]) -> bool {
        self.is_light(rgba[0]) && self.is_light(rgba[1]) && self.is_light(rgba[2])
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Build the background mask of an image.
///
/// Parameters
/// - `image` - The RGBA image to classify
/// - `threshold` - The brightness floor for every color channel
///
/// Returns
/// - A mask with one row per image row, `true` where the pixel is background
pub fn background_mask(image: &RgbaImage, threshold: Threshold) -> DMatrix<bool> {
    let (nrows, ncols) = (image.height(), image.width());

    let mut mask: DMatrix<bool> = DMatrix::from_element(nrows as usize, ncols as usize, false);

    image.enumerate_pixels().for_each(|(x, y, color)| {
        *(mask.index_mut((y as usize, x as usize))) = threshold.is_background(&color.0)
    });

    mask
}

/// Zero the alpha of every pixel the mask marks as background. All other
/// pixels, and the color channels of masked pixels, are left as they were.
///
/// Returns the number of masked pixels.
pub fn apply_mask(image: &mut RgbaImage, mask: &DMatrix<bool>) -> Result<usize> {
    let (image_rows, image_cols) = (image.height() as usize, image.width() as usize);
    let (mask_rows, mask_cols) = mask.shape();

    if (mask_rows, mask_cols) != (image_rows, image_cols) {
        return Err(RemovalError::MaskShape {
            mask_rows,
            mask_cols,
            image_rows,
            image_cols,
        });
    }

    let mut cleared = 0;
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        if mask[(y as usize, x as usize)] {
            pixel.0[3] = 0;
            cleared += 1;
        }
    }

    Ok(cleared)
}
