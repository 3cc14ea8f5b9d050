//! Handles decoding of the source image

use image::{ImageReader, RgbaImage};
use std::path::Path;

use crate::error::{RemovalError, Result};

/// Load an image from disk as RGBA8. Sources without an alpha channel come
/// back fully opaque.
///
/// Parameters
/// - `image` - The path to the image to load. The format is sniffed from the
///   file contents, falling back to the extension.
///
/// Returns
/// - The RGBA image as a Result
pub fn load_rgba(image: &Path) -> Result<RgbaImage> {
    let reader = ImageReader::open(image)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| RemovalError::Open(image.to_path_buf(), err))?;

    let decoded = reader
        .decode()
        .map_err(|err| RemovalError::Decode(image.to_path_buf(), err))?;

    Ok(decoded.to_rgba8())
}

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma, Rgb, RgbImage, Rgba};

    use super::*;

    #[test]
    fn test_rgb_source_becomes_opaque() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("source.png");
        RgbImage::from_pixel(3, 2, Rgb([12, 34, 56])).save(&path).unwrap();

        let image = load_rgba(&path).unwrap();

        assert_eq!(image.dimensions(), (3, 2));
        assert!(image.pixels().all(|p| *p == Rgba([12, 34, 56, 255])));
    }

    #[test]
    fn test_greyscale_source_is_expanded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grey.png");
        GrayImage::from_pixel(1, 1, Luma([200])).save(&path).unwrap();

        let image = load_rgba(&path).unwrap();

        assert_eq!(*image.get_pixel(0, 0), Rgba([200, 200, 200, 255]));
    }

    #[test]
    fn test_format_is_sniffed_from_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actually_png.jpg");
        RgbImage::from_pixel(1, 1, Rgb([1, 2, 3]))
            .save_with_format(&path, image::ImageFormat::Png)
            .unwrap();

        let image = load_rgba(&path).unwrap();

        assert_eq!(*image.get_pixel(0, 0), Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_rgba(&dir.path().join("nope.jpg")).unwrap_err();
        assert!(matches!(err, RemovalError::Open(..)));
    }

    #[test]
    fn test_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();

        let err = load_rgba(&path).unwrap_err();
        assert!(matches!(err, RemovalError::Decode(..)));
    }
}
