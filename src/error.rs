use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a background removal run
#[derive(Debug, Error)]
pub enum RemovalError {
    #[error("unable to open input image `{0}`")]
    Open(PathBuf, #[source] std::io::Error),

    #[error("unable to decode input image `{0}`")]
    Decode(PathBuf, #[source] image::ImageError),

    #[error("unable to write PNG to `{0}`")]
    Encode(PathBuf, #[source] image::ImageError),

    #[error("mask is {mask_rows}x{mask_cols} (rows x cols) but image is {image_rows}x{image_cols}")]
    MaskShape {
        mask_rows: usize,
        mask_cols: usize,
        image_rows: usize,
        image_cols: usize,
    },

    #[error("unable to use settings file `{0}`")]
    Settings(PathBuf, #[source] JsonFileError),

    #[error("unable to export mask to `{0}`")]
    MaskExport(PathBuf, #[source] JsonFileError),
}

/// The underlying failure behind a settings or mask JSON file
#[derive(Debug, Error)]
pub enum JsonFileError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RemovalError>;
