//! Make the light background of an image transparent.
//!
//! A pixel is background when its red, green and blue channels are all
//! strictly above a brightness threshold (240 unless told otherwise). Those
//! pixels get an alpha of 0; everything else is written back untouched, and
//! the result is always encoded as PNG.

extern crate nalgebra as na;

pub mod error;
pub mod input;
pub mod mask;
pub mod output;
pub mod remover;

pub use error::{RemovalError, Result};
pub use input::RemovalSettings;
pub use mask::Threshold;
pub use output::RemovalReport;
pub use remover::{remove_background, remove_background_image};
