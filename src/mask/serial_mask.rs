use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use na::DMatrix;
use serde::{Deserialize, Serialize};

use crate::error::JsonFileError;

/// A background mask flattened for JSON export. `data` is column-major, one
/// byte per pixel, `1` for background.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SerialMask {
    data: Vec<u8>,
    nrows: usize,
    ncols: usize,
}

impl SerialMask {
    pub fn from_mask(mask: &DMatrix<bool>) -> Self {
        let (nrows, ncols) = mask.shape();

        Self {
            data: mask.iter().map(|b| (*b) as u8).collect(),
            nrows,
            ncols,
        }
    }

    pub fn to_mask(&self) -> DMatrix<bool> {
        DMatrix::from_iterator(self.nrows, self.ncols, self.data.iter().map(|b| *b != 0))
    }

    /// Number of pixels marked as background
    pub fn background_count(&self) -> usize {
        self.data.iter().filter(|b| **b != 0).count()
    }

    pub fn save(&self, path: &Path) -> Result<(), JsonFileError> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use na::DMatrix;
    use rand::Rng;

    use crate::mask::serial_mask::SerialMask;

    #[test]
    pub fn test_save_load() {
        let mut rng = rand::rng();

        let original_mask: DMatrix<bool> = DMatrix::from_fn(4, 7, |_, _| rng.random_bool(0.5));

        let serial_mask = SerialMask::from_mask(&original_mask);
        assert_eq!(
            serial_mask.background_count(),
            original_mask.iter().filter(|b| **b).count()
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mask.json");
        serial_mask.save(&path).unwrap();

        let serialized = std::fs::read_to_string(&path).unwrap();
        let deserialized: SerialMask = serde_json::from_str(&serialized).unwrap();

        assert_eq!(original_mask, deserialized.to_mask());
    }

    #[test]
    pub fn test_layout_is_column_major() {
        let mask = DMatrix::from_row_slice(2, 2, &[true, false, false, false]);
        let serial_mask = SerialMask::from_mask(&mask);

        let value = serde_json::to_value(&serial_mask).unwrap();
        assert_eq!(value["nrows"], 2);
        assert_eq!(value["ncols"], 2);
        assert_eq!(value["data"], serde_json::json!([1, 0, 0, 0]));

        let mask = DMatrix::from_row_slice(2, 2, &[false, true, false, false]);
        let value = serde_json::to_value(SerialMask::from_mask(&mask)).unwrap();
        assert_eq!(value["data"], serde_json::json!([0, 0, 1, 0]));
    }
}
