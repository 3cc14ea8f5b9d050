use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::{JsonFileError, RemovalError, Result},
    mask::Threshold,
};

pub mod cli;
pub mod image_input;

pub const DEFAULT_INPUT_PATH: &str = "logo.jpg";
pub const DEFAULT_OUTPUT_PATH: &str = "logo.png";

/// All parameters of one background removal run
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RemovalSettings {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub threshold: Threshold,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_path: Option<PathBuf>, // where to export the mask as json, if anywhere
}

impl Default for RemovalSettings {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            threshold: Threshold::default(),
            mask_path: None,
        }
    }
}

impl RemovalSettings {
    /// Read settings from a JSON file. Absent fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let read = || -> std::result::Result<Self, JsonFileError> {
            let reader = BufReader::new(File::open(path)?);
            Ok(serde_json::from_reader(reader)?)
        };

        read().map_err(|err| RemovalError::Settings(path.to_path_buf(), err))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let write = || -> std::result::Result<(), JsonFileError> {
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut writer, self)?;
            writer.flush()?;
            Ok(())
        };

        write().map_err(|err| RemovalError::Settings(path.to_path_buf(), err))
    }

    pub fn log(&self) {
        info!(
            "Background removal is shown below:\n\n\
        \t input:      {}\n\
        \t output:     {}\n\
        \t threshold:  {} (exclusive)\n\
        \t mask json:  {}\n\
        ",
            self.input_path.display(),
            self.output_path.display(),
            self.threshold,
            self.mask_path
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<none>".to_string()),
        );
    }
}
