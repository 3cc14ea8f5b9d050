use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::{
    error::Result,
    input::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, RemovalSettings},
    mask::Threshold,
};

// Raw, CLI input
#[derive(Parser, Debug)]
#[command(version, about = "Make the light background of an image transparent.", long_about = None)]
pub struct CliArgs {
    #[arg(help = "The image to remove the background from.", default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    #[arg(help = "Where to write the transparent PNG.", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    #[arg(
        short,
        long,
        default_value_t = Threshold::DEFAULT.0,
        allow_negative_numbers = true,
        help = "Pixels with every color channel strictly above this value become transparent."
    )]
    threshold: i32,

    #[arg(long, help = "Optional path to export the background mask to, as json.")]
    mask_json: Option<PathBuf>,

    #[arg(
        long,
        help = "A settings file with pre-loaded parameters. Overrides all other arguments."
    )]
    settings_json: Option<PathBuf>,

    #[arg(long, help = "Optional path to save the effective settings to.")]
    settings_json_savepath: Option<PathBuf>,

    #[arg(short, long, help = "Log debug output.")]
    pub verbose: bool,
}

impl CliArgs {
    pub fn create_settings(&self) -> Result<RemovalSettings> {
        // if the settings file is supplied, just use that
        let settings = if let Some(settings_path) = &self.settings_json {
            info!("Using settings file {}", settings_path.display());
            RemovalSettings::load(settings_path)?
        } else {
            RemovalSettings {
                input_path: self.input.clone(),
                output_path: self.output.clone(),
                threshold: Threshold(self.threshold),
                mask_path: self.mask_json.clone(),
            }
        };

        if let Some(savepath) = &self.settings_json_savepath {
            settings.save(savepath)?;
            info!("Saved settings to {}", savepath.display());
        }

        Ok(settings)
    }
}
