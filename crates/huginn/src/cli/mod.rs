use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use ml::{DetectorConfig, RgbImage};
use odal::Config;

use crate::error::{Error, Result};

pub mod classes;
pub mod decode;
pub mod encode;

#[derive(Parser)]
#[clap(name = "huginn", version)]
pub struct Cli {
    #[clap(subcommand)]
    pub action: Commands,

    /// Directory containing `detector.toml`
    #[clap(global = true, long, default_value = "config")]
    pub config: PathBuf,

    /// Directory with a `detector.toml` that overrides values of the main config
    #[clap(global = true, long)]
    pub overlay: Option<PathBuf>,

    /// Enable verbose logging
    #[clap(global = true, short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    Encode(encode::Encode),
    Decode(decode::Decode),
    Classes(classes::Classes),
}

impl Cli {
    /// Load the detector configuration, applying the overlay if one was given.
    pub fn detector_config(&self) -> Result<DetectorConfig> {
        let config = match &self.overlay {
            Some(overlay) => DetectorConfig::load_with_overlay(&self.config, overlay)?,
            None => DetectorConfig::load(&self.config)?,
        };

        Ok(config)
    }
}

/// Decode the image file at `path` into an RGB image.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let image = image::open(path)
        .map_err(|source| Error::Image {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgb8();

    let (width, height) = image.dimensions();
    Ok(RgbImage::new(width, height, image.into_raw())?)
}

/// Read the dimensions of the image file at `path`, without decoding the pixels.
pub fn image_dimensions(path: &Path) -> Result<(u32, u32)> {
    image::image_dimensions(path).map_err(|source| Error::Image {
        path: path.to_path_buf(),
        source,
    })
}
