use std::path::PathBuf;

use clap::Parser;
use detection::DetectionDecoder;
use ml::DetectorConfig;

use super::image_dimensions;
use crate::{Error, Result, tensor};

/// Decode a raw model output tensor into detections.
#[derive(Parser)]
#[clap(name = "decode")]
pub struct Decode {
    /// The output tensor, as raw little-endian f32 values
    pub tensor: PathBuf,

    /// Width of the original image
    #[clap(long, requires = "height", required_unless_present = "image")]
    pub width: Option<u32>,

    /// Height of the original image
    #[clap(long, requires = "width", required_unless_present = "image")]
    pub height: Option<u32>,

    /// Take the original dimensions from this image
    #[clap(long, conflicts_with_all = ["width", "height"])]
    pub image: Option<PathBuf>,
}

impl Decode {
    pub fn decode(self, config: &DetectorConfig) -> Result<()> {
        let decoder = DetectionDecoder::new(config.decoding())?;
        let (width, height) = self.original_dimensions()?;

        let output = tensor::read(&self.tensor)?;
        let detections = decoder.decode(&output, width, height)?;

        tracing::info!(
            detections = detections.len(),
            width,
            height,
            "decoded {}",
            self.tensor.display()
        );

        for detection in detections {
            println!("{detection}");
        }

        Ok(())
    }

    fn original_dimensions(&self) -> Result<(u32, u32)> {
        match (&self.image, self.width, self.height) {
            (Some(image), _, _) => image_dimensions(image),
            (None, Some(width), Some(height)) => Ok((width, height)),
            _ => Err(Error::MissingDimensions),
        }
    }
}
