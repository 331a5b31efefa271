use std::path::PathBuf;

use clap::Parser;
use ml::{DetectorConfig, TensorEncoder};

use super::load_image;
use crate::{Result, tensor};

/// Encode an image into a model input tensor.
#[derive(Parser)]
#[clap(name = "encode")]
pub struct Encode {
    /// The image to encode
    pub image: PathBuf,

    /// Where to write the tensor, as raw little-endian f32 values
    #[clap(short, long)]
    pub output: PathBuf,
}

impl Encode {
    pub fn encode(self, config: &DetectorConfig) -> Result<()> {
        let encoder = TensorEncoder::new(config.encoding())?;
        let image = load_image(&self.image)?;

        let mut tensor = vec![0.0; encoder.config().tensor_len()];
        encoder.encode(&image, &mut tensor)?;
        tensor::write(&self.output, &tensor)?;

        tracing::info!(
            image = %self.image.display(),
            shape = ?encoder.config().tensor_shape(),
            "wrote tensor to {}",
            self.output.display()
        );

        Ok(())
    }
}
