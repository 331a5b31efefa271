//! Object detection pipeline: encode, infer, decode.

use detection::{BoundingBox, DetectionDecoder};

use crate::{
    config::DetectorConfig,
    encoder::TensorEncoder,
    error::{Error, Result},
    image::RgbImage,
};

/// A synchronous inference backend for a detection model.
///
/// Implementations run the model on an encoded `[1, 3, height, width]` input tensor and write the
/// raw `[1, 4 + classes, slots]` output tensor into `output`. A call either fully succeeds or
/// fails, in which case the contents of `output` are unspecified.
pub trait InferenceEngine {
    type Error: std::error::Error + Send + Sync + 'static;

    fn infer(&mut self, input: &[f32], output: &mut [f32]) -> std::result::Result<(), Self::Error>;
}

/// Runs a detection model on images, using an [`InferenceEngine`] for the actual inference.
///
/// The in- and output tensors are allocated once, and reused for every image.
pub struct Detector<E> {
    encoder: TensorEncoder,
    decoder: DetectionDecoder,
    engine: E,
    input: Vec<f32>,
    output: Vec<f32>,
}

impl<E: InferenceEngine> Detector<E> {
    /// Create a new [`Detector`] for the model described by `config`.
    pub fn new(config: &DetectorConfig, engine: E) -> Result<Self> {
        let encoder = TensorEncoder::new(config.encoding())?;
        let decoder = DetectionDecoder::new(config.decoding())?;

        let input = vec![0.0; encoder.config().tensor_len()];
        let output = vec![0.0; decoder.config().output_len()];

        Ok(Self {
            encoder,
            decoder,
            engine,
            input,
            output,
        })
    }

    /// Detect objects in `image`, returning boxes in the coordinate space of `image`.
    pub fn detect(&mut self, image: &RgbImage) -> Result<Vec<BoundingBox>> {
        self.encoder.encode(image, &mut self.input)?;

        self.engine
            .infer(&self.input, &mut self.output)
            .map_err(|e| Error::Inference(Box::new(e)))?;

        let detections = self
            .decoder
            .decode(&self.output, image.width(), image.height())?;

        tracing::debug!(
            width = image.width(),
            height = image.height(),
            detections = detections.len(),
            "detected objects"
        );

        Ok(detections)
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }
}
