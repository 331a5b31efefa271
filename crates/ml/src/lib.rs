//! This crate provides the functionality necessary to run object detection models on images.
//!
//! Images are encoded into model input tensors by the [`TensorEncoder`], after which an
//! [`InferenceEngine`] runs the model. The raw model output is then turned into labeled
//! detections by a [`detection::DetectionDecoder`]. The [`Detector`] ties these together.

pub mod config;
pub mod detector;
pub mod encoder;
mod error;
pub mod image;

pub use config::DetectorConfig;
pub use detector::{Detector, InferenceEngine};
pub use encoder::{EncodingConfig, TensorEncoder};
pub use error::{Error, Result};
pub use image::RgbImage;

#[allow(missing_docs)]
pub mod prelude {
    pub use crate::config::DetectorConfig;
    pub use crate::detector::{Detector, InferenceEngine};
    pub use crate::encoder::{EncodingConfig, TensorEncoder};
    pub use crate::error::Error;
    pub use crate::image::RgbImage;

    pub use detection::{BoundingBox, DecodingConfig, DetectionDecoder, MergeOrder};
}
