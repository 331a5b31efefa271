//! Decoding of object detection model outputs.
//!
//! A detection model produces a fixed number of candidate slots, each with a box and a score per
//! class. [`DetectionDecoder`] turns such an output buffer into a list of [`BoundingBox`]es in
//! the coordinate space of the original image, filtering out low confidence slots and merging
//! overlapping candidates.

pub mod bbox;
mod bounding_box;
pub mod decoder;
mod error;
pub mod suppression;
pub mod util;

pub use bounding_box::BoundingBox;
pub use decoder::{DecodingConfig, DetectionDecoder};
pub use error::{Error, Result};
pub use suppression::MergeOrder;
