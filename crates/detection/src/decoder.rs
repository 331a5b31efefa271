//! Decoding of raw detection model outputs.
//!
//! The model output is a `[1, 4 + classes, slots]` tensor. Every column is one detection slot,
//! holding the box center, width and height in model input pixels followed by the score of
//! every class.

use itertools::Itertools;
use ndarray::{ArrayView2, Axis, s};

use crate::{
    bbox::{Bbox, ConvertBbox, Xyxy},
    bounding_box::BoundingBox,
    error::{Error, Result},
    suppression::{MergeOrder, merge_overlapping},
    util::argmax,
};

/// Number of rows in the output tensor describing the box geometry (cx, cy, w, h).
pub const BOX_ROWS: usize = 4;

/// Default IoU above which two detections are considered the same object.
pub const DEFAULT_IOU_THRESHOLD: f32 = 0.7;

/// Describes the output of a detection model and how it should be filtered.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodingConfig {
    /// Width of the model input, the coordinate space of the predicted boxes.
    pub input_width: u32,
    /// Height of the model input, the coordinate space of the predicted boxes.
    pub input_height: u32,
    /// Number of detection slots (columns) in the output tensor.
    pub detection_slots: usize,
    /// Class names, in the order of the score rows of the output tensor.
    pub classes: Vec<String>,
    /// Minimum class score for a slot to become a detection.
    pub confidence_threshold: f32,
    /// IoU above which overlapping detections are merged.
    pub iou_threshold: f32,
    /// Order in which overlapping detections are merged.
    pub merge_order: MergeOrder,
}

impl DecodingConfig {
    #[must_use]
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// The shape of the output tensor, `[batch, 4 + classes, slots]`.
    #[must_use]
    pub fn output_shape(&self) -> [usize; 3] {
        [1, BOX_ROWS + self.num_classes(), self.detection_slots]
    }

    /// The minimum number of values an output buffer must hold.
    #[must_use]
    pub fn output_len(&self) -> usize {
        self.output_shape().iter().product()
    }

    pub fn validate(&self) -> Result<()> {
        if self.input_width == 0 || self.input_height == 0 {
            return Err(Error::InvalidConfig(format!(
                "model input must not be empty, got {}x{}",
                self.input_width, self.input_height
            )));
        }

        if self.detection_slots == 0 {
            return Err(Error::InvalidConfig(
                "model must have at least one detection slot".to_string(),
            ));
        }

        if self.classes.is_empty() {
            return Err(Error::InvalidConfig(
                "class table must contain at least one class".to_string(),
            ));
        }

        if self.confidence_threshold.is_nan() {
            return Err(Error::InvalidConfig(
                "confidence threshold must be a number".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.iou_threshold) {
            return Err(Error::InvalidConfig(format!(
                "IoU threshold must be within [0, 1], got {}",
                self.iou_threshold
            )));
        }

        Ok(())
    }
}

/// Turns raw model output into a list of labeled, de-duplicated detections.
#[derive(Debug, Clone)]
pub struct DetectionDecoder {
    config: DecodingConfig,
}

impl DetectionDecoder {
    /// Create a new [`DetectionDecoder`], validating the provided config.
    pub fn new(config: DecodingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &DecodingConfig {
        &self.config
    }

    /// Decode the model output into detections in the coordinate space of the original image.
    ///
    /// Values beyond [`DecodingConfig::output_len`] are ignored.
    pub fn decode(
        &self,
        output: &[f32],
        original_width: u32,
        original_height: u32,
    ) -> Result<Vec<BoundingBox>> {
        let candidates = self.candidates(output, original_width, original_height)?;
        let num_candidates = candidates.len();

        let detections = merge_overlapping(
            candidates,
            self.config.iou_threshold,
            self.config.merge_order,
        );

        tracing::debug!(
            candidates = num_candidates,
            detections = detections.len(),
            "decoded model output"
        );

        Ok(detections)
    }

    /// Decode every slot that passes the confidence threshold, without merging overlaps.
    pub fn candidates(
        &self,
        output: &[f32],
        original_width: u32,
        original_height: u32,
    ) -> Result<Vec<BoundingBox>> {
        let expected = self.config.output_len();
        if output.len() < expected {
            return Err(Error::InsufficientBuffer {
                expected,
                actual: output.len(),
            });
        }

        let [_, rows, slots] = self.config.output_shape();
        let output = ArrayView2::from_shape((rows, slots), &output[..expected])?;

        let model_dims = (
            self.config.input_width as f32,
            self.config.input_height as f32,
        );
        let image_dims = (original_width as f32, original_height as f32);

        let candidates = output
            .axis_iter(Axis(1))
            .filter_map(|slot| {
                let (class, confidence) = argmax(slot.slice(s![BOX_ROWS..]))?;
                if confidence < self.config.confidence_threshold {
                    return None;
                }

                let bbox: Bbox<Xyxy> = Bbox::cxcywh(slot[0], slot[1], slot[2], slot[3]).convert();
                let bbox = bbox.rescaled(model_dims, image_dims);

                Some(BoundingBox::new(
                    self.config.classes[class].clone(),
                    confidence,
                    bbox,
                ))
            })
            .collect_vec();

        Ok(candidates)
    }
}
