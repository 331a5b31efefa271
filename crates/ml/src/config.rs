//! Configuration of a detection model.

use detection::{DecodingConfig, MergeOrder, decoder::DEFAULT_IOU_THRESHOLD};
use odal::Config;
use serde::{Deserialize, Serialize};

use crate::encoder::EncodingConfig;

/// Description of a detection model, from which both the encoding and decoding configuration are
/// derived.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DetectorConfig {
    /// Width of the model input in pixels.
    pub input_width: u32,
    /// Height of the model input in pixels.
    pub input_height: u32,
    /// Number of detection slots in the model output.
    pub detection_slots: usize,
    /// Minimum class score for a detection to be kept.
    pub confidence_threshold: f32,
    /// IoU above which overlapping detections are merged.
    #[serde(default = "default_iou_threshold")]
    pub iou_threshold: f32,
    /// Order in which overlapping detections are merged.
    #[serde(default)]
    pub merge_order: MergeOrder,
    /// Class names, in the order the model outputs their scores.
    pub classes: Vec<String>,
}

fn default_iou_threshold() -> f32 {
    DEFAULT_IOU_THRESHOLD
}

impl Config for DetectorConfig {
    const PATH: &'static str = "detector.toml";
}

impl DetectorConfig {
    #[must_use]
    pub fn encoding(&self) -> EncodingConfig {
        EncodingConfig {
            input_width: self.input_width,
            input_height: self.input_height,
        }
    }

    #[must_use]
    pub fn decoding(&self) -> DecodingConfig {
        DecodingConfig {
            input_width: self.input_width,
            input_height: self.input_height,
            detection_slots: self.detection_slots,
            classes: self.classes.clone(),
            confidence_threshold: self.confidence_threshold,
            iou_threshold: self.iou_threshold,
            merge_order: self.merge_order,
        }
    }
}
