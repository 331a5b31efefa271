use std::fmt;

use crate::bbox::{Bbox, Xyxy};

/// A labeled detection, with a bounding box in original image coordinates and a confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    /// The class name of the detected object.
    pub label: String,
    /// The class score of the detection.
    pub confidence: f32,
    /// The corners of the detection in original image pixels.
    ///
    /// These are not guaranteed to be ordered, use [`Bbox::canonical`] when that matters.
    pub bbox: Bbox<Xyxy>,
}

impl BoundingBox {
    #[must_use]
    pub fn new(label: impl Into<String>, confidence: f32, bbox: Bbox<Xyxy>) -> Self {
        Self {
            label: label.into(),
            confidence,
            bbox,
        }
    }

    /// Returns the `(x1, y1, x2, y2)` corners of the detection.
    #[must_use]
    pub fn corners(&self) -> (f32, f32, f32, f32) {
        self.bbox.inner
    }

    #[must_use]
    pub fn area(&self) -> f32 {
        self.bbox.area()
    }

    #[must_use]
    pub fn intersection(&self, other: &BoundingBox) -> f32 {
        self.bbox.intersection(&other.bbox)
    }

    #[must_use]
    pub fn union(&self, other: &BoundingBox) -> f32 {
        self.bbox.union(&other.bbox)
    }

    /// Intersection over union of the two detections, `0.0` if neither has any area.
    #[must_use]
    pub fn iou(&self, other: &BoundingBox) -> f32 {
        self.bbox.iou(&other.bbox)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x1, y1, x2, y2) = self.corners();
        write!(
            f,
            "Object {} (confidence {:.6}): ({x1:.6}, {y1:.6}), ({x2:.6}, {y2:.6})",
            self.label, self.confidence
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_label_confidence_and_corners() {
        let detection = BoundingBox::new("cat", 0.9, Bbox::xyxy(1.0, 2.0, 3.0, 4.0));

        assert_eq!(
            detection.to_string(),
            "Object cat (confidence 0.900000): (1.000000, 2.000000), (3.000000, 4.000000)"
        );
    }

    #[test]
    fn geometry_delegates_to_bbox() {
        let a = BoundingBox::new("dog", 0.8, Bbox::xyxy(0.0, 0.0, 10.0, 10.0));
        let b = BoundingBox::new("dog", 0.6, Bbox::xyxy(5.0, 5.0, 15.0, 15.0));

        assert_eq!(a.area(), 100.0);
        assert_eq!(a.intersection(&b), 25.0);
        assert_eq!(a.union(&b), 175.0);
        assert_eq!(a.iou(&b), 25.0 / 175.0);
    }
}
