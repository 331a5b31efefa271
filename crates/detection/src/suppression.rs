//! Greedy suppression of overlapping detections.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::bounding_box::BoundingBox;

/// The order in which candidates are visited by [`merge_overlapping`].
///
/// The first visited candidate of a cluster of overlapping detections is the one that is kept.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeOrder {
    /// Visit the lowest confidence candidates first.
    ///
    /// This keeps the least confident detection of every overlapping cluster.
    #[default]
    Ascending,
    /// Visit the highest confidence candidates first, i.e. regular non-maximum suppression.
    Descending,
}

/// Removes candidates that overlap with an already accepted candidate.
///
/// The candidates are sorted by confidence according to `order`, after which they are walked
/// once. A candidate is accepted unless its IoU with any previously accepted candidate is
/// strictly greater than `threshold`.
#[must_use]
pub fn merge_overlapping(
    candidates: Vec<BoundingBox>,
    threshold: f32,
    order: MergeOrder,
) -> Vec<BoundingBox> {
    let sorted = candidates.into_iter().sorted_by(|a, b| match order {
        MergeOrder::Ascending => a.confidence.total_cmp(&b.confidence),
        MergeOrder::Descending => b.confidence.total_cmp(&a.confidence),
    });

    let mut accepted: Vec<BoundingBox> = Vec::with_capacity(sorted.len());
    for candidate in sorted {
        if accepted.iter().any(|kept| candidate.iou(kept) > threshold) {
            tracing::trace!(
                label = %candidate.label,
                confidence = candidate.confidence,
                "discarding overlapping candidate"
            );
            continue;
        }

        accepted.push(candidate);
    }

    accepted
}
