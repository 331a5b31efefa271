//! Type-safe bounding box geometry.

use std::marker::PhantomData;

/// A type-safe bounding box.
///
/// It is a wrapper around a tuple of four `f32` values representing the coordinates of the bounding box.
/// The type parameter `T` is used to specify the format of the bounding box, and is used to enforce type safety.
///
/// # Conversion
///
/// The bounding box can be converted between different formats using the [`ConvertBbox`] trait.
/// This allows for easy conversion between different formats without having to manually convert the coordinates.
///
/// ```
/// use detection::bbox::*;
///
/// let cxcywh = Bbox::cxcywh(50.0, 50.0, 20.0, 20.0);
/// let xyxy: Bbox<Xyxy> = cxcywh.convert();
///
/// assert_eq!(xyxy.inner, (40.0, 40.0, 60.0, 60.0));
/// ```
///
/// # Formats
///
/// The following formats are supported:
///
/// - [`Xyxy`] (xmin, ymin, xmax, ymax)
/// - [`Cxcywh`] (center_x, center_y, width, height)
///
/// # Canonical form
///
/// A [`Xyxy`] box is not required to have `x1 <= x2` and `y1 <= y2`. All area computations
/// work on the [canonical](Bbox::canonical) rectangle, so swapped corners never produce a
/// negative area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bbox<T> {
    pub inner: (f32, f32, f32, f32),
    _marker: PhantomData<T>,
}

impl<T> Bbox<T> {
    /// Create a new bounding box from the given coordinates.
    fn new(bbox: (f32, f32, f32, f32)) -> Self {
        Bbox {
            inner: bbox,
            _marker: PhantomData,
        }
    }
}

impl<T> Bbox<T>
where
    Bbox<T>: ConvertBbox<Xyxy>,
{
    /// Returns the box as corners with `x1 <= x2` and `y1 <= y2`.
    #[must_use]
    pub fn canonical(&self) -> Bbox<Xyxy> {
        let (x1, y1, x2, y2) = ConvertBbox::<Xyxy>::convert(self).inner;
        Bbox::new((x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2)))
    }

    /// Compute the area of the bounding box.
    #[must_use]
    pub fn area(&self) -> f32 {
        let (x1, y1, x2, y2) = self.canonical().inner;
        (x2 - x1) * (y2 - y1)
    }

    /// Compute the intersection area between two bounding boxes.
    ///
    /// The intersection area is computed as the area of the overlap between the two bounding boxes.
    /// If the bounding boxes do not overlap, the intersection area is `0.0`.
    pub fn intersection<S>(&self, other: &S) -> f32
    where
        S: ConvertBbox<Xyxy>,
    {
        let (x1, y1, x2, y2) = self.canonical().inner;
        let (x3, y3, x4, y4) = ConvertBbox::<Xyxy>::convert(other).canonical().inner;

        let width = (x2.min(x4) - x1.max(x3)).max(0.0);
        let height = (y2.min(y4) - y1.max(y3)).max(0.0);

        width * height
    }

    /// Compute the union area between two bounding boxes.
    ///
    /// The union area is computed as the sum of the areas of the two bounding boxes minus the
    /// intersection area.
    pub fn union<S>(&self, other: &S) -> f32
    where
        S: ConvertBbox<Xyxy>,
    {
        self.area() + ConvertBbox::<Xyxy>::convert(other).area() - self.intersection(other)
    }

    /// Compute the intersection over union (IoU) between two bounding boxes.
    ///
    /// Two boxes without any area have no meaningful overlap ratio, in which case this returns
    /// `0.0` instead of `NaN`.
    pub fn iou<S>(&self, other: &S) -> f32
    where
        S: ConvertBbox<Xyxy>,
    {
        let union = self.union(other);
        if union <= 0.0 {
            return 0.0;
        }

        self.intersection(other) / union
    }
}

impl<T> From<Bbox<T>> for (f32, f32, f32, f32) {
    fn from(bbox: Bbox<T>) -> Self {
        bbox.inner
    }
}

/// Trait for converting a bounding box to a different representation.
pub trait ConvertBbox<T> {
    fn convert(&self) -> Bbox<T>;
}

/// Marker type for bounding boxes with coordinates of the top-left and bottom-right corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyxy;

impl Bbox<Xyxy> {
    /// Create a bounding box from the coordinates of the top-left and bottom-right corners.
    #[must_use]
    pub fn xyxy(x1: f32, y1: f32, x2: f32, y2: f32) -> Bbox<Xyxy> {
        Bbox::new((x1, y1, x2, y2))
    }

    /// Map the bounding box from a `from` sized coordinate space into a `to` sized one.
    ///
    /// Each axis is scaled independently, so this assumes the source image was stretched to the
    /// model resolution without any letterboxing.
    #[must_use]
    pub fn rescaled(&self, (from_w, from_h): (f32, f32), (to_w, to_h): (f32, f32)) -> Bbox<Xyxy> {
        let (x1, y1, x2, y2) = self.inner;
        Bbox::new((
            x1 / from_w * to_w,
            y1 / from_h * to_h,
            x2 / from_w * to_w,
            y2 / from_h * to_h,
        ))
    }
}

impl ConvertBbox<Xyxy> for Bbox<Xyxy> {
    fn convert(&self) -> Bbox<Xyxy> {
        *self
    }
}

/// Marker type for bounding boxes with coordinates of the center and the width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cxcywh;

impl Bbox<Cxcywh> {
    /// Create a bounding box from the coordinates of the center and the width and height.
    #[must_use]
    pub fn cxcywh(cx: f32, cy: f32, w: f32, h: f32) -> Bbox<Cxcywh> {
        Bbox::new((cx, cy, w, h))
    }
}

impl ConvertBbox<Xyxy> for Bbox<Cxcywh> {
    fn convert(&self) -> Bbox<Xyxy> {
        let (cx, cy, w, h) = self.inner;
        Bbox::new((cx - w / 2.0, cy - h / 2.0, cx + w / 2.0, cy + h / 2.0))
    }
}
