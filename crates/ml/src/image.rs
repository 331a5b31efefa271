use std::ops::Deref;

use crate::{Error, Result};

/// Number of bytes per pixel of an [`RgbImage`].
pub const BYTES_PER_PIXEL: usize = 3;

/// An 8-bit RGB image, stored as interleaved `[r, g, b]` pixels in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    frame: Vec<u8>,
    width: u32,
    height: u32,
}

impl RgbImage {
    /// Wrap a buffer of interleaved RGB pixels.
    ///
    /// Fails if the image is empty, or if the buffer does not hold exactly `width * height`
    /// pixels.
    pub fn new(width: u32, height: u32, frame: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 || frame.len() != Self::frame_len(width, height) {
            return Err(Error::InvalidImage {
                width,
                height,
                len: frame.len(),
            });
        }

        Ok(Self {
            frame,
            width,
            height,
        })
    }

    /// Create an image where every pixel has the same color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Result<Self> {
        let frame = rgb.repeat(width as usize * height as usize);
        Self::new(width, height, frame)
    }

    fn frame_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the `[r, g, b]` value of the pixel at `(x, y)`, if it lies within the image.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let offset = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        Some([
            self.frame[offset],
            self.frame[offset + 1],
            self.frame[offset + 2],
        ])
    }
}

impl Deref for RgbImage {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.frame
    }
}
