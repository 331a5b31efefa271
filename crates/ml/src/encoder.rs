//! Encoding of images into model input tensors.

use std::borrow::Cow;

use fast_image_resize::{self as fir, FilterType, ResizeAlg, ResizeOptions, Resizer};

use crate::{
    error::{Error, Result},
    image::{BYTES_PER_PIXEL, RgbImage},
};

/// Number of color channels in the input tensor, in the order red, green, blue.
pub const CHANNELS: usize = 3;

/// Number of images per input tensor.
pub const BATCH_SIZE: usize = 1;

/// Describes the input tensor of a detection model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingConfig {
    /// Width of the model input in pixels.
    pub input_width: u32,
    /// Height of the model input in pixels.
    pub input_height: u32,
}

impl EncodingConfig {
    /// The shape of the input tensor, `[batch, channels, height, width]`.
    #[must_use]
    pub fn tensor_shape(&self) -> [usize; 4] {
        [
            BATCH_SIZE,
            CHANNELS,
            self.input_height as usize,
            self.input_width as usize,
        ]
    }

    /// Number of values in a single channel plane.
    #[must_use]
    pub fn channel_len(&self) -> usize {
        self.input_width as usize * self.input_height as usize
    }

    /// Number of values in the input tensor.
    #[must_use]
    pub fn tensor_len(&self) -> usize {
        self.tensor_shape().iter().product()
    }

    pub fn validate(&self) -> Result<()> {
        if self.input_width == 0 || self.input_height == 0 {
            return Err(Error::InvalidConfig(format!(
                "model input must not be empty, got {}x{}",
                self.input_width, self.input_height
            )));
        }

        Ok(())
    }
}

/// Writes images into a channel-first `[1, 3, height, width]` tensor, normalized to `[0, 1]`.
///
/// Images are resampled to the model resolution using a Lanczos3 filter.
#[derive(Debug, Clone)]
pub struct TensorEncoder {
    config: EncodingConfig,
}

impl TensorEncoder {
    /// Create a new [`TensorEncoder`], validating the provided config.
    pub fn new(config: EncodingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &EncodingConfig {
        &self.config
    }

    /// Encode `image` into the start of `tensor`.
    ///
    /// The tensor holds three planes of `height * width` values, red first, then green and
    /// blue. Within a plane pixels are stored row by row.
    ///
    /// Fails without touching `tensor` if it holds fewer than [`EncodingConfig::tensor_len`]
    /// values. Any values beyond that are left as is.
    pub fn encode(&self, image: &RgbImage, tensor: &mut [f32]) -> Result<()> {
        let expected = self.config.tensor_len();
        if tensor.len() < expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: tensor.len(),
            });
        }

        let pixels = self.resample(image)?;

        let (red, rest) = tensor[..expected].split_at_mut(self.config.channel_len());
        let (green, blue) = rest.split_at_mut(self.config.channel_len());

        for (((pixel, r), g), b) in pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(red)
            .zip(green)
            .zip(blue)
        {
            *r = f32::from(pixel[0]) / 255.0;
            *g = f32::from(pixel[1]) / 255.0;
            *b = f32::from(pixel[2]) / 255.0;
        }

        Ok(())
    }

    /// Resample the image to the model resolution.
    ///
    /// Images that already have the model resolution are used as is.
    fn resample<'a>(&self, image: &'a RgbImage) -> Result<Cow<'a, [u8]>> {
        let EncodingConfig {
            input_width,
            input_height,
        } = self.config;

        if image.width() == input_width && image.height() == input_height {
            return Ok(Cow::Borrowed(&image[..]));
        }

        tracing::trace!(
            from = ?(image.width(), image.height()),
            to = ?(input_width, input_height),
            "resampling image"
        );

        let src_image = fir::images::ImageRef::new(
            image.width(),
            image.height(),
            &image[..],
            fir::PixelType::U8x3,
        )?;
        let mut dst_image = fir::images::Image::new(input_width, input_height, fir::PixelType::U8x3);

        let mut resizer = Resizer::new();
        resizer.resize(
            &src_image,
            &mut dst_image,
            &ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3)),
        )?;

        Ok(Cow::Owned(dst_image.into_vec()))
    }
}
