//! See [`Error`].

use miette::Diagnostic;
use thiserror::Error;

/// Error types for this crate.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Destination tensor only holds {actual} floats, encoding needs {expected}")]
    #[diagnostic(help("Make sure the input tensor has shape [1, 3, height, width]"))]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Pixel buffer of {len} bytes is not a valid {width}x{height} RGB image")]
    InvalidImage { width: u32, height: u32, len: usize },

    #[error("Failed to create image view for resizing")]
    ImageBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Failed to resize image")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Invalid encoding configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to decode model output")]
    Decode(
        #[from]
        #[diagnostic_source]
        detection::Error,
    ),

    #[error("Failed to run inference")]
    Inference(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for [`Result<T, Error>`].
pub type Result<T> = std::result::Result<T, Error>;
