//! See [`Error`].

use miette::Diagnostic;
use thiserror::Error;

/// Error types for this crate.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Output buffer holds {actual} values, decoding needs at least {expected}")]
    #[diagnostic(help("Make sure the output tensor has shape [1, 4 + classes, detection slots]"))]
    InsufficientBuffer { expected: usize, actual: usize },

    #[error("Invalid decoding configuration: {0}")]
    InvalidConfig(String),

    #[error("Output buffer does not fit the configured output shape")]
    Shape(#[from] ndarray::ShapeError),
}

/// Type alias for [`Result<T, Error>`].
pub type Result<T> = std::result::Result<T, Error>;
