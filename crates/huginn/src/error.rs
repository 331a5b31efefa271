use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("failed to access `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("tensor file `{path}` is {len} bytes long, which is not a whole number of f32 values")]
    #[diagnostic(help("tensor files contain raw little-endian f32 values, without a header"))]
    TruncatedTensor { path: PathBuf, len: usize },

    #[error("the original image dimensions are unknown")]
    #[diagnostic(help("pass either `--image`, or both `--width` and `--height`"))]
    MissingDimensions,

    #[error("failed to decode image `{path}`")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] odal::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Ml(#[from] ml::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Detection(#[from] detection::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
