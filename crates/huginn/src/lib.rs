//! Command line access to the detection pipeline, without an inference backend.
//!
//! Images are encoded into tensor files that can be fed to any runtime, and the raw output tensors
//! of that runtime are decoded back into detections.

pub mod cli;
pub mod error;
pub mod tensor;

pub use error::{Error, Result};
