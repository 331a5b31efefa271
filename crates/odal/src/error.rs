//! Result and Error types for the crate.
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result containing an error variant from this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration error variants
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// Failed to read a configuration file.
    #[error("Failed to read config file `{}`", path.display())]
    #[diagnostic(help("Is the config root pointing at the right directory?"))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Deserialize error, this wraps a [toml::de::Error]
    #[error(transparent)]
    Deserialize(#[from] toml::de::Error),
}
