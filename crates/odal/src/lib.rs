//! Loading of TOML configuration files.
//!
//! Every configuration type lives in its own file, relative to a config root. A second, overlay,
//! directory can override individual keys of that file for a specific deployment.

mod error;
#[cfg(test)]
mod tests;

use std::{fs, path::Path};

use serde::de::DeserializeOwned;
use toml::{Table, Value};

pub use error::{Error, Result};

/// A configuration that is stored as a TOML file.
pub trait Config: DeserializeOwned {
    /// Path of the configuration file, relative to the config root.
    const PATH: &'static str;

    /// Load the configuration from `root`.
    fn load(root: impl AsRef<Path>) -> Result<Self> {
        let table = read_table(&root.as_ref().join(Self::PATH))?;

        Ok(Value::Table(table).try_into()?)
    }

    /// Load the configuration from `root`, with the values of the same file in `overlay` taking
    /// precedence.
    ///
    /// The overlay file is optional, if it does not exist this is the same as [`Config::load`].
    fn load_with_overlay(root: impl AsRef<Path>, overlay: impl AsRef<Path>) -> Result<Self> {
        let main = read_table(&root.as_ref().join(Self::PATH))?;

        let overlay_path = overlay.as_ref().join(Self::PATH);
        let table = if overlay_path.exists() {
            merge_tables(main, read_table(&overlay_path)?)
        } else {
            main
        };

        Ok(Value::Table(table).try_into()?)
    }
}

fn read_table(path: &Path) -> Result<Table> {
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content.parse()?)
}

/// Merge `overlay` into `main`.
///
/// Nested tables are merged recursively, any other value in `overlay` replaces the value in
/// `main`. Keys that only exist in `overlay` are added.
#[must_use]
pub fn merge_tables(mut main: Table, overlay: Table) -> Table {
    for (key, overlay_value) in overlay {
        let merged = match (main.remove(&key), overlay_value) {
            (Some(Value::Table(main_table)), Value::Table(overlay_table)) => {
                Value::Table(merge_tables(main_table, overlay_table))
            }
            (_, overlay_value) => overlay_value,
        };

        main.insert(key, merged);
    }

    main
}
