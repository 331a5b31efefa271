//! Raw tensor files: little-endian `f32` values without any header.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};

use crate::error::{Error, Result};

const F32_SIZE: usize = std::mem::size_of::<f32>();

/// Read all values of the tensor file at `path`.
pub fn read(path: impl AsRef<Path>) -> Result<Vec<f32>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if bytes.len() % F32_SIZE != 0 {
        return Err(Error::TruncatedTensor {
            path: path.to_path_buf(),
            len: bytes.len(),
        });
    }

    let mut values = vec![0.0; bytes.len() / F32_SIZE];
    LittleEndian::read_f32_into(&bytes, &mut values);

    Ok(values)
}

/// Write `values` to the tensor file at `path`, replacing it if it exists.
pub fn write(path: impl AsRef<Path>, values: &[f32]) -> Result<()> {
    let path = path.as_ref();
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    for &value in values {
        writer.write_f32::<LittleEndian>(value).map_err(io_error)?;
    }

    writer.flush().map_err(io_error)
}
