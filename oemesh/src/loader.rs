//! File loading helpers
//!
//! Reads a whole file into memory and hands it to [`decode_model`]; no
//! parsing happens here.

use std::path::Path;

use crate::error::{OeMeshError, Result};
use crate::model::{Model, decode_model};

/// Default cap on model file size.
pub const MAX_MODEL_BYTES: u64 = 256 * 1024 * 1024; // 256 MiB

/// Read a file into memory with a size cap.
pub fn read_file_with_limit(path: &Path, max_bytes: u64) -> Result<Vec<u8>> {
    let io_err = |source| OeMeshError::IoUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let len = std::fs::metadata(path).map_err(io_err)?.len();
    if len > max_bytes {
        return Err(OeMeshError::TooLarge {
            size: len,
            max: max_bytes,
        });
    }
    std::fs::read(path).map_err(io_err)
}

/// Load and decode a model file, rejecting files larger than `max_bytes`.
pub fn load_model_from_file_with_limit(path: impl AsRef<Path>, max_bytes: u64) -> Result<Model> {
    let path = path.as_ref();
    let data = read_file_with_limit(path, max_bytes)?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "loading model");
    decode_model(&data)
}

/// Load and decode a model file using [`MAX_MODEL_BYTES`] as the size cap.
pub fn load_model_from_file(path: impl AsRef<Path>) -> Result<Model> {
    load_model_from_file_with_limit(path, MAX_MODEL_BYTES)
}
