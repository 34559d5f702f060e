//! oemesh decoding error types

use std::path::PathBuf;

use crate::model::DecodeStage;

/// Errors produced while loading or decoding an oemesh model
#[derive(Debug, thiserror::Error)]
pub enum OeMeshError {
    /// File could not be opened or read
    #[error("failed to read {}: {source}", path.display())]
    IoUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size cap
    #[error("file too large: {size} bytes (max {max} bytes)")]
    TooLarge { size: u64, max: u64 },

    /// A read would run past the end of the buffer
    #[error("truncated data at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    Truncated {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// Magic marker missing or mismatched
    #[error("invalid header: expected \"{}\" marker", crate::OEMESH_MAGIC)]
    InvalidHeader,

    /// Mesh parent index is self-referential, forward-referencing or out of range
    #[error("mesh {mesh} has invalid parent {parent} ({count} meshes)")]
    InvalidReference { mesh: usize, parent: i32, count: u32 },

    /// Texture dimensions are non-positive or too large to address
    #[error("invalid texture size {width}x{height}")]
    InvalidTextureSize { width: i32, height: i32 },

    /// Memory for an array could not be reserved
    #[error("failed to allocate {requested} elements")]
    AllocationFailure { requested: usize },

    /// Decode was cancelled; `stage` is the last stage that completed
    #[error("decode cancelled after {stage}")]
    Cancelled { stage: DecodeStage },
}

pub type Result<T, E = OeMeshError> = std::result::Result<T, E>;
