//! Texture atlas section
//!
//! # Layout
//! ```text
//! 0x00: width i32   (must be > 0)
//! 0x04: height i32  (must be > 0)
//! 0x08: pixels      (width × height × 4 bytes, RGBA8, row-major)
//! ```

use crate::cursor::ByteCursor;
use crate::error::{OeMeshError, Result};
use crate::primitives::{RGBA8_SIZE, Rgba8, read_i32};

/// Decoded texture atlas
///
/// Pixels are stored exactly as they appear in the stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub width: i32,
    pub height: i32,
    pub pixels: Vec<Rgba8>,
}

impl Texture {
    /// Pixel at column `x`, row `y`, or `None` when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        let (w, h) = (self.width as u32, self.height as u32);
        if x >= w || y >= h {
            return None;
        }
        self.pixels.get(y as usize * w as usize + x as usize).copied()
    }

    /// Raw RGBA8 bytes, ready for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Number of pixels for the given dimensions, rejecting non-positive or unaddressable sizes
pub fn pixel_count(width: i32, height: i32) -> Result<usize> {
    let invalid = || OeMeshError::InvalidTextureSize { width, height };

    if width <= 0 || height <= 0 {
        return Err(invalid());
    }
    let count = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(invalid)?;
    count.checked_mul(RGBA8_SIZE).ok_or_else(invalid)?;
    Ok(count)
}

/// Read the texture section
pub fn read_texture(cursor: &mut ByteCursor<'_>) -> Result<Texture> {
    let width = read_i32(cursor)?;
    let height = read_i32(cursor)?;
    let count = pixel_count(width, height)?;

    // Bounds check before allocating so a short buffer never triggers a large reservation
    let bytes = cursor.read(count * RGBA8_SIZE)?;

    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(count)
        .map_err(|_| OeMeshError::AllocationFailure { requested: count })?;
    pixels.extend_from_slice(bytemuck::cast_slice::<u8, Rgba8>(bytes));

    tracing::trace!(width, height, "read texture");

    Ok(Texture {
        width,
        height,
        pixels,
    })
}
