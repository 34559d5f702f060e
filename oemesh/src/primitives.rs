//! Fixed-layout record and string readers
//!
//! Records are stored in native byte order with no padding between fields,
//! so every fixed-size read is a plain reinterpretation of the next
//! `size_of::<T>()` bytes.
//!
//! # Layout
//! ```text
//! Vec3      := x:f32 y:f32 z:f32                         (12 bytes)
//! Quat      := x:f32 y:f32 z:f32 w:f32                   (16 bytes)
//! IVec2     := x:i32 y:i32                               (8 bytes)
//! IVec3     := x:i32 y:i32 z:i32                         (12 bytes)
//! Rgba8     := r:u8 g:u8 b:u8 a:u8                       (4 bytes)
//! Transform := translation:Vec3 rotation:Quat scale:Vec3 (40 bytes)
//! String    := length:u32 bytes[length]
//! ```

use bytemuck::{Pod, Zeroable};
pub use glam::{IVec2, IVec3, Quat, Vec3};

use crate::cursor::ByteCursor;
use crate::error::Result;

/// Size of a serialized [`Transform`] (10 floats)
pub const TRANSFORM_SIZE: usize = 40;

/// Size of a serialized [`Rgba8`] pixel
pub const RGBA8_SIZE: usize = 4;

/// 8-bit RGBA color, one atlas pixel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a == u8::MAX
    }
}

/// Local rigid transform of a mesh node
///
/// Rotation is stored as read; it is not renormalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };
}

// =============================================================================
// Readers
// =============================================================================

/// Read `size_of::<T>()` bytes and reinterpret them as `T`
#[inline]
pub fn read_fixed<T: Pod>(cursor: &mut ByteCursor<'_>) -> Result<T> {
    let bytes = cursor.read(size_of::<T>())?;
    Ok(bytemuck::pod_read_unaligned(bytes))
}

#[inline]
pub fn read_u8(cursor: &mut ByteCursor<'_>) -> Result<u8> {
    read_fixed(cursor)
}

/// Read a one-byte flag; any non-zero value is `true`
#[inline]
pub fn read_bool(cursor: &mut ByteCursor<'_>) -> Result<bool> {
    Ok(read_u8(cursor)? != 0)
}

#[inline]
pub fn read_u32(cursor: &mut ByteCursor<'_>) -> Result<u32> {
    read_fixed(cursor)
}

#[inline]
pub fn read_i32(cursor: &mut ByteCursor<'_>) -> Result<i32> {
    read_fixed(cursor)
}

#[inline]
pub fn read_f32(cursor: &mut ByteCursor<'_>) -> Result<f32> {
    read_fixed(cursor)
}

#[inline]
pub fn read_vec3(cursor: &mut ByteCursor<'_>) -> Result<Vec3> {
    read_fixed(cursor)
}

#[inline]
pub fn read_quat(cursor: &mut ByteCursor<'_>) -> Result<Quat> {
    read_fixed(cursor)
}

#[inline]
pub fn read_ivec2(cursor: &mut ByteCursor<'_>) -> Result<IVec2> {
    read_fixed(cursor)
}

#[inline]
pub fn read_ivec3(cursor: &mut ByteCursor<'_>) -> Result<IVec3> {
    read_fixed(cursor)
}

pub fn read_transform(cursor: &mut ByteCursor<'_>) -> Result<Transform> {
    Ok(Transform {
        translation: read_vec3(cursor)?,
        rotation: read_quat(cursor)?,
        scale: read_vec3(cursor)?,
    })
}

/// Read a length-prefixed string as raw bytes, borrowed from the buffer
pub fn read_string_bytes<'a>(cursor: &mut ByteCursor<'a>) -> Result<&'a [u8]> {
    let len = read_u32(cursor)? as usize;
    cursor.read(len)
}

/// Read a length-prefixed string into an owned byte buffer
///
/// The payload is copied as-is: no encoding is assumed and no terminator is
/// added or stripped.
pub fn read_string(cursor: &mut ByteCursor<'_>) -> Result<Vec<u8>> {
    read_string_bytes(cursor).map(<[u8]>::to_vec)
}
