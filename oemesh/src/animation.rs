//! Animation clip section
//!
//! # Layout
//! ```text
//! AnimationArray := count:u32 Animation[count]
//! Animation      := name:String frame_count:u32 Frame[frame_count]
//! Frame          := duration:f32 mesh_count:u32 FrameMesh[mesh_count]
//! FrameMesh      := Transform FaceChange[6]
//! FaceChange     := has_change:bool (x:i32 y:i32)?
//! ```
//!
//! Frame mesh slots are positional. Slot `k` is the `k`-th animated mesh of
//! that frame; mapping a slot onto a mesh of the model is left to the caller.

use std::borrow::Cow;

use crate::cursor::ByteCursor;
use crate::error::Result;
use crate::mesh::{FACE_COUNT, Face};
use crate::primitives::{
    TRANSFORM_SIZE, Transform, read_bool, read_f32, read_i32, read_string, read_transform,
    read_u32,
};

/// Smallest possible serialized animation (empty name, no frames)
pub(crate) const MIN_ANIMATION_SIZE: usize = 4 + 4;
/// Smallest possible serialized frame (no meshes)
pub(crate) const MIN_FRAME_SIZE: usize = 4 + 4;
/// Smallest possible serialized frame mesh (every face unchanged)
pub(crate) const MIN_FRAME_MESH_SIZE: usize = TRANSFORM_SIZE + FACE_COUNT;

/// Optional per-face atlas coordinate override
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CoordChange {
    /// Face keeps the mesh's base coordinates
    #[default]
    Unchanged,
    Changed { x: i32, y: i32 },
}

impl CoordChange {
    #[inline]
    pub fn is_changed(&self) -> bool {
        matches!(self, CoordChange::Changed { .. })
    }

    /// Serialized size in bytes
    #[inline]
    pub fn encoded_size(&self) -> usize {
        match self {
            CoordChange::Unchanged => 1,
            CoordChange::Changed { .. } => 1 + 8,
        }
    }
}

/// Transform and coordinate delta for one animated mesh slot
#[derive(Debug, Clone, PartialEq)]
pub struct FrameMesh {
    pub transform: Transform,
    /// Indexed by [`Face`]
    pub face_changes: [CoordChange; FACE_COUNT],
}

impl FrameMesh {
    #[inline]
    pub fn face_change(&self, face: Face) -> CoordChange {
        self.face_changes[face.index()]
    }
}

/// One keyframe
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Duration in seconds
    pub duration: f32,
    pub meshes: Vec<FrameMesh>,
}

/// Named animation clip; frames are in playback order
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    /// Name bytes exactly as stored; not guaranteed to be UTF-8
    pub name: Vec<u8>,
    pub frames: Vec<Frame>,
}

impl Animation {
    /// Name for display, with invalid UTF-8 replaced
    pub fn name_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    /// Total clip length in seconds
    pub fn duration(&self) -> f32 {
        self.frames.iter().map(|f| f.duration).sum()
    }
}

pub fn read_coord_change(cursor: &mut ByteCursor<'_>) -> Result<CoordChange> {
    if !read_bool(cursor)? {
        return Ok(CoordChange::Unchanged);
    }
    let x = read_i32(cursor)?;
    let y = read_i32(cursor)?;
    Ok(CoordChange::Changed { x, y })
}

pub fn read_frame_mesh(cursor: &mut ByteCursor<'_>) -> Result<FrameMesh> {
    let transform = read_transform(cursor)?;

    let mut face_changes = [CoordChange::Unchanged; FACE_COUNT];
    for change in &mut face_changes {
        *change = read_coord_change(cursor)?;
    }

    Ok(FrameMesh {
        transform,
        face_changes,
    })
}

fn read_frame(cursor: &mut ByteCursor<'_>) -> Result<Frame> {
    let duration = read_f32(cursor)?;
    let count = read_u32(cursor)? as usize;

    let mut meshes = cursor.alloc_records(count, MIN_FRAME_MESH_SIZE)?;
    for _ in 0..count {
        meshes.push(read_frame_mesh(cursor)?);
    }

    Ok(Frame { duration, meshes })
}

fn read_animation(cursor: &mut ByteCursor<'_>) -> Result<Animation> {
    let name = read_string(cursor)?;
    let count = read_u32(cursor)? as usize;

    let mut frames = cursor.alloc_records(count, MIN_FRAME_SIZE)?;
    for _ in 0..count {
        frames.push(read_frame(cursor)?);
    }

    tracing::trace!(name = %String::from_utf8_lossy(&name), frames = count, "read animation");

    Ok(Animation { name, frames })
}

/// Read the animation array section
pub fn read_animations(cursor: &mut ByteCursor<'_>) -> Result<Vec<Animation>> {
    let count = read_u32(cursor)? as usize;

    let mut animations = cursor.alloc_records(count, MIN_ANIMATION_SIZE)?;
    for _ in 0..count {
        animations.push(read_animation(cursor)?);
    }

    Ok(animations)
}
