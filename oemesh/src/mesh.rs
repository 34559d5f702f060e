//! Mesh hierarchy section
//!
//! # Layout
//! ```text
//! MeshArray := count:u32 Mesh[count]
//! Mesh      := parent:i32 Transform origin:Vec3 name:String size:IVec3 tex_coords:IVec2[6]
//! ```
//!
//! Meshes form a forest stored in one flat array. A mesh may only name an
//! earlier mesh as its parent, so the hierarchy is acyclic by construction
//! and can be resolved in a single left-to-right pass.

use std::borrow::Cow;

use crate::cursor::ByteCursor;
use crate::error::{OeMeshError, Result};
use crate::primitives::{
    IVec2, IVec3, TRANSFORM_SIZE, Transform, Vec3, read_i32, read_ivec2, read_ivec3,
    read_string, read_transform, read_u32, read_vec3,
};

/// Number of faces on a box mesh
pub const FACE_COUNT: usize = 6;

/// Stream value meaning "no parent"
pub const NO_PARENT: i32 = -1;

/// Smallest possible serialized mesh (empty name)
pub(crate) const MIN_MESH_SIZE: usize = 4 + TRANSFORM_SIZE + 12 + 4 + 12 + FACE_COUNT * 8;

/// Cuboid face, in stream order
///
/// Per-face arrays (mesh texture coordinates, frame coordinate changes) are
/// indexed by this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front = 0,
    Back = 1,
    Left = 2,
    Right = 3,
    Top = 4,
    Bottom = 5,
}

impl Face {
    pub const ALL: [Face; FACE_COUNT] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
            Face::Left => "left",
            Face::Right => "right",
            Face::Top => "top",
            Face::Bottom => "bottom",
        }
    }
}

/// One rigid cuboid node
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Name bytes exactly as stored; not guaranteed to be UTF-8
    pub name: Vec<u8>,
    /// Index of the parent mesh in the model's mesh array, always lower than this mesh's own index
    pub parent: Option<usize>,
    pub transform: Transform,
    /// Pivot offset of the cuboid relative to its transform
    pub origin: Vec3,
    /// Cuboid size in texture pixels (width, height, depth)
    pub size: IVec3,
    /// Atlas coordinates of each face, indexed by [`Face`]
    pub tex_coords: [IVec2; FACE_COUNT],
}

impl Mesh {
    /// Name for display, with invalid UTF-8 replaced
    pub fn name_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    #[inline]
    pub fn tex_coord(&self, face: Face) -> IVec2 {
        self.tex_coords[face.index()]
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Resolve a stream parent value for the mesh at `index`
///
/// Only [`NO_PARENT`] or the index of an earlier mesh is accepted.
pub fn resolve_parent(index: usize, raw: i32, count: u32) -> Result<Option<usize>> {
    if raw == NO_PARENT {
        return Ok(None);
    }
    match usize::try_from(raw) {
        Ok(parent) if parent < index => Ok(Some(parent)),
        _ => Err(OeMeshError::InvalidReference {
            mesh: index,
            parent: raw,
            count,
        }),
    }
}

fn read_mesh(cursor: &mut ByteCursor<'_>, index: usize, count: u32) -> Result<Mesh> {
    let parent = resolve_parent(index, read_i32(cursor)?, count)?;
    let transform = read_transform(cursor)?;
    let origin = read_vec3(cursor)?;
    let name = read_string(cursor)?;
    let size = read_ivec3(cursor)?;

    let mut tex_coords = [IVec2::ZERO; FACE_COUNT];
    for coord in &mut tex_coords {
        *coord = read_ivec2(cursor)?;
    }

    tracing::trace!(index, name = %String::from_utf8_lossy(&name), ?parent, "read mesh");

    Ok(Mesh {
        name,
        parent,
        transform,
        origin,
        size,
        tex_coords,
    })
}

/// Read the mesh array section
pub fn read_meshes(cursor: &mut ByteCursor<'_>) -> Result<Vec<Mesh>> {
    let count = read_u32(cursor)?;
    let mut meshes = cursor.alloc_records(count as usize, MIN_MESH_SIZE)?;

    for index in 0..count as usize {
        meshes.push(read_mesh(cursor, index, count)?);
    }

    Ok(meshes)
}
