//! Model assembly: header check and section sequencing
//!
//! # Layout
//! ```text
//! Model := magic:String(=="oemesh") version:u8 Texture MeshArray AnimationArray
//! ```
//!
//! Decoding moves strictly forward through the stages of [`DecodeStage`].
//! Any failure aborts the whole decode; sections already decoded are dropped
//! and no partial model is returned.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::OEMESH_MAGIC;
use crate::animation::{Animation, read_animations};
use crate::cursor::ByteCursor;
use crate::error::{OeMeshError, Result};
use crate::mesh::{Mesh, read_meshes};
use crate::primitives::{read_string_bytes, read_u8};
use crate::texture::{Texture, read_texture};

/// Progress of a decode, in the order stages complete
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DecodeStage {
    Start,
    HeaderChecked,
    TextureLoaded,
    MeshesLoaded,
    AnimationsLoaded,
}

impl fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DecodeStage::Start => "start",
            DecodeStage::HeaderChecked => "header checked",
            DecodeStage::TextureLoaded => "texture loaded",
            DecodeStage::MeshesLoaded => "meshes loaded",
            DecodeStage::AnimationsLoaded => "animations loaded",
        };
        f.write_str(name)
    }
}

/// Fully decoded box-mesh model
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Format version byte; read but not interpreted
    pub version: u8,
    pub texture: Texture,
    /// Flat mesh array; parents always precede their children
    pub meshes: Vec<Mesh>,
    pub animations: Vec<Animation>,
}

impl Model {
    /// Release the model and every array it owns
    pub fn unload(self) {
        tracing::debug!(
            meshes = self.meshes.len(),
            animations = self.animations.len(),
            "unloading model"
        );
        drop(self);
    }

    /// First mesh whose name bytes equal `name`
    pub fn find_mesh(&self, name: impl AsRef<[u8]>) -> Option<(usize, &Mesh)> {
        let name = name.as_ref();
        self.meshes.iter().enumerate().find(|(_, m)| m.name == name)
    }

    /// First animation whose name bytes equal `name`
    pub fn find_animation(&self, name: impl AsRef<[u8]>) -> Option<&Animation> {
        let name = name.as_ref();
        self.animations.iter().find(|a| a.name == name)
    }

    pub fn parent_of(&self, index: usize) -> Option<&Mesh> {
        let parent = self.meshes.get(index)?.parent?;
        self.meshes.get(parent)
    }

    /// Indices of meshes without a parent
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.meshes
            .iter()
            .enumerate()
            .filter(|(_, m)| m.parent.is_none())
            .map(|(i, _)| i)
    }

    /// Indices of the direct children of `index`
    pub fn children(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        // Children always come after their parent
        self.meshes
            .iter()
            .enumerate()
            .skip(index.saturating_add(1))
            .filter(move |(_, m)| m.parent == Some(index))
            .map(|(i, _)| i)
    }
}

/// Check the magic marker and read the version byte
fn read_header(cursor: &mut ByteCursor<'_>) -> Result<u8> {
    let magic = read_string_bytes(cursor).map_err(|_| OeMeshError::InvalidHeader)?;
    if magic != OEMESH_MAGIC.as_bytes() {
        return Err(OeMeshError::InvalidHeader);
    }
    // Any version is accepted; there is no version-specific layout yet
    read_u8(cursor)
}

fn checkpoint(cancel: Option<&AtomicBool>, stage: DecodeStage) -> Result<()> {
    match cancel {
        Some(flag) if flag.load(Ordering::Relaxed) => Err(OeMeshError::Cancelled { stage }),
        _ => Ok(()),
    }
}

fn run_stages(
    cursor: &mut ByteCursor<'_>,
    stage: &mut DecodeStage,
    cancel: Option<&AtomicBool>,
) -> Result<Model> {
    checkpoint(cancel, *stage)?;
    let version = read_header(cursor)?;
    *stage = DecodeStage::HeaderChecked;
    tracing::debug!(version, "{stage}");

    checkpoint(cancel, *stage)?;
    let texture = read_texture(cursor)?;
    *stage = DecodeStage::TextureLoaded;
    tracing::debug!(width = texture.width, height = texture.height, "{stage}");

    checkpoint(cancel, *stage)?;
    let meshes = read_meshes(cursor)?;
    *stage = DecodeStage::MeshesLoaded;
    tracing::debug!(count = meshes.len(), "{stage}");

    checkpoint(cancel, *stage)?;
    let animations = read_animations(cursor)?;
    *stage = DecodeStage::AnimationsLoaded;
    tracing::debug!(count = animations.len(), "{stage}");

    Ok(Model {
        version,
        texture,
        meshes,
        animations,
    })
}

fn decode_stages(data: &[u8], cancel: Option<&AtomicBool>) -> Result<Model> {
    let mut cursor = ByteCursor::new(data);
    let mut stage = DecodeStage::Start;

    let result = run_stages(&mut cursor, &mut stage, cancel);

    match &result {
        Err(err) => tracing::debug!(
            %stage,
            offset = cursor.position(),
            error = %err,
            "model decode failed"
        ),
        Ok(_) if !cursor.is_at_end() => {
            tracing::debug!(trailing = cursor.remaining(), "ignoring trailing bytes")
        }
        Ok(_) => {}
    }

    result
}

/// Decode a model from an in-memory buffer
///
/// Returns a complete model or the first error encountered.
///
/// # Example
/// ```ignore
/// let data = std::fs::read("snowman.oemesh")?;
/// let model = oemesh::decode_model(&data)?;
/// println!("{} meshes, {} animations", model.meshes.len(), model.animations.len());
/// ```
pub fn decode_model(data: &[u8]) -> Result<Model> {
    decode_stages(data, None)
}

/// Decode a model, checking `cancel` before each top-level stage
///
/// Fails with [`OeMeshError::Cancelled`] once the flag is observed set.
pub fn decode_model_cancellable(data: &[u8], cancel: &AtomicBool) -> Result<Model> {
    decode_stages(data, Some(cancel))
}
