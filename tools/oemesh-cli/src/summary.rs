//! Serializable model summary for `oemesh dump`

use oemesh::{CoordChange, Face, Model, Transform};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ModelSummary {
    pub version: u8,
    pub texture: TextureSummary,
    pub meshes: Vec<MeshSummary>,
    pub animations: Vec<AnimationSummary>,
}

#[derive(Debug, Serialize)]
pub struct TextureSummary {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Serialize)]
pub struct TransformSummary {
    pub translation: [f32; 3],
    pub rotation: [f32; 4],
    pub scale: [f32; 3],
}

impl From<&Transform> for TransformSummary {
    fn from(t: &Transform) -> Self {
        Self {
            translation: t.translation.to_array(),
            rotation: t.rotation.to_array(),
            scale: t.scale.to_array(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MeshSummary {
    pub name: String,
    pub parent: Option<usize>,
    pub transform: TransformSummary,
    pub origin: [f32; 3],
    pub size: [i32; 3],
    /// Keyed by face name, in stream order
    pub tex_coords: Vec<(&'static str, [i32; 2])>,
}

#[derive(Debug, Serialize)]
pub struct AnimationSummary {
    pub name: String,
    pub duration: f32,
    pub frames: Vec<FrameSummary>,
}

#[derive(Debug, Serialize)]
pub struct FrameSummary {
    pub duration: f32,
    pub meshes: usize,
    /// Number of face coordinate changes across all mesh slots
    pub face_changes: usize,
}

impl From<&Model> for ModelSummary {
    fn from(model: &Model) -> Self {
        let meshes = model
            .meshes
            .iter()
            .map(|mesh| MeshSummary {
                name: mesh.name_str().into_owned(),
                parent: mesh.parent,
                transform: TransformSummary::from(&mesh.transform),
                origin: mesh.origin.to_array(),
                size: mesh.size.to_array(),
                tex_coords: Face::ALL
                    .iter()
                    .map(|&face| (face.name(), mesh.tex_coord(face).to_array()))
                    .collect(),
            })
            .collect();

        let animations = model
            .animations
            .iter()
            .map(|anim| AnimationSummary {
                name: anim.name_str().into_owned(),
                duration: anim.duration(),
                frames: anim
                    .frames
                    .iter()
                    .map(|frame| FrameSummary {
                        duration: frame.duration,
                        meshes: frame.meshes.len(),
                        face_changes: frame
                            .meshes
                            .iter()
                            .flat_map(|m| m.face_changes.iter())
                            .filter(|c| matches!(c, CoordChange::Changed { .. }))
                            .count(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            version: model.version,
            texture: TextureSummary {
                width: model.texture.width,
                height: model.texture.height,
            },
            meshes,
            animations,
        }
    }
}
