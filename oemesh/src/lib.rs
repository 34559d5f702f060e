//! oemesh: decoder for animated box-mesh models
//!
//! An `.oemesh` file holds one texture atlas, a hierarchy of textured cuboid
//! meshes and a set of named animation clips that replay per-mesh transform
//! and atlas coordinate changes frame by frame.
//!
//! # Format Overview
//!
//! All fields are fixed-width, native byte order, with no padding:
//!
//! ```text
//! Model          := magic:String(=="oemesh") version:u8 Texture MeshArray AnimationArray
//! String         := length:u32 bytes[length]
//! Texture        := width:i32 height:i32 Rgba8[width*height]
//! MeshArray      := count:u32 Mesh[count]
//! Mesh           := parent:i32 Transform origin:Vec3 name:String size:IVec3 IVec2[6]
//! Transform      := translation:Vec3 rotation:Quat scale:Vec3
//! AnimationArray := count:u32 Animation[count]
//! Animation      := name:String frame_count:u32 Frame[frame_count]
//! Frame          := duration:f32 mesh_count:u32 FrameMesh[mesh_count]
//! FrameMesh      := Transform FaceChange[6]
//! FaceChange     := has_change:bool (x:i32 y:i32)?
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use oemesh::{Face, load_model_from_file};
//!
//! let model = load_model_from_file("snowman.oemesh")?;
//! for root in model.roots() {
//!     let mesh = &model.meshes[root];
//!     println!("{} top face at {}", mesh.name_str(), mesh.tex_coord(Face::Top));
//! }
//! model.unload();
//! ```

mod animation;
mod cursor;
mod error;
mod loader;
mod mesh;
mod model;
mod primitives;
mod texture;

pub use animation::{
    Animation, CoordChange, Frame, FrameMesh, read_animations, read_coord_change, read_frame_mesh,
};
pub use cursor::ByteCursor;
pub use error::{OeMeshError, Result};
pub use loader::{
    MAX_MODEL_BYTES, load_model_from_file, load_model_from_file_with_limit, read_file_with_limit,
};
pub use mesh::{FACE_COUNT, Face, Mesh, NO_PARENT, read_meshes, resolve_parent};
pub use model::{DecodeStage, Model, decode_model, decode_model_cancellable};
pub use primitives::{
    IVec2, IVec3, Quat, RGBA8_SIZE, Rgba8, TRANSFORM_SIZE, Transform, Vec3, read_bool, read_f32,
    read_fixed, read_i32, read_ivec2, read_ivec3, read_quat, read_string, read_string_bytes,
    read_transform, read_u8, read_u32, read_vec3,
};
pub use texture::{Texture, pixel_count, read_texture};

// =============================================================================
// Constants
// =============================================================================

/// Magic marker string at the start of every model
pub const OEMESH_MAGIC: &str = "oemesh";

/// File extension for model files
pub const OEMESH_EXT: &str = "oemesh";
