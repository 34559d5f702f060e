//! Byte-level model writer for tests
//!
//! Emits the same layout the decoder reads, one field at a time, so tests can
//! build valid models and cut them at any byte.

#![allow(dead_code)]

use oemesh::{CoordChange, FACE_COUNT, Transform};

pub struct MeshDef {
    pub parent: i32,
    pub name: Vec<u8>,
    pub transform: Transform,
    pub origin: [f32; 3],
    pub size: [i32; 3],
    pub tex_coords: [[i32; 2]; FACE_COUNT],
}

impl MeshDef {
    pub fn new(name: impl AsRef<[u8]>, parent: i32) -> Self {
        Self {
            parent,
            name: name.as_ref().to_vec(),
            transform: Transform::IDENTITY,
            origin: [0.0; 3],
            size: [8, 8, 8],
            tex_coords: [[0, 0]; FACE_COUNT],
        }
    }
}

pub struct FrameMeshDef {
    pub transform: Transform,
    pub changes: [CoordChange; FACE_COUNT],
}

pub struct FrameDef {
    pub duration: f32,
    pub meshes: Vec<FrameMeshDef>,
}

pub struct AnimationDef {
    pub name: Vec<u8>,
    pub frames: Vec<FrameDef>,
}

#[derive(Default)]
pub struct ModelWriter {
    pub buf: Vec<u8>,
}

impl ModelWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn u8(&mut self, v: u8) -> &mut Self {
        self.buf.push(v);
        self
    }

    pub fn bool(&mut self, v: bool) -> &mut Self {
        self.u8(v as u8)
    }

    pub fn u32(&mut self, v: u32) -> &mut Self {
        self.buf.extend_from_slice(&v.to_ne_bytes());
        self
    }

    pub fn i32(&mut self, v: i32) -> &mut Self {
        self.buf.extend_from_slice(&v.to_ne_bytes());
        self
    }

    pub fn f32(&mut self, v: f32) -> &mut Self {
        self.buf.extend_from_slice(&v.to_ne_bytes());
        self
    }

    pub fn string(&mut self, s: &[u8]) -> &mut Self {
        self.u32(s.len() as u32);
        self.buf.extend_from_slice(s);
        self
    }

    pub fn floats(&mut self, values: &[f32]) -> &mut Self {
        for &v in values {
            self.f32(v);
        }
        self
    }

    pub fn transform(&mut self, t: &Transform) -> &mut Self {
        self.floats(&t.translation.to_array())
            .floats(&t.rotation.to_array())
            .floats(&t.scale.to_array())
    }

    pub fn header(&mut self, version: u8) -> &mut Self {
        self.string(b"oemesh").u8(version)
    }

    pub fn texture(&mut self, width: i32, height: i32, pixels: &[[u8; 4]]) -> &mut Self {
        self.i32(width).i32(height);
        for p in pixels {
            self.buf.extend_from_slice(p);
        }
        self
    }

    pub fn mesh(&mut self, mesh: &MeshDef) -> &mut Self {
        self.i32(mesh.parent)
            .transform(&mesh.transform)
            .floats(&mesh.origin)
            .string(&mesh.name);
        for &v in &mesh.size {
            self.i32(v);
        }
        for [x, y] in mesh.tex_coords {
            self.i32(x).i32(y);
        }
        self
    }

    pub fn meshes(&mut self, meshes: &[MeshDef]) -> &mut Self {
        self.u32(meshes.len() as u32);
        for mesh in meshes {
            self.mesh(mesh);
        }
        self
    }

    pub fn coord_change(&mut self, change: CoordChange) -> &mut Self {
        match change {
            CoordChange::Unchanged => self.bool(false),
            CoordChange::Changed { x, y } => self.bool(true).i32(x).i32(y),
        }
    }

    pub fn animations(&mut self, animations: &[AnimationDef]) -> &mut Self {
        self.u32(animations.len() as u32);
        for anim in animations {
            self.string(&anim.name).u32(anim.frames.len() as u32);
            for frame in &anim.frames {
                self.f32(frame.duration).u32(frame.meshes.len() as u32);
                for fm in &frame.meshes {
                    self.transform(&fm.transform);
                    for &change in &fm.changes {
                        self.coord_change(change);
                    }
                }
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn finish(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }
}

/// Header, 1x1 white texture, a single root mesh named "root", no animations
pub fn minimal_model() -> Vec<u8> {
    ModelWriter::new()
        .header(1)
        .texture(1, 1, &[[255, 255, 255, 255]])
        .meshes(&[MeshDef::new("root", -1)])
        .animations(&[])
        .finish()
}

/// A three-mesh snowman with a two-frame "wave" clip
pub fn snowman_model() -> Vec<u8> {
    let mut body = MeshDef::new("body", -1);
    body.size = [12, 12, 12];
    body.tex_coords = [[0, 0], [12, 0], [24, 0], [36, 0], [0, 12], [12, 12]];

    let mut head = MeshDef::new("head", 0);
    head.origin = [0.0, 10.0, 0.0];
    head.transform.translation = oemesh::Vec3::new(0.0, 12.0, 0.0);

    let mut arm = MeshDef::new("arm", 0);
    arm.size = [2, 8, 2];

    let wave = AnimationDef {
        name: b"wave".to_vec(),
        frames: vec![
            FrameDef {
                duration: 0.5,
                meshes: vec![FrameMeshDef {
                    transform: Transform::IDENTITY,
                    changes: [CoordChange::Unchanged; FACE_COUNT],
                }],
            },
            FrameDef {
                duration: 0.25,
                meshes: vec![
                    FrameMeshDef {
                        transform: Transform {
                            rotation: oemesh::Quat::from_rotation_z(0.5),
                            ..Transform::IDENTITY
                        },
                        changes: [
                            CoordChange::Changed { x: 48, y: 0 },
                            CoordChange::Unchanged,
                            CoordChange::Unchanged,
                            CoordChange::Unchanged,
                            CoordChange::Unchanged,
                            CoordChange::Changed { x: 48, y: 8 },
                        ],
                    },
                    FrameMeshDef {
                        transform: Transform::IDENTITY,
                        changes: [CoordChange::Unchanged; FACE_COUNT],
                    },
                ],
            },
        ],
    };

    let pixels: Vec<[u8; 4]> = (0..64 * 32).map(|i| [(i % 256) as u8, 0, 0, 255]).collect();

    ModelWriter::new()
        .header(1)
        .texture(64, 32, &pixels)
        .meshes(&[body, head, arm])
        .animations(&[wave])
        .finish()
}
