//! Extruded solid data model

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::DEFAULT_COLOR;

/// Identifier for a mesh allocated by the scene layer.
///
/// Opaque to the core; only the scene backend that issued it can resolve it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MeshHandle(pub u64);

/// Kind of extruded solid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolidKind {
    Pyramid,
    Cuboid,
}

impl SolidKind {
    /// Get the display name of the kind
    pub fn display_name(&self) -> &'static str {
        match self {
            SolidKind::Pyramid => "Pyramid",
            SolidKind::Cuboid => "Cuboid",
        }
    }

    /// Kind synthesized from a draft of the given point count
    pub fn from_point_count(count: usize) -> Option<SolidKind> {
        match count {
            3 => Some(SolidKind::Pyramid),
            4 => Some(SolidKind::Cuboid),
            _ => None,
        }
    }

    /// Whether solids of this kind expose per-vertex edit handles
    pub fn supports_vertex_edit(&self) -> bool {
        matches!(self, SolidKind::Pyramid | SolidKind::Cuboid)
    }
}

/// An extruded 3D solid with its live vertex buffer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solid {
    pub id: Uuid,
    pub name: String,
    pub kind: SolidKind,
    /// Centroid position in world space
    pub position: Vec3,
    /// Rotation about the vertical axis, radians
    pub rotation: f32,
    /// Width / height / depth applied to the canonical unit primitive
    pub dimensions: Vec3,
    /// Material color (RGBA)
    pub color: [f32; 4],
    /// Local-space vertex positions; length fixed at creation
    pub vertices: Vec<Vec3>,
    /// Mesh backing this solid in the scene layer
    #[serde(skip)]
    pub handle: MeshHandle,
}

impl Solid {
    /// Create a solid from its synthesis results
    pub fn new(
        name: impl Into<String>,
        kind: SolidKind,
        position: Vec3,
        rotation: f32,
        dimensions: Vec3,
        handle: MeshHandle,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            position,
            rotation,
            dimensions,
            color: DEFAULT_COLOR,
            vertices: Vec::new(),
            handle,
        }
    }

    /// Number of vertices in the live buffer
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Local-to-world transform (yaw about the vertical axis, then
    /// translation; the dimension scale is baked into the vertex buffer)
    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(Quat::from_rotation_y(self.rotation), self.position)
    }

    /// World-space position of a vertex, if the index is in range
    pub fn vertex_world_position(&self, index: usize) -> Option<Vec3> {
        self.vertices
            .get(index)
            .map(|v| self.transform().transform_point3(*v))
    }
}
