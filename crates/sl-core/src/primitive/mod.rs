//! Canonical unit-primitive mesh generation
//!
//! Generates positions, normals, and indices for the solid kinds:
//! - Box (unit cube, scaled into a cuboid)
//! - Pyramid (unit square-base pyramid)
//!
//! Meshes are y-up with the ground plane spanning x/z, centered at the
//! origin with extent 0.5 on each axis; backends apply the solid's
//! dimension scale when allocating the mesh.

mod box_mesh;
mod pyramid_mesh;

pub use box_mesh::generate_unit_box;
pub use pyramid_mesh::generate_unit_pyramid;

use glam::Vec3;

use crate::solid::SolidKind;

/// Mesh data: positions, per-face normals, and triangle indices
#[derive(Debug, Clone, Default)]
pub struct UnitMesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl UnitMesh {
    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Positions scaled component-wise by the given dimensions
    pub fn scaled_positions(&self, dimensions: Vec3) -> Vec<Vec3> {
        self.positions.iter().map(|p| *p * dimensions).collect()
    }
}

/// Flatten vertex positions into interleaved x/y/z floats
pub fn flatten_positions(positions: &[Vec3]) -> Vec<f32> {
    bytemuck::cast_slice(positions).to_vec()
}

/// Rebuild vertex positions from interleaved x/y/z floats
pub fn positions_from_flat(data: &[f32]) -> Vec<Vec3> {
    data.chunks_exact(3)
        .map(|c| Vec3::new(c[0], c[1], c[2]))
        .collect()
}

/// Generate the canonical unit mesh for a solid kind
pub fn unit_mesh(kind: SolidKind) -> UnitMesh {
    match kind {
        SolidKind::Pyramid => generate_unit_pyramid(),
        SolidKind::Cuboid => generate_unit_box(),
    }
}
