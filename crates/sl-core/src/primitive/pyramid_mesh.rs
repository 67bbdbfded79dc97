//! Unit pyramid mesh generation

use glam::Vec3;

use super::UnitMesh;

/// Generate a unit square-base pyramid centered at the origin, y-up.
///
/// Base is a 1x1 quad at y = -0.5, apex at (0, 0.5, 0). 16 vertices (base
/// quad plus 3 per side face, for sharp normals), 6 triangles wound
/// counter-clockwise seen from outside. Extent is 0.5 on every axis; the
/// solid's dimensions are applied as a component-wise scale when the mesh
/// is allocated.
pub fn generate_unit_pyramid() -> UnitMesh {
    const H: f32 = 0.5;

    let apex = Vec3::new(0.0, H, 0.0);
    let base = [
        Vec3::new(-H, -H, -H),
        Vec3::new(-H, -H, H),
        Vec3::new(H, -H, H),
        Vec3::new(H, -H, -H),
    ];

    let mut mesh = UnitMesh::default();

    // Base quad, facing down
    for corner in [base[0], base[3], base[2], base[1]] {
        mesh.positions.push(corner);
        mesh.normals.push(Vec3::NEG_Y);
    }
    mesh.indices.extend_from_slice(&[0, 1, 2, 0, 2, 3]);

    // Side faces, one triangle per base edge
    for i in 0..4 {
        let a = base[i];
        let b = base[(i + 1) % 4];
        let normal = (b - a).cross(apex - a).normalize();
        let first = mesh.positions.len() as u32;
        for corner in [a, b, apex] {
            mesh.positions.push(corner);
            mesh.normals.push(normal);
        }
        mesh.indices
            .extend_from_slice(&[first, first + 1, first + 2]);
    }

    mesh
}
