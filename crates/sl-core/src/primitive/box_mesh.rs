//! Unit box mesh generation

use glam::Vec3;

use super::UnitMesh;

/// Generate a unit box centered at the origin, y-up.
///
/// 24 vertices (4 per face, for sharp per-face normals), 12 triangles
/// wound counter-clockwise seen from outside. Extent is 0.5 on every axis;
/// the solid's dimensions are applied as a component-wise scale when the
/// mesh is allocated.
pub fn generate_unit_box() -> UnitMesh {
    const H: f32 = 0.5;

    let mut mesh = UnitMesh::default();

    let mut add_face = |corners: [Vec3; 4], normal: Vec3| {
        let base = mesh.positions.len() as u32;
        for corner in corners {
            mesh.positions.push(corner);
            mesh.normals.push(normal);
        }
        // Two triangles per face
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    };

    // +X face
    add_face(
        [
            Vec3::new(H, -H, -H),
            Vec3::new(H, H, -H),
            Vec3::new(H, H, H),
            Vec3::new(H, -H, H),
        ],
        Vec3::X,
    );

    // -X face
    add_face(
        [
            Vec3::new(-H, -H, H),
            Vec3::new(-H, H, H),
            Vec3::new(-H, H, -H),
            Vec3::new(-H, -H, -H),
        ],
        Vec3::NEG_X,
    );

    // +Y face (top)
    add_face(
        [
            Vec3::new(-H, H, -H),
            Vec3::new(-H, H, H),
            Vec3::new(H, H, H),
            Vec3::new(H, H, -H),
        ],
        Vec3::Y,
    );

    // -Y face (bottom)
    add_face(
        [
            Vec3::new(-H, -H, -H),
            Vec3::new(H, -H, -H),
            Vec3::new(H, -H, H),
            Vec3::new(-H, -H, H),
        ],
        Vec3::NEG_Y,
    );

    // +Z face
    add_face(
        [
            Vec3::new(-H, -H, H),
            Vec3::new(H, -H, H),
            Vec3::new(H, H, H),
            Vec3::new(-H, H, H),
        ],
        Vec3::Z,
    );

    // -Z face
    add_face(
        [
            Vec3::new(H, -H, -H),
            Vec3::new(-H, -H, -H),
            Vec3::new(-H, H, -H),
            Vec3::new(H, H, -H),
        ],
        Vec3::NEG_Z,
    );

    mesh
}
