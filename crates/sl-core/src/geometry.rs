//! Ground-plane geometry: centroid, orientation, and solid dimension synthesis

use glam::Vec3;

use crate::constants::{SOLID_ELEVATION, SOLID_HEIGHT};

/// Centroid of a set of ground points.
///
/// Arithmetic mean of the x and z coordinates; y is fixed at
/// [`SOLID_ELEVATION`] so a solid placed here sits on the ground plane.
pub fn centroid(points: &[Vec3]) -> Vec3 {
    if points.is_empty() {
        return Vec3::new(0.0, SOLID_ELEVATION, 0.0);
    }
    let n = points.len() as f32;
    let x = points.iter().map(|p| p.x).sum::<f32>() / n;
    let z = points.iter().map(|p| p.z).sum::<f32>() / n;
    Vec3::new(x, SOLID_ELEVATION, z)
}

/// Yaw angle (rotation about the vertical axis) of the `from` → `to`
/// direction, in radians.
pub fn yaw_between(from: Vec3, to: Vec3) -> f32 {
    (to.z - from.z).atan2(to.x - from.x)
}

/// Dimensions of a pyramid spanning three ordered ground points.
///
/// Base width = |p1 p2|, base depth = |p1 p3|, height fixed at
/// [`SOLID_HEIGHT`]. The canonical unit pyramid scaled by these dimensions
/// approximates the sketched triangle; its vertices do not coincide with
/// the input points.
pub fn pyramid_dimensions(points: &[Vec3; 3]) -> Vec3 {
    Vec3::new(
        points[0].distance(points[1]),
        SOLID_HEIGHT,
        points[0].distance(points[2]),
    )
}

/// Dimensions of a cuboid spanning four ordered ground points.
///
/// Width = max of the two "horizontal" edge lengths, depth = max of the two
/// "vertical" ones, height fixed at [`SOLID_HEIGHT`]. An axis-scaled box,
/// not a best-fit quadrilateral prism.
pub fn cuboid_dimensions(points: &[Vec3; 4]) -> Vec3 {
    let width = points[0]
        .distance(points[1])
        .max(points[2].distance(points[3]));
    let depth = points[1]
        .distance(points[2])
        .max(points[3].distance(points[0]));
    Vec3::new(width, SOLID_HEIGHT, depth)
}

/// Closed preview outline for an in-progress draft.
///
/// With more than one point the outline is the point sequence with the
/// first point appended at the end; with one point or none there is no
/// outline.
pub fn preview_outline(points: &[Vec3]) -> Option<Vec<Vec3>> {
    if points.len() <= 1 {
        return None;
    }
    let mut outline = points.to_vec();
    outline.push(points[0]);
    Some(outline)
}
