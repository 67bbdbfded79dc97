//! Sketchlift core: ground-plane geometry and the extruded-solid data model
//!
//! This crate provides:
//! - Geometry kernel: centroid, orientation, and solid dimension synthesis
//! - The in-progress draft polygon
//! - The `Solid` data model with its live vertex buffer
//! - Canonical unit-primitive mesh generation

pub mod constants;
pub mod draft;
pub mod geometry;
pub mod primitive;
pub mod solid;

// Re-exports for convenience
pub use draft::DraftPolygon;
pub use primitive::{UnitMesh, generate_unit_box, generate_unit_pyramid, unit_mesh};
pub use solid::{MeshHandle, Solid, SolidKind};
