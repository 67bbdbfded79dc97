//! Global constants for sl-core

/// Elevation of an extruded solid's centroid above the ground plane
pub const SOLID_ELEVATION: f32 = 1.0;

/// Fixed height of every extruded solid (base rests on the ground plane)
pub const SOLID_HEIGHT: f32 = 2.0;

/// Elevation of draft points picked on the ground plane
pub const DRAFT_ELEVATION: f32 = 0.0;

/// Default color for solids before a material color is assigned (RGBA)
pub const DEFAULT_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
