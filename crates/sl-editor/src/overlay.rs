//! Vertex marker overlay
//!
//! Derived, regenerable edit handles for the vertices of registered
//! solids. The overlay is never authoritative: markers are rebuilt from
//! the registry wholesale and resynced from vertex buffers by index.

use glam::Vec3;
use uuid::Uuid;

use sl_core::{MeshHandle, Solid};

use crate::registry::ShapeRegistry;
use crate::scene::{SceneBackend, SceneResult};

/// A disposable edit handle bound to one vertex of a solid.
///
/// Identity is the structured (owner, vertex index) pair. The scene mesh
/// is parented to the owner's mesh, so its world position is the owner's
/// transform applied to the local position.
#[derive(Debug, Clone, Copy)]
pub struct VertexMarker {
    pub owner: Uuid,
    pub vertex_index: usize,
    pub handle: MeshHandle,
    /// Vertex position local to the owning solid
    pub local_position: Vec3,
}

impl VertexMarker {
    /// World-space position of the marker given its owning solid
    pub fn world_position(&self, solid: &Solid) -> Vec3 {
        solid.transform().transform_point3(self.local_position)
    }
}

/// The full set of vertex markers, regenerated whenever vertex editing
/// begins and disposed whenever the mode changes.
#[derive(Debug, Default)]
pub struct MarkerOverlay {
    markers: Vec<VertexMarker>,
}

impl MarkerOverlay {
    /// Create an empty overlay
    pub fn new() -> Self {
        Self::default()
    }

    /// All markers, one per vertex per eligible solid
    pub fn markers(&self) -> &[VertexMarker] {
        &self.markers
    }

    /// Number of live markers
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Check if the overlay holds no markers
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Find the marker backed by the given scene mesh
    pub fn by_handle(&self, handle: MeshHandle) -> Option<&VertexMarker> {
        self.markers.iter().find(|m| m.handle == handle)
    }

    /// Dispose every marker
    pub fn clear(&mut self, backend: &mut dyn SceneBackend) -> SceneResult<()> {
        for marker in self.markers.drain(..) {
            backend.dispose_mesh(marker.handle)?;
        }
        Ok(())
    }

    /// Dispose all markers and create a fresh set for every eligible solid
    /// in the registry, in registration and vertex order.
    pub fn regenerate(
        &mut self,
        registry: &ShapeRegistry,
        diameter: f32,
        backend: &mut dyn SceneBackend,
    ) -> SceneResult<()> {
        self.clear(backend)?;
        for solid in registry.solids() {
            if !solid.kind.supports_vertex_edit() {
                continue;
            }
            for (index, vertex) in solid.vertices.iter().enumerate() {
                let handle = backend.create_marker_mesh(*vertex, diameter, Some(solid.handle))?;
                self.markers.push(VertexMarker {
                    owner: solid.id,
                    vertex_index: index,
                    handle,
                    local_position: *vertex,
                });
            }
        }
        Ok(())
    }

    /// Re-read vertex positions for one solid's markers after a mutation.
    ///
    /// Correspondence is positional (marker i <-> vertex i), fixed at
    /// regeneration time and never reordered.
    pub fn sync_solid(&mut self, solid: &Solid, backend: &mut dyn SceneBackend) -> SceneResult<()> {
        for marker in self.markers.iter_mut().filter(|m| m.owner == solid.id) {
            if let Some(vertex) = solid.vertices.get(marker.vertex_index) {
                marker.local_position = *vertex;
                backend.set_local_position(marker.handle, *vertex)?;
            }
        }
        Ok(())
    }
}
