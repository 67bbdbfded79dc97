//! Shape registry: owner of every extruded solid

use glam::Vec3;
use uuid::Uuid;

use sl_core::{MeshHandle, Solid, primitive};

use crate::error::{EditorError, EditorResult};
use crate::scene::SceneBackend;

/// Insertion-ordered store of extruded solids.
///
/// The registry is the exclusive mutator of every solid's vertex buffer;
/// readers (overlay, renderer) always observe the latest committed state.
#[derive(Debug, Default)]
pub struct ShapeRegistry {
    solids: Vec<Solid>,
}

impl ShapeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a solid, returning its id
    pub fn register(&mut self, solid: Solid) -> Uuid {
        let id = solid.id;
        self.solids.push(solid);
        id
    }

    /// Number of registered solids
    pub fn len(&self) -> usize {
        self.solids.len()
    }

    /// Check if no solids are registered
    pub fn is_empty(&self) -> bool {
        self.solids.is_empty()
    }

    /// All solids, in registration order
    pub fn solids(&self) -> &[Solid] {
        &self.solids
    }

    /// Get a solid by id
    pub fn get(&self, id: Uuid) -> Option<&Solid> {
        self.solids.iter().find(|s| s.id == id)
    }

    /// Get a mutable solid by id
    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Solid> {
        self.solids.iter_mut().find(|s| s.id == id)
    }

    /// Find the solid backed by the given scene mesh
    pub fn by_handle(&self, handle: MeshHandle) -> Option<&Solid> {
        self.solids.iter().find(|s| s.handle == handle)
    }

    /// Displace one vertex of a solid and write the whole buffer back.
    ///
    /// The displacement is added component-wise to the stored position and
    /// the full buffer is replaced through the backend; engines generally
    /// cannot patch a vertex buffer in place. An out-of-range index leaves
    /// the buffer untouched. No geometric validity is enforced.
    pub fn displace_vertex(
        &mut self,
        id: Uuid,
        index: usize,
        delta: Vec3,
        backend: &mut dyn SceneBackend,
    ) -> EditorResult<()> {
        let solid = self.get_mut(id).ok_or(EditorError::UnknownSolid(id))?;
        let count = solid.vertices.len();
        let Some(vertex) = solid.vertices.get_mut(index) else {
            return Err(EditorError::VertexIndexOutOfRange { index, count });
        };
        *vertex += delta;
        let flat = primitive::flatten_positions(&solid.vertices);
        backend.write_vertex_buffer(solid.handle, &flat)?;
        Ok(())
    }
}
