//! Scene backend boundary
//!
//! The narrow interface through which the interaction core reaches the
//! rendering engine: surface picking, mesh allocation and disposal, and
//! whole-buffer vertex access. Everything behind this trait (scene graph,
//! camera, ray-casting, tessellation, render loop) is an external
//! collaborator.

use glam::{Vec2, Vec3};
use thiserror::Error;

use sl_core::{MeshHandle, SolidKind};

/// Error type for scene backend operations
#[derive(Debug, Clone, Error)]
pub enum SceneError {
    #[error("unknown mesh handle {0:?}")]
    UnknownHandle(MeshHandle),

    #[error("vertex buffer has {got} floats, expected {expected}")]
    BufferSizeMismatch { expected: usize, got: usize },
}

/// Result type for scene backend operations
pub type SceneResult<T> = Result<T, SceneError>;

/// What a pick ray resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    /// The ground plane
    Ground,
    /// A mesh previously allocated through the backend
    Mesh(MeshHandle),
}

/// A successful pick: a world-space position and the target it landed on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub position: Vec3,
    pub target: PickTarget,
}

impl PickHit {
    /// A hit on the ground plane
    pub fn ground(position: Vec3) -> Self {
        Self {
            position,
            target: PickTarget::Ground,
        }
    }

    /// A hit on an allocated mesh
    pub fn mesh(handle: MeshHandle, position: Vec3) -> Self {
        Self {
            position,
            target: PickTarget::Mesh(handle),
        }
    }
}

/// Rendering-side services the interaction core depends on.
///
/// A miss from [`SceneBackend::pick`] is a normal negative result, never an
/// error; every other operation reports failures through [`SceneResult`].
pub trait SceneBackend {
    /// Ray-cast the scene at a screen position
    fn pick(&mut self, screen: Vec2) -> Option<PickHit>;

    /// Allocate the mesh for an extruded solid. The backend scales its
    /// canonical primitive by `dimensions` and places it at `position` with
    /// the given yaw.
    fn create_solid_mesh(
        &mut self,
        kind: SolidKind,
        dimensions: Vec3,
        position: Vec3,
        rotation: f32,
    ) -> SceneResult<MeshHandle>;

    /// Allocate a marker mesh, optionally parented to another mesh (in
    /// which case `position` is local to the parent)
    fn create_marker_mesh(
        &mut self,
        position: Vec3,
        diameter: f32,
        parent: Option<MeshHandle>,
    ) -> SceneResult<MeshHandle>;

    /// Allocate a polyline through the given world-space points
    fn create_polyline(&mut self, points: &[Vec3]) -> SceneResult<MeshHandle>;

    /// Move a mesh within its parent space
    fn set_local_position(&mut self, handle: MeshHandle, position: Vec3) -> SceneResult<()>;

    /// Release a mesh and everything the renderer holds for it
    fn dispose_mesh(&mut self, handle: MeshHandle) -> SceneResult<()>;

    /// Read a mesh's whole vertex buffer (interleaved x/y/z floats)
    fn read_vertex_buffer(&self, handle: MeshHandle) -> SceneResult<Vec<f32>>;

    /// Replace a mesh's whole vertex buffer (interleaved x/y/z floats).
    /// Partial updates are not supported; callers write the full buffer.
    fn write_vertex_buffer(&mut self, handle: MeshHandle, data: &[f32]) -> SceneResult<()>;
}
