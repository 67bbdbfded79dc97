//! Headless scene backend
//!
//! A functional in-memory [`SceneBackend`] for tests, the demo binary, and
//! embeddings that have not wired a renderer yet. Meshes are plain records;
//! picks are scripted through an injection queue since there is no camera
//! to ray-cast against.

use std::collections::{HashMap, VecDeque};

use glam::{Vec2, Vec3};

use sl_core::{MeshHandle, SolidKind, primitive};

use crate::scene::{PickHit, SceneBackend, SceneError, SceneResult};

/// What a headless mesh was allocated for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshRole {
    Solid,
    Marker,
    Line,
}

/// In-memory record of an allocated mesh
#[derive(Debug, Clone)]
pub struct MeshRecord {
    pub role: MeshRole,
    pub parent: Option<MeshHandle>,
    /// Position local to the parent (world if unparented)
    pub local_position: Vec3,
    /// Yaw about the vertical axis, radians
    pub rotation: f32,
    /// Interleaved x/y/z vertex positions
    pub positions: Vec<f32>,
}

/// Scene backend without a GPU behind it
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    meshes: HashMap<MeshHandle, MeshRecord>,
    next_handle: u64,
    queued_picks: VecDeque<Option<PickHit>>,
}

impl HeadlessBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result of the next `pick` call
    pub fn queue_pick(&mut self, hit: PickHit) {
        self.queued_picks.push_back(Some(hit));
    }

    /// Queue a miss for the next `pick` call
    pub fn queue_miss(&mut self) {
        self.queued_picks.push_back(None);
    }

    /// Look up a live mesh record
    pub fn mesh(&self, handle: MeshHandle) -> Option<&MeshRecord> {
        self.meshes.get(&handle)
    }

    /// Check whether a handle refers to a live mesh
    pub fn is_alive(&self, handle: MeshHandle) -> bool {
        self.meshes.contains_key(&handle)
    }

    /// Number of live meshes
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Number of live meshes with the given role
    pub fn count_of(&self, role: MeshRole) -> usize {
        self.meshes.values().filter(|m| m.role == role).count()
    }

    fn allocate(&mut self, record: MeshRecord) -> MeshHandle {
        let handle = MeshHandle(self.next_handle);
        self.next_handle += 1;
        self.meshes.insert(handle, record);
        handle
    }
}

impl SceneBackend for HeadlessBackend {
    fn pick(&mut self, _screen: Vec2) -> Option<PickHit> {
        self.queued_picks.pop_front().flatten()
    }

    fn create_solid_mesh(
        &mut self,
        kind: SolidKind,
        dimensions: Vec3,
        position: Vec3,
        rotation: f32,
    ) -> SceneResult<MeshHandle> {
        let mesh = primitive::unit_mesh(kind);
        let positions = primitive::flatten_positions(&mesh.scaled_positions(dimensions));
        Ok(self.allocate(MeshRecord {
            role: MeshRole::Solid,
            parent: None,
            local_position: position,
            rotation,
            positions,
        }))
    }

    fn create_marker_mesh(
        &mut self,
        position: Vec3,
        _diameter: f32,
        parent: Option<MeshHandle>,
    ) -> SceneResult<MeshHandle> {
        if let Some(parent) = parent
            && !self.is_alive(parent)
        {
            return Err(SceneError::UnknownHandle(parent));
        }
        Ok(self.allocate(MeshRecord {
            role: MeshRole::Marker,
            parent,
            local_position: position,
            rotation: 0.0,
            positions: Vec::new(),
        }))
    }

    fn create_polyline(&mut self, points: &[Vec3]) -> SceneResult<MeshHandle> {
        Ok(self.allocate(MeshRecord {
            role: MeshRole::Line,
            parent: None,
            local_position: Vec3::ZERO,
            rotation: 0.0,
            positions: primitive::flatten_positions(points),
        }))
    }

    fn set_local_position(&mut self, handle: MeshHandle, position: Vec3) -> SceneResult<()> {
        let mesh = self
            .meshes
            .get_mut(&handle)
            .ok_or(SceneError::UnknownHandle(handle))?;
        mesh.local_position = position;
        Ok(())
    }

    fn dispose_mesh(&mut self, handle: MeshHandle) -> SceneResult<()> {
        self.meshes
            .remove(&handle)
            .map(|_| ())
            .ok_or(SceneError::UnknownHandle(handle))
    }

    fn read_vertex_buffer(&self, handle: MeshHandle) -> SceneResult<Vec<f32>> {
        self.meshes
            .get(&handle)
            .map(|m| m.positions.clone())
            .ok_or(SceneError::UnknownHandle(handle))
    }

    fn write_vertex_buffer(&mut self, handle: MeshHandle, data: &[f32]) -> SceneResult<()> {
        let mesh = self
            .meshes
            .get_mut(&handle)
            .ok_or(SceneError::UnknownHandle(handle))?;
        if data.len() != mesh.positions.len() {
            return Err(SceneError::BufferSizeMismatch {
                expected: mesh.positions.len(),
                got: data.len(),
            });
        }
        mesh.positions.copy_from_slice(data);
        Ok(())
    }
}
