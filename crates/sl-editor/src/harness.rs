//! Headless harness for programmatic editing sessions
//!
//! Wraps an [`EditorSession`] and a [`HeadlessBackend`] and exposes
//! gesture-level helpers, so tests and the demo binary drive complete
//! interactions without a renderer.

use glam::{Vec2, Vec3};
use uuid::Uuid;

use sl_core::MeshHandle;

use crate::config::EditorConfig;
use crate::error::EditorResult;
use crate::headless::{HeadlessBackend, MeshRole};
use crate::mode::EditorMode;
use crate::scene::PickHit;
use crate::session::EditorSession;

/// Editing session plus scripted backend
#[derive(Debug, Default)]
pub struct EditorHarness {
    pub session: EditorSession,
    pub backend: HeadlessBackend,
}

impl EditorHarness {
    /// Screen position used for scripted picks; the pick result is queued,
    /// so the coordinates themselves never matter
    const SCREEN: Vec2 = Vec2::ZERO;

    /// Create a harness with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a harness with the given configuration
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            session: EditorSession::with_config(config),
            backend: HeadlessBackend::new(),
        }
    }

    // ── Gestures ──────────────────────────────────────────────

    /// Switch the interaction mode
    pub fn set_mode(&mut self, mode: EditorMode) -> EditorResult<()> {
        self.session.set_mode(mode, &mut self.backend)
    }

    /// Press on the ground plane at (x, z)
    pub fn press_ground(&mut self, x: f32, z: f32) -> EditorResult<()> {
        self.backend.queue_pick(PickHit::ground(Vec3::new(x, 0.0, z)));
        self.session.pointer_down(Self::SCREEN, &mut self.backend)
    }

    /// Press on a mesh at a world position
    pub fn press_mesh(&mut self, handle: MeshHandle, position: Vec3) -> EditorResult<()> {
        self.backend.queue_pick(PickHit::mesh(handle, position));
        self.session.pointer_down(Self::SCREEN, &mut self.backend)
    }

    /// Move the pointer with a scripted hit
    pub fn move_with(&mut self, hit: PickHit) -> EditorResult<()> {
        self.backend.queue_pick(hit);
        self.session.pointer_move(Self::SCREEN, &mut self.backend)
    }

    /// Move the pointer with a pick miss
    pub fn move_miss(&mut self) -> EditorResult<()> {
        self.backend.queue_miss();
        self.session.pointer_move(Self::SCREEN, &mut self.backend)
    }

    /// Release the pointer
    pub fn release(&mut self) {
        self.session.pointer_up();
    }

    /// Extrude the current draft
    pub fn extrude(&mut self) -> EditorResult<Uuid> {
        self.session.extrude(&mut self.backend)
    }

    // ── Canned sketches ───────────────────────────────────────

    /// Enter Draw, sketch a 2x2 right triangle, extrude a pyramid
    pub fn quick_pyramid(&mut self) -> EditorResult<Uuid> {
        self.set_mode(EditorMode::Draw)?;
        self.press_ground(0.0, 0.0)?;
        self.press_ground(2.0, 0.0)?;
        self.press_ground(0.0, 2.0)?;
        self.extrude()
    }

    /// Enter Draw, sketch a unit square, extrude a cuboid
    pub fn quick_cuboid(&mut self) -> EditorResult<Uuid> {
        self.set_mode(EditorMode::Draw)?;
        self.press_ground(0.0, 0.0)?;
        self.press_ground(1.0, 0.0)?;
        self.press_ground(1.0, 1.0)?;
        self.press_ground(0.0, 1.0)?;
        self.extrude()
    }

    // ── Inspection ────────────────────────────────────────────

    /// Number of registered solids
    pub fn solid_count(&self) -> usize {
        self.session.registry.len()
    }

    /// Number of live vertex markers
    pub fn marker_count(&self) -> usize {
        self.session.overlay.len()
    }

    /// Number of live marker meshes in the backend (draft points included)
    pub fn marker_mesh_count(&self) -> usize {
        self.backend.count_of(MeshRole::Marker)
    }

    /// Number of live polyline meshes in the backend
    pub fn line_mesh_count(&self) -> usize {
        self.backend.count_of(MeshRole::Line)
    }
}
