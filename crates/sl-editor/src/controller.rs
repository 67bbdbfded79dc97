//! Pointer gesture and command handling
//!
//! Translates picks into mode-gated mutations of the session: draft
//! capture in Draw, whole-solid drags in Move, per-vertex drags in
//! VertexEdit, plus the mode-select and extrude commands. Every handler
//! runs to completion; a pick miss is always a no-op.

use glam::{Vec2, Vec3};
use tracing::{debug, info, warn};
use uuid::Uuid;

use sl_core::constants::DRAFT_ELEVATION;
use sl_core::{Solid, SolidKind, geometry, primitive};

use crate::error::{EditorError, EditorResult};
use crate::mode::EditorMode;
use crate::scene::{PickHit, PickTarget, SceneBackend};
use crate::selection::DragState;
use crate::session::EditorSession;

impl EditorSession {
    /// Switch the active mode, resetting mode-scoped state.
    ///
    /// Markers and the armed drag are dropped on every switch; entering
    /// Draw also discards the draft, and entering VertexEdit rebuilds the
    /// marker overlay for every eligible solid.
    pub fn set_mode(
        &mut self,
        mode: EditorMode,
        backend: &mut dyn SceneBackend,
    ) -> EditorResult<()> {
        self.overlay.clear(backend)?;
        self.drag = None;
        match mode {
            EditorMode::Draw => {
                self.draft.clear();
                self.clear_draft_visuals(backend)?;
            }
            EditorMode::Move => {}
            EditorMode::VertexEdit => {
                self.overlay.regenerate(
                    &self.registry,
                    self.config.vertex_marker_diameter,
                    backend,
                )?;
            }
        }
        self.mode = mode;
        info!("Mode set to {}", mode.name());
        Ok(())
    }

    /// Pick-down gesture at a screen position
    pub fn pointer_down(
        &mut self,
        screen: Vec2,
        backend: &mut dyn SceneBackend,
    ) -> EditorResult<()> {
        let Some(hit) = backend.pick(screen) else {
            return Ok(());
        };
        match self.mode {
            EditorMode::Draw => self.capture_draft_point(hit, backend),
            EditorMode::Move => {
                if let PickTarget::Mesh(handle) = hit.target
                    && let Some(solid) = self.registry.by_handle(handle)
                {
                    self.drag = Some(DragState::new(solid.id, hit.position));
                }
                Ok(())
            }
            EditorMode::VertexEdit => {
                if let PickTarget::Mesh(handle) = hit.target
                    && let Some(marker) = self.overlay.by_handle(handle)
                {
                    self.drag = Some(DragState::new(marker.owner, hit.position));
                }
                Ok(())
            }
        }
    }

    /// Pick-move gesture at a screen position.
    ///
    /// Inert without an armed drag or a successful pick. Move mode applies
    /// the displacement with the vertical component discarded; vertex-edit
    /// mode applies the full 3-axis displacement to the vertex of whatever
    /// marker the pick landed on.
    pub fn pointer_move(
        &mut self,
        screen: Vec2,
        backend: &mut dyn SceneBackend,
    ) -> EditorResult<()> {
        let Some(drag) = self.drag.as_mut() else {
            return Ok(());
        };
        let Some(hit) = backend.pick(screen) else {
            return Ok(());
        };
        let delta = drag.step(hit.position);
        let dragged = drag.solid;

        match self.mode {
            EditorMode::Draw => {}
            EditorMode::Move => {
                if let Some(solid) = self.registry.get_mut(dragged) {
                    solid.position += Vec3::new(delta.x, 0.0, delta.z);
                }
            }
            EditorMode::VertexEdit => {
                if let PickTarget::Mesh(handle) = hit.target
                    && let Some(marker) = self.overlay.by_handle(handle).copied()
                {
                    self.displace_marker_vertex(marker.owner, marker.vertex_index, delta, backend)?;
                }
            }
        }
        Ok(())
    }

    /// Pick-up gesture; disarms any drag. Idempotent.
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// Extrude the draft into a solid.
    ///
    /// Valid only with 3 points (pyramid) or 4 (cuboid); anything else is
    /// rejected with an advisory message and no state change. On success
    /// the solid is placed at the draft's centroid and the draft is
    /// discarded along with its preview visuals.
    pub fn extrude(&mut self, backend: &mut dyn SceneBackend) -> EditorResult<Uuid> {
        let count = self.draft.len();
        let Some(kind) = SolidKind::from_point_count(count) else {
            let err = EditorError::InvalidPointCount { count };
            warn!("Extrusion rejected: {err}");
            return Err(err);
        };

        let points = self.draft.points();
        let position = geometry::centroid(points);
        let rotation = geometry::yaw_between(points[0], points[1]);
        let dimensions = match kind {
            SolidKind::Pyramid => {
                geometry::pyramid_dimensions(&[points[0], points[1], points[2]])
            }
            SolidKind::Cuboid => {
                geometry::cuboid_dimensions(&[points[0], points[1], points[2], points[3]])
            }
        };

        let handle = backend.create_solid_mesh(kind, dimensions, position, rotation)?;
        let name = format!("{} {}", kind.display_name(), self.registry.len() + 1);
        let mut solid = Solid::new(name, kind, position, rotation, dimensions, handle);
        solid.color = random_color(self.config.solid_alpha);
        solid.vertices = primitive::positions_from_flat(&backend.read_vertex_buffer(handle)?);

        let id = self.registry.register(solid);
        self.draft.clear();
        self.clear_draft_visuals(backend)?;
        info!("Extruded {} at ({:.2}, {:.2})", kind.display_name(), position.x, position.z);
        Ok(id)
    }

    fn capture_draft_point(
        &mut self,
        hit: PickHit,
        backend: &mut dyn SceneBackend,
    ) -> EditorResult<()> {
        if hit.target != PickTarget::Ground {
            return Ok(());
        }
        let point = Vec3::new(hit.position.x, DRAFT_ELEVATION, hit.position.z);
        self.draft.push(point);
        let marker =
            backend.create_marker_mesh(point, self.config.draft_marker_diameter, None)?;
        self.draft_visuals.point_markers.push(marker);
        self.refresh_preview_outline(backend)?;
        debug!("Draft point {} at ({:.2}, {:.2})", self.draft.len(), point.x, point.z);
        Ok(())
    }

    /// Rebuild the closed preview outline after a point addition
    fn refresh_preview_outline(&mut self, backend: &mut dyn SceneBackend) -> EditorResult<()> {
        if let Some(handle) = self.draft_visuals.outline.take() {
            backend.dispose_mesh(handle)?;
        }
        if let Some(outline) = geometry::preview_outline(self.draft.points()) {
            self.draft_visuals.outline = Some(backend.create_polyline(&outline)?);
        }
        Ok(())
    }

    fn clear_draft_visuals(&mut self, backend: &mut dyn SceneBackend) -> EditorResult<()> {
        for handle in self.draft_visuals.point_markers.drain(..) {
            backend.dispose_mesh(handle)?;
        }
        if let Some(handle) = self.draft_visuals.outline.take() {
            backend.dispose_mesh(handle)?;
        }
        Ok(())
    }

    /// Run the registry mutation for a marker hit, then resync that
    /// solid's markers. An out-of-range index is logged and skipped; it
    /// cannot arise from a live marker but must never corrupt the buffer.
    fn displace_marker_vertex(
        &mut self,
        owner: Uuid,
        vertex_index: usize,
        delta: Vec3,
        backend: &mut dyn SceneBackend,
    ) -> EditorResult<()> {
        match self
            .registry
            .displace_vertex(owner, vertex_index, delta, backend)
        {
            Ok(()) => {
                if let Some(solid) = self.registry.get(owner) {
                    self.overlay.sync_solid(solid, backend)?;
                }
                Ok(())
            }
            Err(err @ EditorError::VertexIndexOutOfRange { .. }) => {
                warn!("Vertex displacement skipped: {err}");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}

/// Random material color with the configured alpha
fn random_color(alpha: f32) -> [f32; 4] {
    [
        rand::random::<f32>(),
        rand::random::<f32>(),
        rand::random::<f32>(),
        alpha,
    ]
}
