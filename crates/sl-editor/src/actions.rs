//! Editor action dispatch
//!
//! The discrete command surface: UI toolbars and input plumbing queue
//! plain values instead of calling session methods directly.

use glam::Vec2;

use crate::error::EditorResult;
use crate::mode::EditorMode;
use crate::scene::SceneBackend;
use crate::session::EditorSession;

/// Commands and gestures that drive the editor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorAction {
    /// Switch the interaction mode
    SetMode(EditorMode),
    /// Pointer pressed at a screen position
    PointerPressed { x: f32, y: f32 },
    /// Pointer moved at a screen position
    PointerMoved { x: f32, y: f32 },
    /// Pointer released
    PointerReleased,
    /// Extrude the current draft into a solid
    Extrude,
}

impl EditorSession {
    /// Apply a single action against the given backend
    pub fn apply(
        &mut self,
        action: EditorAction,
        backend: &mut dyn SceneBackend,
    ) -> EditorResult<()> {
        match action {
            EditorAction::SetMode(mode) => self.set_mode(mode, backend),
            EditorAction::PointerPressed { x, y } => self.pointer_down(Vec2::new(x, y), backend),
            EditorAction::PointerMoved { x, y } => self.pointer_move(Vec2::new(x, y), backend),
            EditorAction::PointerReleased => {
                self.pointer_up();
                Ok(())
            }
            EditorAction::Extrude => self.extrude(backend).map(|_| ()),
        }
    }
}
