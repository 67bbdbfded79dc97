//! Editor session state

use std::sync::Arc;

use parking_lot::Mutex;

use sl_core::{DraftPolygon, MeshHandle};

use crate::config::EditorConfig;
use crate::mode::EditorMode;
use crate::overlay::MarkerOverlay;
use crate::registry::ShapeRegistry;
use crate::selection::DragState;

/// Scene meshes visualizing the in-progress draft
#[derive(Debug, Default)]
pub struct DraftVisuals {
    /// One point marker per picked point, in drawing order
    pub point_markers: Vec<MeshHandle>,
    /// Closed preview outline, present from the second point on
    pub outline: Option<MeshHandle>,
}

/// Combined editor state: the single context object threaded through all
/// gesture and command handlers. No state lives outside it.
#[derive(Debug, Default)]
pub struct EditorSession {
    /// Active interaction mode; starts in Draw
    pub mode: EditorMode,
    /// Points sketched so far
    pub draft: DraftPolygon,
    /// Scene meshes mirroring the draft
    pub draft_visuals: DraftVisuals,
    /// Armed drag gesture, if any
    pub drag: Option<DragState>,
    /// Every extruded solid
    pub registry: ShapeRegistry,
    /// Vertex edit handles, populated only in vertex-edit mode
    pub overlay: MarkerOverlay,
    pub config: EditorConfig,
}

impl EditorSession {
    /// Create a session with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with the given configuration
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }
}

/// Session shared between input and render call sites
pub type SharedSession = Arc<Mutex<EditorSession>>;

/// Create a new shared session
pub fn create_shared_session() -> SharedSession {
    Arc::new(Mutex::new(EditorSession::new()))
}
