//! Sketchlift editor: the interaction core for ground-plane sketching
//!
//! This crate provides:
//! - The scene backend boundary ([`SceneBackend`]) and a headless implementation
//! - The mode state machine (Draw / Move / VertexEdit)
//! - The shape registry and its vertex mutation protocol
//! - The vertex marker overlay
//! - Pointer gesture and command handling on [`EditorSession`]

pub mod actions;
pub mod config;
pub mod controller;
pub mod error;
pub mod harness;
pub mod headless;
pub mod mode;
pub mod overlay;
pub mod registry;
pub mod scene;
pub mod selection;
pub mod session;

// Re-exports for convenience
pub use actions::EditorAction;
pub use config::EditorConfig;
pub use error::{EditorError, EditorResult};
pub use harness::EditorHarness;
pub use headless::{HeadlessBackend, MeshRecord, MeshRole};
pub use mode::EditorMode;
pub use overlay::{MarkerOverlay, VertexMarker};
pub use registry::ShapeRegistry;
pub use scene::{PickHit, PickTarget, SceneBackend, SceneError, SceneResult};
pub use selection::DragState;
pub use session::{DraftVisuals, EditorSession, SharedSession, create_shared_session};
