//! Editor interaction modes

/// The active interaction mode, gating how picks are interpreted.
///
/// Switching modes is the only way draft points, the armed drag, and
/// vertex markers get reset; gestures never change the mode on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Pick ground points to sketch a polygon
    #[default]
    Draw,
    /// Drag whole solids across the ground plane
    Move,
    /// Drag individual vertices of a solid
    VertexEdit,
}

impl EditorMode {
    /// Get the display name of the mode
    pub fn name(&self) -> &'static str {
        match self {
            EditorMode::Draw => "Draw",
            EditorMode::Move => "Move",
            EditorMode::VertexEdit => "Vertex Edit",
        }
    }

    /// All modes, for UI enumeration
    pub fn all() -> [EditorMode; 3] {
        [EditorMode::Draw, EditorMode::Move, EditorMode::VertexEdit]
    }
}
