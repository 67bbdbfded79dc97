//! Active drag tracking

use glam::Vec3;
use uuid::Uuid;

/// An armed drag gesture: the picked solid plus the last observed pointer
/// world position.
///
/// Created on pick-down and discarded on pick-up or mode switch, so the
/// two fields always travel together; there is no selection outside a
/// live drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// The solid being dragged (in vertex editing, the owner of the marker
    /// that armed the drag)
    pub solid: Uuid,
    /// Pointer world position at the previous gesture step
    pub last_pointer: Vec3,
}

impl DragState {
    /// Arm a drag at the given pick position
    pub fn new(solid: Uuid, pointer: Vec3) -> Self {
        Self {
            solid,
            last_pointer: pointer,
        }
    }

    /// Displacement since the previous step; advances the anchor so
    /// repeated calls yield incremental deltas
    pub fn step(&mut self, pointer: Vec3) -> Vec3 {
        let delta = pointer - self.last_pointer;
        self.last_pointer = pointer;
        delta
    }
}
