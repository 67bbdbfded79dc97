//! Integration tests for Move mode: arming drags on solids, horizontal
//! displacement, and gesture cancellation.

use glam::Vec3;

use sl_editor::harness::EditorHarness;
use sl_editor::{EditorMode, PickHit};

fn harness_with_cuboid() -> (EditorHarness, uuid::Uuid) {
    let mut h = EditorHarness::new();
    let id = h.quick_cuboid().unwrap();
    h.set_mode(EditorMode::Move).unwrap();
    (h, id)
}

#[test]
fn test_press_on_solid_arms_drag() {
    let (mut h, id) = harness_with_cuboid();
    let handle = h.session.registry.get(id).unwrap().handle;
    let anchor = Vec3::new(0.5, 1.0, 0.5);

    h.press_mesh(handle, anchor).unwrap();
    let drag = h.session.drag.unwrap();
    assert_eq!(drag.solid, id);
    assert_eq!(drag.last_pointer, anchor);
}

#[test]
fn test_press_on_ground_does_not_arm_drag() {
    let (mut h, _) = harness_with_cuboid();
    h.press_ground(0.0, 0.0).unwrap();
    assert!(h.session.drag.is_none());
}

#[test]
fn test_press_on_unregistered_mesh_does_not_arm_drag() {
    let (mut h, _) = harness_with_cuboid();
    // A mesh the backend knows but the registry does not (a stray marker).
    let stray = {
        use sl_editor::SceneBackend;
        h.backend.create_marker_mesh(Vec3::ZERO, 0.2, None).unwrap()
    };
    h.press_mesh(stray, Vec3::ZERO).unwrap();
    assert!(h.session.drag.is_none());
}

#[test]
fn test_drag_moves_solid_horizontally() {
    let (mut h, id) = harness_with_cuboid();
    let handle = h.session.registry.get(id).unwrap().handle;
    let start = h.session.registry.get(id).unwrap().position;
    let anchor = Vec3::new(0.5, 1.0, 0.5);

    h.press_mesh(handle, anchor).unwrap();
    // The pick wanders upward too; the vertical component must be dropped.
    h.move_with(PickHit::ground(anchor + Vec3::new(2.0, 5.0, -1.0)))
        .unwrap();

    let position = h.session.registry.get(id).unwrap().position;
    assert!((position - (start + Vec3::new(2.0, 0.0, -1.0))).length() < 1e-5);
}

#[test]
fn test_drag_accumulates_incremental_deltas() {
    let (mut h, id) = harness_with_cuboid();
    let handle = h.session.registry.get(id).unwrap().handle;
    let start = h.session.registry.get(id).unwrap().position;
    let anchor = Vec3::new(0.5, 1.0, 0.5);

    h.press_mesh(handle, anchor).unwrap();
    h.move_with(PickHit::ground(anchor + Vec3::new(1.0, 0.0, 0.0)))
        .unwrap();
    h.move_with(PickHit::ground(anchor + Vec3::new(1.0, 0.0, 3.0)))
        .unwrap();

    let position = h.session.registry.get(id).unwrap().position;
    assert!((position - (start + Vec3::new(1.0, 0.0, 3.0))).length() < 1e-5);
}

#[test]
fn test_move_without_press_is_inert() {
    let (mut h, id) = harness_with_cuboid();
    let start = h.session.registry.get(id).unwrap().position;

    h.move_with(PickHit::ground(Vec3::new(5.0, 0.0, 5.0))).unwrap();
    assert_eq!(h.session.registry.get(id).unwrap().position, start);
}

#[test]
fn test_move_with_pick_miss_is_inert() {
    let (mut h, id) = harness_with_cuboid();
    let handle = h.session.registry.get(id).unwrap().handle;
    let anchor = Vec3::new(0.5, 1.0, 0.5);
    let start = h.session.registry.get(id).unwrap().position;

    h.press_mesh(handle, anchor).unwrap();
    h.move_miss().unwrap();
    assert_eq!(h.session.registry.get(id).unwrap().position, start);

    // The anchor survives the miss, so the next hit resumes smoothly.
    h.move_with(PickHit::ground(anchor + Vec3::new(1.0, 0.0, 0.0)))
        .unwrap();
    let position = h.session.registry.get(id).unwrap().position;
    assert!((position - (start + Vec3::new(1.0, 0.0, 0.0))).length() < 1e-5);
}

#[test]
fn test_release_disarms_drag() {
    let (mut h, id) = harness_with_cuboid();
    let handle = h.session.registry.get(id).unwrap().handle;
    h.press_mesh(handle, Vec3::new(0.5, 1.0, 0.5)).unwrap();
    assert!(h.session.drag.is_some());

    h.release();
    assert!(h.session.drag.is_none());
    // Idempotent.
    h.release();
    assert!(h.session.drag.is_none());

    let start = h.session.registry.get(id).unwrap().position;
    h.move_with(PickHit::ground(Vec3::new(9.0, 0.0, 9.0))).unwrap();
    assert_eq!(h.session.registry.get(id).unwrap().position, start);
}

#[test]
fn test_mode_switch_cancels_drag() {
    let (mut h, id) = harness_with_cuboid();
    let handle = h.session.registry.get(id).unwrap().handle;
    h.press_mesh(handle, Vec3::new(0.5, 1.0, 0.5)).unwrap();
    assert!(h.session.drag.is_some());

    h.set_mode(EditorMode::VertexEdit).unwrap();
    assert!(h.session.drag.is_none());
}

#[test]
fn test_mode_switch_clears_draft_only_when_entering_draw() {
    let mut h = EditorHarness::new();
    h.press_ground(0.0, 0.0).unwrap();
    h.press_ground(1.0, 0.0).unwrap();

    // Leaving Draw keeps the sketch so the user can come back to it.
    h.set_mode(EditorMode::Move).unwrap();
    assert_eq!(h.session.draft.len(), 2);

    // Re-entering Draw starts a fresh sketch.
    h.set_mode(EditorMode::Draw).unwrap();
    assert_eq!(h.session.draft.len(), 0);
    assert_eq!(h.line_mesh_count(), 0);
    assert_eq!(h.marker_mesh_count(), 0);
}
