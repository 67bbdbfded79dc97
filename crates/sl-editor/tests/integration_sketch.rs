//! Integration tests for the sketching workflow: ground picks accumulate
//! draft points, extrusion synthesizes solids, validation rejects bad
//! point counts.

use glam::Vec3;

use sl_editor::harness::EditorHarness;
use sl_editor::{EditorAction, EditorError, EditorMode, PickHit};
use sl_core::{SolidKind, constants};

#[test]
fn test_ground_picks_accumulate_in_order() {
    let mut h = EditorHarness::new();
    let picks = [(0.0, 0.0), (2.5, -1.0), (3.0, 4.0), (-1.0, 1.0)];

    for (i, (x, z)) in picks.iter().enumerate() {
        h.press_ground(*x, *z).unwrap();
        assert_eq!(h.session.draft.len(), i + 1);
    }
    for (i, (x, z)) in picks.iter().enumerate() {
        assert_eq!(h.session.draft.points()[i], Vec3::new(*x, 0.0, *z));
    }
}

#[test]
fn test_pick_on_mesh_does_not_draw() {
    let mut h = EditorHarness::new();
    h.quick_cuboid().unwrap();
    h.set_mode(EditorMode::Draw).unwrap();

    let handle = h.session.registry.solids()[0].handle;
    h.press_mesh(handle, Vec3::new(1.0, 1.0, 1.0)).unwrap();
    assert_eq!(h.session.draft.len(), 0);
}

#[test]
fn test_pick_miss_does_not_draw() {
    let mut h = EditorHarness::new();
    h.backend.queue_miss();
    h.session
        .pointer_down(glam::Vec2::ZERO, &mut h.backend)
        .unwrap();
    assert_eq!(h.session.draft.len(), 0);
}

#[test]
fn test_preview_outline_lifecycle() {
    let mut h = EditorHarness::new();

    h.press_ground(0.0, 0.0).unwrap();
    assert_eq!(h.line_mesh_count(), 0, "one point has no outline");

    h.press_ground(2.0, 0.0).unwrap();
    assert_eq!(h.line_mesh_count(), 1);

    // Each new point replaces the outline instead of stacking lines.
    h.press_ground(2.0, 2.0).unwrap();
    assert_eq!(h.line_mesh_count(), 1);

    // The outline closes back to the first point.
    let outline = h
        .session
        .draft_visuals
        .outline
        .and_then(|handle| h.backend.mesh(handle).cloned())
        .unwrap();
    assert_eq!(outline.positions.len(), 4 * 3);
    assert_eq!(outline.positions[0..3], [0.0, 0.0, 0.0]);
    assert_eq!(outline.positions[9..12], [0.0, 0.0, 0.0]);
}

#[test]
fn test_extrude_three_points_yields_pyramid() {
    let mut h = EditorHarness::new();
    h.press_ground(0.0, 0.0).unwrap();
    h.press_ground(3.0, 0.0).unwrap();
    h.press_ground(0.0, 4.0).unwrap();
    let id = h.extrude().unwrap();

    let solid = h.session.registry.get(id).unwrap();
    assert_eq!(solid.kind, SolidKind::Pyramid);
    assert!((solid.dimensions.x - 3.0).abs() < 1e-4);
    assert!((solid.dimensions.y - constants::SOLID_HEIGHT).abs() < 1e-4);
    assert!((solid.dimensions.z - 4.0).abs() < 1e-4);
    assert!(!solid.vertices.is_empty(), "vertex buffer read back at creation");
}

#[test]
fn test_extrude_four_points_yields_cuboid() {
    let mut h = EditorHarness::new();
    let id = h.quick_cuboid().unwrap();

    let solid = h.session.registry.get(id).unwrap();
    assert_eq!(solid.kind, SolidKind::Cuboid);
    assert!((solid.dimensions.x - 1.0).abs() < 1e-4);
    assert!((solid.dimensions.z - 1.0).abs() < 1e-4);
}

#[test]
fn test_extrude_places_solid_at_centroid() {
    let mut h = EditorHarness::new();
    h.press_ground(0.0, 0.0).unwrap();
    h.press_ground(2.0, 0.0).unwrap();
    h.press_ground(0.0, 2.0).unwrap();
    let id = h.extrude().unwrap();

    let position = h.session.registry.get(id).unwrap().position;
    assert!((position.x - 0.667).abs() < 1e-3);
    assert!((position.y - constants::SOLID_ELEVATION).abs() < 1e-4);
    assert!((position.z - 0.667).abs() < 1e-3);
}

#[test]
fn test_extrude_rejects_bad_point_counts() {
    // 0, 1, and 2 points: rejected without touching the session.
    for count in 0..=2 {
        let mut h = EditorHarness::new();
        for i in 0..count {
            h.press_ground(i as f32, 0.0).unwrap();
        }
        let err = h.extrude().unwrap_err();
        assert!(matches!(err, EditorError::InvalidPointCount { .. }));
        assert_eq!(h.solid_count(), 0);
        assert_eq!(h.session.draft.len(), count, "draft untouched on rejection");
    }

    // Five points: same advisory, nothing extruded.
    let mut h = EditorHarness::new();
    for i in 0..5 {
        h.press_ground(i as f32, 1.0).unwrap();
    }
    let err = h.extrude().unwrap_err();
    assert!(matches!(err, EditorError::InvalidPointCount { count: 5 }));
    assert_eq!(h.solid_count(), 0);
}

#[test]
fn test_extrude_discards_draft_and_visuals() {
    let mut h = EditorHarness::new();
    h.quick_pyramid().unwrap();

    assert_eq!(h.session.draft.len(), 0);
    assert!(h.session.draft_visuals.point_markers.is_empty());
    assert!(h.session.draft_visuals.outline.is_none());
    assert_eq!(h.marker_mesh_count(), 0, "draft point markers disposed");
    assert_eq!(h.line_mesh_count(), 0, "preview outline disposed");
}

#[test]
fn test_extruded_color_is_in_unit_range() {
    let mut h = EditorHarness::new();
    let id = h.quick_cuboid().unwrap();
    let [r, g, b, a] = h.session.registry.get(id).unwrap().color;
    for channel in [r, g, b, a] {
        assert!((0.0..=1.0).contains(&channel));
    }
}

#[test]
fn test_extrude_applies_sketch_orientation() {
    // First edge drawn along +Z: the solid is yawed a quarter turn.
    let mut h = EditorHarness::new();
    h.press_ground(0.0, 0.0).unwrap();
    h.press_ground(0.0, 2.0).unwrap();
    h.press_ground(-2.0, 0.0).unwrap();
    let id = h.extrude().unwrap();

    let solid = h.session.registry.get(id).unwrap();
    assert!((solid.rotation - std::f32::consts::FRAC_PI_2).abs() < 1e-4);

    // The backend mesh was allocated with the same yaw.
    let record = h.backend.mesh(solid.handle).unwrap();
    assert!((record.rotation - solid.rotation).abs() < 1e-4);
}

#[test]
fn test_actions_drive_full_sketch_flow() {
    let mut h = EditorHarness::new();

    let press = EditorAction::PointerPressed { x: 0.0, y: 0.0 };
    let corners = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, 1.0),
    ];
    for corner in corners {
        h.backend.queue_pick(PickHit::ground(corner));
        h.session.apply(press, &mut h.backend).unwrap();
    }
    h.session.apply(EditorAction::Extrude, &mut h.backend).unwrap();

    assert_eq!(h.solid_count(), 1);
    assert_eq!(h.session.registry.solids()[0].kind, SolidKind::Cuboid);
}

#[test]
fn test_solid_mesh_handles_are_distinct() {
    let mut h = EditorHarness::new();
    let first = h.quick_pyramid().unwrap();
    let second = h.quick_cuboid().unwrap();

    let a = h.session.registry.get(first).unwrap().handle;
    let b = h.session.registry.get(second).unwrap().handle;
    assert_ne!(a, b);
    assert!(h.backend.is_alive(a));
    assert!(h.backend.is_alive(b));
}
