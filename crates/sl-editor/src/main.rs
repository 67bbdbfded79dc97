//! Sketchlift demo entry point
//!
//! Runs a scripted sketch → extrude → move → vertex-edit session against
//! the headless backend and logs what happens. An embedding with a real
//! renderer swaps the backend and feeds genuine pointer picks instead.

use glam::Vec3;
use tracing::info;

use sl_editor::{
    EditorAction, EditorConfig, EditorError, EditorMode, HeadlessBackend, PickHit,
    create_shared_session,
};

// Screen coordinates are placeholders throughout: the headless backend
// resolves picks from its injection queue, not from a camera.
const PRESS: EditorAction = EditorAction::PointerPressed { x: 0.0, y: 0.0 };
const MOVE: EditorAction = EditorAction::PointerMoved { x: 0.0, y: 0.0 };

fn main() -> Result<(), EditorError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sl_editor=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sketchlift demo session");

    let session = create_shared_session();
    session.lock().config = EditorConfig::load();
    let mut backend = HeadlessBackend::new();

    // Sketch a triangle and extrude a pyramid.
    for (x, z) in [(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)] {
        backend.queue_pick(PickHit::ground(Vec3::new(x, 0.0, z)));
        session.lock().apply(PRESS, &mut backend)?;
    }
    session.lock().apply(EditorAction::Extrude, &mut backend)?;

    // Sketch a square and extrude a cuboid.
    for (x, z) in [(6.0, 6.0), (8.0, 6.0), (8.0, 8.0), (6.0, 8.0)] {
        backend.queue_pick(PickHit::ground(Vec3::new(x, 0.0, z)));
        session.lock().apply(PRESS, &mut backend)?;
    }
    session.lock().apply(EditorAction::Extrude, &mut backend)?;

    // Drag the cuboid across the ground plane.
    session
        .lock()
        .apply(EditorAction::SetMode(EditorMode::Move), &mut backend)?;
    let (cuboid_handle, anchor) = {
        let s = session.lock();
        let solid = s.registry.solids().last().ok_or_else(|| {
            EditorError::UnknownSolid(uuid::Uuid::nil())
        })?;
        (solid.handle, solid.position)
    };
    backend.queue_pick(PickHit::mesh(cuboid_handle, anchor));
    session.lock().apply(PRESS, &mut backend)?;
    backend.queue_pick(PickHit::ground(anchor + Vec3::new(2.0, 0.0, 1.0)));
    session.lock().apply(MOVE, &mut backend)?;
    backend.queue_pick(PickHit::ground(anchor + Vec3::new(3.0, 0.0, 2.0)));
    session.lock().apply(MOVE, &mut backend)?;
    session.lock().apply(EditorAction::PointerReleased, &mut backend)?;

    // Pull one vertex upward.
    session
        .lock()
        .apply(EditorAction::SetMode(EditorMode::VertexEdit), &mut backend)?;
    let marker = session.lock().overlay.markers().first().copied();
    if let Some(marker) = marker {
        let grab = {
            let s = session.lock();
            s.registry
                .get(marker.owner)
                .and_then(|solid| solid.vertex_world_position(marker.vertex_index))
                .unwrap_or(Vec3::ZERO)
        };
        backend.queue_pick(PickHit::mesh(marker.handle, grab));
        session.lock().apply(PRESS, &mut backend)?;
        backend.queue_pick(PickHit::mesh(marker.handle, grab + Vec3::new(0.0, 0.5, 0.0)));
        session.lock().apply(MOVE, &mut backend)?;
        session.lock().apply(EditorAction::PointerReleased, &mut backend)?;
    }
    session
        .lock()
        .apply(EditorAction::SetMode(EditorMode::Draw), &mut backend)?;

    for solid in session.lock().registry.solids() {
        info!(
            "{}: {} vertices at ({:.2}, {:.2}, {:.2})",
            solid.name,
            solid.vertex_count(),
            solid.position.x,
            solid.position.y,
            solid.position.z,
        );
    }
    info!("Demo session complete");
    Ok(())
}
