//! End-to-end frames through the headless collaborators.

use std::path::Path;

use disunity_app::headless::{
    DrawCall, FixedClock, MemoryTextureCache, RecordingRenderer, ScriptedInput,
};
use disunity_app::{Collaborators, FrameLoop, LevelDescription, World};
use disunity_component::EntityId;
use disunity_event::Key;
use disunity_math::Vec2;
use disunity_system::{EngineConfig, MovementMode};

type HeadlessLoop = FrameLoop<RecordingRenderer, MemoryTextureCache, ScriptedInput, FixedClock>;

fn build(level: &LevelDescription, config: EngineConfig, input: ScriptedInput) -> HeadlessLoop {
    let mut world = World::new();
    let mut textures = MemoryTextureCache::new();
    level.apply(&mut world, &mut textures).unwrap();
    FrameLoop::new(
        config,
        world,
        Collaborators {
            renderer: RecordingRenderer::new(),
            textures,
            input,
            clock: FixedClock::new(0.25),
        },
    )
}

fn arena() -> LevelDescription {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("levels/arena.json");
    LevelDescription::load(&path).unwrap()
}

#[test]
fn test_arena_level_loads_with_config() {
    let level = arena();
    let config = level.config.clone().unwrap();
    assert_eq!(config.movement_mode, MovementMode::Velocity);
    assert_eq!(config.max_frames, 600);
    assert_eq!(config.controlled_entity, EntityId(2));
    assert_eq!(level.entities.len(), 3);
}

#[test]
fn test_head_on_collision_destroys_both_vehicles() {
    let level = arena();
    let config = level.config.clone().unwrap().with_max_frames(25);
    let mut frame_loop = build(&level, config, ScriptedInput::idle());

    // The vehicles close 20px per frame and first overlap on frame 17.
    for _ in 0..16 {
        frame_loop.step();
    }
    let healths = &frame_loop.world().components.healths;
    assert_eq!(healths.get(EntityId(2)).unwrap().current, 3);
    assert_eq!(healths.get(EntityId(3)).unwrap().current, 3);

    // Three overlapping frames drain three hit points each.
    for _ in 0..3 {
        frame_loop.step();
    }
    let healths = &frame_loop.world().components.healths;
    assert_eq!(healths.get(EntityId(2)).unwrap().current, 0);
    assert_eq!(healths.get(EntityId(3)).unwrap().current, 0);

    // Marked by the health system on frame 20, purged on frame 21.
    let stats = frame_loop.step();
    assert_eq!(stats.purged, 0);
    assert!(frame_loop.world().entities.is_pending(EntityId(2)));
    let stats = frame_loop.step();
    assert_eq!(stats.purged, 2);

    let remaining = frame_loop.run(false);
    assert_eq!(remaining, 4);

    let (world, backend) = frame_loop.into_parts();
    assert_eq!(world.entities.alive_ids().collect::<Vec<_>>(), vec![EntityId(1)]);
    assert_eq!(world.entities.free_count(), 2);
    assert_eq!(backend.renderer.sprites().count(), 1);
    assert_eq!(backend.renderer.outlines().count(), 0);
}

#[test]
fn test_demo_renders_background_first() {
    let mut frame_loop = build(
        &LevelDescription::demo(),
        EngineConfig::default(),
        ScriptedInput::idle(),
    );
    frame_loop.step();

    let renderer = &frame_loop.collaborators().renderer;
    let layers: Vec<Vec2> = renderer
        .sprites()
        .filter_map(|call| match call {
            DrawCall::Sprite { dest, .. } => Some(dest.size()),
            DrawCall::RectOutline { .. } => None,
        })
        .collect();

    // Tile map (768 × 4) on z 0 comes before every z 1 sprite.
    assert_eq!(layers.len(), 4);
    assert_eq!(layers[0], Vec2::new(3072.0, 3072.0));

    // Outlines follow the sprites.
    let last_sprite = renderer
        .last_frame()
        .iter()
        .rposition(|call| matches!(call, DrawCall::Sprite { .. }))
        .unwrap();
    let first_outline = renderer
        .last_frame()
        .iter()
        .position(|call| matches!(call, DrawCall::RectOutline { .. }))
        .unwrap();
    assert!(last_sprite < first_outline);
}

#[test]
fn test_scripted_session_steers_and_deletes() {
    let input = ScriptedInput::new(vec![
        vec![Key::W],
        vec![Key::W, Key::D],
        vec![],
        vec![Key::Space],
    ])
    .close_after(5);
    let mut frame_loop = build(&LevelDescription::demo(), EngineConfig::default(), input);

    let frames = frame_loop.run(false);
    assert_eq!(frames, 5);

    let world = frame_loop.world();
    let knight = world.components.transforms.get(EntityId(4)).unwrap();
    // W moves up-screen by the knight's speed; W+D moves diagonally.
    let diagonal = Vec2::new(-1.0, 1.0).normalize() * 5.0;
    let expected = Vec2::new(500.0, 500.0) - Vec2::new(0.0, 5.0) - diagonal;
    assert!((knight.position - expected).length() < 1e-3);

    assert!(world.entities.is_free(EntityId(2)));
    assert!(world.entities.is_alive(EntityId(3)));
}
