use tui_raycast::core::{ActionOutcome, RaycastError, TileGrid};
use tui_raycast::engine::{Engine, EngineConfig, RenderLoop, RenderMode};
use tui_raycast::map_file::builtin_map;
use tui_raycast::types::{CameraAction, ROTATE_STEP, TOP_DOWN_ANGLE_STEP};

fn unmarked_room() -> TileGrid {
    TileGrid::from_codes(&[[1u8, 1, 1, 1], [1, 0, 0, 1], [1, 0, 0, 1], [1, 1, 1, 1]]).unwrap()
}

#[test]
fn builtin_map_spawns_on_the_player_tile() {
    let engine = Engine::new(builtin_map().unwrap(), EngineConfig::default()).unwrap();
    assert_eq!((engine.rasterizer().cell_w(), engine.rasterizer().cell_h()), (16, 5));
    assert_eq!(engine.camera().position(), (40, 12));
    assert_eq!(engine.frame().width(), 160);
    assert_eq!(engine.frame().height(), 40);
}

#[test]
fn spawn_without_marker_is_seeded() {
    let config = EngineConfig::default().with_resolution(8, 8);
    let a = Engine::new(unmarked_room(), EngineConfig { seed: 9, ..config }).unwrap();
    let b = Engine::new(unmarked_room(), EngineConfig { seed: 9, ..config }).unwrap();
    assert_eq!(a.camera().position(), b.camera().position());

    for seed in 0..32 {
        let engine = Engine::new(unmarked_room(), EngineConfig { seed, ..config }).unwrap();
        let (x, y) = engine.camera().position();
        assert!((2..6).contains(&x) && (2..6).contains(&y), "seed {seed}: ({x}, {y})");
    }
}

#[test]
fn tick_applies_at_most_one_action() {
    let mut engine = Engine::new(builtin_map().unwrap(), EngineConfig::default()).unwrap();

    engine.tick(None);
    assert_eq!(engine.last_outcome(), None);
    assert_eq!(engine.camera().rotation(), 0.0);

    engine.tick(Some(CameraAction::RotateRight));
    assert_eq!(engine.last_outcome(), Some(ActionOutcome::Adjusted));
    assert!((engine.camera().rotation() - ROTATE_STEP).abs() < 1e-12);
}

#[test]
fn first_person_tick_fills_the_frame_and_minimap() {
    let mut engine = Engine::new(builtin_map().unwrap(), EngineConfig::default()).unwrap();
    let stats = engine.tick(None);
    assert_eq!(stats.rays, 144);
    assert_eq!(stats.hits, stats.rays);
    assert_eq!(stats.degenerate, 0);

    // An enclosed map leaves no column empty.
    assert!((0..160).all(|x| !engine.frame().column_is_empty(x)));

    let minimap = engine.minimap();
    assert_eq!((minimap.width(), minimap.height()), (40, 10));
    assert_eq!(minimap.get(10, 3), Some('C'));
    assert_eq!(minimap.get(0, 0), Some('▮'));
}

#[test]
fn top_down_tick_shows_the_swept_field_of_view() {
    let config = EngineConfig::default().with_mode(RenderMode::TopDown);
    let mut engine = Engine::new(builtin_map().unwrap(), config).unwrap();
    let stats = engine.tick(None);

    assert_eq!(stats.rays, (std::f64::consts::FRAC_PI_2 / TOP_DOWN_ANGLE_STEP).round() as usize);
    let text = engine.frame().to_text();
    assert_eq!(text.lines().count(), 40);
    assert!(text.contains('*'));
    assert!(text.contains('.'));
    assert!(text.contains('▮'));
    assert_eq!(engine.frame().get(40, 12), Some('C'));
}

#[test]
fn toggling_view_switches_render_pass() {
    let mut engine = Engine::new(builtin_map().unwrap(), EngineConfig::default()).unwrap();
    assert_eq!(engine.mode(), RenderMode::FirstPerson);
    assert_eq!(engine.toggle_mode(), RenderMode::TopDown);
    engine.tick(None);
    assert_eq!(engine.frame().get(40, 12), Some('C'));

    engine.set_mode(RenderMode::FirstPerson);
    engine.tick(None);
    assert!(!engine.frame().to_text().contains('C'));
}

#[test]
fn map_must_fit_the_resolution() {
    let config = EngineConfig::default().with_resolution(155, 40);
    let err = Engine::new(builtin_map().unwrap(), config);
    assert!(matches!(err, Err(RaycastError::MapResolutionMismatch { .. })));
}

#[test]
fn render_loop_interval_follows_frame_rate() {
    assert_eq!(RenderLoop::new(30).unwrap().interval_ms(), 33);
    assert_eq!(RenderLoop::new(1000).unwrap().interval_ms(), 1);
    assert_eq!(RenderLoop::new(5000).unwrap().interval_ms(), 1);
    assert_eq!(RenderLoop::new(0).err(), Some(RaycastError::InvalidFrameRate(0)));
}

#[test]
fn render_loop_ticks_only_while_running() {
    let mut rl = RenderLoop::new(30).unwrap();
    assert!(!rl.is_running());
    assert!(!rl.poll(0));

    rl.start();
    assert!(rl.poll(0));
    assert!(!rl.poll(10));
    assert_eq!(rl.time_until_next(10), 23);
    assert!(rl.poll(33));

    // Restarting keeps the schedule.
    rl.start();
    assert!(!rl.poll(40));

    rl.stop();
    assert!(!rl.poll(500));
    assert_eq!(rl.time_until_next(500), 0);
}

#[test]
fn late_poll_fires_once() {
    let mut rl = RenderLoop::new(10).unwrap();
    rl.start();
    assert!(rl.poll(0));
    assert!(rl.poll(1000));
    assert!(!rl.poll(1000));
    assert!(rl.poll(1100));
}
