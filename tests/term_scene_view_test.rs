use tui_raycast::core::TileGrid;
use tui_raycast::engine::{Engine, EngineConfig, RenderMode};
use tui_raycast::term::{CellStyle, FrameBuffer, SceneView, Viewport};
use tui_raycast::types::SHADE_RAMP;

fn closet_engine() -> Engine {
    let grid = TileGrid::from_codes(&[[1u8, 1, 1], [1, 2, 1], [1, 1, 1]]).unwrap();
    let mut engine = Engine::new(grid, EngineConfig::default().with_resolution(9, 9)).unwrap();
    engine.tick(None);
    engine
}

#[test]
fn scene_view_draws_frame_minimap_and_status() {
    let engine = closet_engine();
    let mut view = SceneView::default();
    let fb = view.render(&engine, Viewport::new(15, 10));

    // 9x9 frame, gap, 3x3 minimap in a 5x5 border.
    assert_eq!(fb.row_text(0), "█████████ ┌───┐");
    assert_eq!(fb.get(10, 4).unwrap().ch, '└');
    assert_eq!(fb.get(14, 4).unwrap().ch, '┘');
    assert_eq!(fb.get(12, 2).unwrap().ch, 'C');
    assert_eq!(fb.get(10, 0).unwrap().style, CellStyle::DIM);

    // Nearest shade is emphasized.
    assert_eq!(fb.get(0, 0).unwrap().ch, SHADE_RAMP[0]);
    assert_eq!(fb.get(0, 0).unwrap().style, CellStyle::BOLD);

    assert!(fb.row_text(9).starts_with("x 4 y 4"));
    assert_eq!(fb.get(0, 9).unwrap().style, CellStyle::DIM);
}

#[test]
fn scene_view_drops_panels_that_do_not_fit() {
    let engine = closet_engine();
    let mut view = SceneView::default();
    let fb = view.render(&engine, Viewport::new(9, 9));

    for y in 0..9 {
        assert_eq!(fb.row_text(y), "█████████");
    }
}

#[test]
fn scene_view_panels_can_be_disabled() {
    let engine = closet_engine();
    let mut view = SceneView::default().with_minimap(false).with_status(false);
    let fb = view.render(&engine, Viewport::new(20, 12));

    assert_eq!(fb.row_text(0).trim_end(), "█████████");
    assert_eq!(fb.row_text(9).trim_end(), "");
}

#[test]
fn scene_view_top_down_is_not_emphasized() {
    let mut engine = closet_engine();
    engine.set_mode(RenderMode::TopDown);
    engine.tick(None);

    let mut view = SceneView::default();
    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&engine, Viewport::new(60, 12), &mut fb);

    assert_eq!((fb.width(), fb.height()), (60, 12));
    assert_eq!(fb.get(4, 4).unwrap().ch, 'C');
    assert!((0..9).all(|x| fb.get(x, 0).unwrap().style == CellStyle::PLAIN));
    assert!(fb.row_text(9).contains("top-down"));
}
