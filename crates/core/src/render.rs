//! Render passes: first-person projection and the top-down field-of-view sweep.
//!
//! Both passes march one ray per angular step from `rotation` to
//! `rotation + fov` against the raw frame. Each ray's angle is computed from its
//! step index rather than accumulated, so long sweeps do not drift.

use std::ops::Range;

use tracing::trace;

use crate::camera::Camera;
use crate::frame::Frame;
use crate::projection::{project_height, shade_for, strip_top};
use crate::raster::RawFrame;
use crate::ray::Ray;
use crate::types::{CellState, ANGLE_STEP, TOP_DOWN_ANGLE_STEP};

/// Counters for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    pub rays: usize,
    pub hits: usize,
    pub degenerate: usize,
}

/// Number of rays cast for `fov` at `step`: `round(fov / step)`, zero for degenerate FOVs.
pub fn ray_count(fov: f64, step: f64) -> usize {
    if !fov.is_finite() || fov <= 0.0 {
        return 0;
    }
    (fov / step).round() as usize
}

/// Screen columns owned by ray `iter` of `rays`, for an angular sweep of `max_iter` steps.
///
/// The first column is `round(iter * width / max_iter)`; the span runs to the
/// next ray's first column and always holds at least one column. The last ray
/// runs to the right edge, since `max_iter` may exceed the rounded ray count.
pub fn column_span(iter: usize, rays: usize, width: usize, max_iter: f64) -> Range<usize> {
    let column = |i: usize| (i as f64 * width as f64 / max_iter).round() as usize;
    let start = column(iter).min(width.saturating_sub(1));
    let end = if iter + 1 >= rays {
        width
    } else {
        column(iter + 1).min(width)
    };
    start..end.max(start + 1)
}

fn sweep(
    camera: &Camera,
    raw: &mut RawFrame,
    step: f64,
    mut on_hit: impl FnMut(usize, f64),
) -> RenderStats {
    let mut stats = RenderStats {
        rays: ray_count(camera.fov(), step),
        ..RenderStats::default()
    };

    for iter in 0..stats.rays {
        let angle = camera.rotation() + iter as f64 * step;
        let ray = match Ray::cast(angle, camera.view_radius()) {
            Ok(ray) => ray,
            Err(err) => {
                stats.degenerate += 1;
                trace!(%err, iter, "skipping ray");
                continue;
            }
        };
        if let Some(hit) = ray.march(camera.position(), raw) {
            stats.hits += 1;
            on_hit(iter, hit.distance);
        }
    }

    stats
}

/// Ray-march `raw` and project every hit into `frame` as a shaded column strip.
///
/// `frame` is cleared first; its height is the wall height. Columns whose ray
/// finds no wall stay empty. Leaves ray markers in `raw`.
pub fn render_first_person(camera: &Camera, raw: &mut RawFrame, frame: &mut Frame) -> RenderStats {
    frame.clear();
    let width = frame.width();
    let wall_height = frame.height();
    if width == 0 || wall_height == 0 {
        return RenderStats::default();
    }

    let rays = ray_count(camera.fov(), ANGLE_STEP);
    let max_iter = camera.fov() / ANGLE_STEP;
    let stats = sweep(camera, raw, ANGLE_STEP, |iter, distance| {
        let height = project_height(distance, wall_height);
        let shade = shade_for(height, wall_height);
        let top = strip_top(height, wall_height);
        for x in column_span(iter, rays, width, max_iter) {
            frame.fill_column(x, top, height, shade);
        }
    });

    trace!(?stats, "first-person pass");
    stats
}

/// Sweep the field of view over `raw` and copy the marked raw frame into `frame`.
///
/// Visited and hit markers show the area the camera sees; the player marker is
/// drawn on the camera cell.
pub fn render_top_down(camera: &Camera, raw: &mut RawFrame, frame: &mut Frame) -> RenderStats {
    let stats = sweep(camera, raw, TOP_DOWN_ANGLE_STEP, |_, _| {});

    frame.clear();
    for (y, row) in raw.rows().enumerate() {
        for (x, state) in row.iter().enumerate() {
            frame.set(x, y, state.symbol());
        }
    }
    let (cx, cy) = camera.position();
    if cx >= 0 && cy >= 0 {
        frame.set(cx as usize, cy as usize, CellState::PlayerMarker.symbol());
    }

    trace!(?stats, "top-down pass");
    stats
}
