//! SceneView: maps the engine's frames into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout:
//!
//! ```text
//! +---------------------------+ ┌─────┐
//! | primary frame             | │ map │
//! | (first-person / top-down) | └─────┘
//! +---------------------------+
//! status line
//! ```
//!
//! The minimap and the status line are dropped when the viewport is too small.

use std::fmt::Write as _;

use crate::core::Frame;
use crate::engine::{Engine, RenderMode};
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::SHADE_RAMP;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

pub struct SceneView {
    show_minimap: bool,
    show_status: bool,
    status: String,
}

impl Default for SceneView {
    fn default() -> Self {
        Self {
            show_minimap: true,
            show_status: true,
            status: String::with_capacity(128),
        }
    }
}

impl SceneView {
    pub fn with_minimap(mut self, show: bool) -> Self {
        self.show_minimap = show;
        self
    }

    pub fn with_status(mut self, show: bool) -> Self {
        self.show_status = show;
        self
    }

    /// Render the engine's last tick into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&mut self, engine: &Engine, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::PLAIN.into_cell(' '));

        let frame = engine.frame();
        let emphasize = engine.mode() == RenderMode::FirstPerson;
        self.draw_frame(fb, frame, 0, 0, emphasize);

        let frame_w = clamp_u16(frame.width());
        let frame_h = clamp_u16(frame.height());

        if self.show_minimap {
            let minimap = engine.minimap();
            let box_w = clamp_u16(minimap.width()).saturating_add(2);
            let box_h = clamp_u16(minimap.height()).saturating_add(2);
            let x = frame_w.saturating_add(1);
            if x.saturating_add(box_w) <= viewport.width && box_h <= viewport.height {
                self.draw_border(fb, x, 0, box_w, box_h, CellStyle::DIM);
                self.draw_frame(fb, minimap, x + 1, 1, false);
            }
        }

        if self.show_status && frame_h < viewport.height {
            self.format_status(engine);
            fb.put_str(0, frame_h, &self.status, CellStyle::DIM);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&mut self, engine: &Engine, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(engine, viewport, &mut fb);
        fb
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, frame: &Frame, x0: u16, y0: u16, emphasize: bool) {
        for (y, row) in frame.rows().enumerate() {
            let y = y0.saturating_add(clamp_u16(y));
            if y >= fb.height() {
                break;
            }
            for (x, &ch) in row.iter().enumerate() {
                let style = if emphasize && ch == SHADE_RAMP[0] {
                    CellStyle::BOLD
                } else {
                    CellStyle::PLAIN
                };
                fb.put_char(x0.saturating_add(clamp_u16(x)), y, ch, style);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn format_status(&mut self, engine: &Engine) {
        let camera = engine.camera();
        let (x, y) = camera.position();
        self.status.clear();
        let _ = write!(
            self.status,
            "x {x} y {y}  heading {:.0}°  fov {:.0}°  radius {}  {}  [tab] view  [esc] quit",
            camera.rotation().to_degrees().rem_euclid(360.0),
            camera.fov().to_degrees(),
            camera.view_radius(),
            engine.mode().as_str(),
        );
    }
}

fn clamp_u16(v: usize) -> u16 {
    v.min(u16::MAX as usize) as u16
}
