//! Engine: one render tick over the core pipeline.
//!
//! The engine owns the raw frame and the camera together; a tick borrows both
//! mutably, so a ray march can never observe a half-applied movement.

use tracing::{debug, info};

use crate::config::{EngineConfig, RenderMode};
use crate::core::{
    render_first_person, render_minimap, render_top_down, spawn_point, ActionOutcome, Camera,
    Frame, RaycastError, Rasterizer, RawFrame, RenderStats, Result, TileGrid,
};
use crate::render_loop::RenderLoop;
use crate::types::{CameraAction, MINIMAP_STRIDE};

#[derive(Debug, Clone)]
pub struct Engine {
    grid: TileGrid,
    rasterizer: Rasterizer,
    raw: RawFrame,
    camera: Camera,
    frame: Frame,
    minimap: Frame,
    mode: RenderMode,
    render_loop: RenderLoop,
    last_stats: RenderStats,
    last_outcome: Option<ActionOutcome>,
}

impl Engine {
    /// Validate the map against `config` and place the camera.
    pub fn new(grid: TileGrid, config: EngineConfig) -> Result<Self> {
        if config.require_enclosed {
            grid.validate_enclosed()?;
        }
        let width = config.width as usize;
        let height = config.height as usize;
        let rasterizer = Rasterizer::new(&grid, width, height, config.resolution)?;
        let raw = rasterizer.rasterize(&grid);
        let (x, y) = spawn_point(&grid, &rasterizer, &raw, config.seed)?;
        let render_loop = RenderLoop::new(config.frame_rate)?;

        info!(
            map_cols = grid.cols(),
            map_rows = grid.rows(),
            width,
            height,
            cell_w = rasterizer.cell_w(),
            cell_h = rasterizer.cell_h(),
            spawn_x = x,
            spawn_y = y,
            "engine ready"
        );

        let minimap = render_minimap(&raw, (x, y), MINIMAP_STRIDE);
        Ok(Self {
            grid,
            rasterizer,
            raw,
            camera: Camera::new(x, y, config.camera),
            frame: Frame::new(width, height),
            minimap,
            mode: config.mode,
            render_loop,
            last_stats: RenderStats::default(),
            last_outcome: None,
        })
    }

    /// Run one tick: re-sync the raw frame, apply `action`, render.
    pub fn tick(&mut self, action: Option<CameraAction>) -> RenderStats {
        self.rasterizer.rasterize_into(&self.grid, &mut self.raw);

        self.last_outcome = action.map(|action| {
            let outcome = self.camera.apply(action, &self.raw);
            debug!(action = action.as_str(), ?outcome, "action applied");
            outcome
        });

        self.last_stats = match self.mode {
            RenderMode::FirstPerson => {
                render_first_person(&self.camera, &mut self.raw, &mut self.frame)
            }
            RenderMode::TopDown => render_top_down(&self.camera, &mut self.raw, &mut self.frame),
        };
        self.minimap = render_minimap(&self.raw, self.camera.position(), MINIMAP_STRIDE);
        self.last_stats
    }

    /// Replace the camera. Its cell must be walkable.
    pub fn set_camera(&mut self, camera: Camera) -> Result<()> {
        self.rasterizer.rasterize_into(&self.grid, &mut self.raw);
        let (x, y) = camera.position();
        if !self.raw.is_walkable(x, y) {
            return Err(RaycastError::BlockedCell { x, y });
        }
        self.camera = camera;
        Ok(())
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Primary output of the last tick.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Diagnostic minimap of the last tick.
    pub fn minimap(&self) -> &Frame {
        &self.minimap
    }

    /// Raw frame as left by the last tick, ray markers included.
    pub fn raw_frame(&self) -> &RawFrame {
        &self.raw
    }

    pub fn rasterizer(&self) -> &Rasterizer {
        &self.rasterizer
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> RenderMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn last_stats(&self) -> RenderStats {
        self.last_stats
    }

    /// Outcome of the action applied by the last tick, if any.
    pub fn last_outcome(&self) -> Option<ActionOutcome> {
        self.last_outcome
    }

    pub fn render_loop(&self) -> &RenderLoop {
        &self.render_loop
    }

    pub fn render_loop_mut(&mut self) -> &mut RenderLoop {
        &mut self.render_loop
    }
}
