//! Terminal raycaster runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from the term
//! crate. Logs go to a file only, since stdout belongs to the scene.

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tui_raycast::cli::{parse_args, USAGE};
use tui_raycast::engine::Engine;
use tui_raycast::input::{handle_key_event, is_view_toggle, should_quit};
use tui_raycast::map_file::{builtin_map, load_map};
use tui_raycast::term::{FrameBuffer, SceneView, TerminalRenderer, Viewport};
use tui_raycast::types::CameraAction;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args)?;
    if options.help {
        println!("{}", USAGE);
        return Ok(());
    }

    init_logging()?;

    let grid = match &options.map {
        Some(path) => load_map(path)?,
        None => builtin_map()?,
    };
    let mut engine = Engine::new(grid, options.config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        warn!(error = %e, "run loop failed");
    }
    result
}

/// Install a file subscriber when `RAYCAST_LOG` names a path.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os("RAYCAST_LOG") else {
        return Ok(());
    };
    let file = std::fs::File::create(&path)
        .map_err(|e| anyhow!("cannot open log file {}: {}", path.to_string_lossy(), e))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, engine: &mut Engine) -> Result<()> {
    let mut view = SceneView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let started = Instant::now();
    // One action per tick; the latest key pressed since the last tick wins.
    let mut pending: Option<CameraAction> = None;

    engine.render_loop_mut().start();
    info!(
        interval_ms = engine.render_loop().interval_ms(),
        "render loop started"
    );

    loop {
        let now_ms = started.elapsed().as_millis() as u64;

        // Tick and draw.
        if engine.render_loop_mut().poll(now_ms) {
            engine.tick(pending.take());
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(engine, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let now_ms = started.elapsed().as_millis() as u64;
        let timeout = Duration::from_millis(engine.render_loop().time_until_next(now_ms));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        engine.render_loop_mut().stop();
                        info!("quit requested");
                        return Ok(());
                    }
                    if is_view_toggle(key) {
                        if key.kind == KeyEventKind::Press {
                            let mode = engine.toggle_mode();
                            info!(mode = mode.as_str(), "view toggled");
                        }
                        continue;
                    }
                    if let Some(action) = handle_key_event(key) {
                        pending = Some(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }
    }
}
