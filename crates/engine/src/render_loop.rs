//! Fixed-rate render timer.
//!
//! The loop holds no thread or OS timer: the caller passes a monotonic clock
//! reading and asks whether a tick is due.

use crate::core::{RaycastError, Result};

#[derive(Debug, Clone)]
pub struct RenderLoop {
    interval_ms: u64,
    running: bool,
    last_tick_ms: Option<u64>,
}

impl RenderLoop {
    /// Timer ticking `frame_rate` times per second.
    pub fn new(frame_rate: u32) -> Result<Self> {
        if frame_rate == 0 {
            return Err(RaycastError::InvalidFrameRate(frame_rate));
        }
        Ok(Self {
            interval_ms: (1000 / frame_rate as u64).max(1),
            running: false,
            last_tick_ms: None,
        })
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start ticking. The first tick is due immediately.
    ///
    /// Starting a running loop is a no-op and keeps its schedule.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.last_tick_ms = None;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether a tick is due at `now_ms`. Consumes the tick when it is.
    ///
    /// A late poll yields a single tick; missed ticks are not replayed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if !self.running {
            return false;
        }
        let due = match self.last_tick_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
        };
        if due {
            self.last_tick_ms = Some(now_ms);
        }
        due
    }

    /// Milliseconds until the next tick is due (0 when due or stopped).
    pub fn time_until_next(&self, now_ms: u64) -> u64 {
        match self.last_tick_ms {
            Some(last) if self.running => (last + self.interval_ms).saturating_sub(now_ms),
            _ => 0,
        }
    }
}
