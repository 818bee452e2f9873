//! The render loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::animation::Animation;
use crate::clock::{pacing_delay, FrameClock, SystemClock};

/// Returned by the frame sink to keep going or end the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Shared flag that ends the loop before its next frame.
#[derive(Debug, Clone, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Frames produced and time spent by one [`RenderLoop::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    pub frames: u64,
    pub elapsed: Duration,
}

impl RunStats {
    pub fn average_fps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.frames as f64 / secs
        } else {
            0.0
        }
    }
}

pub struct RenderLoop<C: FrameClock = SystemClock> {
    clock: C,
    frame_delay: Duration,
    max_frames: Option<u64>,
    max_duration: Option<Duration>,
    stop: Option<StopToken>,
}

impl RenderLoop<SystemClock> {
    pub fn new(frame_delay: Duration) -> Self {
        Self::with_clock(SystemClock::new(), frame_delay)
    }
}

impl<C: FrameClock> RenderLoop<C> {
    pub fn with_clock(clock: C, frame_delay: Duration) -> Self {
        Self {
            clock,
            frame_delay,
            max_frames: None,
            max_duration: None,
            stop: None,
        }
    }

    /// Stop after rendering this many frames.
    pub fn max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Stop once this much time has passed since `run` started.
    pub fn max_duration(mut self, duration: Duration) -> Self {
        self.max_duration = Some(duration);
        self
    }

    pub fn stop_token(mut self, token: StopToken) -> Self {
        self.stop = Some(token);
        self
    }

    pub fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Run until the sink returns [`LoopControl::Stop`], the stop token fires,
    /// or a frame/time budget runs out.
    ///
    /// Per frame: render, call `on_frame`, advance the spin, sleep out the rest
    /// of the frame slot. Errors from the sink end the loop and are returned.
    pub fn run<F, E>(&mut self, animation: &mut Animation, mut on_frame: F) -> Result<RunStats, E>
    where
        F: FnMut(&mut Animation) -> Result<LoopControl, E>,
    {
        let start = self.clock.now();
        let mut frames = 0u64;

        loop {
            if self.should_stop(frames, start) {
                break;
            }

            let frame_start = self.clock.now();
            animation.render();
            let control = on_frame(animation)?;
            animation.advance();
            frames += 1;

            if control == LoopControl::Stop {
                break;
            }

            let spent = self.clock.now().saturating_sub(frame_start);
            if let Some(wait) = pacing_delay(self.frame_delay, spent) {
                self.clock.sleep(wait);
            }
        }

        let stats = RunStats {
            frames,
            elapsed: self.clock.now().saturating_sub(start),
        };
        log::debug!(
            "render loop stopped after {} frames ({:.1} fps)",
            stats.frames,
            stats.average_fps()
        );
        Ok(stats)
    }

    fn should_stop(&mut self, frames: u64, start: Duration) -> bool {
        if self.stop.as_ref().is_some_and(StopToken::is_stopped) {
            return true;
        }
        if self.max_frames.is_some_and(|max| frames >= max) {
            return true;
        }
        if let Some(max) = self.max_duration {
            if self.clock.now().saturating_sub(start) >= max {
                return true;
            }
        }
        false
    }
}
