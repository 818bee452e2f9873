//! Frame timing.

use std::time::{Duration, Instant};

/// Time source and sleeper for the render loop.
pub trait FrameClock {
    /// Time elapsed since the clock was created.
    fn now(&mut self) -> Duration;
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock backed by `Instant` and `thread::sleep`.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn now(&mut self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Deterministic clock: time only moves on `sleep` or `advance`.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Duration,
    sleeps: Vec<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, duration: Duration) {
        self.now += duration;
    }

    /// Every sleep requested so far.
    pub fn sleeps(&self) -> &[Duration] {
        &self.sleeps
    }
}

impl FrameClock for ManualClock {
    fn now(&mut self) -> Duration {
        self.now
    }

    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
        self.now += duration;
    }
}

/// How long to wait so a frame that took `elapsed` fills its `target` slot.
///
/// `None` when the frame already used the whole slot.
pub fn pacing_delay(target: Duration, elapsed: Duration) -> Option<Duration> {
    target.checked_sub(elapsed).filter(|d| !d.is_zero())
}
