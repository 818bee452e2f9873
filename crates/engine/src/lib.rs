//! Render loop for the donut animation.
//!
//! The loop is a single state (RENDERING) that renders a frame, hands it to a
//! caller-supplied sink, advances the spin and waits for the next frame slot.
//! Timing goes through [`FrameClock`] so tests can drive it without sleeping,
//! and the loop ends on an explicit stop condition instead of running forever.

pub mod animation;
pub mod clock;
pub mod run_loop;

pub use tui_donut_core as core;
pub use tui_donut_types as types;

pub use animation::Animation;
pub use clock::{pacing_delay, FrameClock, ManualClock, SystemClock};
pub use run_loop::{LoopControl, RenderLoop, RunStats, StopToken};
