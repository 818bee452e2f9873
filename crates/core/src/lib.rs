//! Core donut pipeline - pure, deterministic, and testable
//!
//! This crate turns a rotation state into a grid of shaded glyphs. It has
//! **zero dependencies** on terminals or timing, making it:
//!
//! - **Deterministic**: the same [`SpinState`] and config always produce the same frame
//! - **Testable**: every stage is a plain function or a small value type
//! - **Fast**: buffers are reused, so rendering allocates nothing after the first frame
//!
//! # Module Structure
//!
//! - [`math`]: `Vec3` and axis rotations
//! - [`torus`]: surface sampling and sweep tables
//! - [`spin`]: rotation state and cached orientation
//! - [`projection`]: perspective projection onto the character grid
//! - [`zbuffer`]: depth/luminance buffer (closest sample wins)
//! - [`glyph`]: luminance shading, glyph ramps and rainbow colors
//! - [`render`]: `FrameRenderer` and the composited `Frame`
//!
//! # Example
//!
//! ```
//! use tui_donut_core::{FrameRenderer, SpinState};
//! use tui_donut_types::DonutConfig;
//!
//! let config = DonutConfig { width: 60, height: 15, ..DonutConfig::default() };
//! let mut renderer = FrameRenderer::new(&config);
//!
//! let spin = SpinState::at(1.0, 1.0);
//! let frame = renderer.render(&spin);
//! assert_eq!(frame.width(), 60);
//! assert!(renderer.depth().coverage() > 0);
//!
//! // Advance one frame.
//! let next = spin.advanced(&config.spin);
//! assert_eq!(next.frame, 1);
//! ```

pub mod glyph;
pub mod math;
pub mod projection;
pub mod render;
pub mod spin;
pub mod torus;
pub mod zbuffer;

pub use tui_donut_types as types;

// Re-export commonly used types for convenience
pub use glyph::{luminance, rainbow_color, ramp_index, Glyph, GlyphMapper};
pub use math::Vec3;
pub use projection::{Projector, ScreenSample};
pub use render::{Frame, FrameRenderer};
pub use spin::{Orientation, SpinState};
pub use torus::{angle_steps, SurfacePoint, SweepTable, Torus};
pub use zbuffer::DepthBuffer;
