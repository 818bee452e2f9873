//! Terminal layer for the donut.
//!
//! Rendering goes core `Frame` → [`DonutView`] → [`FrameBuffer`] →
//! [`TerminalRenderer`]. It intentionally avoids widget/layout libraries; the
//! framebuffer is flushed with plain crossterm commands.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Redraw only changed cell runs after the first frame
//! - Keep the per-frame path allocation-free

pub mod donut_view;
pub mod fb;
pub mod prompt;
pub mod renderer;

pub use tui_donut_core as core;
pub use tui_donut_types as types;

pub use donut_view::{DonutView, Hud, Viewport, FOOTER_ROWS, HEADER_ROWS};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use prompt::{countdown, select_charset, select_color_mode, write_banner, write_style_demo};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
