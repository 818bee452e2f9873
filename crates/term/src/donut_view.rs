//! DonutView: lays a rendered `core::Frame` and its status lines into a
//! terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::core::{Frame, SpinState};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Charset, ColorMode};

/// Rows above the donut: rule, title, rule.
pub const HEADER_ROWS: u16 = 3;
/// Rows below the donut: rule, status, resolution/keys.
pub const FOOTER_ROWS: u16 = 3;

const TITLE: &str = "ASCII DONUT";

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

/// Status shown around the donut.
#[derive(Debug, Clone, Copy)]
pub struct Hud<'a> {
    pub spin: SpinState,
    pub charset: &'a Charset,
    pub color_mode: ColorMode,
    pub target_fps: u32,
}

pub struct DonutView {
    hud: bool,
}

impl Default for DonutView {
    fn default() -> Self {
        Self { hud: true }
    }
}

impl DonutView {
    /// Donut only, no header/footer.
    pub fn bare() -> Self {
        Self { hud: false }
    }

    pub fn shows_hud(&self) -> bool {
        self.hud
    }

    /// Total rows needed to show a frame of `frame_height` rows.
    pub fn panel_height(&self, frame_height: u16) -> u16 {
        if self.hud {
            frame_height
                .saturating_add(HEADER_ROWS)
                .saturating_add(FOOTER_ROWS)
        } else {
            frame_height
        }
    }

    /// Render into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, frame: &Frame, hud: &Hud<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let panel_h = self.panel_height(frame.height());
        let start_x = viewport.width.saturating_sub(frame.width()) / 2;
        let start_y = viewport.height.saturating_sub(panel_h) / 2;

        let colored = hud.color_mode == ColorMode::Rainbow;
        let styles = HudStyles::new(colored);

        let mut y = start_y;
        if self.hud {
            self.draw_rule(fb, start_x, y, frame.width(), styles.rule);
            self.draw_centered(fb, start_x, y + 1, frame.width(), TITLE, styles.title);
            self.draw_rule(fb, start_x, y + 2, frame.width(), styles.rule);
            y += HEADER_ROWS;
        }

        for row in 0..frame.height() {
            fb.put_glyphs(start_x, y + row, frame.row(row));
        }
        y = y.saturating_add(frame.height());

        if self.hud {
            self.draw_rule(fb, start_x, y, frame.width(), styles.rule);

            let mut status = ArrayString::<160>::new();
            let _ = write!(
                status,
                "Rotation: A={:.2} B={:.2} | Mode: {} | Style: {}",
                hud.spin.a,
                hud.spin.b,
                mode_label(hud.color_mode),
                hud.charset.as_str(),
            );
            fb.put_str(start_x, y + 1, &status, styles.status);

            let mut info = ArrayString::<160>::new();
            let _ = write!(
                info,
                "Resolution: {}x{} | FPS: ~{} | s: style  c: color  q: quit",
                frame.width(),
                frame.height(),
                hud.target_fps,
            );
            fb.put_str(start_x, y + 2, &info, styles.info);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &Frame, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, hud, viewport, &mut fb);
        fb
    }

    fn draw_rule(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, style: CellStyle) {
        for dx in 0..w {
            fb.put_char(x.saturating_add(dx), y, '=', style);
        }
    }

    fn draw_centered(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, text: &str, style: CellStyle) {
        let text_w = text.chars().count() as u16;
        let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
        fb.put_str(tx, y, text, style);
    }
}

fn mode_label(mode: ColorMode) -> &'static str {
    match mode {
        ColorMode::Rainbow => "Rainbow",
        ColorMode::Monochrome => "Monochrome",
    }
}

struct HudStyles {
    rule: CellStyle,
    title: CellStyle,
    status: CellStyle,
    info: CellStyle,
}

impl HudStyles {
    fn new(colored: bool) -> Self {
        if !colored {
            let plain = CellStyle::plain();
            return Self {
                rule: plain,
                title: plain.bold(),
                status: plain,
                info: plain,
            };
        }
        Self {
            rule: CellStyle::colored(Rgb::new(235, 235, 235)).bold(),
            title: CellStyle::colored(Rgb::new(80, 220, 220)).bold(),
            status: CellStyle::colored(Rgb::new(245, 225, 70)).bold(),
            info: CellStyle::colored(Rgb::new(90, 215, 100)).bold(),
        }
    }
}
