//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are drawn by homing the cursor and overwriting, never by clearing
//! the screen, so the animation does not flicker. The screen is cleared only
//! on `enter` and when the framebuffer size changes.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor, no wrapping.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        self.last = None;
        log::debug!("entered alternate screen");
        Ok(())
    }

    /// Undo [`TerminalRenderer::enter`]. Safe to call after a failed frame.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        log::debug!("restored terminal");
        Ok(())
    }

    /// Force the next draw to clear and repaint everything (terminal resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then swap it with the previously drawn buffer.
    ///
    /// The caller keeps passing the same `FrameBuffer`; after the call it holds
    /// stale contents and is expected to be redrawn (the view clears it).
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut shown = match self.last.take() {
            Some(prev) => {
                if prev.width() != fb.width() || prev.height() != fb.height() {
                    log::debug!("framebuffer resized to {}x{}", fb.width(), fb.height());
                }
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            None => {
                self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut shown, fb);
        self.last = Some(shown);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`: cursor home, then every row.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    let mut pen = Pen::default();
    for y in 0..fb.height() {
        if y > 0 {
            out.queue(Print("\r\n"))?;
        }
        pen.draw(out, fb.row(y))?;
    }
    pen.finish(out)
}

/// Encode only the cell runs that differ between `prev` and `next`.
///
/// Buffers of different sizes cannot be diffed: the screen is cleared and
/// `next` is drawn in full.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
        return encode_full_into(next, out);
    }

    let mut pen = Pen::default();
    for y in 0..next.height() {
        let (old, new) = (prev.row(y), next.row(y));
        for (start, end) in changed_runs(old, new) {
            out.queue(cursor::MoveTo(start as u16, y))?;
            pen.draw(out, &new[start..end])?;
        }
    }
    pen.finish(out)
}

/// Half-open `[start, end)` ranges where two equally long rows differ.
fn changed_runs<'a>(old: &'a [Cell], new: &'a [Cell]) -> impl Iterator<Item = (usize, usize)> + 'a {
    let mut x = 0;
    std::iter::from_fn(move || {
        let differs = |i: &usize| old[*i] != new[*i];
        let start = (x..new.len()).find(differs)?;
        let end = (start..new.len())
            .find(|i| !differs(i))
            .unwrap_or(new.len());
        x = end;
        Some((start, end))
    })
}

/// Tracks the active SGR style so runs of equally styled cells emit it once.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn draw(&mut self, out: &mut Vec<u8>, cells: &[Cell]) -> Result<()> {
        for cell in cells {
            if self.style != Some(cell.style) {
                out.queue(SetAttribute(Attribute::Reset))?
                    .queue(SetForegroundColor(fg_color(cell.style.fg)))?;
                if cell.style.bold {
                    out.queue(SetAttribute(Attribute::Bold))?;
                }
                if cell.style.dim {
                    out.queue(SetAttribute(Attribute::Dim))?;
                }
                self.style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        out.queue(ResetColor)?.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn fg_color(fg: Option<Rgb>) -> Color {
    match fg {
        Some(Rgb { r, g, b }) => Color::Rgb { r, g, b },
        None => Color::Reset,
    }
}
