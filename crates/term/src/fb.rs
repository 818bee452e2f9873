//! Framebuffer and style types for terminal rendering.

use crate::core::Glyph;

pub use crate::types::Rgb;

/// Minimal per-cell styling.
///
/// `fg: None` leaves the terminal's default foreground in place, which is
/// how monochrome frames are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<Rgb>,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn plain() -> Self {
        Self {
            fg: None,
            bold: false,
            dim: false,
        }
    }

    pub const fn colored(fg: Rgb) -> Self {
        Self {
            fg: Some(fg),
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

impl From<Glyph> for Cell {
    fn from(glyph: Glyph) -> Self {
        Self {
            ch: glyph.ch,
            style: CellStyle {
                fg: glyph.color,
                bold: false,
                dim: false,
            },
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of row `y`; empty when out of range.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let w = self.width as usize;
        let start = y as usize * w;
        &self.cells[start..start + w]
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Write `s` centred on row `y` (left-clipped when wider than the buffer).
    pub fn put_str_centered(&mut self, y: u16, s: &str, style: CellStyle) {
        let len = s.chars().count().min(u16::MAX as usize) as u16;
        let x = self.width.saturating_sub(len) / 2;
        self.put_str(x, y, s, style);
    }

    /// Fill row `y` with `ch`.
    pub fn hline(&mut self, y: u16, ch: char, style: CellStyle) {
        for x in 0..self.width {
            self.put_char(x, y, ch, style);
        }
    }

    /// Copy a row of glyphs starting at `(x, y)`, clipped to the buffer.
    pub fn put_glyphs(&mut self, x: u16, y: u16, glyphs: &[Glyph]) {
        let mut cx = x;
        for glyph in glyphs {
            if cx >= self.width {
                break;
            }
            self.set(cx, y, Cell::from(*glyph));
            cx += 1;
        }
    }

    /// Characters only, rows joined with `\n`.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for y in 0..self.height {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..self.width {
                out.push(self.get(x, y).unwrap_or_default().ch);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "abc", CellStyle::plain());
        assert_eq!(fb.to_text(), "  ab");
    }

    #[test]
    fn rows_slice_the_grid() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_str(0, 1, "xyz", CellStyle::plain());
        let row: String = fb.row(1).iter().map(|c| c.ch).collect();
        assert_eq!(row, "xyz");
        assert!(fb.row(2).is_empty());
    }

    #[test]
    fn centered_text() {
        let mut fb = FrameBuffer::new(9, 1);
        fb.put_str_centered(0, "abc", CellStyle::plain());
        assert_eq!(fb.to_text(), "   abc   ");
    }

    #[test]
    fn glyph_colors_become_cell_styles() {
        let mut fb = FrameBuffer::new(2, 1);
        let red = Rgb::new(255, 0, 0);
        fb.put_glyphs(
            0,
            0,
            &[
                Glyph { ch: '#', color: Some(red) },
                Glyph { ch: '.', color: None },
            ],
        );
        assert_eq!(fb.get(0, 0).unwrap().style.fg, Some(red));
        assert_eq!(fb.get(1, 0).unwrap().style.fg, None);
    }
}
