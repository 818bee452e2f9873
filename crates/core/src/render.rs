//! Frame rendering: sample → rotate → project → depth test → glyph.
//!
//! `FrameRenderer` owns every per-frame buffer, so after the first frame the
//! hot path does not allocate.

use crate::glyph::{luminance, Glyph, GlyphMapper};
use crate::projection::Projector;
use crate::spin::SpinState;
use crate::torus::{SweepTable, Torus};
use crate::types::{Charset, ColorMode, DonutConfig};
use crate::zbuffer::DepthBuffer;

/// Grid of composited glyphs, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<Glyph>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Glyph::BLANK; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[Glyph] {
        &self.cells
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Glyph::BLANK);
    }

    pub fn clear(&mut self) {
        self.cells.fill(Glyph::BLANK);
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[(y as usize) * (self.width as usize) + (x as usize)])
    }

    pub fn row(&self, y: u16) -> &[Glyph] {
        if y >= self.height {
            return &[];
        }
        let w = self.width as usize;
        let start = (y as usize) * w;
        &self.cells[start..start + w]
    }

    /// Characters only, rows joined with `\n` (no trailing newline).
    pub fn write_text(&self, out: &mut String) {
        for y in 0..self.height {
            if y > 0 {
                out.push('\n');
            }
            out.extend(self.row(y).iter().map(|g| g.ch));
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        self.write_text(&mut out);
        out
    }
}

pub struct FrameRenderer {
    torus: Torus,
    sweep: SweepTable,
    projector: Projector,
    depth: DepthBuffer,
    mapper: GlyphMapper,
}

impl FrameRenderer {
    pub fn new(config: &DonutConfig) -> Self {
        Self {
            torus: Torus::from_geometry(&config.geometry),
            sweep: SweepTable::new(config.theta_step, config.phi_step),
            projector: Projector::from_config(config),
            depth: DepthBuffer::new(config.width, config.height),
            mapper: GlyphMapper::new(config.charset.clone(), config.color_mode),
        }
    }

    pub fn width(&self) -> u16 {
        self.projector.width()
    }

    pub fn height(&self) -> u16 {
        self.projector.height()
    }

    pub fn mapper(&self) -> &GlyphMapper {
        &self.mapper
    }

    pub fn set_charset(&mut self, charset: Charset) {
        self.mapper.set_charset(charset);
    }

    pub fn set_color_mode(&mut self, color_mode: ColorMode) {
        self.mapper.set_color_mode(color_mode);
    }

    /// Depth/luminance buffer of the last rasterized frame.
    pub fn depth(&self) -> &DepthBuffer {
        &self.depth
    }

    /// Fill the depth/luminance buffer for the given rotation.
    pub fn rasterize(&mut self, spin: &SpinState) -> &DepthBuffer {
        self.depth.clear();
        let orientation = spin.orientation();

        for &theta in self.sweep.theta() {
            for &phi in self.sweep.phi() {
                let surface = self.torus.sample_trig(theta, phi);
                let point = orientation.apply(surface.point);
                let Some(screen) = self.projector.project(point) else {
                    continue;
                };
                let normal = orientation.apply(surface.normal);
                self.depth
                    .plot(screen.x, screen.y, screen.inv_depth, luminance(normal));
            }
        }
        &self.depth
    }

    /// Map the current depth buffer into glyphs.
    pub fn compose_into(&self, hue: u64, frame: &mut Frame) {
        frame.resize(self.depth.width(), self.depth.height());
        for (cell, (inv_depth, lum)) in frame.cells.iter_mut().zip(self.depth.samples()) {
            *cell = if inv_depth > 0.0 {
                self.mapper.map(lum, hue)
            } else {
                Glyph::BLANK
            };
        }
    }

    /// Rasterize and compose. The rainbow hue follows `spin.frame`.
    pub fn render_into(&mut self, spin: &SpinState, frame: &mut Frame) {
        self.rasterize(spin);
        self.compose_into(spin.frame, frame);
    }

    /// Convenience helper that allocates a new frame.
    pub fn render(&mut self, spin: &SpinState) -> Frame {
        let mut frame = Frame::new(self.width(), self.height());
        self.render_into(spin, &mut frame);
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> DonutConfig {
        DonutConfig {
            width: 40,
            height: 12,
            charset: Charset::Minimal,
            color_mode: ColorMode::Monochrome,
            ..DonutConfig::default()
        }
    }

    #[test]
    fn frame_text_has_one_line_per_row() {
        let mut r = FrameRenderer::new(&small_config());
        let text = r.render(&SpinState::new()).to_text();
        assert_eq!(text.lines().count(), 12);
        assert!(text.lines().all(|l| l.chars().count() == 40));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn something_is_drawn_near_the_centre() {
        let mut r = FrameRenderer::new(&small_config());
        r.rasterize(&SpinState::at(1.0, 1.0));
        assert!(r.depth().coverage() > 0);
    }

    #[test]
    fn compose_leaves_uncovered_cells_blank() {
        let mut r = FrameRenderer::new(&small_config());
        let frame = r.render(&SpinState::at(0.5, 0.2));
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                if !r.depth().is_covered(x, y) {
                    assert_eq!(frame.get(x, y), Some(Glyph::BLANK));
                }
            }
        }
    }

    #[test]
    fn frame_resize_and_row_access() {
        let mut f = Frame::new(3, 2);
        assert_eq!(f.row(1).len(), 3);
        assert!(f.row(2).is_empty());
        f.resize(4, 4);
        assert_eq!(f.cells().len(), 16);
        assert_eq!(f.get(3, 3), Some(Glyph::BLANK));
        assert_eq!(f.get(4, 0), None);
    }
}
