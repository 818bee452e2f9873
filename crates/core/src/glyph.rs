//! Luminance shading and glyph/color mapping.

use crate::math::Vec3;
use crate::types::{Charset, ColorMode, Rgb, AMBIENT, DIFFUSE, LIGHT_DIRECTION, RAINBOW};

/// Shaded luminance of a rotated unit normal, never negative.
///
/// Ranges from `0.0` up to `sqrt(2) * DIFFUSE + AMBIENT`; mapping clamps the
/// top end.
#[inline(always)]
pub fn luminance(normal: Vec3) -> f64 {
    let lit = normal.dot(Vec3::from(LIGHT_DIRECTION));
    (lit * DIFFUSE + AMBIENT).max(0.0)
}

/// Bucket a luminance into `0..len`.
///
/// Values are clamped to `[0, 1]` first (NaN counts as dark). `len == 0` maps to 0.
#[inline(always)]
pub fn ramp_index(luminance: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let top = len - 1;
    if !(luminance > 0.0) {
        return 0;
    }
    let l = luminance.min(1.0);
    ((l * top as f64) as usize).min(top)
}

/// Rainbow color for a luminance band offset by the frame's hue counter.
pub fn rainbow_color(luminance: f64, hue: u64) -> Rgb {
    let len = RAINBOW.len();
    let band = ramp_index(luminance, len);
    RAINBOW[(band + (hue % len as u64) as usize) % len]
}

/// One composited cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    /// `None` renders with the terminal's default foreground.
    pub color: Option<Rgb>,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph {
        ch: ' ',
        color: None,
    };
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Maps luminance to a glyph of the active ramp and, in rainbow mode, a color.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphMapper {
    charset: Charset,
    color_mode: ColorMode,
}

impl GlyphMapper {
    pub fn new(charset: Charset, color_mode: ColorMode) -> Self {
        Self {
            charset,
            color_mode,
        }
    }

    pub fn charset(&self) -> &Charset {
        &self.charset
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn set_charset(&mut self, charset: Charset) {
        self.charset = charset;
    }

    pub fn set_color_mode(&mut self, color_mode: ColorMode) {
        self.color_mode = color_mode;
    }

    #[inline]
    pub fn map(&self, luminance: f64, hue: u64) -> Glyph {
        let glyphs = self.charset.glyphs();
        let ch = glyphs
            .get(ramp_index(luminance, glyphs.len()))
            .copied()
            .unwrap_or(' ');
        let color = match self.color_mode {
            ColorMode::Rainbow => Some(rainbow_color(luminance, hue)),
            ColorMode::Monochrome => None,
        };
        Glyph { ch, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_facing_light_is_brightest() {
        let towards = Vec3::new(0.0, 1.0, -1.0);
        let n = Vec3::new(0.0, towards.y / 2f64.sqrt(), towards.z / 2f64.sqrt());
        let expected = 2f64.sqrt() * DIFFUSE + AMBIENT;
        assert!((luminance(n) - expected).abs() < 1e-12);
    }

    #[test]
    fn normal_facing_away_is_clamped_to_zero() {
        let n = Vec3::new(0.0, -1.0 / 2f64.sqrt(), 1.0 / 2f64.sqrt());
        assert_eq!(luminance(n), 0.0);
    }

    #[test]
    fn side_lit_normal_gets_ambient_only() {
        assert!((luminance(Vec3::new(1.0, 0.0, 0.0)) - AMBIENT).abs() < 1e-12);
    }

    #[test]
    fn ramp_index_clamps() {
        assert_eq!(ramp_index(-3.0, 8), 0);
        assert_eq!(ramp_index(f64::NAN, 8), 0);
        assert_eq!(ramp_index(0.5, 8), 3);
        assert_eq!(ramp_index(1.0, 8), 7);
        assert_eq!(ramp_index(42.0, 8), 7);
        assert_eq!(ramp_index(1.0, 1), 0);
        assert_eq!(ramp_index(1.0, 0), 0);
    }

    #[test]
    fn monochrome_has_no_color() {
        let mapper = GlyphMapper::new(Charset::Minimal, ColorMode::Monochrome);
        assert_eq!(mapper.map(1.0, 3), Glyph { ch: '@', color: None });
        assert_eq!(mapper.map(0.0, 3).ch, ' ');
    }

    #[test]
    fn rainbow_hue_rotates_palette() {
        let a = rainbow_color(0.0, 0);
        let b = rainbow_color(0.0, 1);
        assert_eq!(a, RAINBOW[0]);
        assert_eq!(b, RAINBOW[1]);
        assert_eq!(rainbow_color(0.0, RAINBOW.len() as u64), a);
        assert_eq!(rainbow_color(1.0, 0), RAINBOW[RAINBOW.len() - 1]);
    }
}
