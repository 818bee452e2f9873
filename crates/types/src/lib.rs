//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (math pipeline, terminal view, render loop, config loader).
//!
//! # Scene Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MINOR_RADIUS` | 1.0 | Tube radius of the torus |
//! | `MAJOR_RADIUS` | 2.0 | Distance from the torus centre to the tube centre |
//! | `VIEWER_DISTANCE` | 5.0 | Distance from the eye to the torus centre |
//! | `THETA_STEP` | 0.07 | Angular step around the tube |
//! | `PHI_STEP` | 0.02 | Angular step around the ring |
//! | `A_SPEED` | 0.08 | Spin about the x axis per frame |
//! | `B_SPEED` | 0.03 | Spin about the z axis per frame |
//! | `TARGET_FPS` | 30 | Frame pacing target |
//!
//! # Lighting
//!
//! Light comes from `LIGHT_DIRECTION` (above and behind the viewer). Shaded
//! luminance is `max(0, n·L * DIFFUSE + AMBIENT)`.
//!
//! # Examples
//!
//! ```
//! use tui_donut_types::{Charset, ColorMode, DonutConfig};
//!
//! let style = Charset::from_str("blocks").unwrap();
//! assert_eq!(style.glyphs(), &[' ', '░', '▒', '▓', '█']);
//!
//! let mode = ColorMode::from_str("mono").unwrap();
//! assert_eq!(mode.toggle(), ColorMode::Rainbow);
//!
//! let config = DonutConfig::default();
//! assert!(config.validate().is_ok());
//! ```

use std::f64::consts::TAU;
use std::fmt;
use std::time::Duration;

/// Default donut area width in terminal columns
pub const DEFAULT_WIDTH: u16 = 100;

/// Default donut area height in terminal rows
pub const DEFAULT_HEIGHT: u16 = 25;

/// Tube radius
pub const MINOR_RADIUS: f64 = 1.0;

/// Ring radius (torus centre to tube centre)
pub const MAJOR_RADIUS: f64 = 2.0;

/// Eye to torus centre
pub const VIEWER_DISTANCE: f64 = 5.0;

/// Angular step around the tube (theta)
pub const THETA_STEP: f64 = 0.07;

/// Angular step around the ring (phi)
pub const PHI_STEP: f64 = 0.02;

/// Rotation about the x axis per frame (radians)
pub const A_SPEED: f64 = 0.08;

/// Rotation about the z axis per frame (radians)
pub const B_SPEED: f64 = 0.03;

/// Frame pacing target
pub const TARGET_FPS: u32 = 30;

/// Terminal cell height/width compensation applied to projected y.
pub const CELL_ASPECT: f64 = 0.5;

/// Upper bound on samples per sweep (one full turn of theta or phi).
pub const MAX_SWEEP_SAMPLES: usize = 100_000;

/// Samples at or closer than this depth (after adding the viewer distance) are dropped.
pub const MIN_DEPTH: f64 = 0.01;

/// Light direction (not normalized, |L| = sqrt(2))
pub const LIGHT_DIRECTION: (f64, f64, f64) = (0.0, 1.0, -1.0);

/// Weight of the diffuse term in shaded luminance
pub const DIFFUSE: f64 = 0.8;

/// Constant ambient term in shaded luminance
pub const AMBIENT: f64 = 0.2;

/// Inter-frame delay for a given frame rate.
///
/// A rate of zero is treated as one frame per second.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tui_donut_types::frame_delay_for_fps;
///
/// assert_eq!(frame_delay_for_fps(20), Duration::from_millis(50));
/// assert_eq!(frame_delay_for_fps(0), Duration::from_secs(1));
/// ```
pub fn frame_delay_for_fps(fps: u32) -> Duration {
    Duration::from_secs(1) / fps.max(1)
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Rainbow palette cycled in [`ColorMode::Rainbow`].
///
/// Ordered red → magenta so that consecutive hue offsets walk the spectrum.
pub const RAINBOW: [Rgb; 7] = [
    Rgb::new(235, 70, 70),
    Rgb::new(255, 150, 40),
    Rgb::new(245, 225, 70),
    Rgb::new(90, 215, 100),
    Rgb::new(70, 210, 220),
    Rgb::new(80, 120, 235),
    Rgb::new(200, 110, 225),
];

const CLASSIC_GLYPHS: &[char] = &[
    ' ', '.', '\'', ':', '!', '~', ';', 'i', 'r', 's', 'X', 'A', '2', '5', '3', 'h', 'M', 'H',
    'G', 'S', '#', '9', '&', '@',
];
const MINIMAL_GLYPHS: &[char] = &[' ', '.', '-', '=', '+', '*', '#', '@'];
const BLOCK_GLYPHS: &[char] = &[' ', '░', '▒', '▓', '█'];
const DOT_GLYPHS: &[char] = &[' ', '·', '∘', '○', '●'];

/// Glyph ramp used to shade the torus
///
/// Each ramp is ordered from darkest (index 0) to densest/brightest.
/// - **Classic**: 24-step detailed ASCII ramp
/// - **Minimal**: 8-step clean ramp
/// - **Blocks**: shade blocks
/// - **Dots**: dots of increasing size
/// - **Custom**: user supplied ramp (never empty)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Charset {
    #[default]
    Classic,
    Minimal,
    Blocks,
    Dots,
    Custom(Vec<char>),
}

impl Charset {
    /// Built-in ramps in prompt order.
    pub const BUILTIN: [Charset; 4] = [
        Charset::Classic,
        Charset::Minimal,
        Charset::Blocks,
        Charset::Dots,
    ];

    /// Parse a built-in ramp name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_donut_types::Charset;
    ///
    /// assert_eq!(Charset::from_str("Classic"), Some(Charset::Classic));
    /// assert_eq!(Charset::from_str("dots"), Some(Charset::Dots));
    /// assert_eq!(Charset::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Some(Charset::Classic),
            "minimal" => Some(Charset::Minimal),
            "blocks" => Some(Charset::Blocks),
            "dots" => Some(Charset::Dots),
            _ => None,
        }
    }

    /// Build a custom ramp from the characters of `ramp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_donut_types::{Charset, ConfigError};
    ///
    /// let ramp = Charset::custom(" ox").unwrap();
    /// assert_eq!(ramp.glyphs(), &[' ', 'o', 'x']);
    /// assert_eq!(Charset::custom(""), Err(ConfigError::EmptyCharset));
    /// ```
    pub fn custom(ramp: &str) -> Result<Self, ConfigError> {
        let glyphs: Vec<char> = ramp.chars().collect();
        if glyphs.is_empty() {
            return Err(ConfigError::EmptyCharset);
        }
        Ok(Charset::Custom(glyphs))
    }

    /// Glyphs ordered from darkest to brightest.
    pub fn glyphs(&self) -> &[char] {
        match self {
            Charset::Classic => CLASSIC_GLYPHS,
            Charset::Minimal => MINIMAL_GLYPHS,
            Charset::Blocks => BLOCK_GLYPHS,
            Charset::Dots => DOT_GLYPHS,
            Charset::Custom(glyphs) => glyphs,
        }
    }

    /// Next ramp for the runtime style switch. Custom ramps cycle back to classic.
    pub fn next(&self) -> Self {
        match self {
            Charset::Classic => Charset::Minimal,
            Charset::Minimal => Charset::Blocks,
            Charset::Blocks => Charset::Dots,
            Charset::Dots | Charset::Custom(_) => Charset::Classic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Charset::Classic => "classic",
            Charset::Minimal => "minimal",
            Charset::Blocks => "blocks",
            Charset::Dots => "dots",
            Charset::Custom(_) => "custom",
        }
    }

    /// Human description shown by the startup prompt.
    pub fn description(&self) -> &'static str {
        match self {
            Charset::Classic => "detailed ASCII shading",
            Charset::Minimal => "clean and simple",
            Charset::Blocks => "solid block characters",
            Charset::Dots => "minimalist dots",
            Charset::Custom(_) => "user supplied ramp",
        }
    }
}

/// How shaded cells are colored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    /// Cycle through [`RAINBOW`], offset by a per-frame hue counter
    #[default]
    Rainbow,
    /// Terminal default foreground, no color codes
    Monochrome,
}

impl ColorMode {
    /// Parse color mode from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_donut_types::ColorMode;
    ///
    /// assert_eq!(ColorMode::from_str("rainbow"), Some(ColorMode::Rainbow));
    /// assert_eq!(ColorMode::from_str("Color"), Some(ColorMode::Rainbow));
    /// assert_eq!(ColorMode::from_str("mono"), Some(ColorMode::Monochrome));
    /// assert_eq!(ColorMode::from_str("sepia"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rainbow" | "color" | "colour" => Some(ColorMode::Rainbow),
            "monochrome" | "mono" => Some(ColorMode::Monochrome),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Rainbow => "rainbow",
            ColorMode::Monochrome => "monochrome",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            ColorMode::Rainbow => ColorMode::Monochrome,
            ColorMode::Monochrome => ColorMode::Rainbow,
        }
    }
}

/// Runtime mode switches
///
/// The only interaction the animation accepts while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonutAction {
    /// Switch to the next glyph ramp
    CycleCharset,
    /// Flip between rainbow and monochrome
    ToggleColor,
    /// Stop the render loop
    Quit,
}

impl DonutAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_donut_types::DonutAction;
    ///
    /// assert_eq!(DonutAction::from_str("cycleCharset"), Some(DonutAction::CycleCharset));
    /// assert_eq!(DonutAction::from_str("quit"), Some(DonutAction::Quit));
    /// assert_eq!(DonutAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cyclecharset" => Some(DonutAction::CycleCharset),
            "togglecolor" => Some(DonutAction::ToggleColor),
            "quit" => Some(DonutAction::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DonutAction::CycleCharset => "cycleCharset",
            DonutAction::ToggleColor => "toggleColor",
            DonutAction::Quit => "quit",
        }
    }
}

/// Torus shape and camera distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusGeometry {
    /// Tube radius (r)
    pub minor_radius: f64,
    /// Ring radius (R)
    pub major_radius: f64,
    /// Eye to torus centre
    pub viewer_distance: f64,
}

impl Default for TorusGeometry {
    fn default() -> Self {
        Self {
            minor_radius: MINOR_RADIUS,
            major_radius: MAJOR_RADIUS,
            viewer_distance: VIEWER_DISTANCE,
        }
    }
}

/// Per-frame angle deltas (radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinRates {
    /// About the x axis
    pub a: f64,
    /// About the z axis
    pub b: f64,
}

impl Default for SpinRates {
    fn default() -> Self {
        Self {
            a: A_SPEED,
            b: B_SPEED,
        }
    }
}

/// Everything needed to animate a donut.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutConfig {
    /// Donut area width (columns)
    pub width: u16,
    /// Donut area height (rows)
    pub height: u16,
    pub charset: Charset,
    pub color_mode: ColorMode,
    pub geometry: TorusGeometry,
    /// Tube sweep step
    pub theta_step: f64,
    /// Ring sweep step
    pub phi_step: f64,
    pub spin: SpinRates,
    /// Target time between frames
    pub frame_delay: Duration,
    /// Vertical squash applied after projection
    pub cell_aspect: f64,
}

impl Default for DonutConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            charset: Charset::Classic,
            color_mode: ColorMode::Rainbow,
            geometry: TorusGeometry::default(),
            theta_step: THETA_STEP,
            phi_step: PHI_STEP,
            spin: SpinRates::default(),
            frame_delay: frame_delay_for_fps(TARGET_FPS),
            cell_aspect: CELL_ASPECT,
        }
    }
}

impl DonutConfig {
    /// Reject configurations the renderer cannot draw.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyViewport {
                width: self.width,
                height: self.height,
            });
        }
        for (name, step) in [("theta_step", self.theta_step), ("phi_step", self.phi_step)] {
            if !is_positive(step) {
                return Err(ConfigError::InvalidStep(name, step));
            }
            if TAU / step > MAX_SWEEP_SAMPLES as f64 {
                return Err(ConfigError::StepTooFine(name, step));
            }
        }
        let g = &self.geometry;
        for (name, value) in [
            ("minor_radius", g.minor_radius),
            ("major_radius", g.major_radius),
            ("viewer_distance", g.viewer_distance),
            ("cell_aspect", self.cell_aspect),
        ] {
            if !is_positive(value) {
                return Err(ConfigError::InvalidGeometry(name, value));
            }
        }
        if self.charset.glyphs().is_empty() {
            return Err(ConfigError::EmptyCharset);
        }
        Ok(())
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Configuration rejected by [`DonutConfig::validate`]
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    EmptyViewport { width: u16, height: u16 },
    InvalidStep(&'static str, f64),
    /// Step needs more than [`MAX_SWEEP_SAMPLES`] samples per turn.
    StepTooFine(&'static str, f64),
    InvalidGeometry(&'static str, f64),
    EmptyCharset,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyViewport { width, height } => {
                write!(f, "viewport {}x{} has no cells", width, height)
            }
            ConfigError::InvalidStep(name, v) => {
                write!(f, "{} must be a finite positive angle, got {}", name, v)
            }
            ConfigError::StepTooFine(name, v) => write!(
                f,
                "{} of {} needs more than {} samples per turn",
                name, v, MAX_SWEEP_SAMPLES
            ),
            ConfigError::InvalidGeometry(name, v) => {
                write!(f, "{} must be finite and positive, got {}", name, v)
            }
            ConfigError::EmptyCharset => write!(f, "character set must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}
