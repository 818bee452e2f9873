//! Launch configuration from environment variables.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `DONUT_WIDTH` / `DONUT_HEIGHT` | donut area size (default 100x25) |
//! | `DONUT_FPS` | target frame rate (default 30) |
//! | `DONUT_STYLE` | classic, minimal, blocks or dots; skips the style prompt |
//! | `DONUT_CHARS` | custom glyph ramp, darkest first; skips the style prompt |
//! | `DONUT_COLOR` | rainbow or mono; skips the color prompt |
//! | `DONUT_NO_PROMPT` | `1`/`true` skips every prompt and the countdown |
//! | `DONUT_DURATION_SECS` | stop after this many seconds |
//!
//! Malformed values fall back to defaults with a warning; only a
//! configuration the renderer cannot draw is an error.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::term::{Viewport, FOOTER_ROWS, HEADER_ROWS};
use crate::types::{frame_delay_for_fps, Charset, ColorMode, DonutConfig, TARGET_FPS};

#[derive(Debug, Clone, PartialEq)]
pub struct LaunchOptions {
    pub config: DonutConfig,
    pub target_fps: u32,
    pub ask_style: bool,
    pub ask_color: bool,
    pub duration: Option<Duration>,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            config: DonutConfig::default(),
            target_fps: TARGET_FPS,
            ask_style: true,
            ask_color: true,
            duration: None,
        }
    }
}

impl LaunchOptions {
    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`LaunchOptions::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let mut opts = Self::default();
        let config = &mut opts.config;

        if let Some(width) = parse_var(&var, "DONUT_WIDTH") {
            config.width = width;
        }
        if let Some(height) = parse_var(&var, "DONUT_HEIGHT") {
            config.height = height;
        }
        if let Some(fps) = parse_var::<u32>(&var, "DONUT_FPS").filter(|fps| *fps > 0) {
            opts.target_fps = fps;
            config.frame_delay = frame_delay_for_fps(fps);
        }

        if let Some(chars) = lookup("DONUT_CHARS").filter(|s| !s.is_empty()) {
            config.charset = Charset::custom(&chars).context("DONUT_CHARS")?;
            opts.ask_style = false;
        } else if let Some(style) = var("DONUT_STYLE") {
            match Charset::from_str(&style) {
                Some(cs) => {
                    config.charset = cs;
                    opts.ask_style = false;
                }
                None => log::warn!("unknown DONUT_STYLE {:?}, asking instead", style),
            }
        }

        if let Some(color) = var("DONUT_COLOR") {
            match ColorMode::from_str(&color) {
                Some(mode) => {
                    config.color_mode = mode;
                    opts.ask_color = false;
                }
                None => log::warn!("unknown DONUT_COLOR {:?}, asking instead", color),
            }
        }

        let no_prompt = var("DONUT_NO_PROMPT")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);
        if no_prompt {
            opts.ask_style = false;
            opts.ask_color = false;
        }

        opts.duration = parse_var::<f64>(&var, "DONUT_DURATION_SECS")
            .filter(|secs| *secs > 0.0)
            .and_then(|secs| match Duration::try_from_secs_f64(secs) {
                Ok(d) => Some(d),
                Err(_) => {
                    log::warn!("ignoring out-of-range DONUT_DURATION_SECS={}", secs);
                    None
                }
            });

        opts.config
            .validate()
            .context("invalid donut configuration")?;
        Ok(opts)
    }

    /// Whether any startup question will be asked.
    pub fn is_interactive(&self) -> bool {
        self.ask_style || self.ask_color
    }
}

fn parse_var<T: std::str::FromStr>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = var(key)?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("ignoring malformed {}={:?}", key, raw);
            None
        }
    }
}

/// Shrink the donut area so it and its status lines fit the terminal.
pub fn fit_to_viewport(config: &mut DonutConfig, viewport: Viewport) {
    let max_h = viewport
        .height
        .saturating_sub(HEADER_ROWS + FOOTER_ROWS)
        .max(1);
    config.width = config.width.min(viewport.width.max(1));
    config.height = config.height.min(max_h);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn options(vars: &[(&str, &str)]) -> Result<LaunchOptions> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LaunchOptions::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let opts = options(&[]).unwrap();
        assert_eq!(opts, LaunchOptions::default());
        assert!(opts.is_interactive());
    }

    #[test]
    fn presets_skip_prompts() {
        let opts = options(&[("DONUT_STYLE", "Blocks"), ("DONUT_COLOR", "mono")]).unwrap();
        assert_eq!(opts.config.charset, Charset::Blocks);
        assert_eq!(opts.config.color_mode, ColorMode::Monochrome);
        assert!(!opts.is_interactive());
    }

    #[test]
    fn custom_chars_override_style() {
        let opts = options(&[("DONUT_CHARS", " .oO"), ("DONUT_STYLE", "dots")]).unwrap();
        assert_eq!(opts.config.charset, Charset::Custom(vec![' ', '.', 'o', 'O']));
        assert!(!opts.ask_style);
        assert!(opts.ask_color);
    }

    #[test]
    fn malformed_numbers_fall_back() {
        let opts = options(&[("DONUT_WIDTH", "wide"), ("DONUT_FPS", "0")]).unwrap();
        assert_eq!(opts.config.width, 100);
        assert_eq!(opts.target_fps, 30);
    }

    #[test]
    fn numbers_and_duration_are_read() {
        let opts = options(&[
            ("DONUT_WIDTH", "60"),
            ("DONUT_HEIGHT", "20"),
            ("DONUT_FPS", "20"),
            ("DONUT_DURATION_SECS", "1.5"),
            ("DONUT_NO_PROMPT", "true"),
        ])
        .unwrap();
        assert_eq!((opts.config.width, opts.config.height), (60, 20));
        assert_eq!(opts.config.frame_delay, Duration::from_millis(50));
        assert_eq!(opts.duration, Some(Duration::from_millis(1500)));
        assert!(!opts.is_interactive());
    }

    #[test]
    fn unrepresentable_duration_runs_unbounded() {
        for raw in ["1e30", "inf", "NaN", "-3"] {
            let opts = options(&[("DONUT_DURATION_SECS", raw)]).unwrap();
            assert_eq!(opts.duration, None, "{}", raw);
        }
    }

    #[test]
    fn zero_sized_area_is_rejected() {
        let err = options(&[("DONUT_HEIGHT", "0")]).unwrap_err();
        assert!(format!("{:#}", err).contains("has no cells"));
    }

    #[test]
    fn fit_shrinks_to_small_terminals() {
        let mut cfg = DonutConfig::default();
        fit_to_viewport(&mut cfg, Viewport::new(80, 24));
        assert_eq!((cfg.width, cfg.height), (80, 18));

        let mut cfg = DonutConfig::default();
        fit_to_viewport(&mut cfg, Viewport::new(200, 60));
        assert_eq!((cfg.width, cfg.height), (100, 25));
    }
}
