//! Animation state owned by the render loop.

use crate::core::{Frame, FrameRenderer, SpinState};
use crate::types::{Charset, ColorMode, DonutAction, DonutConfig};
use crate::run_loop::LoopControl;

/// Renderer, output frame and rotation state of one running donut.
pub struct Animation {
    config: DonutConfig,
    renderer: FrameRenderer,
    frame: Frame,
    spin: SpinState,
}

impl Animation {
    pub fn new(config: DonutConfig) -> Self {
        Self::starting_at(config, SpinState::new())
    }

    pub fn starting_at(config: DonutConfig, spin: SpinState) -> Self {
        let renderer = FrameRenderer::new(&config);
        let frame = Frame::new(config.width, config.height);
        Self {
            config,
            renderer,
            frame,
            spin,
        }
    }

    pub fn config(&self) -> &DonutConfig {
        &self.config
    }

    /// Rotation state of the most recently rendered frame (until `advance`).
    pub fn spin(&self) -> SpinState {
        self.spin
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn renderer(&self) -> &FrameRenderer {
        &self.renderer
    }

    pub fn charset(&self) -> &Charset {
        &self.config.charset
    }

    pub fn color_mode(&self) -> ColorMode {
        self.config.color_mode
    }

    /// Render the current rotation into the frame.
    pub fn render(&mut self) -> &Frame {
        self.renderer.render_into(&self.spin, &mut self.frame);
        &self.frame
    }

    /// Move to the next rotation.
    pub fn advance(&mut self) {
        self.spin = self.spin.advanced(&self.config.spin);
    }

    pub fn set_charset(&mut self, charset: Charset) {
        self.renderer.set_charset(charset.clone());
        self.config.charset = charset;
    }

    pub fn set_color_mode(&mut self, color_mode: ColorMode) {
        self.renderer.set_color_mode(color_mode);
        self.config.color_mode = color_mode;
    }

    /// Apply a runtime mode switch. Takes effect from the next rendered frame.
    pub fn apply_action(&mut self, action: DonutAction) -> LoopControl {
        match action {
            DonutAction::CycleCharset => {
                let next = self.config.charset.next();
                log::debug!("charset {} -> {}", self.config.charset.as_str(), next.as_str());
                self.set_charset(next);
            }
            DonutAction::ToggleColor => {
                let next = self.config.color_mode.toggle();
                log::debug!("color mode -> {}", next.as_str());
                self.set_color_mode(next);
            }
            DonutAction::Quit => return LoopControl::Stop,
        }
        LoopControl::Continue
    }
}
