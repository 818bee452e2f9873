//! Spinning donut runner (default binary).
//!
//! Asks for a style and a color mode, counts down, then animates the torus
//! in the alternate screen until `q`, `Esc` or `Ctrl+C`. `s` cycles the glyph
//! ramp and `c` toggles color while it spins.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::style::Stylize;
use crossterm::tty::IsTty;

use tui_donut::config::{fit_to_viewport, LaunchOptions};
use tui_donut::engine::{Animation, LoopControl, RenderLoop, RunStats};
use tui_donut::input::map_key;
use tui_donut::term::{
    countdown, select_charset, select_color_mode, write_banner, DonutView, FrameBuffer, Hud,
    TerminalRenderer, Viewport,
};
use tui_donut::types::ColorMode;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut options = LaunchOptions::from_env()?;
    setup(&mut options)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &options);

    // Always try to restore terminal state.
    let _ = term.exit();
    let stats = result?;

    print_summary(&stats)?;
    Ok(())
}

/// Interactive questions, color support check and terminal fitting.
fn setup(options: &mut LaunchOptions) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    if options.is_interactive() {
        write_banner(&mut out)?;
    }
    if options.ask_style {
        options.config.charset = select_charset(&mut input, &mut out)?;
        writeln!(out)?;
    }
    if options.ask_color {
        options.config.color_mode = select_color_mode(&mut input, &mut out)?;
    }

    if options.config.color_mode == ColorMode::Rainbow && !io::stdout().is_tty() {
        log::info!("stdout is not a terminal, falling back to monochrome");
        options.config.color_mode = ColorMode::Monochrome;
    }

    if options.is_interactive() {
        let mode = match options.config.color_mode {
            ColorMode::Rainbow => "Full Color",
            ColorMode::Monochrome => "Monochrome",
        };
        let summary = format!(
            "You selected: {} style | {} mode",
            options.config.charset.as_str().to_uppercase(),
            mode
        );
        writeln!(out, "{}", summary.yellow().bold())?;
        writeln!(out)?;
        countdown(&mut out, 3, std::thread::sleep)?;
    }

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    fit_to_viewport(&mut options.config, Viewport::new(w, h));
    log::debug!(
        "donut area {}x{}, {} glyphs, {}",
        options.config.width,
        options.config.height,
        options.config.charset.as_str(),
        options.config.color_mode.as_str()
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, options: &LaunchOptions) -> Result<RunStats> {
    let mut animation = Animation::new(options.config.clone());
    let view = DonutView::default();

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);

    let mut render_loop = RenderLoop::new(options.config.frame_delay);
    if let Some(limit) = options.duration {
        render_loop = render_loop.max_duration(limit);
    }

    render_loop.run(&mut animation, |anim| -> Result<LoopControl> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        {
            let hud = Hud {
                spin: anim.spin(),
                charset: anim.charset(),
                color_mode: anim.color_mode(),
                target_fps: options.target_fps,
            };
            view.render_into(anim.frame(), &hud, Viewport::new(w, h), &mut fb);
        }
        term.draw_swap(&mut fb)?;

        // Drain pending input without blocking the frame.
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(action) = map_key(key) {
                        if anim.apply_action(action) == LoopControl::Stop {
                            return Ok(LoopControl::Stop);
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }
        Ok(LoopControl::Continue)
    })
}

fn print_summary(stats: &RunStats) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out)?;
    let stopped = format!("Donut stopped after {:.1}s", stats.elapsed.as_secs_f64());
    writeln!(out, "{}", stopped.green().bold())?;
    let fps = format!("Average FPS: {:.1}", stats.average_fps());
    writeln!(out, "{}", fps.green().bold())?;
    writeln!(out, "{}", "Thanks for watching the spinning donut!".cyan().bold())?;
    writeln!(out)?;
    Ok(())
}
