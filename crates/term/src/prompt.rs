//! Startup prompts: pick a glyph ramp and a color mode before the animation.
//!
//! Everything here talks to generic `BufRead`/`Write` handles so the menus can
//! be driven from tests. End of input picks the default for the question.

use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::style::Stylize;

use crate::core::{Frame, FrameRenderer, SpinState};
use crate::types::{Charset, ColorMode, DonutConfig};

const DEMO_WIDTH: u16 = 60;
const DEMO_HEIGHT: u16 = 15;
const DEMO_OPTION: usize = Charset::BUILTIN.len() + 1;

pub fn write_banner<W: Write>(out: &mut W) -> Result<()> {
    let rule = "=".repeat(60);
    writeln!(out, "{}", rule.as_str().cyan().bold())?;
    writeln!(out, "{}", format!("{:^60}", "ASCII DONUT GENERATOR").white().bold())?;
    writeln!(out, "{}", rule.as_str().cyan().bold())?;
    writeln!(out)?;
    Ok(())
}

/// Ask for a glyph ramp. The last option prints every ramp and asks again.
pub fn select_charset<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Charset> {
    loop {
        writeln!(out, "{}", "Choose your donut style:".yellow().bold())?;
        for (i, cs) in Charset::BUILTIN.iter().enumerate() {
            writeln!(out, "{}. {} ({})", i + 1, title_case(cs.as_str()), cs.description())?;
        }
        writeln!(out, "{}. Show all styles demo", DEMO_OPTION)?;

        let prompt = format!("Enter your choice (1-{}): ", DEMO_OPTION);
        let Some(answer) = read_answer(input, out, &prompt)? else {
            writeln!(out)?;
            writeln!(out, "{}", "Using default classic style.".yellow().bold())?;
            return Ok(Charset::Classic);
        };

        match answer.parse::<usize>() {
            Ok(n) if (1..DEMO_OPTION).contains(&n) => return Ok(Charset::BUILTIN[n - 1].clone()),
            Ok(DEMO_OPTION) => {
                write_style_demo(out)?;
                writeln!(
                    out,
                    "{}",
                    "Now choose your style for the spinning donut:".yellow().bold()
                )?;
            }
            _ => {
                let msg = format!("Invalid choice. Please enter 1-{}.", DEMO_OPTION);
                writeln!(out, "{}", msg.red().bold())?;
            }
        }
    }
}

/// Ask for rainbow or monochrome output.
pub fn select_color_mode<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<ColorMode> {
    writeln!(out, "{}", "Choose your color preference:".yellow().bold())?;
    writeln!(out, "1. Full color (rainbow gradient)")?;
    writeln!(out, "2. Monochrome (classic black & white)")?;

    loop {
        let Some(answer) = read_answer(input, out, "Enter your choice (1-2): ")? else {
            writeln!(out)?;
            writeln!(out, "{}", "Using default color mode.".yellow().bold())?;
            return Ok(ColorMode::Rainbow);
        };
        match answer.as_str() {
            "1" => return Ok(ColorMode::Rainbow),
            "2" => return Ok(ColorMode::Monochrome),
            _ => writeln!(out, "{}", "Invalid choice. Please enter 1 or 2.".red().bold())?,
        }
    }
}

/// Print one still frame per built-in ramp, all from the same rotation.
pub fn write_style_demo<W: Write>(out: &mut W) -> Result<()> {
    let config = DonutConfig {
        width: DEMO_WIDTH,
        height: DEMO_HEIGHT,
        color_mode: ColorMode::Monochrome,
        ..DonutConfig::default()
    };
    let mut renderer = FrameRenderer::new(&config);
    let spin = SpinState::at(1.0, 1.0);
    renderer.rasterize(&spin);

    let mut frame = Frame::new(config.width, config.height);
    writeln!(out, "{}", "Different Donut Styles:".white().bold())?;
    writeln!(out)?;
    for cs in Charset::BUILTIN {
        let name = cs.as_str().to_uppercase();
        renderer.set_charset(cs);
        renderer.compose_into(spin.frame, &mut frame);

        writeln!(out, "{}", format!("{} Style:", name).yellow().bold())?;
        writeln!(out, "{}", frame.to_text())?;
        writeln!(out)?;
    }
    Ok(())
}

/// "Starting in 3... 2... 1..." then a go line.
pub fn countdown<W: Write>(
    out: &mut W,
    seconds: u32,
    mut sleep: impl FnMut(Duration),
) -> Result<()> {
    for i in (1..=seconds).rev() {
        writeln!(out, "{}", format!("Starting in {}...", i).cyan().bold())?;
        out.flush()?;
        sleep(Duration::from_secs(1));
    }
    writeln!(out, "{}", "Let's spin! 🍩".green().bold())?;
    out.flush()?;
    sleep(Duration::from_millis(500));
    Ok(())
}

/// Prompt and read one trimmed line. `None` on end of input.
fn read_answer<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(out, "{}", prompt.green().bold())?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
