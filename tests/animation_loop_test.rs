//! Render loop behavior with a manual clock: spin advance, pacing, stop
//! conditions, and runtime mode switches.

use std::convert::Infallible;
use std::f64::consts::TAU;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_donut::core::{FrameRenderer, SpinState};
use tui_donut::engine::{Animation, LoopControl, ManualClock, RenderLoop, StopToken};
use tui_donut::input::map_key;
use tui_donut::types::{Charset, ColorMode, DonutAction, DonutConfig, SpinRates};

const DELAY: Duration = Duration::from_millis(33);

fn config() -> DonutConfig {
    DonutConfig {
        width: 40,
        height: 12,
        color_mode: ColorMode::Monochrome,
        ..DonutConfig::default()
    }
}

fn manual_loop() -> RenderLoop<ManualClock> {
    RenderLoop::with_clock(ManualClock::new(), DELAY)
}

#[test]
fn angles_advance_by_the_configured_rate_each_frame() {
    let rates = SpinRates { a: 0.5, b: 0.9 };
    let cfg = DonutConfig {
        spin: rates,
        ..config()
    };
    let mut anim = Animation::starting_at(cfg, SpinState::at(TAU - 0.2, 0.0));
    let mut seen = Vec::new();

    let stats = manual_loop()
        .max_frames(40)
        .run(&mut anim, |a| {
            seen.push(a.spin());
            Ok::<_, Infallible>(LoopControl::Continue)
        })
        .unwrap();

    assert_eq!(stats.frames, 40);
    assert_eq!(seen.len(), 40);
    for pair in seen.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        assert_eq!(next.frame, prev.frame + 1);
        assert!(((next.a - prev.a).rem_euclid(TAU) - rates.a).abs() < 1e-9);
        assert!(((next.b - prev.b).rem_euclid(TAU) - rates.b).abs() < 1e-9);
        assert!((0.0..TAU).contains(&next.a));
        assert!((0.0..TAU).contains(&next.b));
    }
}

#[test]
fn loop_sleeps_out_each_frame_slot() {
    let mut anim = Animation::new(config());
    let mut lp = manual_loop().max_frames(5);
    let stats = lp
        .run(&mut anim, |_| Ok::<_, Infallible>(LoopControl::Continue))
        .unwrap();

    assert_eq!(lp.clock().sleeps(), &[DELAY; 5]);
    assert_eq!(stats.elapsed, DELAY * 5);
    assert!((stats.average_fps() - 1.0 / DELAY.as_secs_f64()).abs() < 1e-6);
}

#[test]
fn run_duration_bounds_the_loop() {
    let mut anim = Animation::new(config());
    let stats = RenderLoop::with_clock(ManualClock::new(), Duration::from_millis(100))
        .max_duration(Duration::from_secs(1))
        .run(&mut anim, |_| Ok::<_, Infallible>(LoopControl::Continue))
        .unwrap();

    assert_eq!(stats.frames, 10);
    assert_eq!(stats.elapsed, Duration::from_secs(1));
}

#[test]
fn stop_token_ends_the_loop_before_the_next_frame() {
    let token = StopToken::new();
    let handle = token.clone();
    let mut anim = Animation::new(config());

    let stats = manual_loop()
        .stop_token(token)
        .run(&mut anim, |a| {
            if a.spin().frame == 2 {
                handle.stop();
            }
            Ok::<_, Infallible>(LoopControl::Continue)
        })
        .unwrap();

    assert_eq!(stats.frames, 3);
    assert_eq!(anim.spin().frame, 3);
}

#[test]
fn sink_errors_stop_the_loop_and_propagate() {
    let mut anim = Animation::new(config());
    let result = manual_loop().run(&mut anim, |a| {
        if a.spin().frame == 4 {
            Err("terminal went away")
        } else {
            Ok(LoopControl::Continue)
        }
    });

    assert_eq!(result, Err("terminal went away"));
    assert_eq!(anim.spin().frame, 4);
}

#[test]
fn quit_key_stops_after_the_current_frame() {
    let mut anim = Animation::new(config());
    let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);

    let stats = manual_loop()
        .run(&mut anim, |a| {
            if a.spin().frame < 6 {
                return Ok::<_, Infallible>(LoopControl::Continue);
            }
            let action = map_key(quit).unwrap_or(DonutAction::CycleCharset);
            Ok(a.apply_action(action))
        })
        .unwrap();

    assert_eq!(stats.frames, 7);
    // The rendered frame stays on screen; no sleep after the last one.
    assert_eq!(stats.elapsed, DELAY * 6);
}

#[test]
fn mode_switches_keep_spin_and_silhouette() {
    let cfg = config();
    let mut anim = Animation::new(cfg.clone());
    let mut reference = FrameRenderer::new(&cfg);
    let mut frames_checked = 0;

    manual_loop()
        .max_frames(12)
        .run(&mut anim, |a| {
            let spin = a.spin();
            reference.rasterize(&spin);
            let expected: Vec<bool> = reference.depth().samples().map(|(d, _)| d > 0.0).collect();
            let covered: Vec<bool> = a.frame().cells().iter().map(|g| g.ch != ' ').collect();
            let lit: Vec<bool> = a.renderer().depth().samples().map(|(d, _)| d > 0.0).collect();
            assert_eq!(lit, expected);
            // Blank glyphs can sit on lit cells only for the darkest band.
            for (c, e) in covered.iter().zip(expected.iter()) {
                assert!(!*c || *e);
            }
            frames_checked += 1;

            let action = match spin.frame % 3 {
                0 => DonutAction::CycleCharset,
                1 => DonutAction::ToggleColor,
                _ => return Ok::<_, Infallible>(LoopControl::Continue),
            };
            Ok(a.apply_action(action))
        })
        .unwrap();

    assert_eq!(frames_checked, 12);
    assert_eq!(anim.spin().frame, 12);
    // Four charset steps from classic wrap back to classic.
    assert_eq!(anim.charset(), &Charset::Classic);
    assert_eq!(anim.color_mode(), ColorMode::Monochrome);
}
