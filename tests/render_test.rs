//! Frame pipeline properties: depth ordering, glyph bounds, determinism.

use std::collections::HashMap;

use tui_donut::core::{luminance, FrameRenderer, Projector, SpinState, SweepTable, Torus};
use tui_donut::types::{Charset, ColorMode, DonutConfig, TorusGeometry};

fn config(charset: Charset, color_mode: ColorMode) -> DonutConfig {
    DonutConfig {
        width: 80,
        height: 24,
        charset,
        color_mode,
        ..DonutConfig::default()
    }
}

#[test]
fn same_state_renders_byte_identical_frames() {
    let cfg = config(Charset::Classic, ColorMode::Monochrome);
    let spin = SpinState::new();

    let a = FrameRenderer::new(&cfg).render(&spin);
    let b = FrameRenderer::new(&cfg).render(&spin);
    assert_eq!(a, b);
    assert_eq!(a.to_text().into_bytes(), b.to_text().into_bytes());

    // Re-rendering with the same renderer must not carry state over.
    let mut r = FrameRenderer::new(&cfg);
    let first = r.render(&spin);
    r.render(&SpinState::at(2.0, 1.0));
    let again = r.render(&spin);
    assert_eq!(first, again);
}

#[test]
fn rainbow_frames_share_glyphs_with_monochrome() {
    let spin = SpinState::at(0.4, 0.9);
    let mono = FrameRenderer::new(&config(Charset::Classic, ColorMode::Monochrome)).render(&spin);
    let rainbow = FrameRenderer::new(&config(Charset::Classic, ColorMode::Rainbow)).render(&spin);
    assert_eq!(mono.to_text(), rainbow.to_text());
    assert!(rainbow.cells().iter().any(|g| g.color.is_some()));
    assert!(mono.cells().iter().all(|g| g.color.is_none()));
}

#[test]
fn nearest_sample_wins_every_cell() {
    let cfg = config(Charset::Classic, ColorMode::Monochrome);
    let spin = SpinState::at(1.3, 0.6);
    let mut renderer = FrameRenderer::new(&cfg);
    renderer.rasterize(&spin);

    // Brute force: best inverse depth per cell over every sample.
    let torus = Torus::from_geometry(&cfg.geometry);
    let projector = Projector::from_config(&cfg);
    let orientation = spin.orientation();
    let table = SweepTable::new(cfg.theta_step, cfg.phi_step);
    let mut best: HashMap<(u16, u16), (f64, f64)> = HashMap::new();
    for &t in table.theta() {
        for &p in table.phi() {
            let s = torus.sample_trig(t, p);
            let Some(screen) = projector.project(orientation.apply(s.point)) else {
                continue;
            };
            let lum = luminance(orientation.apply(s.normal));
            let entry = best.entry((screen.x, screen.y)).or_insert((0.0, 0.0));
            if screen.inv_depth >= entry.0 {
                *entry = (screen.inv_depth, lum);
            }
        }
    }

    let depth = renderer.depth();
    assert_eq!(depth.coverage(), best.len());
    for ((x, y), (inv_depth, lum)) in best {
        assert_eq!(depth.inv_depth_at(x, y), inv_depth);
        assert_eq!(depth.luminance_at(x, y), Some(lum));
    }
}

#[test]
fn glyphs_always_come_from_the_active_ramp() {
    let ramps = [
        Charset::Classic,
        Charset::Minimal,
        Charset::Blocks,
        Charset::Dots,
        Charset::custom("#").unwrap(),
        Charset::custom(" x").unwrap(),
    ];
    for cs in ramps {
        let mut r = FrameRenderer::new(&config(cs.clone(), ColorMode::Rainbow));
        for step in 0..5 {
            let spin = SpinState::at(step as f64 * 0.9, step as f64 * 0.35);
            let frame = r.render(&spin);
            for y in 0..frame.height() {
                for x in 0..frame.width() {
                    let g = frame.get(x, y).unwrap();
                    if r.depth().is_covered(x, y) {
                        assert!(cs.glyphs().contains(&g.ch), "{:?} not in {}", g.ch, cs.as_str());
                    } else {
                        assert_eq!(g.ch, ' ');
                    }
                }
            }
        }
    }
}

#[test]
fn switching_charset_keeps_the_silhouette() {
    let spin = SpinState::at(1.0, 1.0);
    let mut r = FrameRenderer::new(&config(Charset::Classic, ColorMode::Monochrome));

    r.rasterize(&spin);
    let reference: Vec<(f64, f64)> = r.depth().samples().collect();

    for cs in Charset::BUILTIN {
        let ramp_len = cs.glyphs().len();
        r.set_charset(cs);
        let frame = r.render(&spin);
        let now: Vec<(f64, f64)> = r.depth().samples().collect();
        assert_eq!(now, reference);

        // Same cells lit; glyph index follows luminance alone.
        for (g, (inv_depth, lum)) in frame.cells().iter().zip(reference.iter()) {
            if *inv_depth > 0.0 {
                let idx = r.mapper().charset().glyphs().iter().position(|c| *c == g.ch);
                assert_eq!(idx, Some(tui_donut::core::ramp_index(*lum, ramp_len)));
            }
        }
    }
}

#[test]
fn tiny_and_hostile_configs_never_panic() {
    let tiny = DonutConfig {
        width: 1,
        height: 1,
        ..DonutConfig::default()
    };
    FrameRenderer::new(&tiny).render(&SpinState::new());

    // Eye inside the torus: samples behind it are dropped.
    let close = DonutConfig {
        geometry: TorusGeometry {
            viewer_distance: 1.0,
            ..TorusGeometry::default()
        },
        ..DonutConfig::default()
    };
    let mut r = FrameRenderer::new(&close);
    for i in 0..10 {
        r.render(&SpinState::at(i as f64, i as f64 * 0.5));
    }

    // Torus far larger than the grid.
    let huge = DonutConfig {
        width: 10,
        height: 4,
        geometry: TorusGeometry {
            minor_radius: 40.0,
            major_radius: 90.0,
            viewer_distance: 5.0,
        },
        ..DonutConfig::default()
    };
    FrameRenderer::new(&huge).render(&SpinState::at(0.3, 0.3));
}

#[test]
fn donut_stays_inside_the_grid_margins() {
    let cfg = config(Charset::Classic, ColorMode::Monochrome);
    let mut r = FrameRenderer::new(&cfg);
    for i in 0..8 {
        r.rasterize(&SpinState::at(i as f64 * 0.8, i as f64 * 0.3));
        assert!(r.depth().coverage() > 100);
        // The bounding sphere subtends at most 3/4 of the half-width.
        for y in 0..cfg.height {
            assert!(!r.depth().is_covered(0, y));
            assert!(!r.depth().is_covered(cfg.width - 1, y));
        }
    }
}
