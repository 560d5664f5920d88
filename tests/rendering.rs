// Integration tests for the two render routines: determinism, fixed
// dimensions, full-overwrite semantics, and the catalog scenarios.

use padforge::canvas::{SizeClass, Surface, FRAME_DIMS};
use padforge::catalog::{MockupItem, PatternKind, StyleKind};
use padforge::color::Color;
use padforge::ops::mockup::render_mockup;
use padforge::ops::pattern::{render_pattern, RenderParams};

fn small_waves() -> RenderParams {
    RenderParams {
        background: Color::from_hex("#06b6d4").unwrap(),
        accent: Color::from_hex("#a5f3fc").unwrap(),
        pattern: PatternKind::Waves,
        caption: "MouseCraft".to_string(),
        size: SizeClass::Small,
    }
}

fn assert_pixel_near(img: &image::RgbaImage, x: u32, y: u32, expected: (u8, u8, u8), tol: i32) {
    let p = img.get_pixel(x, y);
    for (got, want) in [(p[0], expected.0), (p[1], expected.1), (p[2], expected.2)] {
        assert!(
            (got as i32 - want as i32).abs() <= tol,
            "pixel ({}, {}) = {:?}, expected ~{:?}",
            x,
            y,
            p,
            expected
        );
    }
}

#[test]
fn pattern_render_is_deterministic() {
    for &kind in PatternKind::all() {
        let params = RenderParams {
            pattern: kind,
            ..small_waves()
        };
        let mut a = Surface::preview(SizeClass::Small);
        let mut b = Surface::preview(SizeClass::Small);
        render_pattern(&mut a, &params);
        render_pattern(&mut b, &params);
        assert_eq!(a.raw(), b.raw(), "{:?} differs between runs", kind);
    }
}

#[test]
fn mockup_render_is_deterministic() {
    let item = MockupItem {
        size: SizeClass::Small,
        title: "probe",
        style: StyleKind::Comic,
        background: Color::from_hex("#ef4444").unwrap(),
        accent: Color::from_hex("#fde68a").unwrap(),
        pattern: PatternKind::Dots,
    };
    let mut a = Surface::card(SizeClass::Small);
    let mut b = Surface::card(SizeClass::Small);
    render_mockup(&mut a, &item);
    render_mockup(&mut b, &item);
    assert_eq!(a.raw(), b.raw());
}

#[test]
fn surface_dimensions_are_fixed_per_size_class() {
    assert_eq!(SizeClass::Small.preview_dims(), (600, 600));
    assert_eq!(SizeClass::Large.preview_dims(), (900, 525));
    assert_eq!(SizeClass::Small.thumb_dims(), (320, 320));
    assert_eq!(SizeClass::Large.thumb_dims(), (480, 280));
    assert_eq!(SizeClass::Small.card_dims(), (560, 360));
    assert_eq!(SizeClass::Large.card_dims(), (720, 420));
    assert_eq!(FRAME_DIMS, (1200, 675));

    // Dimensions depend on the size class only, never on render content.
    let s = Surface::preview(SizeClass::Large);
    assert_eq!((s.width(), s.height()), (900, 525));
}

#[test]
fn rerender_fully_overwrites_previous_content() {
    let loud = RenderParams {
        background: Color::from_hex("#f59e0b").unwrap(),
        accent: Color::from_hex("#fde68a").unwrap(),
        pattern: PatternKind::Dots,
        caption: "Sunset Dots".to_string(),
        size: SizeClass::Small,
    };
    let quiet = small_waves();

    let mut reused = Surface::preview(SizeClass::Small);
    render_pattern(&mut reused, &loud);
    render_pattern(&mut reused, &quiet);

    let mut fresh = Surface::preview(SizeClass::Small);
    render_pattern(&mut fresh, &quiet);

    assert_eq!(reused.raw(), fresh.raw(), "residue from the first render");
}

#[test]
fn small_waves_scenario() {
    let mut s = Surface::preview(SizeClass::Small);
    render_pattern(&mut s, &small_waves());
    let img = s.pixels();

    assert_eq!((s.width(), s.height()), (600, 600));

    // Gradient base, probed between wave bands (no stroke coverage there):
    // cyan-dominant near the top, near #0f172a at the bottom-right corner.
    assert_pixel_near(img, 300, 12, (8, 141, 168), 2);
    assert_pixel_near(img, 599, 599, (15, 23, 42), 2);

    // Wave strokes pull pixels toward the accent in the first band.
    let mut max_r = 0u8;
    for y in 0..16 {
        for x in 0..100 {
            max_r = max_r.max(img.get_pixel(x, y)[0]);
        }
    }
    assert!(
        max_r >= 25,
        "expected accent-tinted wave strokes near the top band, max r = {}",
        max_r
    );
}

#[test]
fn large_comic_mockup_scenario() {
    let item = MockupItem {
        size: SizeClass::Large,
        title: "probe",
        style: StyleKind::Comic,
        background: Color::from_hex("#ef4444").unwrap(),
        accent: Color::from_hex("#fde68a").unwrap(),
        pattern: PatternKind::Dots,
    };
    let mut s = Surface::card(SizeClass::Large);
    render_mockup(&mut s, &item);
    let img = s.pixels();

    assert_eq!((s.width(), s.height()), (720, 420));

    // Studio backdrop: #0b1220 fading to #111827, clear of pad and shine
    // at the left edge.
    assert_pixel_near(img, 0, 0, (11, 18, 32), 2);
    assert_pixel_near(img, 0, 419, (17, 24, 39), 2);

    // The artwork fills the pad quadrant below-right of the pad center.
    // This probe sits on the artwork side of the clip boundary only when
    // the tilt is positive.
    let p = img.get_pixel(356, 270);
    assert!(
        p[0] > 120 && p[0] > p[2],
        "expected red-based artwork at the probe, got {:?}",
        p
    );

    // The halftone overlay must change the output vs. a plain style.
    let plain = MockupItem {
        style: StyleKind::Plain,
        ..item
    };
    let mut s2 = Surface::card(SizeClass::Large);
    render_mockup(&mut s2, &plain);
    assert_ne!(s.raw(), s2.raw(), "comic overlay had no visible effect");
}

#[test]
fn empty_caption_falls_back_to_placeholder() {
    let empty = RenderParams {
        caption: String::new(),
        ..small_waves()
    };
    let placeholder = RenderParams {
        caption: "Jouw tekst hier".to_string(),
        ..small_waves()
    };

    let mut a = Surface::preview(SizeClass::Small);
    let mut b = Surface::preview(SizeClass::Small);
    render_pattern(&mut a, &empty);
    render_pattern(&mut b, &placeholder);
    assert_eq!(a.raw(), b.raw());
}

#[test]
fn anime_streaks_use_the_accent() {
    let item = MockupItem {
        size: SizeClass::Large,
        title: "probe",
        style: StyleKind::Anime,
        background: Color::from_hex("#06b6d4").unwrap(),
        accent: Color::from_hex("#a5f3fc").unwrap(),
        pattern: PatternKind::Waves,
    };
    let plain = MockupItem {
        style: StyleKind::Plain,
        ..item
    };

    let mut a = Surface::card(SizeClass::Large);
    let mut b = Surface::card(SizeClass::Large);
    render_mockup(&mut a, &item);
    render_mockup(&mut b, &plain);
    assert_ne!(a.raw(), b.raw(), "anime overlay had no visible effect");
}
