// Host-side tests for the star particle model.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod starfield {
    include!("../src/core/starfield.rs");
}

use glam::DVec2;
use starfield::*;

fn field(width: f64, height: f64) -> StarField {
    let mut f = StarField::new(7);
    f.resize(width, height);
    f
}

#[test]
fn star_count_matches_reference_resolution() {
    assert_eq!(star_count(1280.0, 720.0), 150);
}

#[test]
fn star_count_never_drops_below_floor() {
    // Quarter area -> density 0.25, clamped up to 0.6
    assert_eq!(star_count(640.0, 360.0), 90);
    assert_eq!(star_count(0.0, 0.0), 90);
    assert_eq!(star_count(320.0, 200.0), 90);
}

#[test]
fn star_count_scales_linearly_above_floor() {
    assert_eq!(star_count(2560.0, 1440.0), 600);
    assert_eq!(star_count(1920.0, 1080.0), 338); // 150 * 2.25 = 337.5
}

#[test]
fn resize_generates_stars_within_attribute_ranges() {
    let f = field(1280.0, 720.0);
    assert_eq!(f.stars.len(), 150);
    for s in &f.stars {
        assert!(s.position.x >= 0.0 && s.position.x <= 1280.0);
        assert!(s.position.y >= 0.0 && s.position.y <= 720.0);
        assert!(s.radius >= 0.4 && s.radius < 1.6);
        assert!(s.base_alpha >= 0.2 && s.base_alpha < 0.6);
        assert!(s.twinkle_offset >= 0.0 && s.twinkle_offset < std::f64::consts::TAU);
        assert!(s.drift.x.abs() <= 0.06 && s.drift.y.abs() <= 0.06);
        assert!(STAR_PALETTE.contains(&s.color));
    }
}

#[test]
fn resize_regenerates_batch_for_new_viewport() {
    let mut f = field(1280.0, 720.0);
    let first = f.stars[0].position;
    f.resize(2560.0, 1440.0);
    assert_eq!(f.stars.len(), 600);
    assert_eq!(f.width(), 2560.0);
    assert_eq!(f.height(), 1440.0);
    assert_ne!(f.stars[0].position, first);

    f.resize(400.0, 300.0);
    assert_eq!(f.stars.len(), 90);
    for _ in 0..500 {
        f.advance();
    }
    for s in &f.stars {
        assert!(s.position.x >= -5.0 && s.position.x <= 405.0);
        assert!(s.position.y >= -5.0 && s.position.y <= 305.0);
    }
}

#[test]
fn advance_applies_drift() {
    let mut f = field(800.0, 600.0);
    let before: Vec<DVec2> = f.stars.iter().map(|s| s.position).collect();
    f.advance();
    for (s, p) in f.stars.iter().zip(before) {
        let moved = s.position - p;
        assert!((moved - s.drift).length() < 1e-9);
    }
}

fn star_at(x: f64, y: f64, dx: f64, dy: f64) -> Star {
    Star {
        position: DVec2::new(x, y),
        radius: 1.0,
        base_alpha: 0.4,
        twinkle_offset: 0.0,
        drift: DVec2::new(dx, dy),
        color: StarColor::White,
    }
}

#[test]
fn star_wraps_to_opposite_edge_past_margin() {
    let mut s = star_at(-4.99, 10.0, -0.05, 0.0);
    s.advance(100.0, 50.0);
    assert_eq!(s.position.x, 105.0);

    let mut s = star_at(104.99, 10.0, 0.05, 0.0);
    s.advance(100.0, 50.0);
    assert_eq!(s.position.x, -5.0);

    let mut s = star_at(10.0, -4.99, 0.0, -0.05);
    s.advance(100.0, 50.0);
    assert_eq!(s.position.y, 55.0);

    let mut s = star_at(10.0, 54.99, 0.0, 0.05);
    s.advance(100.0, 50.0);
    assert_eq!(s.position.y, -5.0);
}

#[test]
fn star_inside_margin_does_not_wrap() {
    let mut s = star_at(-4.0, 52.0, -0.5, 0.5);
    s.advance(100.0, 50.0);
    assert!((s.position.x - -4.5).abs() < 1e-12);
    assert!((s.position.y - 52.5).abs() < 1e-12);
}

#[test]
fn wrap_keeps_every_star_in_bounds_after_many_frames() {
    let mut f = field(320.0, 240.0);
    for _ in 0..5000 {
        f.advance();
        for s in &f.stars {
            assert!(s.position.x >= -5.0 && s.position.x <= 325.0);
            assert!(s.position.y >= -5.0 && s.position.y <= 245.0);
        }
    }
}

#[test]
fn twinkle_alpha_is_clamped() {
    let f = field(1280.0, 720.0);
    let mut t = 0.0;
    while t < 20_000.0 {
        for s in &f.stars {
            let a = s.twinkle_alpha(t);
            assert!((ALPHA_MIN..=ALPHA_MAX).contains(&a), "alpha {a} at t={t}");
        }
        t += 16.7;
    }
}

#[test]
fn twinkle_alpha_hits_floor_for_dim_star() {
    let mut s = star_at(0.0, 0.0, 0.0, 0.0);
    s.base_alpha = 0.0;
    // Both sine layers are negative at t = 0 with this offset
    s.twinkle_offset = -std::f64::consts::FRAC_PI_2;
    assert_eq!(s.twinkle_alpha(0.0), ALPHA_MIN);
}

#[test]
fn twinkle_alpha_matches_formula() {
    let mut s = star_at(0.0, 0.0, 0.0, 0.0);
    s.base_alpha = 0.5;
    s.twinkle_offset = 0.3;
    let elapsed: f64 = 1234.0;
    let t = elapsed * 0.0015;
    let wave = (t * 2.0 + 0.3).sin() * 0.35 + (t * 1.3 + 0.3 * 1.7).sin() * 0.25;
    let expected = (0.5 + wave * 0.25).clamp(0.08, 1.0);
    assert!((s.twinkle_alpha(elapsed) - expected).abs() < 1e-12);
}

#[test]
fn palette_css_colors() {
    assert_eq!(StarColor::Pink.css(), "#ff7be9");
    assert_eq!(StarColor::Gold.css(), "#ffd46b");
    assert_eq!(StarColor::White.css(), "#ffffff");
}

#[test]
fn same_seed_gives_same_batch() {
    let a = field(640.0, 480.0);
    let b = field(640.0, 480.0);
    assert_eq!(a.stars.len(), b.stars.len());
    for (x, y) in a.stars.iter().zip(&b.stars) {
        assert_eq!(x.position, y.position);
        assert_eq!(x.color, y.color);
    }
}
