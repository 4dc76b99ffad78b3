// Platform-free star particle model.
//
// The web renderer owns one `StarField`, regenerates it on every viewport
// resize and advances it once per animation frame. Nothing here touches the
// DOM so the numeric behavior can be tested on the host.

use glam::DVec2;
use rand::prelude::*;
use std::f64::consts::TAU;

// Star count scaling: the baseline count at the reference resolution, scaled
// linearly with viewport area but never below the floor factor.
pub const STAR_COUNT_BASE: f64 = 150.0;
pub const REFERENCE_AREA: f64 = 1280.0 * 720.0;
pub const MIN_DENSITY_FACTOR: f64 = 0.6;

// Per-star attribute ranges
pub const RADIUS_MIN: f64 = 0.4;
pub const RADIUS_SPAN: f64 = 1.2;
pub const BASE_ALPHA_MIN: f64 = 0.2;
pub const BASE_ALPHA_SPAN: f64 = 0.4;
pub const DRIFT_SPAN: f64 = 0.12; // each axis in [-span/2, span/2)

// Stars leaving the viewport by more than this many CSS pixels wrap around
pub const WRAP_MARGIN: f64 = 5.0;

// Twinkle: time scale applied to the frame clock, two sine layers, then the
// summed wave is scaled before being added to the base alpha.
pub const TWINKLE_TIME_SCALE: f64 = 0.0015;
pub const TWINKLE_FREQ_A: f64 = 2.0;
pub const TWINKLE_FREQ_B: f64 = 1.3;
pub const TWINKLE_WEIGHT_A: f64 = 0.35;
pub const TWINKLE_WEIGHT_B: f64 = 0.25;
pub const TWINKLE_PHASE_B_MUL: f64 = 1.7;
pub const TWINKLE_AMOUNT: f64 = 0.25;
pub const ALPHA_MIN: f64 = 0.08;
pub const ALPHA_MAX: f64 = 1.0;

/// The three star tints (pink, gold, white).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarColor {
    Pink,
    Gold,
    White,
}

pub const STAR_PALETTE: [StarColor; 3] = [StarColor::Pink, StarColor::Gold, StarColor::White];

impl StarColor {
    /// CSS color string handed to the canvas fill style.
    pub fn css(self) -> &'static str {
        match self {
            StarColor::Pink => "#ff7be9",
            StarColor::Gold => "#ffd46b",
            StarColor::White => "#ffffff",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Star {
    pub position: DVec2,
    pub radius: f64,
    pub base_alpha: f64,
    pub twinkle_offset: f64,
    pub drift: DVec2,
    pub color: StarColor,
}

impl Star {
    /// Draw a star with every attribute independently randomized.
    pub fn random(rng: &mut impl Rng, width: f64, height: f64) -> Self {
        let half_drift = DRIFT_SPAN * 0.5;
        Self {
            position: DVec2::new(
                rng.gen::<f64>() * width.max(0.0),
                rng.gen::<f64>() * height.max(0.0),
            ),
            radius: RADIUS_MIN + rng.gen::<f64>() * RADIUS_SPAN,
            base_alpha: BASE_ALPHA_MIN + rng.gen::<f64>() * BASE_ALPHA_SPAN,
            twinkle_offset: rng.gen::<f64>() * TAU,
            drift: DVec2::new(
                rng.gen_range(-half_drift..half_drift),
                rng.gen_range(-half_drift..half_drift),
            ),
            color: *STAR_PALETTE.choose(rng).unwrap_or(&StarColor::White),
        }
    }

    /// Opacity of this star at `elapsed_ms` on the frame clock, before the
    /// global fade multiplier. Always within [`ALPHA_MIN`, `ALPHA_MAX`].
    #[inline]
    pub fn twinkle_alpha(&self, elapsed_ms: f64) -> f64 {
        let t = elapsed_ms * TWINKLE_TIME_SCALE;
        let twinkle = (t * TWINKLE_FREQ_A + self.twinkle_offset).sin() * TWINKLE_WEIGHT_A
            + (t * TWINKLE_FREQ_B + self.twinkle_offset * TWINKLE_PHASE_B_MUL).sin()
                * TWINKLE_WEIGHT_B;
        (self.base_alpha + twinkle * TWINKLE_AMOUNT).clamp(ALPHA_MIN, ALPHA_MAX)
    }

    /// Move by one drift step and wrap to the opposite edge once the star is
    /// more than [`WRAP_MARGIN`] outside the viewport.
    #[inline]
    pub fn advance(&mut self, width: f64, height: f64) {
        self.position += self.drift;
        self.position.x = wrap_axis(self.position.x, width);
        self.position.y = wrap_axis(self.position.y, height);
    }
}

#[inline]
fn wrap_axis(v: f64, extent: f64) -> f64 {
    let far = extent + WRAP_MARGIN;
    if v < -WRAP_MARGIN {
        far
    } else if v > far {
        -WRAP_MARGIN
    } else {
        v
    }
}

/// Number of stars for a viewport of the given CSS size.
pub fn star_count(width: f64, height: f64) -> usize {
    let density = (width * height) / REFERENCE_AREA;
    (STAR_COUNT_BASE * density.max(MIN_DENSITY_FACTOR)).round() as usize
}

pub struct StarField {
    pub stars: Vec<Star>,
    width: f64,
    height: f64,
    rng: StdRng,
}

impl StarField {
    /// Empty field with a deterministic RNG; call [`StarField::resize`] to
    /// populate it.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn new(seed: u64) -> Self {
        Self {
            stars: Vec::new(),
            width: 0.0,
            height: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            stars: Vec::new(),
            width: 0.0,
            height: 0.0,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Adopt a new viewport size and discard the whole batch for a fresh one.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.regenerate();
    }

    pub fn regenerate(&mut self) {
        let count = star_count(self.width, self.height);
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;
        self.stars = (0..count).map(|_| Star::random(&mut *rng, w, h)).collect();
    }

    /// Advance every star by one frame of drift.
    pub fn advance(&mut self) {
        let (w, h) = (self.width, self.height);
        for star in &mut self.stars {
            star.advance(w, h);
        }
    }
}
