//! Bounded random walk behind every simulated gauge.
//!
//! DESIGN
//! ======
//! The step is a pure function of the previous value, the gauge bounds, and
//! an injected random source. Timers only decide *when* to step; tests drive
//! the same function with a seeded `SmallRng` and no clock.

#[cfg(test)]
#[path = "random_walk_test.rs"]
mod random_walk_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Clamp range and largest per-tick move for one gauge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricBounds {
    pub lo: f64,
    pub hi: f64,
    pub max_delta: f64,
}

impl MetricBounds {
    pub const fn new(lo: f64, hi: f64, max_delta: f64) -> Self {
        Self { lo, hi, max_delta }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.lo;
        }
        value.clamp(self.lo, self.hi)
    }
}

/// Admin dashboard AI accuracy gauge.
pub const AI_ACCURACY: MetricBounds = MetricBounds::new(95.0, 99.9, 0.2);
pub const ENERGY: MetricBounds = MetricBounds::new(40.0, 100.0, 3.0);
pub const STRESS: MetricBounds = MetricBounds::new(5.0, 80.0, 3.0);
pub const FOCUS: MetricBounds = MetricBounds::new(40.0, 100.0, 3.0);
pub const SLEEP: MetricBounds = MetricBounds::new(50.0, 100.0, 1.0);

/// One step: `clamp(prev + uniform(-d, d), lo, hi)`.
pub fn random_walk<R: Rng + ?Sized>(prev: f64, bounds: MetricBounds, rng: &mut R) -> f64 {
    if bounds.max_delta <= 0.0 || bounds.max_delta.is_nan() {
        return bounds.clamp(prev);
    }
    let delta = rng.random_range(-bounds.max_delta..=bounds.max_delta);
    bounds.clamp(prev + delta)
}

/// Apply `ticks` consecutive steps starting at `initial`.
pub fn advance<R: Rng + ?Sized>(initial: f64, bounds: MetricBounds, ticks: usize, rng: &mut R) -> f64 {
    (0..ticks).fold(initial, |value, _| random_walk(value, bounds, rng))
}

/// Fresh integer in `[0, upper)` with no memory of the previous draw.
pub fn redraw_count<R: Rng + ?Sized>(rng: &mut R, upper: u32) -> u32 {
    if upper == 0 {
        return 0;
    }
    rng.random_range(0..upper)
}

/// Random source for a mounted view. Browser builds seed from the clock;
/// server renders never tick, so a fixed seed is enough there.
pub fn view_rng() -> SmallRng {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let seed = js_sys::Date::now() as u64;
        SmallRng::seed_from_u64(seed ^ (js_sys::Math::random().to_bits()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SmallRng::seed_from_u64(0x6d6f_6e69_746f_7261)
    }
}

/// Format a gauge for display with one decimal place.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Round a gauge to a whole percentage for bar widths and labels.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn whole_percent(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}
