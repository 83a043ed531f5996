//! Animation parameter mapper.
//!
//! Pure functions from resolved scalars to loop timings. Everything here is
//! recomputed every render pass and usable without any graphics layer.

use serde::{Deserialize, Serialize};

/// Rates with a smaller magnitude are treated as "not animating".
pub const MIN_RATE: f64 = 1e-6;

/// How an element turns its driving field into a loop duration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TimingRule {
    /// `D = base / |rate|` (field in units per second, larger is faster).
    InverseRate { field: &'static str, base: f64 },
    /// `D = period` (field already in seconds per cycle).
    Period { field: &'static str },
}

impl TimingRule {
    pub fn field(&self) -> &'static str {
        match self {
            TimingRule::InverseRate { field, .. } | TimingRule::Period { field } => field,
        }
    }

    /// Loop duration for `value`, with `default` standing in for unusable
    /// inputs (zero rate, zero period, non-finite).
    pub fn duration(&self, value: f64, default: f64) -> f64 {
        match *self {
            TimingRule::InverseRate { base, .. } => inverse_rate_duration(base, value, default),
            TimingRule::Period { .. } => period_duration(value, default),
        }
    }
}

/// `base / |rate|`. A rate below [`MIN_RATE`] in magnitude (or NaN/inf) is
/// replaced by `default_rate`, so the result is always finite and positive
/// for a positive default.
pub fn inverse_rate_duration(base: f64, rate: f64, default_rate: f64) -> f64 {
    let rate = if rate.is_finite() && rate.abs() >= MIN_RATE {
        rate.abs()
    } else {
        default_rate.abs()
    };
    base / rate
}

/// The period itself, or `default_period` when it is not a positive finite
/// number.
pub fn period_duration(period: f64, default_period: f64) -> f64 {
    if period.is_finite() && period > 0.0 {
        period
    } else {
        default_period
    }
}

/// Phase offsets for `count` items sharing one loop: `duration / count * i`.
pub fn stagger_offsets(duration: f64, count: u32) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let step = duration / f64::from(count);
    (0..count).map(|i| step * f64::from(i)).collect()
}

/// Nearest non-negative integer, halves rounded away from zero.
pub fn round_and_clamp(v: f64) -> u32 {
    if !v.is_finite() || v <= 0.0 {
        return 0;
    }
    let r = v.round();
    if r >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        r as u32
    }
}

/// Needle endpoint (relative to the dial centre) for a reading on a half-dial
/// gauge. The reading is clamped into `[0, full_scale]`.
pub fn gauge_needle(reading: f64, full_scale: f64, length: f64) -> (f64, f64) {
    let fraction = if full_scale > 0.0 && reading.is_finite() {
        (reading / full_scale).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let theta = std::f64::consts::PI * fraction;
    (theta.cos() * length, -theta.sin() * length)
}

/// Derived timings for one render pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationParams {
    /// Seconds per loop.
    pub duration: f64,
    /// Start offsets for repeated sub-parts, empty when the element has none.
    pub phase_offsets: Vec<f64>,
}

impl AnimationParams {
    pub fn steady(duration: f64) -> Self {
        Self {
            duration,
            phase_offsets: Vec::new(),
        }
    }

    pub fn staggered(duration: f64, count: u32) -> Self {
        Self {
            duration,
            phase_offsets: stagger_offsets(duration, count),
        }
    }

    /// Spacing between consecutive phase offsets (the full duration when
    /// there are no repeated parts).
    pub fn stagger_interval(&self) -> f64 {
        match self.phase_offsets.len() {
            0 => self.duration,
            n => self.duration / n as f64,
        }
    }

    /// Duration of a sub-part that loops `factor` times as long as the main loop.
    pub fn scaled(&self, factor: f64) -> f64 {
        self.duration * factor
    }
}
