//! Overlap area -> launch velocity
//!
//! Power grows with sqrt(area), then a ladder of corrections flattens the
//! curve so the longest throws need a near-perfect overlap.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Initial velocity and gravity for a new projectile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchVector {
    pub vx: f64,
    pub vy: f64,
    pub gravity: f64,
    /// Power the velocity was derived from (kept for logging/HUD)
    pub power: f64,
}

/// Raw power before clamping and corrections
#[inline]
pub fn area_power(overlap_area: f64) -> f64 {
    overlap_area.max(0.0).sqrt() / AREA_POWER_DIVISOR
}

/// Effective launch power for an overlap area
///
/// Each correction above its threshold replaces the power with
/// `threshold + (area_power - threshold) * slope`; the highest crossed
/// threshold wins.
pub fn launch_power(overlap_area: f64) -> f64 {
    let raw = area_power(overlap_area);
    let mut power = raw.clamp(MIN_LAUNCH_POWER, MAX_LAUNCH_POWER);

    for (threshold, slope) in POWER_CORRECTIONS {
        if raw > threshold {
            power = threshold + (raw - threshold) * slope;
        }
    }

    power
}

/// Velocity components for an overlap area (pure, deterministic)
pub fn compute_launch(overlap_area: f64) -> LaunchVector {
    let power = launch_power(overlap_area);
    LaunchVector {
        vx: power * VX_SCALE + VX_BASE,
        vy: power * VY_SCALE + VY_BASE,
        gravity: GRAVITY,
        power,
    }
}
