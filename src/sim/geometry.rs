//! Circle geometry for the charge mechanic
//!
//! The launch is powered by how much the two pulsing circles overlap, so the
//! only geometry we need is the lens-shaped intersection area of two circles.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A circle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Full disc area
    #[inline]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Area shared with another circle
    #[inline]
    pub fn overlap_area(&self, other: &Circle) -> f64 {
        overlap_area(self, other)
    }
}

/// Intersection area of two circles (always >= 0)
///
/// Three cases:
/// - disjoint or exactly touching: 0
/// - one circle inside the other: area of the smaller one
/// - partial overlap: sum of the two circular segments
pub fn overlap_area(a: &Circle, b: &Circle) -> f64 {
    let d = a.center.distance(b.center);
    let (r1, r2) = (a.radius, b.radius);

    if d >= r1 + r2 {
        return 0.0;
    }

    if d <= (r1 - r2).abs() {
        let smaller = r1.min(r2);
        return PI * smaller * smaller;
    }

    // Partial overlap. `x` is the distance from a's centre to the chord line.
    let r1_sq = r1 * r1;
    let r2_sq = r2 * r2;
    let x = (r1_sq - r2_sq + d * d) / (2.0 * d);
    let z = x - d;
    let y = (r1_sq - x * x).max(0.0).sqrt();

    // Branches above keep these ratios inside [-1, 1] up to rounding
    let alpha = (x / r1).clamp(-1.0, 1.0).acos();
    let beta = (-z / r2).clamp(-1.0, 1.0).acos();

    (r1_sq * alpha + r2_sq * beta - y * d).max(0.0)
}

/// Overlap area from raw coordinates
#[inline]
pub fn overlap_area_xy(x1: f64, y1: f64, r1: f64, x2: f64, y2: f64, r2: f64) -> f64 {
    overlap_area(
        &Circle::new(DVec2::new(x1, y1), r1),
        &Circle::new(DVec2::new(x2, y2), r2),
    )
}
