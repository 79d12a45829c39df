//! Pulsing charge circles
//!
//! Each circle's radius follows `base + amplitude * sin(angle)`. The two angles
//! advance at different fixed speeds so the circles drift in and out of phase.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Circle, overlap_area};
use super::state::Viewport;
use crate::consts::*;

/// One pulsing circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillatorState {
    /// Phase angle (radians). Accumulates unbounded; sine is periodic.
    pub angle: f64,
    /// Radians added per tick
    pub angular_speed: f64,
    pub base_radius: f64,
    /// Must stay below `base_radius` so the radius never reaches zero
    pub amplitude: f64,
}

impl OscillatorState {
    pub fn new(angular_speed: f64) -> Self {
        Self {
            angle: 0.0,
            angular_speed,
            base_radius: CIRCLE_BASE_RADIUS,
            amplitude: CIRCLE_AMPLITUDE,
        }
    }

    /// Current radius
    #[inline]
    pub fn radius(&self) -> f64 {
        self.base_radius + self.amplitude * self.angle.sin()
    }

    /// Advance phase by `steps` ticks
    #[inline]
    pub fn advance(&mut self, steps: f64) {
        self.angle += self.angular_speed * steps;
    }
}

/// The two charge circles, "A" on the left and "B" on the right
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillatorPair {
    pub a: OscillatorState,
    pub b: OscillatorState,
}

impl Default for OscillatorPair {
    fn default() -> Self {
        Self {
            a: OscillatorState::new(CIRCLE_A_SPEED),
            b: OscillatorState::new(CIRCLE_B_SPEED),
        }
    }
}

impl OscillatorPair {
    /// Advance both phases
    pub fn advance(&mut self, steps: f64) {
        self.a.advance(steps);
        self.b.advance(steps);
    }

    /// Zero both angles and restore the default speeds (new session)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn radii(&self) -> (f64, f64) {
        (self.a.radius(), self.b.radius())
    }

    /// Both circles placed around the viewport centre
    pub fn circles(&self, viewport: &Viewport) -> (Circle, Circle) {
        let center = viewport.center();
        let offset = DVec2::new(CIRCLE_CENTER_OFFSET, 0.0);
        (
            Circle::new(center - offset, self.a.radius()),
            Circle::new(center + offset, self.b.radius()),
        )
    }

    /// Overlap area of the two circles right now
    pub fn overlap_area(&self, viewport: &Viewport) -> f64 {
        let (a, b) = self.circles(viewport);
        overlap_area(&a, &b)
    }
}
